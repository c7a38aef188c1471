use async_trait::async_trait;
use reqwest::{header::ACCEPT, Url};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::dto::request::{GoogleTokenResponse, GoogleUserInfo},
};

pub const GOOGLE_AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const GOOGLE_TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
pub const GOOGLE_USERINFO_ENDPOINT: &str = "https://www.googleapis.com/oauth2/v2/userinfo";
pub const GOOGLE_SCOPES: &str =
    "https://www.googleapis.com/auth/userinfo.profile https://www.googleapis.com/auth/userinfo.email";

/// The three legs of an OAuth authorization-code login.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Consent-screen URL carrying the anti-forgery `state`.
    fn authorization_url(&self, state: &str) -> AppResult<String>;
    /// Trades an authorization code for an access token.
    async fn exchange_code(&self, code: &str) -> AppResult<String>;
    /// Fetches the profile. A non-success answer is fatal to the login.
    async fn fetch_userinfo(&self, access_token: &str) -> AppResult<GoogleUserInfo>;
}

pub struct GoogleIdentityProvider {
    http: reqwest::Client,
    client_id: String,
    client_secret: SecretString,
    redirect_url: String,
}

impl GoogleIdentityProvider {
    pub fn new(client_id: &str, client_secret: SecretString, redirect_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            client_id: client_id.to_string(),
            client_secret,
            redirect_url: redirect_url.to_string(),
        }
    }

    /// `None` when no Google client id is configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        config.google_client_id.as_deref().map(|client_id| {
            Self::new(
                client_id,
                config.google_client_secret.clone(),
                &config.google_redirect_url,
            )
        })
    }
}

#[async_trait]
impl IdentityProvider for GoogleIdentityProvider {
    fn authorization_url(&self, state: &str) -> AppResult<String> {
        let url = Url::parse_with_params(
            GOOGLE_AUTH_ENDPOINT,
            &[
                ("response_type", "code"),
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.redirect_url.as_str()),
                ("scope", GOOGLE_SCOPES),
                ("state", state),
            ],
        )
        .map_err(|e| AppError::InternalError(format!("Invalid authorization URL: {}", e)))?;

        Ok(url.into())
    }

    async fn exchange_code(&self, code: &str) -> AppResult<String> {
        let response = self
            .http
            .post(GOOGLE_TOKEN_ENDPOINT)
            .header(ACCEPT, "application/json")
            .form(&[
                ("code", code),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.expose_secret()),
                ("redirect_uri", self.redirect_url.as_str()),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .map_err(|e| {
                log::error!("Failed to send token request to Google: {}", e);
                AppError::IdentityProvider(format!("Failed to exchange OAuth code: {}", e))
            })?;

        let status = response.status();
        let token: GoogleTokenResponse = response.json().await?;

        if let Some(error) = token.error {
            let description = token
                .error_description
                .unwrap_or_else(|| "Unknown error".to_string());
            log::error!("Google OAuth error ({}): {} - {}", status, error, description);
            return Err(AppError::IdentityProvider(format!(
                "Google OAuth error: {} - {}",
                error, description
            )));
        }

        token.access_token.ok_or_else(|| {
            AppError::IdentityProvider(format!("No access_token in Google response ({})", status))
        })
    }

    async fn fetch_userinfo(&self, access_token: &str) -> AppResult<GoogleUserInfo> {
        let response = self
            .http
            .get(GOOGLE_USERINFO_ENDPOINT)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read response body".to_string());
            log::error!("Google userinfo request failed with {}: {}", status, body);
            return Err(AppError::IdentityProvider(format!(
                "userinfo request failed with {}: {}",
                status, body
            )));
        }

        Ok(response.json::<GoogleUserInfo>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_requires_client_id() {
        assert!(GoogleIdentityProvider::from_config(&Config::test_config()).is_some());
        assert!(GoogleIdentityProvider::from_config(&Config::open_test_config()).is_none());
    }

    #[test]
    fn test_authorization_url_parameters() {
        let provider = GoogleIdentityProvider::from_config(&Config::test_config()).unwrap();
        let url = Url::parse(&provider.authorization_url("xyz").unwrap()).unwrap();

        assert_eq!(url.host_str(), Some("accounts.google.com"));
        let params: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        let get = |key: &str| {
            params
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        };

        assert_eq!(get("response_type").as_deref(), Some("code"));
        assert_eq!(get("client_id").as_deref(), Some("google-client-id"));
        assert_eq!(get("state").as_deref(), Some("xyz"));
        assert_eq!(
            get("redirect_uri").as_deref(),
            Some("http://localhost:8080/login/google/authorized")
        );
        assert_eq!(get("scope").as_deref(), Some(GOOGLE_SCOPES));
    }
}
