use std::env;
use secrecy::SecretString;

pub const DEFAULT_SECRET_KEY: &str = "supersecret";
pub const DEFAULT_COMPLETION_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_GOOGLE_REDIRECT_URL: &str = "http://localhost:8080/login/google/authorized";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub secret_key: SecretString,
    pub google_client_id: Option<String>,
    pub google_client_secret: SecretString,
    pub google_redirect_url: String,
    pub completion_api_key: SecretString,
    pub completion_api_base: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            secret_key: SecretString::from(env::var("SECRET_KEY")
                .unwrap_or_else(|_| DEFAULT_SECRET_KEY.to_string())),
            google_client_id: env::var("GOOGLE_OAUTH_CLIENT_ID")
                .ok()
                .filter(|id| !id.trim().is_empty()),
            google_client_secret: SecretString::from(env::var("GOOGLE_OAUTH_CLIENT_SECRET")
                .unwrap_or_default()),
            google_redirect_url: env::var("GOOGLE_OAUTH_REDIRECT_URL")
                .unwrap_or_else(|_| DEFAULT_GOOGLE_REDIRECT_URL.to_string()),
            completion_api_key: SecretString::from(env::var("GROQ_API_KEY")
                .unwrap_or_default()),
            completion_api_base: env::var("COMPLETION_API_BASE")
                .unwrap_or_else(|_| DEFAULT_COMPLETION_API_BASE.to_string()),
        }
    }

    /// Whether the Google login gate guards the generator.
    pub fn auth_enabled(&self) -> bool {
        self.google_client_id.is_some()
    }

    /// Logs a warning for every secret still at its development default.
    /// Startup is never refused.
    pub fn warn_on_insecure_defaults(&self) {
        use secrecy::ExposeSecret;

        if self.secret_key.expose_secret() == DEFAULT_SECRET_KEY {
            log::warn!("SECRET_KEY is using the default value; session cookies are forgeable");
        }

        if self.completion_api_key.expose_secret().is_empty() {
            log::warn!("GROQ_API_KEY is not set; /generate will fail upstream");
        }

        if self.auth_enabled() && self.google_client_secret.expose_secret().is_empty() {
            log::warn!("GOOGLE_OAUTH_CLIENT_SECRET is not set; Google token exchange will fail");
        }

        if !self.auth_enabled() {
            log::warn!("GOOGLE_OAUTH_CLIENT_ID is not set; running without a login gate");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            secret_key: SecretString::from("test_session_secret_key".to_string()),
            google_client_id: Some("google-client-id".to_string()),
            google_client_secret: SecretString::from("google-client-secret".to_string()),
            google_redirect_url: DEFAULT_GOOGLE_REDIRECT_URL.to_string(),
            completion_api_key: SecretString::from("test-api-key".to_string()),
            completion_api_base: DEFAULT_COMPLETION_API_BASE.to_string(),
        }
    }

    #[cfg(test)]
    pub fn open_test_config() -> Self {
        Self {
            google_client_id: None,
            ..Self::test_config()
        }
    }
}
