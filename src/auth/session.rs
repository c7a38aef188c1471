use actix_web::cookie::{Cookie, SameSite};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::claims::SessionClaims,
    errors::{AppError, AppResult},
    models::domain::SessionUser,
};

pub const SESSION_COOKIE: &str = "course_session";
pub const OAUTH_STATE_COOKIE: &str = "oauth_state";

/// Signs and verifies the session cookie with the configured secret key.
#[derive(Clone)]
pub struct SessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SessionService {
    pub fn new(secret: &SecretString) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation,
        }
    }

    pub fn create_token(&self, user: &SessionUser) -> AppResult<String> {
        let claims = SessionClaims::new(user);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Session(format!("Failed to sign session: {}", e)))
    }

    pub fn validate_token(&self, token: &str) -> AppResult<SessionClaims> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(AppError::from)
    }

    /// Browser-session cookie (no max-age) carrying a signed token for `user`.
    pub fn session_cookie(&self, user: &SessionUser) -> AppResult<Cookie<'static>> {
        let token = self.create_token(user)?;
        Ok(Cookie::build(SESSION_COOKIE, token)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .finish())
    }
}

pub fn oauth_state_cookie(state: &str) -> Cookie<'static> {
    Cookie::build(OAUTH_STATE_COOKIE, state.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

/// A cookie that tells the browser to forget `name`.
pub fn removal_cookie(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::build(name, "").path("/").finish();
    cookie.make_removal();
    cookie
}
