use actix_web::{http::header::LOCATION, http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Where anonymous visitors are sent when a route needs a login.
pub const LOGIN_PATH: &str = "/login/google";

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Login required")]
    LoginRequired,

    // Upstream messages are echoed to the client untouched.
    #[error("{0}")]
    Completion(String),

    #[error("Identity provider error: {0}")]
    IdentityProvider(String),

    // Carries the status chosen by the body extractor (413, 415, 400).
    #[error("Invalid form body: {1}")]
    InvalidForm(StatusCode, String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::LoginRequired => StatusCode::FOUND,
            AppError::Completion(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::IdentityProvider(_) => StatusCode::BAD_GATEWAY,
            AppError::InvalidForm(status, _) => *status,
            AppError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::LoginRequired = self {
            return HttpResponse::Found()
                .insert_header((LOCATION, LOGIN_PATH))
                .finish();
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::Completion(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::IdentityProvider(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::Session(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::LoginRequired.status_code(), StatusCode::FOUND);
        assert_eq!(
            AppError::Completion("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::IdentityProvider("bad".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_invalid_form_keeps_extractor_status() {
        let err = AppError::InvalidForm(StatusCode::PAYLOAD_TOO_LARGE, "too big".into());
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.to_string(), "Invalid form body: too big");
    }

    #[test]
    fn test_completion_message_is_verbatim() {
        let err = AppError::Completion("rate limit exceeded".into());
        assert_eq!(err.to_string(), "rate limit exceeded");
    }

    #[test]
    fn test_login_required_redirects_to_login() {
        let response = AppError::LoginRequired.error_response();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(LOCATION).unwrap().to_str().unwrap(),
            LOGIN_PATH
        );
    }
}
