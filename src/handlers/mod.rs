pub mod auth_handler;
pub mod outline_handler;

use actix_web::{web, ResponseError};

use crate::errors::AppError;

pub use auth_handler::{google_authorized, login_google, logout};
pub use outline_handler::{clear, generate, home};

/// Largest urlencoded form body accepted by `/generate`.
pub const FORM_LIMIT: usize = 500_000;

/// Urlencoded bodies up to [`FORM_LIMIT`]; rejections use the JSON error
/// envelope with the extractor's status.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .limit(FORM_LIMIT)
        .error_handler(|err, _req| {
            log::warn!("Rejected form body: {}", err);
            AppError::InvalidForm(err.status_code(), err.to_string()).into()
        })
}

/// Mounts the routes for the chosen mode: the Google login routes when the
/// gate is enabled, `/clear` when it is not.
pub fn configure(cfg: &mut web::ServiceConfig, auth_enabled: bool) {
    cfg.app_data(form_config()).service(home).service(generate);

    if auth_enabled {
        cfg.service(login_google)
            .service(google_authorized)
            .service(logout);
    } else {
        cfg.service(clear);
    }
}
