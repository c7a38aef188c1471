use std::sync::Arc;

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;

use crate::{
    app_state::AppState,
    auth::session::SESSION_COOKIE,
    errors::AppError,
    models::domain::SessionUser,
};

/// Extractor guarding routes behind the login gate.
///
/// With the gate disabled it always resolves to `LoginRequired(None)`. With
/// the gate enabled it resolves to the stored user behind a valid session
/// cookie, and otherwise fails with [`AppError::LoginRequired`], which
/// answers with a redirect to the login entry point.
pub struct LoginRequired(pub Option<SessionUser>);

impl FromRequest for LoginRequired {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<Arc<AppState>>>().cloned();
        let token = req
            .cookie(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string());

        Box::pin(async move {
            let state = state.ok_or_else(|| {
                AppError::InternalError("Application state not configured".to_string())
            })?;

            if !state.auth_enabled() {
                return Ok(LoginRequired(None));
            }

            let claims = token
                .and_then(|token| state.session_service.validate_token(&token).ok())
                .ok_or(AppError::LoginRequired)?;

            let user = state
                .user_service
                .load_user(&claims.sub)
                .await?
                .ok_or(AppError::LoginRequired)?;

            Ok(LoginRequired(Some(user)))
        })
    }
}
