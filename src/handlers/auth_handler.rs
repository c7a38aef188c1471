use std::sync::Arc;

use actix_web::{get, http::header::LOCATION, web, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    auth::{
        session::{oauth_state_cookie, removal_cookie, OAUTH_STATE_COOKIE, SESSION_COOKIE},
        IdentityProvider, LoginRequired,
    },
    errors::{AppError, LOGIN_PATH},
    models::dto::request::OAuthCallbackParams,
};

fn identity_provider(state: &AppState) -> Result<&Arc<dyn IdentityProvider>, AppError> {
    state
        .identity_provider
        .as_ref()
        .ok_or_else(|| AppError::InternalError("Google login is not configured".to_string()))
}

/// Returns the authorization code when the callback is a genuine grant for
/// the login this browser started.
fn authorized_code<'a>(
    params: &'a OAuthCallbackParams,
    expected_state: Option<&str>,
) -> Option<&'a str> {
    if params.error.is_some() {
        return None;
    }

    match (params.state.as_deref(), expected_state) {
        (Some(received), Some(expected)) if received == expected => params.code.as_deref(),
        _ => None,
    }
}

#[get("/login/google")]
pub async fn login_google(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, AppError> {
    let provider = identity_provider(&state)?;
    let oauth_state = Uuid::new_v4().to_string();
    let auth_url = provider.authorization_url(&oauth_state)?;

    log::info!("Redirecting to Google consent screen");

    Ok(HttpResponse::Found()
        .insert_header((LOCATION, auth_url))
        .cookie(oauth_state_cookie(&oauth_state))
        .finish())
}

#[get("/login/google/authorized")]
pub async fn google_authorized(
    state: web::Data<Arc<AppState>>,
    req: HttpRequest,
    web::Query(params): web::Query<OAuthCallbackParams>,
) -> Result<HttpResponse, AppError> {
    let provider = identity_provider(&state)?;
    let expected_state = req
        .cookie(OAUTH_STATE_COOKIE)
        .map(|cookie| cookie.value().to_string());

    let Some(code) = authorized_code(&params, expected_state.as_deref()) else {
        log::warn!(
            "Google callback not authorized (error: {:?}); restarting login",
            params.error
        );
        return Ok(HttpResponse::Found()
            .insert_header((LOCATION, LOGIN_PATH))
            .cookie(removal_cookie(OAUTH_STATE_COOKIE))
            .finish());
    };

    let access_token = provider.exchange_code(code).await?;
    let user_info = provider.fetch_userinfo(&access_token).await?;
    let user = state.user_service.record_login(user_info).await?;
    let session_cookie = state.session_service.session_cookie(&user)?;

    log::info!("User {} logged in", user.id);

    Ok(HttpResponse::Found()
        .insert_header((LOCATION, "/"))
        .cookie(session_cookie)
        .cookie(removal_cookie(OAUTH_STATE_COOKIE))
        .finish())
}

#[get("/logout")]
pub async fn logout(LoginRequired(user): LoginRequired) -> HttpResponse {
    if let Some(user) = user {
        log::info!("User {} logged out", user.id);
    }

    HttpResponse::Found()
        .insert_header((LOCATION, "/"))
        .cookie(removal_cookie(SESSION_COOKIE))
        .finish()
}
