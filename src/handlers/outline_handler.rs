use std::sync::Arc;

use actix_web::{get, http::header::ContentType, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    auth::LoginRequired,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{request::GenerateForm, response::GenerateResponse},
    pages::render_index,
};

#[get("/")]
pub async fn home(LoginRequired(user): LoginRequired) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_index(user.as_ref()))
}

#[post("/generate")]
pub async fn generate(
    state: web::Data<Arc<AppState>>,
    req: HttpRequest,
    _login: LoginRequired,
    web::Form(form): web::Form<GenerateForm>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_default();
    log::info!("[{}] Prompt received: {}", request_id, form.prompt);

    let html = state
        .outline_service
        .generate(&form.prompt)
        .await
        .map_err(|e| {
            log::error!("[{}] Outline generation failed: {}", request_id, e);
            e
        })?;

    Ok(HttpResponse::Ok().json(GenerateResponse { result: html }))
}

/// Only mounted without the login gate. Nothing is stored, so nothing is
/// cleared.
#[get("/clear")]
pub async fn clear() -> HttpResponse {
    HttpResponse::Ok().body("Cleared")
}
