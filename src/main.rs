use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use course_outline_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    config.warn_on_insecure_defaults();

    let bind_addr = (config.web_server_host.clone(), config.web_server_port);
    let state = Arc::new(AppState::new(config));
    let auth_enabled = state.auth_enabled();

    log::info!(
        "starting HTTP server on http://{}:{} (Google login {})",
        bind_addr.0,
        bind_addr.1,
        if auth_enabled { "enabled" } else { "disabled" }
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .configure(|cfg| handlers::configure(cfg, auth_enabled))
    })
    .bind(bind_addr)?
    .run()
    .await
}
