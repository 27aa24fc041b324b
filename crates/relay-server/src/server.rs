//! HTTP Server - route table and CORS headers

use actix_web::http::Method;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{web, App, HttpServer};
use tracing::info;

use crate::handlers;
use crate::state::AppState;

/// Register the `/chat` resource
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/chat")
            .route(web::post().to(handlers::chat))
            .route(web::method(Method::OPTIONS).to(handlers::preflight))
            .default_service(web::to(handlers::method_not_allowed)),
    );
}

/// CORS headers attached to every response, errors included
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "GET, POST, OPTIONS"))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
}

/// 运行 HTTP 服务器
pub async fn run_server(state: AppState, bind_addr: &str) -> std::io::Result<()> {
    let state = web::Data::new(state);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors_headers())
            .wrap(Logger::default())
            .configure(configure)
    })
    .bind(bind_addr)?;

    info!("Relay server listening on http://{}", bind_addr);
    server.run().await
}
