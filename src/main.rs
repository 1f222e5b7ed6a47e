//! Samehadaku API Server
//!
//! Main entry point for the Samehadaku REST API service.

use std::io;

use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use samehadaku_api::config::Config;
use samehadaku_api::routes::{configure_routes, ApiDoc, AppState};

#[actix_web::main]
async fn main() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(io::Error::other)?;
    let bind_address = config.bind_address();

    info!("Scraping {}", config.base_url);
    let app_state = web::Data::new(AppState::new(config).map_err(io::Error::other)?);

    info!("Starting Samehadaku API server on {}", bind_address);

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone())
            )
            .configure(configure_routes)
    })
    .bind(&bind_address)?
    .run()
    .await
}
