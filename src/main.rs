mod config;
mod error;
mod handlers;
mod models;
mod predictor;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing::{info, Level};

use config::ServerConfig;
use predictor::{MockPredictor, Predictor};

/// Shared per-worker state. The predictor is immutable; nothing else is
/// shared between requests.
pub struct AppState {
    pub predictor: Arc<dyn Predictor>,
    pub upload_dir: Option<std::path::PathBuf>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = ServerConfig::from_env();
    if let Some(dir) = &config.upload_dir {
        std::fs::create_dir_all(dir)?;
    }

    let state = web::Data::new(AppState {
        predictor: Arc::new(MockPredictor),
        upload_dir: config.upload_dir.clone(),
    });

    info!("Server running at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .service(
                web::resource("/api/analysis/image")
                    .route(web::post().to(handlers::analyze_image)),
            )
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
