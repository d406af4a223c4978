//! Backend server entry point.

mod api;
mod config;
mod db_utils;
mod server_extra;

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use crate::config::AppConfig;
use crate::db_utils::azure_search_utils::SearchIndexClient;
use crate::server_extra::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let db_pool = db_utils::mysql_utils::connect_mysql_pool(&config.database).await?;
    let search_client = SearchIndexClient::new(config.search.clone());
    let state = Arc::new(AppState {
        search_client,
        db_pool,
    });

    let app = Router::new()
        .route("/", get(server_extra::index))
        .route("/api/categories", get(server_extra::get_categories))
        .route("/locations/{location_id}", get(server_extra::get_location_detail))
        .route("/api/locations/ai-search", get(server_extra::ai_search))
        .layer(Extension(state));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
