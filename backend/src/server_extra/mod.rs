//! Axum handlers mapping domain results onto the HTTP surface.

use axum::{Json, response::IntoResponse};
use sqlx::MySqlPool;

use crate::db_utils::azure_search_utils::SearchIndexClient;

mod ai_search;
pub use ai_search::ai_search;

mod get_categories;
pub use get_categories::get_categories;

mod get_location_detail;
pub use get_location_detail::get_location_detail;

/// Shared clients, built once in `main` and injected into handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub search_client: SearchIndexClient,
    pub db_pool: MySqlPool,
}

pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({"message": "location backend up"}))
}
