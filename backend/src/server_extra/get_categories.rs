//! Route handler for the category listing endpoint.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};

use crate::api::get_all_categories;
use crate::server_extra::AppState;

pub async fn get_categories(Extension(state): Extension<Arc<AppState>>) -> Response {
    match get_all_categories(&state.db_pool).await {
        Ok(categories) => (StatusCode::OK, Json(categories)).into_response(),
        Err(e) => {
            tracing::error!("category listing failed: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"detail": "failed to load categories"})),
            )
                .into_response()
        }
    }
}
