//! Route handler for the location detail endpoint.

use std::sync::Arc;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};

use crate::api::get_location_detail_by_id;
use crate::server_extra::AppState;

pub async fn get_location_detail(
    Extension(state): Extension<Arc<AppState>>,
    Path(location_id): Path<i32>,
) -> Response {
    match get_location_detail_by_id(&state.db_pool, location_id).await {
        Ok(Some(detail)) => (StatusCode::OK, Json(detail)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"detail": "location not found"})),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("location detail lookup failed: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"detail": "failed to load location detail"})),
            )
                .into_response()
        }
    }
}
