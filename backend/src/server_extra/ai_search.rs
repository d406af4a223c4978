//! Route handler for the AI search endpoint.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use axum_extra::extract::Query;
use common::search_params::LocationSearchParams;

use crate::api::search::search_locations;
use crate::server_extra::AppState;

pub async fn ai_search(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<LocationSearchParams>,
) -> Response {
    match search_locations(&state.search_client, &params).await {
        Ok(results) => (StatusCode::OK, Json(results)).into_response(),
        Err(e) => {
            // The underlying error stays in the log; the client only
            // sees the generic message.
            tracing::error!("ai search failed: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"detail": "search request failed"})),
            )
                .into_response()
        }
    }
}
