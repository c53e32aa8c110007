//! Page-data route: the gate's decision for a page, as JSON.
//!
//! Client-side navigation can ask for this instead of the page itself and
//! follow the redirect on its own.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use profiles_access::resolve_page;
use std::sync::Arc;

use super::{
    AppState,
    middleware::{no_store, request_context},
};

/// Returns the `PageResolution` for a gated page.
///
/// Answers 404 for pages outside the access policy.
pub async fn page_data(
    State(state): State<Arc<AppState>>,
    Path(page): Path<String>,
    headers: HeaderMap,
) -> Response {
    let path = format!("/{}", page.trim_start_matches('/'));
    if !state.policy.is_gated(&path) {
        return StatusCode::NOT_FOUND.into_response();
    }

    let context = request_context(&path, &headers);
    let resolution = resolve_page(state.resolver.as_ref(), &state.policy, &context).await;

    no_store(Json(resolution).into_response())
}
