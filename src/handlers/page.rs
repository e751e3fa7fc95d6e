use std::sync::Arc;

use axum::extract::{MatchedPath, State};
use axum::Json;

use crate::services::page::{self, PageData, RouteInfo};
use crate::state::AppState;

// GET /
pub async fn load(
    State(state): State<Arc<AppState>>,
    matched: Option<MatchedPath>,
) -> Json<PageData> {
    let route = RouteInfo {
        id: matched.map(|p| p.as_str().to_string()),
    };
    Json(page::load(state.store.as_ref(), route).await)
}
