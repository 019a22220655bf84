use std::sync::Arc;

use axum::{Json, extract::State};
use busline::document::{StatRequest, StatResponse};

use crate::state::AppState;

pub async fn stat(
    State(state): State<Arc<AppState>>,
    Json(requests): Json<Vec<StatRequest>>,
) -> Json<Vec<StatResponse>> {
    Json(state.handler().process(&requests))
}
