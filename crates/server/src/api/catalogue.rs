use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use busline::document::ResponseBody;
use tracing::debug;

use crate::{api::not_found, state::AppState};

pub async fn bus(Path(name): Path<String>, State(state): State<Arc<AppState>>) -> Response {
    match state.network.route_info(&name) {
        Some(info) => Json(ResponseBody::from(info)).into_response(),
        None => {
            debug!("Unknown bus {name}");
            not_found()
        }
    }
}

pub async fn stop(Path(name): Path<String>, State(state): State<Arc<AppState>>) -> Response {
    match state.network.stop_info(&name) {
        Some(info) => Json(ResponseBody::from(info)).into_response(),
        None => {
            debug!("Unknown stop {name}");
            not_found()
        }
    }
}
