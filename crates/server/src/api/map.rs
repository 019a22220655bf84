use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{api::not_found, state::AppState};

pub async fn map(State(state): State<Arc<AppState>>) -> Response {
    match &state.render_settings {
        Some(settings) => (
            [(header::CONTENT_TYPE, "image/svg+xml")],
            state.network.render_map(settings),
        )
            .into_response(),
        None => not_found(),
    }
}
