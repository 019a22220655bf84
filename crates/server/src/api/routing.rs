use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use busline::document::ResponseBody;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{api::not_found, state::AppState};

#[derive(Debug, Deserialize)]
pub struct RouteParams {
    from: Option<String>,
    to: Option<String>,
}

pub async fn route(
    Query(params): Query<RouteParams>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let (Some(from), Some(to)) = (params.from, params.to) else {
        return Err(StatusCode::BAD_REQUEST);
    };

    match state.network.find_route(&from, &to) {
        Ok(Some(itinerary)) => Ok(Json(ResponseBody::from(itinerary)).into_response()),
        Ok(None) => {
            debug!("No route from {from} to {to}");
            Ok(not_found())
        }
        Err(err) => {
            warn!("Failed to route from {from} to {to}: {err}");
            Ok(not_found())
        }
    }
}
