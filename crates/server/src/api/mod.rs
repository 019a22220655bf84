mod catalogue;
mod map;
mod routing;
mod stat;

pub use catalogue::*;
pub use map::*;
pub use routing::*;
pub use stat::*;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use busline::document::ResponseBody;

pub(crate) fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(ResponseBody::not_found())).into_response()
}
