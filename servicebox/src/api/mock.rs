//! Mock route responses and fallbacks.

use crate::common::types::{MethodNotAllowedBody, NotFoundBody};
use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

/// 200 with the route's fixed body.
pub fn fixed_json(body: &Value) -> Response {
    Json(body.clone()).into_response()
}

/// 404 for targets outside `/health` and the route table.
pub fn not_found(target: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(NotFoundBody::new(target))).into_response()
}

/// 405 for unsupported methods on a known target.
pub fn method_not_allowed(method: &Method) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(MethodNotAllowedBody::new(method.as_str())),
    )
        .into_response()
}
