//! REST APIハンドラー
//!
//! `/health`, the service's mock routes, and the 404 fallback. Routing matches
//! the full request target (path plus query), so `/health?x=1` is not
//! `/health`. Every GET/POST passes through the request counter before
//! reaching the dispatcher.

pub mod health;
pub mod mock;

use crate::state::RuntimeState;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::{Method, Uri},
    middleware::{self, Next},
    response::Response,
    Router,
};
use tower::ServiceBuilder;
use tracing::info;

/// Health check path
pub const HEALTH_PATH: &str = "/health";

/// Build the router for one service instance.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .fallback(dispatch)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(log_requests))
                .layer(middleware::from_fn_with_state(
                    state.runtime.clone(),
                    count_requests,
                )),
        )
        .with_state(state)
}

/// Request target as sent on the request line (path plus query).
pub fn request_target(uri: &Uri) -> &str {
    uri.path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path())
}

async fn dispatch(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    let target = request_target(&uri);
    let route = state.service.route(target);
    let known = target == HEALTH_PATH || route.is_some();

    if !matches!(method, Method::GET | Method::POST) {
        return if known {
            mock::method_not_allowed(&method)
        } else {
            mock::not_found(target)
        };
    }

    if target == HEALTH_PATH {
        return health::health(State(state.clone())).await;
    }
    match route {
        Some(body) => mock::fixed_json(body),
        None => mock::not_found(target),
    }
}

async fn count_requests(
    State(runtime): State<RuntimeState>,
    request: Request,
    next: Next,
) -> Response {
    if matches!(*request.method(), Method::GET | Method::POST) {
        runtime.record_request();
    }
    next.run(request).await
}

async fn log_requests(request: Request, next: Next) -> Response {
    let line = format!(
        "\"{} {} {:?}\"",
        request.method(),
        request_target(request.uri()),
        request.version()
    );
    let response = next.run(request).await;
    info!("{} {} -", line, response.status().as_u16());
    response
}
