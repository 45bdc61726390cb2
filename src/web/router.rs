use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{http::{Request, StatusCode}, routing::get, Router};
use tower_http::{
    timeout::TimeoutLayer,
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{info_span, Level};

use crate::state::AppState;
use super::handlers::{badge, ping, status, website};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub fn build_router(state: AppState) -> Router {
    let counter = Arc::new(AtomicUsize::new(0));

    Router::new()
        .route("/", get(website))
        .route("/index.html", get(website))
        .route("/ping", get(ping))
        .route("/status", get(status))
        .route("/badge", get(badge))
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, REQUEST_TIMEOUT))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(move |request: &Request<_>| {
                    let req_id = counter.fetch_add(1, Ordering::Relaxed);
                    info_span!("http_request", req_id, method = ?request.method(), path = ?request.uri())
                })
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
