use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::badge::{BadgeQuery, BADGE_CACHE_WINDOW, CODE_REPOSITORY};
use crate::error::{AppError, Result};
use crate::services::hashing::page_hash;
use crate::state::AppState;
use crate::web::utils::http_date;

pub async fn website() -> Redirect {
    Redirect::temporary(CODE_REPOSITORY)
}

pub async fn ping() -> &'static str {
    "PONG!!!"
}

#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub cached_hashes: usize,
    pub processed_requests: u64,
    pub uptime: u64,
    pub code_repository: &'static str,
}

pub async fn status(State(state): State<AppState>) -> Json<StatusReport> {
    Json(StatusReport {
        cached_hashes: state.counter.size().await,
        processed_requests: state.stats.processed(),
        uptime: state.stats.uptime_secs(),
        code_repository: CODE_REPOSITORY,
    })
}

pub async fn badge(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response> {
    let q = BadgeQuery::from_pairs(pairs);
    if q.page_id.is_empty() {
        return Err(AppError::MissingPage);
    }
    tracing::info!(page = %q.page_id, "look up");

    let hash = page_hash(&state.key, &q.page_id);
    let count = state.counter.count(&hash, q.bypass_cache()).await;
    let opts = q.options(&count);

    let svg = match state.shields.render(&opts).await {
        Ok(svg) => svg,
        Err(e) => {
            state.stats.record_badge_error();
            tracing::warn!(page = %q.page_id, error = %e, errors = state.stats.badge_errors(), "badge render failed");
            return Err(e);
        }
    };

    let now = OffsetDateTime::now_utc();
    let date = http_date(now - BADGE_CACHE_WINDOW);
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("image/svg+xml"));
    if q.non_unique() {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache,max-age=0"));
        headers.insert(header::EXPIRES, header_value(&date)?);
    } else {
        headers.insert(header::EXPIRES, header_value(&http_date(now + BADGE_CACHE_WINDOW))?);
    }
    headers.insert(header::DATE, header_value(&date)?);

    state.stats.record_badge();
    tracing::info!(page = %q.page_id, views = %opts.message, "generated badge");
    Ok((headers, svg).into_response())
}

fn header_value(v: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(v).map_err(|e| AppError::Internal(e.into()))
}
