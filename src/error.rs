use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("missing `page_id` query parameter")]
    MissingPage,
    #[error("badge renderer failed: {0}")]
    Upstream(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingPage => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let msg = match &self {
            AppError::Internal(e) => {
                tracing::error!(error = ?e, "internal error");
                self.to_string()
            }
            other => other.to_string(),
        };
        (self.status(), msg).into_response()
    }
}
