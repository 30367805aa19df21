// src/error.rs
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Failure taxonomy for the per-request pipeline. Every variant is terminal
/// for the request it occurs in; nothing is retried or recovered locally.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Network, status, or parse error while fetching price history.
    #[error("Failed to fetch stock data")]
    HistoryFetch(#[source] anyhow::Error),

    /// Network or status error while fetching news.
    #[error("Failed to fetch news")]
    NewsFetch(#[source] anyhow::Error),

    /// Generative-model call error.
    #[error("AI analysis failed")]
    Synthesis(#[source] anyhow::Error),
}

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        // Callers get the short message only; the cause chain stays in the log.
        tracing::error!(cause = ?self, "pipeline request failed");
        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
