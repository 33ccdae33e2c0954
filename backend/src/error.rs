//! # error
//!
//! Centralised application error type.
//!
//! Every handler returns `Result<_, AppError>`. Axum's `IntoResponse` impl
//! converts these into structured JSON error bodies so the dashboard edge
//! always gets a machine-readable response even on failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The request payload was syntactically correct but semantically invalid.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The broker refused the session (authentication failed).
    #[error("Broker error: {0}")]
    Broker(String),

    /// Backtest candles could not be loaded.
    #[error("Data error: {0}")]
    Data(String),

    /// Catch-all for unexpected failures.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable tag for the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Broker(_)     => "BROKER",
            AppError::Data(_)       => "DATA",
            AppError::Internal(_)   => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Broker(_)     => StatusCode::BAD_GATEWAY,
            AppError::Data(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Body shape: `{ "ok": false, "kind": "<KIND>", "error": "<display>" }`.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = json!({
            "ok":    false,
            "kind":  self.kind(),
            "error": self.to_string(),
        });
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn broker_failure_is_a_bad_gateway() {
        let (status, body) = render(AppError::Broker("auth refused".into())).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["ok"], false);
        assert_eq!(body["kind"], "BROKER");
        assert_eq!(body["error"], "Broker error: auth refused");
    }

    #[tokio::test]
    async fn data_and_internal_share_a_status_but_not_a_kind() {
        let (data_status, data) = render(AppError::Data("missing csv".into())).await;
        let (internal_status, internal) =
            render(AppError::Internal(anyhow::anyhow!("boom"))).await;

        assert_eq!(data_status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal_status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(data["kind"], "DATA");
        assert_eq!(internal["kind"], "INTERNAL");
        assert_eq!(internal["error"], "Internal error: boom");
    }

    #[test]
    fn bad_request_kind_and_status() {
        let err = AppError::BadRequest("candles must be an array".into());
        assert_eq!(err.kind(), "BAD_REQUEST");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
