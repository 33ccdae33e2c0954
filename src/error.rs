//! # error
//!
//! Centralised edge error type.
//!
//! Every procedure returns `Result<_, AppError>`. Failures are rendered in the
//! tRPC error envelope the dashboard's query client understands, so a failed
//! status check shows up as a failed query rather than a transport glitch.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::relay::RelayError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Procedure input failed validation or could not be parsed.
    #[error("{0}")]
    BadRequest(String),

    /// No procedure is registered under the requested path.
    #[error("No procedure found on path \"{0}\"")]
    NotFound(String),

    /// The upstream trading-status call failed.
    #[error(transparent)]
    Upstream(#[from] RelayError),

    /// Catch-all for unexpected failures.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// tRPC error codes used by the edge, with their JSON-RPC numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcErrorCode {
    BadRequest,
    NotFound,
    InternalServerError,
}

impl RpcErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            RpcErrorCode::BadRequest          => "BAD_REQUEST",
            RpcErrorCode::NotFound            => "NOT_FOUND",
            RpcErrorCode::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn json_rpc_code(self) -> i32 {
        match self {
            RpcErrorCode::BadRequest          => -32600,
            RpcErrorCode::NotFound            => -32004,
            RpcErrorCode::InternalServerError => -32603,
        }
    }

    pub fn http_status(self) -> StatusCode {
        match self {
            RpcErrorCode::BadRequest          => StatusCode::BAD_REQUEST,
            RpcErrorCode::NotFound            => StatusCode::NOT_FOUND,
            RpcErrorCode::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl AppError {
    pub fn code(&self) -> RpcErrorCode {
        match self {
            AppError::BadRequest(_) => RpcErrorCode::BadRequest,
            AppError::NotFound(_)   => RpcErrorCode::NotFound,
            AppError::Upstream(_)   => RpcErrorCode::InternalServerError,
            AppError::Internal(_)   => RpcErrorCode::InternalServerError,
        }
    }

    pub fn http_status(&self) -> StatusCode {
        self.code().http_status()
    }

    /// Render as a tRPC error envelope (superjson-wrapped).
    pub fn to_envelope(&self, path: Option<&str>) -> Value {
        let code = self.code();
        json!({
            "error": {
                "json": {
                    "message": self.to_string(),
                    "code":    code.json_rpc_code(),
                    "data": {
                        "code":       code.as_str(),
                        "httpStatus": code.http_status().as_u16(),
                        "path":       path,
                    },
                },
            },
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.http_status(), Json(self.to_envelope(None))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_failures_are_internal_server_errors() {
        let err = AppError::Upstream(RelayError::UpstreamUnavailable(StatusCode::BAD_GATEWAY));
        assert_eq!(err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = err.to_envelope(Some("backend.status"));
        assert_eq!(body["error"]["json"]["code"], -32603);
        assert_eq!(body["error"]["json"]["data"]["code"], "INTERNAL_SERVER_ERROR");
        assert_eq!(body["error"]["json"]["data"]["path"], "backend.status");
    }

    #[test]
    fn not_found_mentions_the_path() {
        let err = AppError::NotFound("nope.missing".into());
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "No procedure found on path \"nope.missing\"");
    }

    #[test]
    fn bad_request_envelope_without_path() {
        let body = AppError::BadRequest("bad input".into()).to_envelope(None);
        assert_eq!(body["error"]["json"]["data"]["httpStatus"], 400);
        assert!(body["error"]["json"]["data"]["path"].is_null());
    }
}
