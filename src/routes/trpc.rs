//! # routes::trpc
//!
//! HTTP transport for the typed procedures, speaking the query half of the
//! tRPC wire format used by the dashboard's batching link.
//!
//! ## Requests
//! ```text
//! GET /api/trpc/example.hello?input={"json":{"name":"Ada"}}
//! GET /api/trpc/example.hello,backend.status?batch=1&input={"0":{"json":{}}}
//! ```
//! Inputs may arrive wrapped in the superjson envelope `{"json": ...}`.
//!
//! ## Responses
//! * success → `{"result":{"data":{"json": <output>}}}`
//! * failure → `{"error":{"json":{"message","code","data":{...}}}}`
//! * batch   → JSON array in request order; HTTP 207 when statuses differ

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use futures_util::future::join_all;
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use crate::{error::AppError, procedures::Procedure, state::SharedState};

// ─── GET /api/trpc/:paths ─────────────────────────────────────────────────────

pub async fn handle_query(
    State(state): State<SharedState>,
    Path(paths): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let batch = params
        .get("batch")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let raw_input = match parse_input_param(params.get("input")) {
        Ok(input) => input,
        Err(e) => return e.into_response(),
    };

    // ── Single call ───────────────────────────────────────────────────────────
    if !batch {
        let (status, body) = run_call(&state, &paths, raw_input.map(unwrap_superjson)).await;
        return (status, Json(body)).into_response();
    }

    // ── Batched calls ─────────────────────────────────────────────────────────
    let inputs = match raw_input {
        None => Map::new(),
        Some(Value::Object(map)) => map,
        Some(_) => {
            return AppError::BadRequest(
                "Batch input must be an object keyed by call index".into(),
            )
            .into_response()
        }
    };

    let calls = paths.split(',').enumerate().map(|(i, path)| {
        let input = inputs.get(&i.to_string()).cloned().map(unwrap_superjson);
        run_call(&state, path, input)
    });
    let results = join_all(calls).await;

    let status = batch_status(results.iter().map(|(status, _)| *status));
    let bodies: Vec<Value> = results.into_iter().map(|(_, body)| body).collect();

    debug!(calls = bodies.len(), %status, "Batch answered");

    (status, Json(Value::Array(bodies))).into_response()
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// Resolve and run one procedure, rendering either envelope.
async fn run_call(state: &SharedState, path: &str, input: Option<Value>) -> (StatusCode, Value) {
    let outcome = match Procedure::resolve(path) {
        Ok(procedure) => procedure.call(state, input).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(data) => {
            debug!(path, "✅ Procedure succeeded");
            (StatusCode::OK, json!({ "result": { "data": { "json": data } } }))
        }
        Err(e) => {
            warn!(path, error = %e, "❌ Procedure failed");
            (e.http_status(), e.to_envelope(Some(path)))
        }
    }
}

fn parse_input_param(raw: Option<&String>) -> Result<Option<Value>, AppError> {
    raw.map(|s| serde_json::from_str(s))
        .transpose()
        .map_err(|e| AppError::BadRequest(format!("Input is not valid JSON: {e}")))
}

/// Strip the superjson `{"json": ..., "meta": ...}` envelope if present.
pub fn unwrap_superjson(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("json") => {
            map.remove("json").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// One shared status for the whole batch, or 207 when calls disagree.
fn batch_status(mut statuses: impl Iterator<Item = StatusCode>) -> StatusCode {
    let Some(first) = statuses.next() else {
        return StatusCode::OK;
    };
    if statuses.all(|s| s == first) {
        first
    } else {
        StatusCode::MULTI_STATUS
    }
}
