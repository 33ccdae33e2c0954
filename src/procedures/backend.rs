//! # procedures::backend
//!
//! `backend.status` — the status-check round trip.

use crate::{
    error::AppError,
    relay::{fetch_status, StatusResponse},
    state::SharedState,
};

/// Zero-argument query: relay the upstream `{ trading }` flag.
pub async fn status(state: &SharedState) -> Result<StatusResponse, AppError> {
    Ok(fetch_status(&state.http_client, &state.upstream_url).await?)
}
