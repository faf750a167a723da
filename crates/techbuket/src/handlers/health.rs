//! Health check endpoint.

use axum::http::StatusCode;

/// GET /healthz - Basic liveness probe.
///
/// Returns 200 immediately. Does NOT consult the remote content API, so it
/// stays green while the upstream is down.
#[axum::debug_handler]
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
