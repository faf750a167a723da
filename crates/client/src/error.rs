//! Client error types.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while fetching content.
///
/// The rendering layer folds all of these into the same failure branch; the
/// variants exist so the serving boundary can pick a response status and so
/// logs say what actually happened.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status} for {url}")]
    ServerError { status: u16, url: String },

    #[error("Resource not found: {url}")]
    NotFound { url: String },
}

/// Maps a [`ClientError`] to the HTTP status the serving boundary should
/// answer with when the error propagates.
///
/// - `NotFound` -> 404 (Not Found)
/// - everything else -> 502 (Bad Gateway): the upstream content API could
///   not satisfy the read.
pub fn client_error_to_status_code(error: &ClientError) -> u16 {
    match error {
        ClientError::NotFound { .. } => 404,
        ClientError::Request(_) | ClientError::ServerError { .. } => 502,
    }
}
