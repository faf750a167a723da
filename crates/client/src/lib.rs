//! techbuket_client - HTTP client for the techbuket content API.

pub mod client;
pub mod error;

pub use client::ContentClient;
pub use error::{client_error_to_status_code, ClientError, Result};
