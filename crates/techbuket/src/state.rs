//! Application state.
//!
//! Each request gets a clone; there is no shared mutable state, so no
//! locking discipline is needed.

use techbuket_client::ContentClient;
use techbuket_core::SiteConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Client for the remote content API.
    pub content: ContentClient,
}

impl AppState {
    /// Creates state from the resolved site configuration.
    pub fn new(config: SiteConfig) -> Self {
        Self {
            content: ContentClient::new(config),
        }
    }

    /// The site configuration this state was built with.
    pub fn config(&self) -> &SiteConfig {
        self.content.config()
    }
}
