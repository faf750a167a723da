//! Content page operations.

use techbuket_core::content::{ContentRecord, ListingEntry};

use super::ContentClient;
use crate::error::Result;

impl ContentClient {
    /// Fetch a single content page by slug.
    pub async fn page(&self, slug: &str) -> Result<ContentRecord> {
        self.get_json(&format!("pages/{slug}")).await
    }

    /// List every content page known to the API.
    pub async fn pages(&self) -> Result<Vec<ListingEntry>> {
        self.get_json("pages").await
    }
}
