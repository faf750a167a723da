//! Per-page render outcome.

use crate::config::SiteConfig;
use crate::content::ContentRecord;
use crate::seo::PageMeta;

/// Outcome of rendering one identifier. All-or-nothing: there are no
/// partial states between a resolved page and not-found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderResult {
    Page(RenderedPage),
    NotFound,
}

/// A successfully resolved page: the record plus its derived SEO fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub record: ContentRecord,
    pub meta: PageMeta,
}

impl RenderResult {
    /// Builds the result from the outcome of the single fetch for an
    /// identifier.
    ///
    /// `NotFound` if and only if the fetch failed; no other path produces
    /// that state. Failures are not distinguished further here, so network
    /// errors, non-success statuses, and malformed payloads all land in the
    /// same branch.
    pub fn from_fetch<E>(fetched: Result<ContentRecord, E>, config: &SiteConfig) -> Self {
        match fetched {
            Ok(record) => {
                let meta = PageMeta::for_record(&record, config);
                Self::Page(RenderedPage { record, meta })
            }
            Err(_) => Self::NotFound,
        }
    }

    /// Returns true for the not-found terminal state.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
