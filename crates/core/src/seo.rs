//! SEO metadata resolution.
//!
//! Every rendered document carries one [`PageMeta`] driving the `<head>`
//! block (title, meta description, canonical link, Open Graph and Twitter
//! Card tags). Optional overrides on a record win over derived values
//! through an explicit ordered fallback chain.

use crate::config::SiteConfig;
use crate::content::ContentRecord;

/// Name of the fallback social-preview image under `/static`.
pub const DEFAULT_OG_IMAGE: &str = "og-default.png";

/// Resolved SEO metadata for one rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub image: String,
}

impl PageMeta {
    /// Resolves metadata for a content page.
    ///
    /// Fallback chain:
    /// - title: `seo_title`, else the record title;
    /// - description: `seo_description`, else empty;
    /// - image: `seo_image`, else the default asset served from the
    ///   configured host;
    /// - canonical: `<base>/<slug>`.
    pub fn for_record(record: &ContentRecord, config: &SiteConfig) -> Self {
        Self {
            title: record
                .seo_title
                .clone()
                .unwrap_or_else(|| record.title.clone()),
            description: record.seo_description.clone().unwrap_or_default(),
            canonical: config.page_url(&record.slug),
            image: record
                .seo_image
                .clone()
                .unwrap_or_else(|| config.asset_url(DEFAULT_OG_IMAGE)),
        }
    }

    /// Resolves metadata for a fixed route (home and the listing pages),
    /// which have no backing record and therefore no overrides.
    pub fn for_route(
        path: &str,
        title: impl Into<String>,
        description: impl Into<String>,
        config: &SiteConfig,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            canonical: config.route_url(path),
            image: config.asset_url(DEFAULT_OG_IMAGE),
        }
    }
}
