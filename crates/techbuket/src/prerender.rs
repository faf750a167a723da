//! Path enumeration and static pre-rendering.
//!
//! The enumerator produces the universe of slugs to render; the build then
//! runs each slug through the same render path as the live route and writes
//! one HTML document per resolved page.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use askama::Template;
use clap::ValueEnum;
use techbuket_client::ContentClient;
use techbuket_core::RenderResult;

use crate::handlers::pages::PageTemplate;

/// The hardcoded slug set used by the fixed enumeration policy.
pub const FIXED_SLUGS: [&str; 8] = [
    "home",
    "about-us",
    "products",
    "services",
    "contact",
    "events",
    "support",
    "knowledge-base",
];

/// Where the set of slugs to pre-render comes from.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum PathPolicy {
    /// The hardcoded slug list.
    #[default]
    Fixed,
    /// Every slug the content API lists.
    Api,
}

/// Result of a prerender run.
#[derive(Debug)]
pub struct PrerenderSummary {
    /// Documents written.
    pub written: usize,
    /// Slugs that did not resolve and were skipped.
    pub skipped: usize,
    /// Output directory.
    pub out_dir: PathBuf,
}

/// Produce the set of slugs to pre-render, deduplicated, original order
/// kept.
///
/// A failed dynamic query degrades to an empty set: the build proceeds with
/// zero pages rather than failing. Single attempt, no retries.
pub async fn enumerate_paths(client: &ContentClient, policy: PathPolicy) -> Vec<String> {
    let slugs: Vec<String> = match policy {
        PathPolicy::Fixed => FIXED_SLUGS.iter().map(|s| s.to_string()).collect(),
        PathPolicy::Api => match client.pages().await {
            Ok(entries) => entries.into_iter().map(|e| e.slug).collect(),
            Err(err) => {
                tracing::warn!(error = %err, "page enumeration failed, pre-rendering zero pages");
                Vec::new()
            }
        },
    };

    let mut seen = HashSet::new();
    slugs.into_iter().filter(|s| seen.insert(s.clone())).collect()
}

/// Render every enumerated slug to `<out_dir>/<slug>.html`.
///
/// A slug that resolves to the not-found state is skipped and counted; it
/// never produces a document.
pub async fn run(
    client: &ContentClient,
    policy: PathPolicy,
    out_dir: &Path,
) -> anyhow::Result<PrerenderSummary> {
    fs::create_dir_all(out_dir)?;

    let slugs = enumerate_paths(client, policy).await;
    tracing::info!(count = slugs.len(), "enumerated slugs to pre-render");

    let mut written = 0;
    let mut skipped = 0;
    for slug in &slugs {
        match RenderResult::from_fetch(client.page(slug).await, client.config()) {
            RenderResult::Page(page) => {
                let html = PageTemplate::from_page(page).render()?;
                fs::write(out_dir.join(format!("{slug}.html")), html)?;
                written += 1;
            }
            RenderResult::NotFound => {
                tracing::warn!(slug = %slug, "slug did not resolve, skipping");
                skipped += 1;
            }
        }
    }

    tracing::info!(written, skipped, out = %out_dir.display(), "prerender complete");

    Ok(PrerenderSummary {
        written,
        skipped,
        out_dir: out_dir.to_path_buf(),
    })
}
