use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use techbuket_core::{PageMeta, RenderResult, RenderedPage, SiteConfig};

use crate::{handlers::HtmlTemplate, state::AppState};

/// Content page template.
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub meta: PageMeta,
    pub title: String,
    pub text: Option<String>,
    pub video_url: Option<String>,
}

impl PageTemplate {
    /// Binds a resolved page into the template.
    pub fn from_page(page: RenderedPage) -> Self {
        Self {
            text: page.record.text().map(str::to_string),
            title: page.record.title,
            video_url: page.record.video_url,
            meta: page.meta,
        }
    }
}

/// Not-found template rendered for the terminal state.
#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {
    meta: PageMeta,
}

/// Handler for content pages (GET /{slug}).
///
/// One fetch per request; any failure folds into the not-found terminal
/// state, which the boundary answers with 404.
pub async fn page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let fetched = state.content.page(&slug).await;
    if let Err(err) = &fetched {
        tracing::debug!(slug = %slug, error = %err, "page fetch failed, rendering not-found");
    }

    match RenderResult::from_fetch(fetched, state.config()) {
        RenderResult::Page(page) => HtmlTemplate(PageTemplate::from_page(page)).into_response(),
        RenderResult::NotFound => not_found(&slug, state.config()),
    }
}

/// Renders the not-found terminal state with a 404 status.
fn not_found(slug: &str, config: &SiteConfig) -> Response {
    let meta = PageMeta::for_route(&format!("/{slug}"), "Page not found", "", config);
    (StatusCode::NOT_FOUND, HtmlTemplate(NotFoundTemplate { meta })).into_response()
}
