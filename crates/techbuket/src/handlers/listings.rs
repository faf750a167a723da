//! Collection pages.
//!
//! One parameterized renderer serves every collection route; each handler
//! only binds the endpoint, the heading, and the route metadata.

use askama::Template;
use axum::{extract::State, response::IntoResponse};
use techbuket_core::{
    content::{ListItem, ListingItem},
    PageMeta, SiteConfig,
};

use crate::{
    handlers::{AppError, HtmlTemplate},
    state::AppState,
};

/// Shared template for every collection page.
#[derive(Template)]
#[template(path = "listing.html")]
struct ListingTemplate {
    meta: PageMeta,
    heading: String,
    items: Vec<ListItem>,
}

/// Renders a fetched collection through the shared listing template.
///
/// Elements render independently with no per-element fallback; by the time
/// this runs the collection fetch has already succeeded.
fn listing_page<T: ListingItem>(
    path: &str,
    heading: &str,
    description: &str,
    records: &[T],
    config: &SiteConfig,
) -> HtmlTemplate<ListingTemplate> {
    HtmlTemplate(ListingTemplate {
        meta: PageMeta::for_route(path, format!("{heading} | Techbuket"), description, config),
        heading: heading.to_string(),
        items: records.iter().map(|r| r.list_item()).collect(),
    })
}

/// GET /products
pub async fn products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let records = state.content.products().await?;
    Ok(listing_page(
        "/products",
        "Products",
        "Products built by Techbuket.",
        &records,
        state.config(),
    ))
}

/// GET /events
pub async fn events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let records = state.content.events().await?;
    Ok(listing_page(
        "/events",
        "Events",
        "Upcoming Techbuket events.",
        &records,
        state.config(),
    ))
}

/// GET /support
pub async fn support(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let records = state.content.support_tickets().await?;
    Ok(listing_page(
        "/support",
        "Support Tickets",
        "Open and resolved support tickets.",
        &records,
        state.config(),
    ))
}

/// GET /knowledge-base
pub async fn knowledge_base(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let records = state.content.knowledge_base().await?;
    Ok(listing_page(
        "/knowledge-base",
        "Knowledge Base",
        "Guides and articles from the Techbuket team.",
        &records,
        state.config(),
    ))
}
