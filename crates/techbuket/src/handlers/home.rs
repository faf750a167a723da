use askama::Template;
use axum::{extract::State, response::IntoResponse};
use techbuket_core::{
    content::{Partner, Product, Service},
    PageMeta,
};

use crate::{
    handlers::{AppError, HtmlTemplate},
    state::AppState,
};

/// Home page template: hero, services grid, products grid, partners strip,
/// contact CTA.
#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    meta: PageMeta,
    products: Vec<Product>,
    services: Vec<Service>,
    partners: Vec<Partner>,
}

/// Handler for the home page (GET /).
///
/// The three collection fetches are mutually independent and are issued
/// concurrently. Partners alone tolerates failure and degrades to an empty
/// strip; a products or services failure fails the whole page.
pub async fn home(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let (products, services, partners) = tokio::join!(
        state.content.products(),
        state.content.services(),
        state.content.partners(),
    );

    let products = products?;
    let services = services?;
    let partners = partners.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "partners fetch failed, rendering empty strip");
        Vec::new()
    });

    let meta = PageMeta::for_route(
        "/",
        "Techbuket - Futuristic Tech Solutions",
        "Techbuket provides cutting-edge tech solutions for modern businesses.",
        state.config(),
    );

    Ok(HtmlTemplate(HomeTemplate {
        meta,
        products,
        services,
        partners,
    }))
}
