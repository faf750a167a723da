use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    handlers::{
        health::healthz,
        home::home,
        listings::{events, knowledge_base, products, support},
        pages::page,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/products", get(products))
        .route("/events", get(events))
        .route("/support", get(support))
        .route("/knowledge-base", get(knowledge_base))
        .route("/healthz", get(healthz))
        // Catch-all content page route; static segments above win.
        .route("/{slug}", get(page))
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
