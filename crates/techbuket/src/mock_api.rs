//! In-process mock of the remote content API for tests.

use std::collections::HashSet;

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
    Json, Router,
};
use serde_json::{json, Value};
use techbuket_core::SiteConfig;
use tokio::net::TcpListener;

/// Spawn a mock content API on an ephemeral port and return a config
/// pointing at it. Collections named in `fail` answer 500; `"pages"` fails
/// the page listing endpoint.
pub async fn serve(fail: &[&str]) -> SiteConfig {
    let fail: HashSet<&str> = fail.iter().copied().collect();

    let router = Router::new()
        .route(
            "/api/pages",
            collection(
                fail.contains("pages"),
                // Duplicate slug on purpose: enumeration must dedup.
                json!([{ "slug": "home" }, { "slug": "about-us" }, { "slug": "home" }]),
            ),
        )
        .route("/api/pages/{slug}", get(page))
        .route(
            "/api/products",
            collection(
                fail.contains("products"),
                json!([
                    { "name": "Cloud Suite", "description": "Managed cloud tooling" },
                    { "name": "Edge CDN", "description": "Content delivery at the edge" }
                ]),
            ),
        )
        .route(
            "/api/services",
            collection(
                fail.contains("services"),
                json!([{ "name": "Consulting", "description": "Architecture reviews" }]),
            ),
        )
        .route(
            "/api/partners",
            collection(
                fail.contains("partners"),
                json!([{ "name": "Acme", "logo": "https://cdn.example.test/acme.png" }]),
            ),
        )
        .route(
            "/api/events",
            collection(
                fail.contains("events"),
                json!([{
                    "title": "Launch",
                    "description": "Product launch",
                    "date": "2025-03-14T18:00:00.000Z",
                    "location": "Montevideo"
                }]),
            ),
        )
        .route(
            "/api/support",
            collection(
                fail.contains("support"),
                json!([{
                    "subject": "Login broken",
                    "name": "Ana",
                    "email": "ana@example.test",
                    "message": "Cannot sign in since Monday.",
                    "status": "open"
                }]),
            ),
        )
        .route(
            "/api/knowledge_base",
            collection(
                fail.contains("knowledge_base"),
                json!([{
                    "title": "Getting started",
                    "description": "First steps with Techbuket",
                    "video_url": "https://videos.example.test/intro"
                }]),
            ),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    SiteConfig::new(format!("http://{addr}"))
}

fn collection(failing: bool, body: Value) -> MethodRouter {
    get(move || {
        let body = body.clone();
        async move {
            if failing {
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            } else {
                Json(body).into_response()
            }
        }
    })
}

async fn page(Path(slug): Path<String>) -> Response {
    match slug.as_str() {
        "home" => Json(json!({
            "slug": "home",
            "title": "Home",
            "seo_title": "Techbuket | Home",
            "seo_description": "Innovative tech solutions for modern businesses."
        }))
        .into_response(),
        "about-us" => Json(json!({
            "slug": "about-us",
            "title": "About",
            "content": { "text": "Who we are." },
            "video_url": "https://videos.example.test/intro"
        }))
        .into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}
