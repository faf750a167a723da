//! HTTP client for the content API.

mod collections;
mod pages;

use techbuket_core::SiteConfig;

use crate::error::{ClientError, Result};

/// HTTP client for the remote content API.
///
/// Every operation is a single GET with no retries; callers decide whether
/// a failure degrades or propagates.
#[derive(Debug, Clone)]
pub struct ContentClient {
    client: reqwest::Client,
    config: SiteConfig,
}

impl ContentClient {
    /// Create a new client reading from the configured host.
    pub fn new(config: SiteConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Issue one GET against an API path and decode the JSON body.
    pub(crate) async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.config.api_url(path);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else if status.as_u16() == 404 {
            Err(ClientError::NotFound { url })
        } else {
            Err(ClientError::ServerError {
                status: status.as_u16(),
                url,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Json, Router};
    use techbuket_core::content::ContentRecord;
    use tokio::net::TcpListener;

    /// Serve a throwaway content API on an ephemeral port.
    async fn serve(router: Router) -> SiteConfig {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        SiteConfig::new(format!("http://{addr}"))
    }

    #[tokio::test]
    async fn test_page_fetch_decodes_record() {
        let router = Router::new().route(
            "/api/pages/{slug}",
            get(|| async {
                Json(serde_json::json!({
                    "slug": "about-us",
                    "title": "About",
                    "content": { "text": "Who we are." }
                }))
            }),
        );
        let client = ContentClient::new(serve(router).await);

        let record = client.page("about-us").await.unwrap();
        assert_eq!(record, ContentRecord::new("about-us", "About").with_text("Who we are."));
    }

    #[tokio::test]
    async fn test_missing_page_is_not_found() {
        let router = Router::new().route(
            "/api/pages/{slug}",
            get(|| async { StatusCode::NOT_FOUND }),
        );
        let client = ContentClient::new(serve(router).await);

        match client.page("nope").await {
            Err(ClientError::NotFound { url }) => assert!(url.ends_with("/api/pages/nope")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_upstream_error_is_server_error() {
        let router = Router::new().route(
            "/api/products",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let client = ContentClient::new(serve(router).await);

        match client.products().await {
            Err(ClientError::ServerError { status, .. }) => assert_eq!(status, 500),
            other => panic!("expected ServerError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_payload_is_an_error() {
        let router = Router::new().route("/api/pages/{slug}", get(|| async { "not json" }));
        let client = ContentClient::new(serve(router).await);

        assert!(client.page("about-us").await.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_error() {
        // Nothing listens on this port.
        let client = ContentClient::new(SiteConfig::new("http://127.0.0.1:1"));
        assert!(client.pages().await.is_err());
    }

    #[tokio::test]
    async fn test_collection_fetch_decodes_elements() {
        let router = Router::new().route(
            "/api/events",
            get(|| async {
                Json(serde_json::json!([{
                    "title": "Launch",
                    "description": "Product launch",
                    "date": "2025-03-14T18:00:00.000Z",
                    "location": "Montevideo"
                }]))
            }),
        );
        let client = ContentClient::new(serve(router).await);

        let events = client.events().await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Launch");
    }
}
