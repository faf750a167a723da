/// Default content API host, used when no base URL is supplied.
pub const DEFAULT_BASE_URL: &str = "https://c3pt-tb-web.onrender.com";

/// Site-wide configuration.
///
/// Holds the single externally supplied base-URL value. It is resolved once
/// at process start and passed explicitly to every fetch and every SEO
/// resolution; nothing reads it from ambient environment state afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    base_url: String,
}

impl SiteConfig {
    /// Creates a config from a base URL, trimming any trailing slashes so
    /// derived URLs never contain `//`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Get the configured base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a content API endpoint, e.g. `api_url("products")`.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// Canonical URL for a content page, e.g. `page_url("about-us")`.
    pub fn page_url(&self, slug: &str) -> String {
        format!("{}/{}", self.base_url, slug)
    }

    /// Canonical URL for a fixed route, e.g. `route_url("/events")`.
    pub fn route_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// URL of a static asset served by this site.
    pub fn asset_url(&self, name: &str) -> String {
        format!("{}/static/{}", self.base_url, name)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        let config = SiteConfig::new("https://example.test");
        assert_eq!(config.api_url("products"), "https://example.test/api/products");
        assert_eq!(
            config.api_url("pages/about-us"),
            "https://example.test/api/pages/about-us"
        );
    }

    #[test]
    fn test_page_and_route_urls() {
        let config = SiteConfig::new("https://example.test");
        assert_eq!(config.page_url("about-us"), "https://example.test/about-us");
        assert_eq!(config.route_url("/events"), "https://example.test/events");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = SiteConfig::new("https://example.test/");
        assert_eq!(config, SiteConfig::new("https://example.test"));
        assert_eq!(config.api_url("events"), "https://example.test/api/events");
    }

    #[test]
    fn test_default_host() {
        let config = SiteConfig::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_asset_url() {
        let config = SiteConfig::new("https://example.test");
        assert_eq!(
            config.asset_url("og-default.png"),
            "https://example.test/static/og-default.png"
        );
    }
}
