use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single content page as returned by `GET /api/pages/{slug}`.
///
/// Owned by the remote content API; treated as read-only and immutable for
/// the duration of one render. Unknown upstream fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub slug: String,
    pub title: String,
    /// Optional rich-content block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<PageContent>,
    /// Optional embedded video reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// SEO overrides. Each falls back to a derived value when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_image: Option<String>,
}

impl ContentRecord {
    /// Creates a minimal record with the given slug and title.
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            content: None,
            video_url: None,
            seo_title: None,
            seo_description: None,
            seo_image: None,
        }
    }

    /// Sets the rich-content text block.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content = Some(PageContent {
            text: Some(text.into()),
        });
        self
    }

    /// Sets the embedded video URL.
    pub fn with_video_url(mut self, url: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self
    }

    /// Returns the rich-content text, if any.
    pub fn text(&self) -> Option<&str> {
        self.content.as_ref().and_then(|c| c.text.as_deref())
    }
}

/// Rich-content block nested inside a [`ContentRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Minimal record used only to enumerate which pages exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    pub slug: String,
}

/// A product shown on the home page and the products listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub description: String,
}

/// A service shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub description: String,
}

/// A partner logo shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// An event on the events listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
}

/// A support ticket on the support listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportTicket {
    pub subject: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: String,
}

/// A knowledge-base article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}
