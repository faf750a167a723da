//! Field-mapping policy for the parameterized listing renderer.
//!
//! Every collection page renders through one template over [`ListItem`]s;
//! each record type decides which of its fields become the heading, the
//! labeled lines, and the optional embedded video.

use super::types::{Article, EventRecord, Product, SupportTicket};

/// One labeled (or unlabeled) line of a list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLine {
    pub label: Option<String>,
    pub value: String,
}

impl ListLine {
    /// A plain body line without a label.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            label: None,
            value: value.into(),
        }
    }

    /// A `Label: value` line.
    pub fn labeled(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            value: value.into(),
        }
    }
}

/// A collection element reduced to renderable parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub heading: String,
    pub lines: Vec<ListLine>,
    pub video_url: Option<String>,
}

/// Maps a collection record into a [`ListItem`].
pub trait ListingItem {
    fn list_item(&self) -> ListItem;
}

impl ListingItem for Product {
    fn list_item(&self) -> ListItem {
        ListItem {
            heading: self.name.clone(),
            lines: vec![ListLine::text(&self.description)],
            video_url: None,
        }
    }
}

impl ListingItem for EventRecord {
    fn list_item(&self) -> ListItem {
        ListItem {
            heading: self.title.clone(),
            lines: vec![
                ListLine::text(&self.description),
                ListLine::labeled("Date", self.date.format("%B %-d, %Y").to_string()),
                ListLine::labeled("Location", &self.location),
            ],
            video_url: None,
        }
    }
}

impl ListingItem for SupportTicket {
    fn list_item(&self) -> ListItem {
        ListItem {
            heading: self.subject.clone(),
            lines: vec![
                ListLine::labeled("Name", &self.name),
                ListLine::labeled("Email", &self.email),
                ListLine::text(&self.message),
                ListLine::labeled("Status", &self.status),
            ],
            video_url: None,
        }
    }
}

impl ListingItem for Article {
    fn list_item(&self) -> ListItem {
        ListItem {
            heading: self.title.clone(),
            lines: vec![ListLine::text(&self.description)],
            video_url: self.video_url.clone(),
        }
    }
}
