//! Content records served by the remote API.

mod listing;
mod types;

pub use listing::{ListItem, ListLine, ListingItem};
pub use types::{
    Article, ContentRecord, EventRecord, ListingEntry, PageContent, Partner, Product, Service,
    SupportTicket,
};
