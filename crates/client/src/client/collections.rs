//! Collection endpoints.
//!
//! All collections share one fetch shape; each method only binds the
//! endpoint path and element type.

use techbuket_core::content::{Article, EventRecord, Partner, Product, Service, SupportTicket};

use super::ContentClient;
use crate::error::Result;

impl ContentClient {
    /// Fetch the products collection.
    pub async fn products(&self) -> Result<Vec<Product>> {
        self.get_json("products").await
    }

    /// Fetch the services collection.
    pub async fn services(&self) -> Result<Vec<Service>> {
        self.get_json("services").await
    }

    /// Fetch the partners collection.
    pub async fn partners(&self) -> Result<Vec<Partner>> {
        self.get_json("partners").await
    }

    /// Fetch the events collection.
    pub async fn events(&self) -> Result<Vec<EventRecord>> {
        self.get_json("events").await
    }

    /// Fetch the support tickets collection.
    pub async fn support_tickets(&self) -> Result<Vec<SupportTicket>> {
        self.get_json("support").await
    }

    /// Fetch the knowledge-base articles collection.
    pub async fn knowledge_base(&self) -> Result<Vec<Article>> {
        self.get_json("knowledge_base").await
    }
}
