//! Cart reconciliation core.
//!
//! Reconciles a server-held cart with the product catalog:
//!
//! - [`store::CartStore`] owns the raw per-user cart state. Every
//!   successful load replaces the line set wholesale and stamps a strictly
//!   increasing version.
//! - [`enrich::enrich`] derives the catalog-joined view from a set of
//!   lines. It is a pure derivation; the only state write is
//!   [`store::CartStore::commit_enriched`], which drops batches whose
//!   version is no longer current.
//! - [`selection`] projects a user's selection into the checkout handoff
//!   payload.
//!
//! The store and enrichment are generic over [`CartBackend`] and
//! [`CatalogBackend`] so the reconciliation logic can be exercised without
//! a live backend. [`ShowHuayClient`] implements both.

pub mod enrich;
pub mod selection;
pub mod store;

pub use store::{CartSnapshot, CartStore, RemoveOutcome};

use std::future::Future;

use showhuay_core::{CartLine, ProductId, UserId};

use crate::showhuay::{ProductRecord, ShowHuayClient, ShowHuayError};

/// Source of a user's cart lines.
pub trait CartBackend: Send + Sync {
    /// Fetch the current cart lines for a user. An empty cart is an empty
    /// list, not an error.
    fn fetch_cart(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<CartLine>, ShowHuayError>> + Send;

    /// Delete one line from a user's cart.
    fn delete_line(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> impl Future<Output = Result<(), ShowHuayError>> + Send;
}

/// Source of catalog detail for single products.
pub trait CatalogBackend: Send + Sync {
    /// Fetch catalog detail for one product.
    fn fetch_product(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = Result<ProductRecord, ShowHuayError>> + Send;
}

impl CartBackend for ShowHuayClient {
    async fn fetch_cart(&self, user_id: UserId) -> Result<Vec<CartLine>, ShowHuayError> {
        self.get_cart(user_id).await
    }

    async fn delete_line(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<(), ShowHuayError> {
        self.remove_from_cart(user_id, product_id).await
    }
}

impl CatalogBackend for ShowHuayClient {
    async fn fetch_product(&self, product_id: ProductId) -> Result<ProductRecord, ShowHuayError> {
        self.get_product(product_id).await
    }
}
