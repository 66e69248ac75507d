//! Cart data model.
//!
//! A cart is a set of lines keyed by product id. The cart service is the
//! source of truth; the line set is replaced wholesale on every reload and
//! is never partially mutated except via delete.
//!
//! [`EnrichedCartLine`] is the derived projection of a [`CartLine`] joined
//! with live catalog data. It is recomputed from the raw lines, never
//! authoritative.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// One product/quantity/price entry in a user's cart.
///
/// Identity is the product id, unique within a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Unit price as reported by the cart service.
    pub price: Decimal,
    /// Number of units.
    pub quantity: u32,
}

/// A cart line joined with current catalog data.
///
/// The enrichment fields are `None` when the catalog lookup failed for this
/// line; the line itself is always preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedCartLine {
    /// The underlying cart line. Its price is authoritative.
    pub line: CartLine,
    /// Product display name from the catalog.
    pub product_name: Option<String>,
    /// Seller username from the catalog.
    pub seller_name: Option<String>,
    /// Product image path from the catalog.
    pub image_path: Option<String>,
}

impl EnrichedCartLine {
    /// A line with no catalog data attached.
    #[must_use]
    pub const fn unenriched(line: CartLine) -> Self {
        Self {
            line,
            product_name: None,
            seller_name: None,
            image_path: None,
        }
    }
}

impl From<CartLine> for EnrichedCartLine {
    fn from(line: CartLine) -> Self {
        Self::unenriched(line)
    }
}

/// One selected line projected for checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutLine {
    /// Product to purchase.
    pub product_id: ProductId,
    /// Number of units to purchase.
    pub quantity: u32,
}

/// Payload handed to the checkout navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPayload {
    /// Selected lines, in cart order.
    pub product_info: Vec<CheckoutLine>,
}
