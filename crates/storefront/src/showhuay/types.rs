//! Wire types for the ShowHuay backend REST API.
//!
//! These mirror the backend's JSON bodies (snake_case) and are converted to
//! the domain types in `showhuay-core` at the client boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use showhuay_core::{CartLine, ProductId, UserId};

/// Response envelope for `GET /cart/getCart/{userId}`.
///
/// A backend that answers 200 with no `carts` key is treated the same as an
/// empty list.
#[derive(Debug, Deserialize)]
pub struct CartsResponse {
    #[serde(default)]
    pub carts: Vec<CartLineRecord>,
}

/// One cart line as the cart service reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct CartLineRecord {
    pub product_id: ProductId,
    pub price: Decimal,
    pub quantity: u32,
}

impl From<CartLineRecord> for CartLine {
    fn from(record: CartLineRecord) -> Self {
        Self {
            product_id: record.product_id,
            price: record.price,
            quantity: record.quantity,
        }
    }
}

/// Request body for `DELETE /cart/removeFromCart`.
#[derive(Debug, Serialize)]
pub struct RemoveFromCartRequest {
    pub user_id: UserId,
    pub product_id: ProductId,
}

/// Response envelope for `GET /product/{productId}`.
///
/// The backend wraps the product in a one-element array; the first element
/// is the one that counts.
#[derive(Debug, Deserialize)]
pub struct ProductResponse {
    #[serde(default)]
    pub product: Vec<ProductRecord>,
}

/// Catalog detail for one product.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub product_name: String,
    /// Current catalog price. Informational only: the cart service's price
    /// stays authoritative for a cart line.
    pub price: Decimal,
    /// Seller username.
    pub username: String,
    pub image_path: Option<String>,
}
