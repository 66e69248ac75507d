//! ShowHuay commerce backend client.
//!
//! # Architecture
//!
//! - Plain REST/JSON over `reqwest` - the backend is source of truth, NO
//!   local sync, direct API calls
//! - In-memory caching via `moka` for catalog lookups (5 minute TTL)
//! - Cart endpoints are never cached (mutable state)
//!
//! # Endpoints
//!
//! - `GET /cart/getCart/{userId}` - cart lines, 204 for an empty cart
//! - `DELETE /cart/removeFromCart` - remove one line
//! - `GET /product/{productId}` - catalog detail for one product
//!
//! # Example
//!
//! ```rust,ignore
//! use showhuay_storefront::showhuay::ShowHuayClient;
//!
//! let client = ShowHuayClient::new(&config.showhuay);
//!
//! let lines = client.get_cart(user_id).await?;
//! let product = client.get_product(lines[0].product_id).await?;
//! ```

mod client;
pub mod types;

pub use client::ShowHuayClient;
pub use types::{CartLineRecord, ProductRecord};

use thiserror::Error;

/// Errors that can occur when interacting with the ShowHuay backend.
#[derive(Debug, Error)]
pub enum ShowHuayError {
    /// HTTP request failed (network, timeout, connection refused).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showhuay_error_display() {
        let err = ShowHuayError::NotFound("product 123".to_string());
        assert_eq!(err.to_string(), "Not found: product 123");

        let err = ShowHuayError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 500 - boom");
    }

    #[test]
    fn test_http_error_wraps_transport_failures() {
        let err = ShowHuayError::Parse(
            serde_json::from_str::<serde_json::Value>("not json").expect_err("invalid"),
        );
        assert!(err.to_string().starts_with("JSON parse error"));
    }
}
