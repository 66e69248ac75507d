//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Cart (JSON, session user required)
//! GET  /cart                   - Reconciled cart view
//! GET  /cart/count             - Cart count badge value
//! POST /cart/select            - Toggle checkout selection
//! POST /cart/remove            - Remove line, return refreshed view
//! POST /cart/checkout          - Validate selection, return handoff payload
//! ```

pub mod cart;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/count", get(cart::count))
        .route("/select", post(cart::select))
        .route("/remove", post(cart::remove))
        .route("/checkout", post(cart::checkout))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new().nest("/cart", cart_routes())
}
