//! Integration tests for the ShowHuay storefront.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the ShowHuay backend and the storefront
//! SHOWHUAY_API_URL=http://localhost:8080 \
//! STOREFRONT_BASE_URL=http://localhost:3000 \
//!     cargo run -p showhuay-storefront
//!
//! # Run integration tests
//! cargo test -p showhuay-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `storefront_cart` - Cart view, selection, and checkout endpoints
//!
//! Tests are `#[ignore]`d by default because they need a running storefront
//! (and its backend) plus a session with a logged-in user.
