//! Core types for the ShowHuay storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;

pub use cart::{CartLine, CheckoutLine, CheckoutPayload, EnrichedCartLine};
pub use id::*;
