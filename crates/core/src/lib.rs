//! ShowHuay Core - Shared types library.
//!
//! This crate provides common types used across the ShowHuay storefront
//! components:
//! - `storefront` - Cart reconciliation service (backend-for-frontend)
//! - `integration-tests` - End-to-end tests against a running instance
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and the cart data model

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
