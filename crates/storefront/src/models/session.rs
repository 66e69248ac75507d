//! Session-related types.
//!
//! Types stored in the session for the logged-in user and their checkout
//! selection.

use serde::{Deserialize, Serialize};

use showhuay_core::UserId;

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user. How
/// it gets there is the login flow's concern; this crate only consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's backend ID.
    pub id: UserId,
    /// Display username.
    pub username: String,
}

/// Session keys.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for storing the checkout selection (set of product ids).
    pub const SELECTION: &str = "cart_selection";
}
