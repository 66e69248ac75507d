//! HTTP middleware for the storefront.

pub mod auth;
pub mod request_id;
pub mod session;

pub use auth::RequireUser;
pub use request_id::request_id_middleware;
pub use session::create_session_layer;
