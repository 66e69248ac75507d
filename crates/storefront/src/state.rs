//! Application state shared across handlers.

use std::sync::Arc;

use crate::cart::CartStore;
use crate::config::StorefrontConfig;
use crate::showhuay::ShowHuayClient;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the backend client and the cart store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    showhuay: ShowHuayClient,
    carts: CartStore<ShowHuayClient>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let showhuay = ShowHuayClient::new(&config.showhuay);
        let carts = CartStore::new(showhuay.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                showhuay,
                carts,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the ShowHuay backend client.
    #[must_use]
    pub fn showhuay(&self) -> &ShowHuayClient {
        &self.inner.showhuay
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn carts(&self) -> &CartStore<ShowHuayClient> {
        &self.inner.carts
    }
}
