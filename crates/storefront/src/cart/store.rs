//! Versioned per-user cart state.
//!
//! The cart service is the source of truth; this store holds the latest
//! lines fetched for each user, plus the enriched view derived from them.
//!
//! Loads follow a stale-on-error policy: a transport failure is logged and
//! the prior state is returned unchanged. Every successful fetch replaces
//! the line set wholesale and bumps a strictly increasing version; the
//! version gates [`CartStore::commit_enriched`] so an enrichment batch that
//! raced with a newer load can never overwrite fresher state.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{instrument, warn};

use showhuay_core::{CartLine, EnrichedCartLine, ProductId, UserId};

use crate::cart::CartBackend;
use crate::showhuay::ShowHuayError;

/// A point-in-time view of one user's raw cart state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSnapshot {
    /// Cart lines as of this version.
    pub lines: Vec<CartLine>,
    /// Version stamped by the load that produced these lines. Strictly
    /// increasing per user; 0 means nothing has been loaded yet.
    pub version: u64,
}

impl CartSnapshot {
    const fn empty() -> Self {
        Self {
            lines: Vec::new(),
            version: 0,
        }
    }
}

/// Result of a remove-then-reload cycle.
///
/// The snapshot always reflects the post-reload server state; the deletion
/// outcome is carried separately so callers can surface a failed deletion
/// instead of masking it as a no-op.
#[derive(Debug)]
pub struct RemoveOutcome {
    /// State after the unconditional reload.
    pub snapshot: CartSnapshot,
    /// Whether the deletion request itself succeeded.
    pub deletion: Result<(), ShowHuayError>,
}

#[derive(Debug, Default)]
struct UserCart {
    lines: Vec<CartLine>,
    version: u64,
    enriched: Option<Vec<EnrichedCartLine>>,
}

/// Per-user cart state keyed by user id.
pub struct CartStore<B> {
    backend: B,
    state: Mutex<HashMap<UserId, UserCart>>,
}

impl<B: CartBackend> CartStore<B> {
    /// Create a store backed by the given cart source.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<UserId, UserCart>> {
        // A panic while holding the lock leaves plain data; keep serving it.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current snapshot without touching the backend.
    pub fn snapshot(&self, user_id: UserId) -> CartSnapshot {
        let state = self.lock();
        state.get(&user_id).map_or_else(CartSnapshot::empty, |cart| CartSnapshot {
            lines: cart.lines.clone(),
            version: cart.version,
        })
    }

    /// Fetch the user's cart from the backend and replace the stored lines.
    ///
    /// An empty cart replaces the lines with an empty list. A fetch failure
    /// is logged and the prior state is returned unchanged (stale-on-error);
    /// a user never fetched before falls back to an empty snapshot.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn load(&self, user_id: UserId) -> CartSnapshot {
        match self.backend.fetch_cart(user_id).await {
            Ok(lines) => {
                let mut state = self.lock();
                let cart = state.entry(user_id).or_default();
                cart.version += 1;
                cart.lines = lines.clone();
                // New raw state invalidates the derived view.
                cart.enriched = None;
                CartSnapshot {
                    lines,
                    version: cart.version,
                }
            }
            Err(e) => {
                warn!("Error fetching cart: {e}");
                self.snapshot(user_id)
            }
        }
    }

    /// Delete one line, then reload unconditionally.
    ///
    /// The reload runs whether or not the deletion succeeded, so the stored
    /// state reflects server truth either way. The deletion outcome is
    /// returned alongside the refreshed snapshot.
    #[instrument(skip(self), fields(user_id = %user_id, product_id = %product_id))]
    pub async fn remove(&self, user_id: UserId, product_id: ProductId) -> RemoveOutcome {
        let deletion = self.backend.delete_line(user_id, product_id).await;
        if let Err(e) = &deletion {
            warn!("Error deleting product from cart: {e}");
        }

        let snapshot = self.load(user_id).await;
        RemoveOutcome { snapshot, deletion }
    }

    /// Store an enriched view derived from the lines at `version`.
    ///
    /// Returns `false` (and stores nothing) when a newer load has replaced
    /// the lines since the batch started.
    pub fn commit_enriched(
        &self,
        user_id: UserId,
        version: u64,
        enriched: Vec<EnrichedCartLine>,
    ) -> bool {
        let mut state = self.lock();
        match state.get_mut(&user_id) {
            Some(cart) if cart.version == version => {
                cart.enriched = Some(enriched);
                true
            }
            _ => false,
        }
    }

    /// The committed enriched view, if one exists for exactly `version`.
    pub fn cached_enriched(
        &self,
        user_id: UserId,
        version: u64,
    ) -> Option<Vec<EnrichedCartLine>> {
        let state = self.lock();
        state
            .get(&user_id)
            .filter(|cart| cart.version == version)
            .and_then(|cart| cart.enriched.clone())
    }
}
