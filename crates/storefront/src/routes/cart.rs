//! Cart route handlers.
//!
//! The cart page's JSON API: the reconciled cart view, selection toggling,
//! line removal, and the checkout handoff. The logged-in user id comes from
//! the session via [`RequireUser`]; the checkout selection lives in the
//! session as well.

use std::collections::BTreeSet;

use axum::{Json, extract::State, response::IntoResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use showhuay_core::{CheckoutPayload, EnrichedCartLine, ProductId, UserId};

use crate::cart::{CartSnapshot, enrich, selection};
use crate::error::{AppError, Result};
use crate::middleware::RequireUser;
use crate::models::session_keys;
use crate::state::AppState;

/// Placeholder shown when the catalog has no name for a line.
const NAME_UNAVAILABLE: &str = "Product Name Unavailable";

/// Placeholder shown when the catalog has no image for a line.
const IMAGE_UNAVAILABLE: &str = "Product image Unavailable";

/// Cart item display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemView {
    pub product_id: ProductId,
    pub name: String,
    pub seller_name: Option<String>,
    pub image_path: String,
    pub price: String,
    pub line_price: String,
    pub quantity: u32,
    pub selected: bool,
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: usize,
}

impl CartView {
    /// Build the view from an enriched batch and the current selection.
    ///
    /// Missing enrichment fields degrade to placeholder text; every line is
    /// rendered.
    #[must_use]
    pub fn build(enriched: &[EnrichedCartLine], selected: &BTreeSet<ProductId>) -> Self {
        let items: Vec<_> = enriched
            .iter()
            .map(|entry| CartItemView::build(entry, selected))
            .collect();
        Self {
            item_count: items.len(),
            items,
        }
    }
}

impl CartItemView {
    fn build(entry: &EnrichedCartLine, selected: &BTreeSet<ProductId>) -> Self {
        let line = &entry.line;
        let quantity = Decimal::from(line.quantity);
        Self {
            product_id: line.product_id,
            name: entry
                .product_name
                .clone()
                .unwrap_or_else(|| NAME_UNAVAILABLE.to_string()),
            seller_name: entry.seller_name.clone(),
            image_path: entry
                .image_path
                .clone()
                .unwrap_or_else(|| IMAGE_UNAVAILABLE.to_string()),
            price: format_price(line.price),
            line_price: format_price(line.price * quantity),
            quantity: line.quantity,
            selected: selected.contains(&line.product_id),
        }
    }
}

/// Format a decimal amount as a price string.
fn format_price(amount: Decimal) -> String {
    format!("${amount:.2}")
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the checkout selection from the session.
async fn get_selection(session: &Session) -> BTreeSet<ProductId> {
    session
        .get::<BTreeSet<ProductId>>(session_keys::SELECTION)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Store the checkout selection in the session.
async fn set_selection(
    session: &Session,
    selection: &BTreeSet<ProductId>,
) -> Result<()> {
    session
        .insert(session_keys::SELECTION, selection)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to store selection: {e}")))
}

// =============================================================================
// View Assembly
// =============================================================================

/// Enriched lines for a snapshot, served from the committed view when the
/// version still matches, derived fresh otherwise.
async fn enriched_for(state: &AppState, user_id: UserId, snapshot: &CartSnapshot) -> Vec<EnrichedCartLine> {
    if let Some(batch) = state.carts().cached_enriched(user_id, snapshot.version) {
        return batch;
    }

    let batch = enrich::enrich(state.showhuay(), &snapshot.lines).await;
    // A reload may have raced us; a stale batch is simply not stored.
    state
        .carts()
        .commit_enriched(user_id, snapshot.version, batch.clone());
    batch
}

// =============================================================================
// Handlers
// =============================================================================

/// Toggle form data.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectForm {
    pub product_id: ProductId,
}

/// Remove form data.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveForm {
    pub product_id: ProductId,
}

/// Selection state returned by the toggle endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResponse {
    pub selected: Vec<ProductId>,
}

/// Cart count badge value.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountResponse {
    pub count: usize,
}

/// The reconciled cart view.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    RequireUser(user): RequireUser,
) -> Result<Json<CartView>> {
    let snapshot = state.carts().load(user.id).await;
    let enriched = enriched_for(&state, user.id, &snapshot).await;
    let selected = get_selection(&session).await;

    Ok(Json(CartView::build(&enriched, &selected)))
}

/// Cart line count (badge value).
#[instrument(skip(state))]
pub async fn count(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Json<CountResponse> {
    let snapshot = state.carts().load(user.id).await;
    Json(CountResponse {
        count: snapshot.lines.len(),
    })
}

/// Toggle a product's membership in the checkout selection.
///
/// Selection is session state; no backend call is involved.
#[instrument(skip_all, fields(product_id = %form.product_id))]
pub async fn select(
    session: Session,
    RequireUser(_user): RequireUser,
    Json(form): Json<SelectForm>,
) -> Result<Json<SelectionResponse>> {
    let mut selected = get_selection(&session).await;
    selection::toggle(&mut selected, form.product_id);
    set_selection(&session, &selected).await?;

    Ok(Json(SelectionResponse {
        selected: selected.into_iter().collect(),
    }))
}

/// Remove a line from the cart, then serve the refreshed view.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    RequireUser(user): RequireUser,
    Json(form): Json<RemoveForm>,
) -> Result<impl IntoResponse> {
    let outcome = state.carts().remove(user.id, form.product_id).await;

    // The store reflects post-reload server truth either way; a failed
    // deletion is still reported instead of masked as a no-op.
    outcome.deletion?;

    let enriched = enriched_for(&state, user.id, &outcome.snapshot).await;
    let selected = get_selection(&session).await;

    Ok(Json(CartView::build(&enriched, &selected)))
}

/// Validate the selection and produce the checkout handoff payload.
#[instrument(skip(state, session))]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
    RequireUser(user): RequireUser,
) -> Result<Json<CheckoutPayload>> {
    let selected = get_selection(&session).await;

    // Project from the held state; load on first touch.
    let snapshot = {
        let current = state.carts().snapshot(user.id);
        if current.version == 0 {
            state.carts().load(user.id).await
        } else {
            current
        }
    };

    let payload = selection::checkout_payload(&snapshot.lines, &selected)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(Json(payload))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use showhuay_core::CartLine;

    use super::*;

    fn line(id: i32, price: &str, quantity: u32) -> CartLine {
        CartLine {
            product_id: ProductId::new(id),
            price: price.parse().unwrap(),
            quantity,
        }
    }

    fn enriched(id: i32, name: &str) -> EnrichedCartLine {
        EnrichedCartLine {
            line: line(id, "10.00", 2),
            product_name: Some(name.to_string()),
            seller_name: Some("somchai".to_string()),
            image_path: Some("/img/1.png".to_string()),
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("10".parse().unwrap()), "$10.00");
        assert_eq!(format_price("5.5".parse().unwrap()), "$5.50");
    }

    #[test]
    fn test_build_empty_batch() {
        let view = CartView::build(&[], &BTreeSet::new());
        assert!(view.items.is_empty());
        assert_eq!(view.item_count, 0);
    }

    #[test]
    fn test_build_renders_every_line() {
        let batch = vec![enriched(1, "Blue Shirt"), enriched(2, "Red Hat")];
        let view = CartView::build(&batch, &BTreeSet::new());

        assert_eq!(view.item_count, 2);
        assert_eq!(view.items[0].name, "Blue Shirt");
        assert_eq!(view.items[0].price, "$10.00");
        assert_eq!(view.items[0].line_price, "$20.00");
        assert!(!view.items[0].selected);
    }

    #[test]
    fn test_build_marks_selected_lines() {
        let batch = vec![enriched(1, "Blue Shirt"), enriched(2, "Red Hat")];
        let selected: BTreeSet<_> = [ProductId::new(2)].into();

        let view = CartView::build(&batch, &selected);

        assert!(!view.items[0].selected);
        assert!(view.items[1].selected);
    }

    #[test]
    fn test_unenriched_line_degrades_to_placeholders() {
        let batch = vec![EnrichedCartLine::unenriched(line(1, "10.00", 2))];
        let view = CartView::build(&batch, &BTreeSet::new());

        let item = &view.items[0];
        assert_eq!(item.name, NAME_UNAVAILABLE);
        assert_eq!(item.image_path, IMAGE_UNAVAILABLE);
        assert!(item.seller_name.is_none());
        // The line itself is never dropped.
        assert_eq!(view.item_count, 1);
    }
}
