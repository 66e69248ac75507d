//! Checkout selection.
//!
//! The selection is the subset of cart lines a user has marked for
//! checkout: a set of product ids kept in the session. Membership only
//! changes through [`toggle`]; nothing clears it implicitly.

use std::collections::BTreeSet;

use thiserror::Error;

use showhuay_core::{CartLine, CheckoutLine, CheckoutPayload, ProductId};

/// Checkout requested with nothing selected.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Please select at least one item")]
pub struct EmptySelection;

/// Flip a product's membership in the selection.
pub fn toggle(selection: &mut BTreeSet<ProductId>, product_id: ProductId) {
    if !selection.remove(&product_id) {
        selection.insert(product_id);
    }
}

/// Project the selected lines into the checkout handoff payload.
///
/// All-or-nothing per invocation: the payload carries every selected line
/// present in the cart, in cart order. A selected id with no matching line
/// (deleted since selection) is skipped.
///
/// # Errors
///
/// Returns [`EmptySelection`] when nothing is selected; no payload is
/// produced in that case.
pub fn checkout_payload(
    lines: &[CartLine],
    selection: &BTreeSet<ProductId>,
) -> Result<CheckoutPayload, EmptySelection> {
    if selection.is_empty() {
        return Err(EmptySelection);
    }

    let product_info = lines
        .iter()
        .filter(|line| selection.contains(&line.product_id))
        .map(|line| CheckoutLine {
            product_id: line.product_id,
            quantity: line.quantity,
        })
        .collect();

    Ok(CheckoutPayload { product_info })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line(id: i32, price: &str, quantity: u32) -> CartLine {
        CartLine {
            product_id: ProductId::new(id),
            price: price.parse().unwrap(),
            quantity,
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = BTreeSet::new();
        let id = ProductId::new(1);

        toggle(&mut selection, id);
        assert!(selection.contains(&id));

        toggle(&mut selection, id);
        assert!(!selection.contains(&id));
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        let mut selection: BTreeSet<_> = [ProductId::new(2)].into();
        let before = selection.clone();

        toggle(&mut selection, ProductId::new(1));
        toggle(&mut selection, ProductId::new(1));

        assert_eq!(selection, before);
    }

    #[test]
    fn test_empty_selection_rejected() {
        let lines = vec![line(1, "10.00", 2)];
        let result = checkout_payload(&lines, &BTreeSet::new());
        assert_eq!(result, Err(EmptySelection));
        assert_eq!(
            EmptySelection.to_string(),
            "Please select at least one item"
        );
    }

    #[test]
    fn test_checkout_projects_selected_lines_only() {
        let lines = vec![line(1, "10.00", 2), line(2, "5.00", 1)];
        let selection: BTreeSet<_> = [ProductId::new(1)].into();

        let payload = checkout_payload(&lines, &selection).unwrap();

        assert_eq!(
            payload.product_info,
            vec![CheckoutLine {
                product_id: ProductId::new(1),
                quantity: 2,
            }]
        );
    }

    #[test]
    fn test_checkout_follows_cart_order() {
        let lines = vec![line(3, "1.00", 1), line(1, "2.00", 4), line(2, "3.00", 2)];
        let selection: BTreeSet<_> = [ProductId::new(1), ProductId::new(3)].into();

        let payload = checkout_payload(&lines, &selection).unwrap();

        let ids: Vec<_> = payload
            .product_info
            .iter()
            .map(|item| item.product_id)
            .collect();
        assert_eq!(ids, vec![ProductId::new(3), ProductId::new(1)]);
    }

    #[test]
    fn test_selected_id_without_line_is_skipped() {
        let lines = vec![line(1, "10.00", 2)];
        let selection: BTreeSet<_> = [ProductId::new(1), ProductId::new(99)].into();

        let payload = checkout_payload(&lines, &selection).unwrap();
        assert_eq!(payload.product_info.len(), 1);
    }
}
