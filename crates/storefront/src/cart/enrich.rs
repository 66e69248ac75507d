//! Catalog enrichment of cart lines.
//!
//! Joins each cart line with live catalog data (name, seller, image).
//! One lookup is issued per line - product ids are unique within a cart -
//! and all lookups are awaited before the merged batch is returned, whether
//! they succeed or fail. A failed lookup degrades that line to its
//! unenriched form; the batch as a whole never fails and never drops lines.
//!
//! This is a pure derivation: nothing here mutates cart state. Callers pass
//! the result through [`crate::cart::CartStore::commit_enriched`], which
//! version-checks the merge.

use tokio::task::JoinSet;
use tracing::{instrument, warn};

use showhuay_core::{CartLine, EnrichedCartLine};

use crate::cart::CatalogBackend;
use crate::showhuay::ProductRecord;

fn apply(line: CartLine, record: ProductRecord) -> EnrichedCartLine {
    EnrichedCartLine {
        line,
        product_name: Some(record.product_name),
        seller_name: Some(record.username),
        image_path: record.image_path,
    }
}

/// Derive the enriched view of `lines` from the catalog.
///
/// The output has exactly one entry per input line, in input order.
#[instrument(skip_all, fields(lines = lines.len()))]
pub async fn enrich<C>(catalog: &C, lines: &[CartLine]) -> Vec<EnrichedCartLine>
where
    C: CatalogBackend + Clone + 'static,
{
    let mut merged: Vec<EnrichedCartLine> = lines
        .iter()
        .cloned()
        .map(EnrichedCartLine::unenriched)
        .collect();

    let mut lookups = JoinSet::new();
    for (index, line) in lines.iter().enumerate() {
        let catalog = catalog.clone();
        let product_id = line.product_id;
        lookups.spawn(async move { (index, catalog.fetch_product(product_id).await) });
    }

    // Join semantics: every lookup completes before the batch is merged.
    while let Some(joined) = lookups.join_next().await {
        match joined {
            Ok((index, Ok(record))) => {
                if let Some(slot) = merged.get_mut(index) {
                    *slot = apply(slot.line.clone(), record);
                }
            }
            Ok((index, Err(e))) => {
                // Partial failure isolation: this line stays unenriched.
                warn!(index, "Error fetching product data: {e}");
            }
            Err(e) => {
                warn!("Product lookup task failed: {e}");
            }
        }
    }

    merged
}
