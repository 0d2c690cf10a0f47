//! Read-side views handed to the presentation adapter.
//!
//! Views are rebuilt from current state on every read, so an adapter can
//! never observe a mutation without its recomputed totals.

use serde::{Deserialize, Serialize};

use tidewater_cart::CartLine;
use tidewater_catalog::MenuItem;
use tidewater_core::ItemId;
use tidewater_pricing::Totals;

/// The visible menu under the active category tab and search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuView {
    /// Visible items in catalog order.
    pub items: Vec<MenuItem>,
    /// Count for the "Curating N delicacies" readout.
    pub count: usize,
}

/// One cart line as rendered, with its extended price precomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineView {
    pub item_id: ItemId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: u64,
    /// `unit_price * quantity`.
    pub extended_price: u64,
    pub image: String,
    pub category_display: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            item_id: line.item_id,
            name: line.name.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price,
            extended_price: line.extended_price(),
            image: line.image.clone(),
            category_display: line.category_display.clone(),
        }
    }
}

/// The cart panel: lines in add order plus the totals bundle.
///
/// `is_empty` tells the adapter to swap the summary for the empty state
/// rather than rendering a zero-totals summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub totals: Totals,
    pub is_empty: bool,
}

/// The terminal checkout acknowledgment: a side-effect-free read of what
/// the confirmation dialog shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSummary {
    pub item_count: u32,
    /// The tax-inclusive desktop total.
    pub total: u64,
}
