use serde::{Deserialize, Serialize};

use tidewater_catalog::MenuItem;
use tidewater_core::ItemId;

/// One cart entry, keyed by item identity.
///
/// Display fields are denormalized copies captured when the item is first
/// added. The line never reads back into the catalog after creation, so the
/// price at add time is the price the line keeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: ItemId,
    /// Always >= 1; a line that would drop to zero is deleted instead.
    pub quantity: u32,
    pub name: String,
    /// Unit price in whole currency units, snapshotted at add time.
    pub unit_price: u64,
    pub image: String,
    pub category_display: String,
}

impl CartLine {
    fn from_item(item: &MenuItem) -> Self {
        Self {
            item_id: item.id,
            quantity: 1,
            name: item.name.clone(),
            unit_price: item.price,
            image: item.image.clone(),
            category_display: item.category_display.clone(),
        }
    }

    /// Line total: unit price times quantity.
    pub fn extended_price(&self) -> u64 {
        self.unit_price * u64::from(self.quantity)
    }
}

/// Ordered cart collection: at most one line per item id, insertion order
/// preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of the given item: increments an existing line, or
    /// appends a new line with quantity 1 and snapshot display fields.
    pub fn add(&mut self, item: &MenuItem) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.item_id == item.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine::from_item(item));
        }
    }

    /// Delete the line for `item_id` regardless of quantity. Silent no-op
    /// when the item is not in the cart.
    pub fn remove(&mut self, item_id: ItemId) {
        self.lines.retain(|line| line.item_id != item_id);
    }

    /// Adjust a line's quantity by a signed delta. No-op when the item is
    /// absent; a resulting quantity <= 0 deletes the line.
    pub fn change_quantity(&mut self, item_id: ItemId, delta: i32) {
        let Some(line) = self.lines.iter_mut().find(|line| line.item_id == item_id) else {
            return;
        };
        let new_quantity = i64::from(line.quantity) + i64::from(delta);
        if new_quantity > 0 {
            // Saturate rather than wrap if a delta ever pushes past u32.
            line.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        } else {
            self.remove(item_id);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in add order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, item_id: ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.item_id == item_id)
    }

    pub fn contains(&self, item_id: ItemId) -> bool {
        self.line(item_id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}
