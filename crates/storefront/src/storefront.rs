use tidewater_cart::Cart;
use tidewater_catalog::{Catalog, CategoryFilter, visible_items};
use tidewater_core::{DomainError, DomainResult, ItemId};
use tidewater_pricing::Totals;

use crate::command::StorefrontCommand;
use crate::view::{CartLineView, CartView, CheckoutSummary, MenuView};

/// The storefront controller.
///
/// Owns all mutable application state (cart, active category, search query)
/// behind the command surface; nothing is ambient or global. Every command
/// runs to completion before the next is applied, and views are derived
/// fresh on read, so command plus recomputation are atomic as observed by
/// the adapter.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Catalog,
    cart: Cart,
    current_category: CategoryFilter,
    search_query: String,
}

impl Storefront {
    /// Create a storefront over an already-validated catalog, with an empty
    /// cart, the "all" tab active, and no search text.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            current_category: CategoryFilter::All,
            search_query: String::new(),
        }
    }

    /// Apply one command from the presentation adapter.
    ///
    /// The only failing command is `AddItem` with an id outside the catalog;
    /// that fails with [`DomainError::UnknownItem`] and leaves state
    /// untouched. Remove and quantity changes on absent items are defined
    /// no-ops, not errors.
    pub fn apply(&mut self, command: StorefrontCommand) -> DomainResult<()> {
        tracing::debug!(command = command.command_type(), "applying storefront command");

        match command {
            StorefrontCommand::SelectCategory(cmd) => {
                self.current_category = cmd.category;
            }
            StorefrontCommand::SetSearchQuery(cmd) => {
                self.search_query = cmd.query;
            }
            StorefrontCommand::AddItem(cmd) => {
                let item = self.catalog.get(cmd.item_id).ok_or_else(|| {
                    tracing::warn!(item_id = %cmd.item_id, "add rejected: id not in catalog");
                    DomainError::unknown_item()
                })?;
                self.cart.add(item);
            }
            StorefrontCommand::RemoveItem(cmd) => {
                self.cart.remove(cmd.item_id);
            }
            StorefrontCommand::ChangeQuantity(cmd) => {
                self.cart.change_quantity(cmd.item_id, cmd.delta);
            }
            StorefrontCommand::ClearCart(_) => {
                self.cart.clear();
            }
        }

        Ok(())
    }

    /// The visible menu under the current category tab and search text.
    pub fn menu_view(&self) -> MenuView {
        let items: Vec<_> = visible_items(&self.catalog, self.current_category, &self.search_query)
            .into_iter()
            .cloned()
            .collect();
        let count = items.len();
        MenuView { items, count }
    }

    /// The cart panel with per-line extended prices and the totals bundle.
    pub fn cart_view(&self) -> CartView {
        CartView {
            lines: self.cart.lines().iter().map(CartLineView::from).collect(),
            totals: self.totals(),
            is_empty: self.cart.is_empty(),
        }
    }

    /// Totals for the current cart snapshot.
    pub fn totals(&self) -> Totals {
        Totals::compute(&self.cart)
    }

    /// The side-effect-free checkout read: item count and the desktop total.
    pub fn checkout_summary(&self) -> CheckoutSummary {
        let totals = self.totals();
        CheckoutSummary {
            item_count: totals.item_count,
            total: totals.total,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_category(&self) -> CategoryFilter {
        self.current_category
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn cart_line(&self, item_id: ItemId) -> Option<CartLineView> {
        self.cart.line(item_id).map(CartLineView::from)
    }
}
