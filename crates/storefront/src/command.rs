use serde::{Deserialize, Serialize};

use tidewater_catalog::CategoryFilter;
use tidewater_core::ItemId;

/// Command: SelectCategory — switch the active category tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectCategory {
    pub category: CategoryFilter,
}

/// Command: SetSearchQuery — replace the search box text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetSearchQuery {
    pub query: String,
}

/// Command: AddItem — add one unit of a catalog item to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub item_id: ItemId,
}

/// Command: RemoveItem — drop the cart line for an item entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveItem {
    pub item_id: ItemId,
}

/// Command: ChangeQuantity — adjust a cart line by a signed delta
/// (typically +1 or -1 from the stepper buttons).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeQuantity {
    pub item_id: ItemId,
    pub delta: i32,
}

/// Command: ClearCart — empty the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearCart;

/// The full command surface a presentation adapter may issue.
///
/// Adapters translate UI events (tab clicks, search input, stepper buttons)
/// into these values and feed them through [`Storefront::apply`], keeping
/// the core independent of any rendering technology.
///
/// [`Storefront::apply`]: crate::Storefront::apply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorefrontCommand {
    SelectCategory(SelectCategory),
    SetSearchQuery(SetSearchQuery),
    AddItem(AddItem),
    RemoveItem(RemoveItem),
    ChangeQuantity(ChangeQuantity),
    ClearCart(ClearCart),
}

impl StorefrontCommand {
    pub fn command_type(&self) -> &'static str {
        match self {
            StorefrontCommand::SelectCategory(_) => "storefront.select_category",
            StorefrontCommand::SetSearchQuery(_) => "storefront.set_search_query",
            StorefrontCommand::AddItem(_) => "storefront.add_item",
            StorefrontCommand::RemoveItem(_) => "storefront.remove_item",
            StorefrontCommand::ChangeQuantity(_) => "storefront.change_quantity",
            StorefrontCommand::ClearCart(_) => "storefront.clear_cart",
        }
    }
}
