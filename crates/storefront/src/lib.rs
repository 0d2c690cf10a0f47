//! Storefront application module.
//!
//! The single controller that owns the catalog, the cart, and the browse
//! state. A presentation adapter drives it through typed commands via one
//! `apply` entry point and reads derived views back; it never touches the
//! underlying state directly.

pub mod command;
pub mod storefront;
pub mod view;

pub use command::{
    AddItem, ChangeQuantity, ClearCart, RemoveItem, SelectCategory, SetSearchQuery,
    StorefrontCommand,
};
pub use storefront::Storefront;
pub use view::{CartLineView, CartView, CheckoutSummary, MenuView};
