//! Menu catalog domain module.
//!
//! This crate contains the immutable menu catalog and the pure filter engine,
//! implemented as deterministic domain logic (no IO, no rendering, no storage).

pub mod catalog;
pub mod filter;
pub mod item;
pub mod seed;

pub use catalog::Catalog;
pub use filter::visible_items;
pub use item::{Category, CategoryFilter, MenuItem};
