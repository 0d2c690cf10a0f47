//! Cart store domain module.
//!
//! This crate contains the mutable cart collection and its mutation rules,
//! implemented as deterministic domain logic (no IO, no rendering, no
//! storage).

pub mod cart;

pub use cart::{Cart, CartLine};
