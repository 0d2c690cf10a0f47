//! Pricing domain module.
//!
//! This crate derives the totals bundle from a cart snapshot, implemented as
//! deterministic domain logic (no IO, no rendering, no storage).

pub mod totals;

pub use totals::{GRATUITY_RATE_PCT, TAX_RATE_PCT, Totals};
