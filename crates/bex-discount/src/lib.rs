//! # bex-discount — Trade Discounting
//!
//! Computes the net proceeds of a bill changing hands before maturity:
//! gross face sum, discount window, and annualized rate in; day count
//! and net proceeds out. Used when a holder sells a bill, when a
//! recourse demand is priced, and by mints quoting an offer.
//!
//! The arithmetic is commercial discounting on an actual/360 basis over
//! exact decimals. See [`engine::compute_discount`] for the formula and
//! its edge behavior.
//!
//! ## Crate Policy
//!
//! - Pure computation; no clock reads, no I/O, no state.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod engine;
pub mod terms;

// Re-export primary types for ergonomic imports.
pub use engine::{compute_discount, DiscountError};
pub use terms::DiscountTerms;
