//! # bex-core — Foundational Types for the Bill Workflow Engine
//!
//! This crate is the bedrock of the bill-of-exchange workspace. It defines
//! the domain primitives every other crate builds on: participant identity,
//! calendar-day arithmetic, and exact-decimal monetary sums. It depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** [`NodeId`] is a validated
//!    newtype; no bare strings for participant identity.
//!
//! 2. **Exact decimals for money.** All monetary amounts are
//!    [`rust_decimal::Decimal`] behind the [`Sum`] type. Binary floating
//!    point never represents money anywhere in the workspace.
//!
//! 3. **Calendar dates for bill dates.** Issue and maturity dates are plain
//!    Gregorian dates; day counting is signed and leap-year correct. Time
//!    of day cannot influence a day count by construction.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `bex-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod calendar;
pub mod error;
pub mod identity;
pub mod sum;

// Re-export primary types for ergonomic imports.
pub use calendar::{days_between, days_between_timestamps};
pub use error::CoreError;
pub use identity::{BillId, NodeId, Party, PartyKind};
pub use sum::{Currency, Sum};
