//! # bex-lifecycle — Bill Workflow Engine
//!
//! The rules of the bill-of-exchange workflow: who a viewer is on a
//! bill, which lifecycle phases the bill is in, what the viewer may do
//! next, and how a request to mint plays out. The engine is the single
//! source of truth for these derivations; views and dispatchers consume
//! its output and never inspect raw snapshot flags themselves.
//!
//! ## Pipeline
//!
//! ```text
//! BillSnapshot + ViewerIdentity
//!        │
//!        ▼
//!   resolve_roles ──▶ derive_acceptance / derive_payment ──▶ derive_status
//!        │                                   │
//!        └────────────── allowed_actions ◀───┘
//!                              │
//!                              ▼
//!                         Evaluation
//! ```
//!
//! Everything is derived per call from an immutable snapshot fetched
//! from the external authority. The engine holds no state, reads no
//! clock, and performs no I/O; conflicting concurrent actions are
//! resolved by the authority and surface here as re-evaluation of a
//! refreshed snapshot.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod engine;
pub mod gate;
pub mod mint;
pub mod phase;
pub mod role;
pub mod snapshot;

#[cfg(test)]
mod testutil;

// Re-export primary types for ergonomic imports.
pub use engine::{authorize, evaluate, Evaluation, LifecycleError};
pub use gate::{allowed_actions, Action, ActionSet};
pub use mint::{MintError, MintOffer, MintRequest, MintRequestState};
pub use phase::{
    derive_acceptance, derive_payment, derive_status, AcceptancePhase, DisplayStatus,
    PaymentDemand, PaymentPhase,
};
pub use role::{resolve_roles, Role, RoleSet, ViewerIdentity};
pub use snapshot::{Attachment, BillKind, BillSnapshot, PlaceInfo};
