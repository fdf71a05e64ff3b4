//! # Lifecycle Evaluation
//!
//! The composition root of the workflow engine: one call derives
//! everything a view or dispatcher needs from a snapshot. Data flows one
//! way through the stages:
//!
//! ```text
//! BillSnapshot ──▶ roles ──▶ phases ──▶ display status ──▶ allowed actions
//! ```
//!
//! Evaluation is pure and idempotent: the same snapshot and viewer give
//! the same result, with no clock reads and no hidden state. There is no
//! optimistic local mutation anywhere; a bill only changes by fetching a
//! fresh snapshot from the authority and evaluating again.
//!
//! ## Dispatch Protocol
//!
//! Before dispatching an action the caller re-validates it against the
//! freshest snapshot with [`authorize`]; a denial is [`LifecycleError::StaleBillState`]
//! and means the UI was built on outdated facts. A dispatch the
//! authoritative server refuses maps to [`LifecycleError::ActionConflict`],
//! after which the caller refetches and re-evaluates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gate::{allowed_actions, Action, ActionSet};
use crate::phase::{
    derive_acceptance, derive_payment, derive_status, AcceptancePhase, DisplayStatus, PaymentPhase,
};
use crate::role::{resolve_roles, RoleSet, ViewerIdentity};
use crate::snapshot::BillSnapshot;

/// Errors surfaced by the evaluation and dispatch protocol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// Pre-dispatch re-validation failed: the freshest snapshot no
    /// longer permits the action the viewer attempted.
    #[error("stale bill state: {action} is not permitted for {viewer} on bill {bill_id}")]
    StaleBillState {
        /// The bill the action targeted.
        bill_id: String,
        /// The viewer who attempted the action.
        viewer: String,
        /// The attempted action.
        action: Action,
    },

    /// The authoritative server refused a dispatched action.
    #[error("action conflict on bill {bill_id}: {action} refused: {detail}")]
    ActionConflict {
        /// The bill the action targeted.
        bill_id: String,
        /// The refused action.
        action: Action,
        /// The authority's refusal detail.
        detail: String,
    },
}

impl LifecycleError {
    /// Wrap an authoritative refusal of a dispatched action.
    ///
    /// The caller is expected to refetch the snapshot and evaluate
    /// again; the conflict itself carries no recovery state.
    pub fn conflict(bill: &BillSnapshot, action: Action, detail: impl Into<String>) -> Self {
        Self::ActionConflict {
            bill_id: bill.id.to_string(),
            action,
            detail: detail.into(),
        }
    }
}

/// Everything derived from one snapshot for one viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Roles the viewer holds, by descending significance.
    pub roles: RoleSet,
    /// Acceptance phase of the bill.
    pub acceptance: AcceptancePhase,
    /// Payment phase of the bill.
    pub payment: PaymentPhase,
    /// The single status a view shows.
    pub status: DisplayStatus,
    /// Actions offered to this viewer.
    pub allowed: ActionSet,
}

/// Evaluate a snapshot for a viewer.
///
/// Pure: derives roles, both phases, the display status, and the
/// offered actions in one pass, consuming each derived stage exactly
/// once.
pub fn evaluate(bill: &BillSnapshot, viewer: &ViewerIdentity) -> Evaluation {
    let roles = resolve_roles(bill, viewer);
    let acceptance = derive_acceptance(bill);
    let payment = derive_payment(bill);
    let status = derive_status(acceptance, payment);
    let allowed = allowed_actions(bill, &roles, acceptance, payment);

    Evaluation {
        roles,
        acceptance,
        payment,
        status,
        allowed,
    }
}

/// Re-validate an attempted action against the freshest snapshot.
///
/// Call immediately before dispatch, with the most recent snapshot
/// available.
///
/// # Errors
///
/// Returns [`LifecycleError::StaleBillState`] if the snapshot no longer
/// offers `action` to this viewer.
pub fn authorize(
    bill: &BillSnapshot,
    viewer: &ViewerIdentity,
    action: Action,
) -> Result<(), LifecycleError> {
    let evaluation = evaluate(bill, viewer);
    if evaluation.allowed.contains(action) {
        return Ok(());
    }
    tracing::debug!(
        bill = %bill.id,
        viewer = %viewer.node_id,
        action = %action,
        status = %evaluation.status,
        "action denied on re-validation"
    );
    Err(LifecycleError::StaleBillState {
        bill_id: bill.id.to_string(),
        viewer: viewer.node_id.to_string(),
        action,
    })
}

// ─── Tests ───────────────────────────────────────────────────────────
