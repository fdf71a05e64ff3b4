//! # Action Gating
//!
//! Decides which workflow actions a viewer may trigger on a bill, given
//! the roles they hold and the phases the bill is in. The gate is the
//! union over roles: a viewer wearing several hats may do everything any
//! of their hats permits, deduplicated.
//!
//! ## Rules
//!
//! ```text
//! Holder     RequestAcceptance   acceptance UNACCEPTED
//!            RequestPayment      acceptance ACCEPTED and payment UNPAID
//!            Endorse/Sell/Mint   payment neither PENDING_PAYMENT nor PAID
//!            RequestRecourse     an acceptance or payment refusal is on
//!                                record, bill unpaid, no recourse open
//! Payer      AcceptOrReject      acceptance UNACCEPTED or PENDING_ACCEPTANCE
//!            Pay                 payment PENDING_PAYMENT(direct)
//! Buyer      Pay                 payment PENDING_PAYMENT(sale)
//! Recoursee  Pay                 a recourse demand is open, bill unpaid
//! Drawer / Seller / Endorsee / observer: read-only
//! ```
//!
//! The two `PENDING_PAYMENT` demand kinds gate different payers: a
//! direct demand addresses the drawee, a sale settlement addresses the
//! buyer. Neither implies the other.
//!
//! Gating decides what to offer; it does not make an offered action
//! succeed. The authoritative server may still refuse a dispatched
//! action, which surfaces as a conflict upstream.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::phase::{AcceptancePhase, PaymentDemand, PaymentPhase};
use crate::role::{Role, RoleSet};
use crate::snapshot::BillSnapshot;

/// A workflow action a viewer can trigger on a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Ask the drawee to accept the order to pay.
    RequestAcceptance,
    /// Answer an acceptance request, either way.
    AcceptOrReject,
    /// Demand payment of the matured sum from the drawee.
    RequestPayment,
    /// Pay what the open demand addresses to this viewer.
    Pay,
    /// Endorse the bill over to a new beneficiary.
    Endorse,
    /// Offer the bill for sale.
    Sell,
    /// Request an e-cash mint to buy the bill.
    Mint,
    /// Demand recourse from a prior endorser after a refusal.
    RequestRecourse,
}

impl Action {
    /// Stable lowercase name of this action.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RequestAcceptance => "request_acceptance",
            Self::AcceptOrReject => "accept_or_reject",
            Self::RequestPayment => "request_payment",
            Self::Pay => "pay",
            Self::Endorse => "endorse",
            Self::Sell => "sell",
            Self::Mint => "mint",
            Self::RequestRecourse => "request_recourse",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of actions offered to one viewer on one bill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionSet(BTreeSet<Action>);

impl ActionSet {
    /// The empty set: the viewer is read-only on this bill.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether `action` is offered.
    pub fn contains(&self, action: Action) -> bool {
        self.0.contains(&action)
    }

    /// Whether nothing is offered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate offered actions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Action> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Compute the actions offered to a viewer holding `roles`.
///
/// Pure in all inputs; phases are expected to have been derived from
/// the same snapshot that is passed here.
pub fn allowed_actions(
    bill: &BillSnapshot,
    roles: &RoleSet,
    acceptance: AcceptancePhase,
    payment: PaymentPhase,
) -> ActionSet {
    let mut actions = BTreeSet::new();

    for role in roles.iter() {
        match role {
            Role::Holder => {
                if acceptance == AcceptancePhase::Unaccepted {
                    actions.insert(Action::RequestAcceptance);
                }
                if acceptance == AcceptancePhase::Accepted && payment == PaymentPhase::Unpaid {
                    actions.insert(Action::RequestPayment);
                }
                if !payment.blocks_circulation() {
                    actions.insert(Action::Endorse);
                    actions.insert(Action::Sell);
                    actions.insert(Action::Mint);
                }
                let refused = bill.rejected_to_accept || bill.rejected_to_pay;
                if refused && payment != PaymentPhase::Paid && !bill.requested_to_recourse {
                    actions.insert(Action::RequestRecourse);
                }
            }
            Role::Payer => {
                if matches!(
                    acceptance,
                    AcceptancePhase::Unaccepted | AcceptancePhase::PendingAcceptance
                ) {
                    actions.insert(Action::AcceptOrReject);
                }
                if payment == PaymentPhase::PendingPayment(PaymentDemand::Direct) {
                    actions.insert(Action::Pay);
                }
            }
            Role::Buyer => {
                if payment == PaymentPhase::PendingPayment(PaymentDemand::Sale) {
                    actions.insert(Action::Pay);
                }
            }
            Role::Recoursee => {
                if bill.requested_to_recourse && payment != PaymentPhase::Paid {
                    actions.insert(Action::Pay);
                }
            }
            // Read-only hats.
            Role::Drawer | Role::Seller | Role::Endorsee => {}
        }
    }

    ActionSet(actions)
}

// ─── Tests ───────────────────────────────────────────────────────────
