//! # Lifecycle Phase Derivation
//!
//! Collapses the snapshot's independent status flags into two ordered
//! lifecycle phases and one display status.
//!
//! ## Phases
//!
//! ```text
//! Acceptance:  Unaccepted ──▶ PendingAcceptance ──▶ Accepted
//!                   │                 │
//!                   └─────────────────┴──▶ Rejected
//!
//! Payment:     Unpaid ──▶ PendingPayment(direct | sale) ──▶ Paid
//!              (entered only once acceptance is Accepted)
//! ```
//!
//! Within each phase the flags are ranked: `accepted` beats
//! `rejected_to_accept` beats `requested_to_accept`; `paid` beats an
//! unanswered `requested_to_pay` beats `waiting_for_payment`. A later
//! fact always wins over the stale earlier one, so contradictory flag
//! combinations still derive a single defensible phase.
//!
//! ## Design Decision: Enums over Flag Inspection
//!
//! Callers never branch on raw snapshot flags. The phases are derived
//! once per evaluation and consumed everywhere (gating, display,
//! conflict detection), so a flag-combination bug can only live in this
//! module. The payment demand kind stays a tagged payload on
//! `PendingPayment` rather than a separate boolean pair: the two demand
//! kinds gate different payers and must never be conflated.
//!
//! ## Display Rule
//!
//! The display status follows the acceptance phase until the bill is
//! accepted, then follows the payment phase. In particular an accepted
//! bill with a pending payment demand displays the payment-side status,
//! not a bare "accepted".

use serde::{Deserialize, Serialize};

use crate::snapshot::BillSnapshot;

// ─── Acceptance Phase ────────────────────────────────────────────────

/// Where a bill stands in its acceptance lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AcceptancePhase {
    /// No acceptance activity yet (initial).
    Unaccepted,
    /// The drawee has been asked to accept and has not answered.
    PendingAcceptance,
    /// The drawee has accepted the order to pay (terminal-positive).
    Accepted,
    /// The drawee has explicitly refused acceptance.
    Rejected,
}

impl AcceptancePhase {
    /// Stable uppercase name of this phase.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unaccepted => "UNACCEPTED",
            Self::PendingAcceptance => "PENDING_ACCEPTANCE",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl std::fmt::Display for AcceptancePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Payment Phase ───────────────────────────────────────────────────

/// Who a pending payment demand is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentDemand {
    /// The holder has demanded payment from the drawee.
    Direct,
    /// A sale is posted and the buyer owes the purchase price.
    Sale,
}

/// Where a bill stands in its payment lifecycle.
///
/// Derivation never leaves [`PaymentPhase::Unpaid`] until the acceptance
/// phase is [`AcceptancePhase::Accepted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentPhase {
    /// No payment activity (initial).
    Unpaid,
    /// A payment demand is open.
    PendingPayment(PaymentDemand),
    /// The sum has been paid (terminal).
    Paid,
}

impl PaymentPhase {
    /// Stable uppercase name of this phase, without the demand payload.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unpaid => "UNPAID",
            Self::PendingPayment(_) => "PENDING_PAYMENT",
            Self::Paid => "PAID",
        }
    }

    /// Whether a payment demand is open or the bill is already paid.
    ///
    /// While this holds, the bill must not circulate (no endorsement,
    /// sale, or minting).
    pub fn blocks_circulation(&self) -> bool {
        matches!(self, Self::PendingPayment(_) | Self::Paid)
    }
}

impl std::fmt::Display for PaymentPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Display Status ──────────────────────────────────────────────────

/// The single status a bill list or detail view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayStatus {
    /// Drawn, no acceptance activity.
    Issued,
    /// Acceptance requested, drawee silent.
    AcceptanceRequested,
    /// Acceptance refused.
    AcceptanceRejected,
    /// Accepted, no payment activity.
    Accepted,
    /// Payment demanded from the drawee.
    PaymentRequested,
    /// Sale posted, buyer payment outstanding.
    WaitingForPayment,
    /// Paid.
    Paid,
}

impl DisplayStatus {
    /// Stable uppercase name of this status.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Issued => "ISSUED",
            Self::AcceptanceRequested => "ACCEPTANCE_REQUESTED",
            Self::AcceptanceRejected => "ACCEPTANCE_REJECTED",
            Self::Accepted => "ACCEPTED",
            Self::PaymentRequested => "PAYMENT_REQUESTED",
            Self::WaitingForPayment => "WAITING_FOR_PAYMENT",
            Self::Paid => "PAID",
        }
    }
}

impl std::fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Derivation ──────────────────────────────────────────────────────

/// Derive the acceptance phase from snapshot flags.
///
/// Rank order: `accepted`, then `rejected_to_accept`, then
/// `requested_to_accept`, then the initial state.
pub fn derive_acceptance(bill: &BillSnapshot) -> AcceptancePhase {
    if bill.accepted {
        AcceptancePhase::Accepted
    } else if bill.rejected_to_accept {
        AcceptancePhase::Rejected
    } else if bill.requested_to_accept {
        AcceptancePhase::PendingAcceptance
    } else {
        AcceptancePhase::Unaccepted
    }
}

/// Derive the payment phase from snapshot flags.
///
/// Stays [`PaymentPhase::Unpaid`] until the bill is accepted. Once
/// accepted: `paid`, then an unanswered `requested_to_pay` (direct
/// demand), then `waiting_for_payment` (sale settlement). A direct
/// demand wins over a simultaneous sale settlement.
///
/// An explicit refusal (`rejected_to_pay`) closes the direct demand:
/// the demand was answered, so the phase falls back to unpaid, the bill
/// may circulate again, and the refusal feeds recourse gating instead.
pub fn derive_payment(bill: &BillSnapshot) -> PaymentPhase {
    if derive_acceptance(bill) != AcceptancePhase::Accepted {
        return PaymentPhase::Unpaid;
    }
    if bill.paid {
        PaymentPhase::Paid
    } else if bill.requested_to_pay && !bill.rejected_to_pay {
        PaymentPhase::PendingPayment(PaymentDemand::Direct)
    } else if bill.waiting_for_payment {
        PaymentPhase::PendingPayment(PaymentDemand::Sale)
    } else {
        PaymentPhase::Unpaid
    }
}

/// Merge the two phases into the one status a view shows.
///
/// Acceptance-side status until the bill is accepted, payment-side
/// status afterwards.
pub fn derive_status(acceptance: AcceptancePhase, payment: PaymentPhase) -> DisplayStatus {
    match acceptance {
        AcceptancePhase::Unaccepted => DisplayStatus::Issued,
        AcceptancePhase::PendingAcceptance => DisplayStatus::AcceptanceRequested,
        AcceptancePhase::Rejected => DisplayStatus::AcceptanceRejected,
        AcceptancePhase::Accepted => match payment {
            PaymentPhase::Unpaid => DisplayStatus::Accepted,
            PaymentPhase::PendingPayment(PaymentDemand::Direct) => DisplayStatus::PaymentRequested,
            PaymentPhase::PendingPayment(PaymentDemand::Sale) => DisplayStatus::WaitingForPayment,
            PaymentPhase::Paid => DisplayStatus::Paid,
        },
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
