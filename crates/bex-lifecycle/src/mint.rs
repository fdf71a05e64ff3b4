//! # Mint Request Lifecycle
//!
//! Models the conversation the `Mint` action opens with an e-cash mint:
//! the holder requests minting, the mint answers with a denial or a
//! priced offer, and the holder settles the offer.
//!
//! ## States
//!
//! ```text
//! Pending ──▶ Offered ──▶ OfferAccepted (terminal)
//!    │           │
//!    │           ├──▶ OfferRejected (terminal)
//!    │           └──▶ Expired (terminal)
//!    ├──▶ Denied (terminal)
//!    ├──▶ Cancelled (terminal)
//!    └──▶ Expired (terminal)
//! ```
//!
//! An offer carries the mint's discounted sum, priced off the bill's
//! remaining term, and an expiration instant after which it can no
//! longer be accepted.
//!
//! The machine never reads a clock; every transition takes the instant
//! it happened at, so replaying authority history is deterministic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use bex_core::{BillId, NodeId, Sum};
use bex_discount::DiscountTerms;

// ─── Mint Request State ──────────────────────────────────────────────

/// The lifecycle state of a request to mint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MintRequestState {
    /// Waiting for an answer from the mint.
    Pending,
    /// Denied by the mint (terminal).
    Denied,
    /// The mint made an offer; awaiting the requester's answer.
    Offered,
    /// The requester accepted the offer (terminal).
    OfferAccepted,
    /// The requester rejected the offer (terminal).
    OfferRejected,
    /// The requester cancelled before the mint answered (terminal).
    Cancelled,
    /// The request or its offer expired unanswered (terminal).
    Expired,
}

impl MintRequestState {
    /// Stable uppercase name of this state.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Denied => "DENIED",
            Self::Offered => "OFFERED",
            Self::OfferAccepted => "OFFER_ACCEPTED",
            Self::OfferRejected => "OFFER_REJECTED",
            Self::Cancelled => "CANCELLED",
            Self::Expired => "EXPIRED",
        }
    }

    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Denied
                | Self::OfferAccepted
                | Self::OfferRejected
                | Self::Cancelled
                | Self::Expired
        )
    }
}

impl std::fmt::Display for MintRequestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors raised by mint request transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MintError {
    /// Attempted transition is not valid from the current state.
    #[error("invalid mint request transition: {from} -> {to}")]
    InvalidTransition {
        /// Current state.
        from: String,
        /// Attempted target state.
        to: String,
    },

    /// The request is in a terminal state.
    #[error("mint request is in terminal state {state}")]
    TerminalState {
        /// The terminal state.
        state: String,
    },

    /// The offer's expiration instant has passed.
    #[error("mint offer expired at {expired_at}")]
    OfferExpired {
        /// When the offer expired.
        expired_at: DateTime<Utc>,
    },
}

// ─── Offer ───────────────────────────────────────────────────────────

/// An offer from a mint in answer to a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MintOffer {
    /// The keyset the mint would issue against.
    pub keyset_id: String,
    /// The discounted sum the mint offers for the bill.
    pub discounted_sum: Sum,
    /// Instant after which the offer can no longer be accepted.
    pub expires_at: DateTime<Utc>,
}

impl MintOffer {
    /// Build an offer priced by quoted discount terms.
    ///
    /// The offered sum is the quote's net proceeds; mints price against
    /// the bill's remaining term the same way a discounting buyer does.
    pub fn from_terms(
        keyset_id: impl Into<String>,
        terms: &DiscountTerms,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            keyset_id: keyset_id.into(),
            discounted_sum: terms.net,
            expires_at,
        }
    }
}

// ─── Transition Record ───────────────────────────────────────────────

/// Record of one mint request state transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintTransitionRecord {
    /// State before the transition.
    pub from_state: MintRequestState,
    /// State after the transition.
    pub to_state: MintRequestState,
    /// When the transition occurred.
    pub timestamp: DateTime<Utc>,
}

// ─── Mint Request ────────────────────────────────────────────────────

/// A request to mint one bill against one mint, with its transition
/// history.
///
/// Enforces valid state transitions with structured error reporting.
/// The offer is present exactly from the `Offered` transition onward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MintRequest {
    /// The bill to be minted.
    pub bill_id: BillId,
    /// The holder who requested minting.
    pub requester_node_id: NodeId,
    /// The mint the request addresses.
    pub mint_node_id: NodeId,
    /// The request identifier issued by the mint.
    pub mint_request_id: String,
    /// When the request was opened.
    pub requested_at: DateTime<Utc>,
    /// Current lifecycle state.
    pub state: MintRequestState,
    /// The mint's offer, once made.
    pub offer: Option<MintOffer>,
    /// Ordered log of all state transitions.
    pub transitions: Vec<MintTransitionRecord>,
}

impl MintRequest {
    /// Open a new request in the `Pending` state.
    pub fn open(
        bill_id: BillId,
        requester_node_id: NodeId,
        mint_node_id: NodeId,
        mint_request_id: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            bill_id,
            requester_node_id,
            mint_node_id,
            mint_request_id: mint_request_id.into(),
            requested_at: at,
            state: MintRequestState::Pending,
            offer: None,
            transitions: Vec::new(),
        }
    }

    /// The mint denied the request (PENDING -> DENIED).
    pub fn deny(&mut self, at: DateTime<Utc>) -> Result<(), MintError> {
        self.require_state(MintRequestState::Pending, "DENIED")?;
        self.do_transition(MintRequestState::Denied, at);
        Ok(())
    }

    /// The mint answered with an offer (PENDING -> OFFERED).
    pub fn receive_offer(&mut self, offer: MintOffer, at: DateTime<Utc>) -> Result<(), MintError> {
        self.require_state(MintRequestState::Pending, "OFFERED")?;
        self.offer = Some(offer);
        self.do_transition(MintRequestState::Offered, at);
        Ok(())
    }

    /// The requester withdrew the unanswered request (PENDING -> CANCELLED).
    pub fn cancel(&mut self, at: DateTime<Utc>) -> Result<(), MintError> {
        self.require_state(MintRequestState::Pending, "CANCELLED")?;
        self.do_transition(MintRequestState::Cancelled, at);
        Ok(())
    }

    /// The requester accepted the offer (OFFERED -> OFFER_ACCEPTED).
    ///
    /// # Errors
    ///
    /// Returns [`MintError::OfferExpired`] if `at` is past the offer's
    /// expiration; the request then belongs in `Expired` via
    /// [`MintRequest::expire`].
    pub fn accept_offer(&mut self, at: DateTime<Utc>) -> Result<(), MintError> {
        self.require_state(MintRequestState::Offered, "OFFER_ACCEPTED")?;
        let expires_at = match &self.offer {
            Some(offer) => offer.expires_at,
            None => {
                return Err(MintError::InvalidTransition {
                    from: self.state.to_string(),
                    to: "OFFER_ACCEPTED".to_string(),
                })
            }
        };
        if at > expires_at {
            return Err(MintError::OfferExpired {
                expired_at: expires_at,
            });
        }
        self.do_transition(MintRequestState::OfferAccepted, at);
        Ok(())
    }

    /// The requester rejected the offer (OFFERED -> OFFER_REJECTED).
    pub fn reject_offer(&mut self, at: DateTime<Utc>) -> Result<(), MintError> {
        self.require_state(MintRequestState::Offered, "OFFER_REJECTED")?;
        self.do_transition(MintRequestState::OfferRejected, at);
        Ok(())
    }

    /// The request or its offer lapsed (PENDING or OFFERED -> EXPIRED).
    pub fn expire(&mut self, at: DateTime<Utc>) -> Result<(), MintError> {
        if self.state.is_terminal() {
            return Err(MintError::TerminalState {
                state: self.state.to_string(),
            });
        }
        if !matches!(
            self.state,
            MintRequestState::Pending | MintRequestState::Offered
        ) {
            return Err(MintError::InvalidTransition {
                from: self.state.to_string(),
                to: "EXPIRED".to_string(),
            });
        }
        self.do_transition(MintRequestState::Expired, at);
        Ok(())
    }

    /// Whether the request is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Validate that the request is in the expected state.
    fn require_state(&self, expected: MintRequestState, target: &str) -> Result<(), MintError> {
        if self.state.is_terminal() {
            return Err(MintError::TerminalState {
                state: self.state.to_string(),
            });
        }
        if self.state != expected {
            return Err(MintError::InvalidTransition {
                from: self.state.to_string(),
                to: target.to_string(),
            });
        }
        Ok(())
    }

    /// Record a state transition.
    fn do_transition(&mut self, to: MintRequestState, at: DateTime<Utc>) {
        self.transitions.push(MintTransitionRecord {
            from_state: self.state,
            to_state: to,
            timestamp: at,
        });
        self.state = to;
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
