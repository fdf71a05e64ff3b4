//! # Viewer Role Resolution
//!
//! Answers "who is this viewer on this bill". Resolution is a pure total
//! function from a snapshot and a viewer identity to the full set of
//! roles the viewer holds; one participant routinely holds several (a
//! drawee who also drew a promissory note, a payee currently selling).
//!
//! An empty set means the viewer is an observer with no actions. That is
//! a normal outcome, not an error; it is logged only when the caller
//! flagged the viewer as an expected participant.
//!
//! ## Holdership and Former Holders
//!
//! `Holder` attaches to the current holder only. A payee whose bill has
//! been endorsed away resolves to no role through this function, which
//! is the single mechanism keeping former holders inert; the action gate
//! never needs a "but not a former holder" branch.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use bex_core::NodeId;

use crate::snapshot::BillSnapshot;

/// A role a viewer can hold on a bill, in descending significance.
///
/// The derived `Ord` follows declaration order, which is the
/// significance ranking [`RoleSet::primary`] relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The drawee: ordered to pay the sum at maturity.
    Payer,
    /// The participant currently entitled to the bill.
    Holder,
    /// Beneficiary of the endorsement chain's last link.
    Endorsee,
    /// Buying party of an in-flight sale.
    Buyer,
    /// Selling party of an in-flight sale.
    Seller,
    /// Prior endorser targeted by a pending recourse demand.
    Recoursee,
    /// The participant who drew the bill.
    Drawer,
}

impl Role {
    /// Stable lowercase name of this role.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Payer => "payer",
            Self::Holder => "holder",
            Self::Endorsee => "endorsee",
            Self::Buyer => "buyer",
            Self::Seller => "seller",
            Self::Recoursee => "recoursee",
            Self::Drawer => "drawer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of roles one viewer holds on one bill.
///
/// Iteration and serialization order is descending significance. An
/// empty set is the observer case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(BTreeSet<Role>);

impl RoleSet {
    /// The empty set: the viewer is an observer.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the viewer holds `role`.
    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    /// Whether the viewer holds no role at all.
    pub fn is_observer(&self) -> bool {
        self.0.is_empty()
    }

    /// The most significant role held, if any.
    pub fn primary(&self) -> Option<Role> {
        self.0.first().copied()
    }

    /// Iterate roles in descending significance.
    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The identity a bill is being evaluated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerIdentity {
    /// The viewer's network identity.
    pub node_id: NodeId,
    /// Whether the caller expects this viewer to be a bill participant.
    ///
    /// When set, resolving to an empty role set is logged as unexpected.
    #[serde(default)]
    pub expects_participation: bool,
}

impl ViewerIdentity {
    /// A viewer with no participation expectation.
    pub fn new(node_id: NodeId) -> Self {
        Self {
            node_id,
            expects_participation: false,
        }
    }

    /// A viewer the caller expects to be a participant of the bill.
    pub fn participant(node_id: NodeId) -> Self {
        Self {
            node_id,
            expects_participation: true,
        }
    }
}

/// Resolve every role `viewer` holds on `bill`.
///
/// Total over all inputs: unknown viewers resolve to the empty set and
/// are treated as observers.
pub fn resolve_roles(bill: &BillSnapshot, viewer: &ViewerIdentity) -> RoleSet {
    let id = &viewer.node_id;
    let mut roles = BTreeSet::new();

    if bill.drawee.is_node(id) {
        roles.insert(Role::Payer);
    }
    if bill.is_held_by(id) {
        roles.insert(Role::Holder);
    }
    if bill.endorsee.as_ref().is_some_and(|p| p.is_node(id)) {
        roles.insert(Role::Endorsee);
    }
    if bill.buyer.as_ref().is_some_and(|p| p.is_node(id)) {
        roles.insert(Role::Buyer);
    }
    if bill.seller.as_ref().is_some_and(|p| p.is_node(id)) {
        roles.insert(Role::Seller);
    }
    if bill.recoursee.as_ref().is_some_and(|p| p.is_node(id)) {
        roles.insert(Role::Recoursee);
    }
    if bill.drawer.is_node(id) {
        roles.insert(Role::Drawer);
    }

    if roles.is_empty() && viewer.expects_participation {
        tracing::warn!(
            bill = %bill.id,
            viewer = %id,
            "expected participant resolves to no role, treating as observer"
        );
    }

    RoleSet(roles)
}

// ─── Tests ───────────────────────────────────────────────────────────
