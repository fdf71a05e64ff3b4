//! # Bill Snapshot Model
//!
//! The aggregate the workflow engine reads: one bill of exchange as last
//! reported by the external authority. The snapshot is immutable input.
//! Every flag on it is a fact owned by that authority; the engine derives
//! phases, roles, and permitted actions from the facts but never writes
//! them back.
//!
//! ## Holdership
//!
//! The current holder is derived, never stored: the endorsee once the
//! bill has been endorsed, otherwise the payee. [`BillSnapshot::current_holder`]
//! is the single place this rule lives. A snapshot claiming `endorsed`
//! without an endorsee is malformed upstream data; holdership falls back
//! to the payee and the inconsistency is logged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use bex_core::{BillId, NodeId, Party, Sum};

/// The form a bill was drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillKind {
    /// Three-party draft: drawer instructs a drawee to pay the payee.
    Draft,
    /// Drawer and payee are the same participant.
    SelfDrafted,
    /// Drawer and drawee are the same participant.
    PromissoryNote,
}

/// Where a bill was issued or is payable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceInfo {
    /// ISO country name or code, as issued upstream.
    pub country: String,
    /// City name.
    pub city: String,
}

/// Metadata for a document attached to the bill.
///
/// The hash is upstream integrity metadata carried through verbatim;
/// this crate never verifies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// File name as uploaded.
    pub name: String,
    /// Upstream content hash, opaque here.
    pub hash: String,
}

/// One bill of exchange as last fetched from the external authority.
///
/// All flags are read-only facts. `accepted` makes `requested_to_accept`
/// irrelevant going forward; `paid` implies a payment demand existed at
/// some prior point; `endorsed` holds iff `endorsee` is present, and
/// `requested_to_recourse` iff `recoursee` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillSnapshot {
    /// Authority-issued bill identifier.
    pub id: BillId,
    /// The form the bill was drawn in.
    pub kind: BillKind,
    /// Participant who drew the bill.
    pub drawer: Party,
    /// Participant ordered to pay at maturity (the payer).
    pub drawee: Party,
    /// Original beneficiary.
    pub payee: Party,
    /// Beneficiary after endorsement, if any.
    #[serde(default)]
    pub endorsee: Option<Party>,
    /// Face sum payable at maturity.
    pub sum: Sum,
    /// Date the bill was drawn.
    pub issue_date: NaiveDate,
    /// Date the sum falls due.
    pub maturity_date: NaiveDate,
    /// Where the bill was issued.
    pub place_of_issuing: PlaceInfo,
    /// Where the sum is payable.
    pub place_of_payment: PlaceInfo,

    /// The drawee has accepted the order to pay.
    #[serde(default)]
    pub accepted: bool,
    /// A holder has asked the drawee to accept.
    #[serde(default)]
    pub requested_to_accept: bool,
    /// The drawee has explicitly refused acceptance.
    #[serde(default)]
    pub rejected_to_accept: bool,

    /// The sum has been paid.
    #[serde(default)]
    pub paid: bool,
    /// The holder has demanded payment from the drawee.
    #[serde(default)]
    pub requested_to_pay: bool,
    /// The drawee has explicitly refused payment.
    #[serde(default)]
    pub rejected_to_pay: bool,
    /// A sale is awaiting the buyer's payment.
    #[serde(default)]
    pub waiting_for_payment: bool,

    /// The bill has been endorsed to a new beneficiary.
    #[serde(default)]
    pub endorsed: bool,

    /// Selling party of an in-flight sale, if any.
    #[serde(default)]
    pub seller: Option<Party>,
    /// Buying party of an in-flight sale, if any.
    #[serde(default)]
    pub buyer: Option<Party>,

    /// A recourse demand is pending against a prior endorser.
    #[serde(default)]
    pub requested_to_recourse: bool,
    /// The prior endorser a pending recourse demand targets, if any.
    #[serde(default)]
    pub recoursee: Option<Party>,

    /// Attached documents.
    #[serde(default)]
    pub files: Vec<Attachment>,
}

impl BillSnapshot {
    /// The participant currently entitled to the bill.
    ///
    /// The endorsee once the bill has been endorsed, otherwise the payee.
    /// A malformed snapshot claiming endorsement without an endorsee
    /// falls back to the payee.
    pub fn current_holder(&self) -> &Party {
        if self.endorsed {
            match &self.endorsee {
                Some(endorsee) => return endorsee,
                None => {
                    tracing::warn!(
                        bill = %self.id,
                        "endorsed bill carries no endorsee, holdership falls back to payee"
                    );
                }
            }
        }
        &self.payee
    }

    /// Whether `node_id` is the current holder.
    pub fn is_held_by(&self, node_id: &NodeId) -> bool {
        self.current_holder().is_node(node_id)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bex_core::{Currency, PartyKind};
    use rust_decimal_macros::dec;

    fn party(node_id: &str, name: &str) -> Party {
        Party::new(
            NodeId::new(node_id).unwrap(),
            name,
            "Opernring 1, Vienna, AT",
            PartyKind::Company,
        )
    }

    fn snapshot() -> BillSnapshot {
        BillSnapshot {
            id: BillId::new("bill-001").unwrap(),
            kind: BillKind::Draft,
            drawer: party("node-drawer", "Drawer & Co"),
            drawee: party("node-drawee", "Drawee AG"),
            payee: party("node-payee", "Payee GmbH"),
            endorsee: None,
            sum: Sum::new(dec!(1000), Currency::Sat).unwrap(),
            issue_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            maturity_date: NaiveDate::from_ymd_opt(2021, 4, 1).unwrap(),
            place_of_issuing: PlaceInfo {
                country: "AT".to_string(),
                city: "Vienna".to_string(),
            },
            place_of_payment: PlaceInfo {
                country: "AT".to_string(),
                city: "Vienna".to_string(),
            },
            accepted: false,
            requested_to_accept: false,
            rejected_to_accept: false,
            paid: false,
            requested_to_pay: false,
            rejected_to_pay: false,
            waiting_for_payment: false,
            endorsed: false,
            seller: None,
            buyer: None,
            requested_to_recourse: false,
            recoursee: None,
            files: Vec::new(),
        }
    }

    // ── Holder derivation ────────────────────────────────────────────

    #[test]
    fn test_holder_is_payee_before_endorsement() {
        let bill = snapshot();
        assert_eq!(bill.current_holder().node_id.as_str(), "node-payee");
    }

    #[test]
    fn test_holder_is_endorsee_after_endorsement() {
        let mut bill = snapshot();
        bill.endorsed = true;
        bill.endorsee = Some(party("node-endorsee", "Endorsee Ltd"));
        assert_eq!(bill.current_holder().node_id.as_str(), "node-endorsee");
        assert!(bill.is_held_by(&NodeId::new("node-endorsee").unwrap()));
        assert!(!bill.is_held_by(&NodeId::new("node-payee").unwrap()));
    }

    #[test]
    fn test_malformed_endorsement_falls_back_to_payee() {
        let mut bill = snapshot();
        bill.endorsed = true;
        bill.endorsee = None;
        assert_eq!(bill.current_holder().node_id.as_str(), "node-payee");
    }

    // ── Wire shape ───────────────────────────────────────────────────

    #[test]
    fn test_snapshot_deserializes_from_authority_json() {
        let json = r#"{
            "id": "bill-7f3a",
            "kind": "draft",
            "drawer": {
                "node_id": "node-drawer",
                "name": "Drawer & Co",
                "postal_address": "Opernring 1, Vienna, AT",
                "kind": "company"
            },
            "drawee": {
                "node_id": "node-drawee",
                "name": "Drawee AG",
                "postal_address": "Graben 12, Vienna, AT",
                "kind": "company"
            },
            "payee": {
                "node_id": "node-payee",
                "name": "Payee GmbH",
                "postal_address": "Stephansplatz 4, Vienna, AT",
                "kind": "company"
            },
            "sum": { "amount": "1000", "currency": "sat" },
            "issue_date": "2021-01-01",
            "maturity_date": "2021-04-01",
            "place_of_issuing": { "country": "AT", "city": "Vienna" },
            "place_of_payment": { "country": "AT", "city": "Vienna" },
            "requested_to_accept": true,
            "files": [ { "name": "bill.pdf", "hash": "8c3f" } ]
        }"#;
        let bill: BillSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(bill.id.as_str(), "bill-7f3a");
        assert_eq!(bill.kind, BillKind::Draft);
        assert!(bill.requested_to_accept);
        // Omitted flags and optional parties default off.
        assert!(!bill.accepted);
        assert!(!bill.endorsed);
        assert!(bill.endorsee.is_none());
        assert_eq!(bill.files.len(), 1);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut bill = snapshot();
        bill.accepted = true;
        bill.requested_to_pay = true;
        let json = serde_json::to_string(&bill).unwrap();
        let parsed: BillSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, bill);
    }
}
