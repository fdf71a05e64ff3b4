//! Shared test fixtures: a minimal unaccepted draft and its cast of
//! participants. Tests mutate the flags they care about.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use bex_core::{BillId, Currency, NodeId, Party, PartyKind, Sum};

use crate::role::ViewerIdentity;
use crate::snapshot::{BillKind, BillSnapshot, PlaceInfo};

pub(crate) const DRAWER: &str = "node-drawer";
pub(crate) const DRAWEE: &str = "node-drawee";
pub(crate) const PAYEE: &str = "node-payee";
pub(crate) const ENDORSEE: &str = "node-endorsee";
pub(crate) const BUYER: &str = "node-buyer";
pub(crate) const SELLER: &str = "node-seller";
pub(crate) const RECOURSEE: &str = "node-recoursee";
pub(crate) const STRANGER: &str = "node-stranger";

pub(crate) fn party(node_id: &str, name: &str) -> Party {
    Party::new(
        NodeId::new(node_id).unwrap(),
        name,
        "Opernring 1, Vienna, AT",
        PartyKind::Company,
    )
}

pub(crate) fn viewer(node_id: &str) -> ViewerIdentity {
    ViewerIdentity::new(NodeId::new(node_id).unwrap())
}

/// A freshly drawn three-party draft: no acceptance activity, payee
/// holds, 1000 sat due 2021-04-01.
pub(crate) fn base_bill() -> BillSnapshot {
    BillSnapshot {
        id: BillId::new("bill-001").unwrap(),
        kind: BillKind::Draft,
        drawer: party(DRAWER, "Drawer & Co"),
        drawee: party(DRAWEE, "Drawee AG"),
        payee: party(PAYEE, "Payee GmbH"),
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

/// Endorse the bill over to the standard endorsee.
pub(crate) fn endorse(bill: &mut BillSnapshot) {
    bill.endorsed = true;
    bill.endorsee = Some(party(ENDORSEE, "Endorsee Ltd"));
}

/// Post a sale from the current holder to the standard buyer.
pub(crate) fn post_sale(bill: &mut BillSnapshot) {
    bill.seller = Some(bill.current_holder().clone());
    bill.buyer = Some(party(BUYER, "Buyer SA"));
    bill.waiting_for_payment = true;
}

/// Open a recourse demand against the standard recoursee.
pub(crate) fn open_recourse(bill: &mut BillSnapshot) {
    bill.requested_to_recourse = true;
    bill.recoursee = Some(party(RECOURSEE, "Recoursee KG"));
}
