//! # Party Identity Newtypes
//!
//! Newtype wrappers for the identifiers that name bill participants.
//! A [`NodeId`] is the opaque, externally issued identity of a network
//! participant; a [`Party`] pairs that identity with the display data a
//! bill carries about the participant.
//!
//! ## Validation
//!
//! [`NodeId`] validates at construction time: the wrapped string must be
//! non-empty after trimming. Deserialization routes through the same
//! constructor so invalid values are rejected at the wire boundary, not
//! silently accepted.
//!
//! ## Identity Equality
//!
//! Two [`Party`] values refer to the same participant iff their node ids
//! are equal. Name and postal address are display data and excluded from
//! identity comparison. [`Party::same_identity`] is the one place this
//! rule lives.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Helper macro to implement `Deserialize` for string newtypes that must
/// validate their contents. Deserializes as a plain `String`, then routes
/// through the type's `new()` constructor so that invalid values are
/// rejected at deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Opaque identity of a network participant.
///
/// Issued by the external identity layer; this crate treats it as an
/// opaque non-empty string and never inspects its internal structure.
///
/// # Validation
///
/// Must be non-empty after trimming surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(String);

impl_validating_deserialize!(NodeId);

impl NodeId {
    /// Create a node identifier, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyNodeId`] if the string is empty or all
    /// whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(CoreError::EmptyNodeId);
        }
        Ok(Self(s))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier of a bill.
///
/// Issued by the external authority when the bill is drawn; opaque to
/// this workspace.
///
/// # Validation
///
/// Must be non-empty after trimming surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BillId(String);

impl_validating_deserialize!(BillId);

impl BillId {
    /// Create a bill identifier, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyBillId`] if the string is empty or all
    /// whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(CoreError::EmptyBillId);
        }
        Ok(Self(s))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a participant is a natural person or a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyKind {
    /// A natural person.
    Person,
    /// A registered company.
    Company,
}

/// A bill participant: identity plus the display data the bill carries.
///
/// Immutable once fetched from the external authority. Do not compare
/// parties with `==` to answer "is this the same participant" questions;
/// use [`Party::same_identity`], which compares node ids only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Opaque network identity.
    pub node_id: NodeId,
    /// Display name.
    pub name: String,
    /// Postal address, as a display string.
    pub postal_address: String,
    /// Whether the participant is a person or a company.
    pub kind: PartyKind,
}

impl Party {
    /// Create a party record.
    pub fn new(
        node_id: NodeId,
        name: impl Into<String>,
        postal_address: impl Into<String>,
        kind: PartyKind,
    ) -> Self {
        Self {
            node_id,
            name: name.into(),
            postal_address: postal_address.into(),
            kind,
        }
    }

    /// Whether both records refer to the same participant.
    ///
    /// Identity is the node id alone; display fields may differ between
    /// snapshots of the same participant.
    pub fn same_identity(&self, other: &Party) -> bool {
        self.node_id == other.node_id
    }

    /// Whether this party is the participant identified by `node_id`.
    pub fn is_node(&self, node_id: &NodeId) -> bool {
        &self.node_id == node_id
    }
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.node_id)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
