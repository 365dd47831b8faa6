use crate::types::{Address, Payload, WillId};
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// WillStatus
///
/// Lifecycle state of a record. `Draft -> Active -> Revoked`; `Executed` is a
/// valid stored value reserved for an external execution trigger, so nothing
/// in this crate produces it, but decode and display accept it. Terminal
/// states are retained forever; records are never physically deleted.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WillStatus {
    #[default]
    Draft,
    Active,
    Executed,
    Revoked,
}

impl WillStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Executed => "executed",
            Self::Revoked => "revoked",
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Executed | Self::Revoked)
    }

    /// Whether this core may move a record from `self` to `to`.
    #[must_use]
    pub const fn can_transition(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Draft, Self::Active) | (Self::Active, Self::Revoked)
        )
    }
}

impl fmt::Display for WillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// WillRecord
///
/// The central entity. Everything but `status` is immutable once created;
/// status moves only through the registry's read-modify-write transitions.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WillRecord {
    pub id: WillId,
    pub payload: Payload,
    pub created_at: u64,
    pub owner: Address,
    pub beneficiary: Address,
    pub status: WillStatus,
}

impl WillRecord {
    /// Whether `acting` owns this record (case-insensitive address match).
    #[must_use]
    pub fn is_owned_by(&self, acting: &Address) -> bool {
        self.owner == *acting
    }
}

///
/// TESTS
///
