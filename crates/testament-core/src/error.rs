use crate::{
    index::IndexError,
    serialize::SerializeError,
    store::StoreError,
    types::{Address, WillId, WillIdError, WillStatus},
};
use std::fmt;
use thiserror::Error as ThisError;

///
/// RegistryError
///
/// Every failure a registry operation can surface, as a distinguishable
/// typed kind so callers can branch (a signer rejection is not a missing
/// record, and an unavailable store is not an empty one). Decode failures on
/// individual index entries never appear here; listing contains them.
///

#[derive(Debug, ThisError)]
pub enum RegistryError {
    /// The store reports itself unavailable; reads were not attempted.
    #[error("store is not available")]
    StoreUnavailable,

    #[error("will not found: {id}")]
    NotFound { id: WillId },

    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition { from: WillStatus, to: WillStatus },

    #[error("identity {acting} is not the owner of this will")]
    NotAuthorized { owner: Address, acting: Address },

    #[error("{field} must not be empty")]
    InvalidInput { field: &'static str },

    #[error(transparent)]
    Decode(#[from] SerializeError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Id(#[from] WillIdError),
}

impl RegistryError {
    /// Stable classification independent of message text.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::StoreUnavailable => ErrorClass::Unavailable,
            Self::NotFound { .. } => ErrorClass::NotFound,
            Self::InvalidTransition { .. } => ErrorClass::Conflict,
            Self::NotAuthorized { .. } => ErrorClass::Unauthorized,
            Self::InvalidInput { .. } => ErrorClass::Unsupported,
            Self::Decode(_) => ErrorClass::Corruption,
            Self::Store(_) => ErrorClass::Transport,
            Self::Id(_) => ErrorClass::Internal,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether the underlying store rejected a write (signer declined).
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Store(inner) if inner.is_rejected())
    }
}

impl From<IndexError> for RegistryError {
    fn from(err: IndexError) -> Self {
        match err {
            IndexError::Store(inner) => Self::Store(inner),
            IndexError::Encode(inner) => Self::Decode(inner),
        }
    }
}

///
/// ErrorClass
/// Error taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Unavailable,
    NotFound,
    Conflict,
    Unauthorized,
    Unsupported,
    Corruption,
    Transport,
    Internal,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unavailable => "unavailable",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Unauthorized => "unauthorized",
            Self::Unsupported => "unsupported",
            Self::Corruption => "corruption",
            Self::Transport => "transport",
            Self::Internal => "internal",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_are_distinguishable() {
        let unavailable = RegistryError::StoreUnavailable;
        let not_found = RegistryError::NotFound {
            id: WillId::from("w1"),
        };

        assert_eq!(unavailable.class(), ErrorClass::Unavailable);
        assert_eq!(not_found.class(), ErrorClass::NotFound);
        assert!(not_found.is_not_found());
        assert!(!unavailable.is_not_found());
    }

    #[test]
    fn rejected_writes_stay_branchable() {
        let err = RegistryError::from(StoreError::rejected("user rejected transaction"));

        assert!(err.is_rejected());
        assert_eq!(err.class(), ErrorClass::Transport);

        let transport = RegistryError::from(StoreError::transport("timeout"));
        assert!(!transport.is_rejected());
    }

    #[test]
    fn index_errors_flatten_into_registry_kinds() {
        let store: RegistryError = IndexError::Store(StoreError::transport("down")).into();
        assert_eq!(store.class(), ErrorClass::Transport);

        let encode: RegistryError =
            IndexError::Encode(SerializeError::Serialize("boom".to_string())).into();
        assert_eq!(encode.class(), ErrorClass::Corruption);
    }
}
