mod key;
pub mod memory;

pub use key::{INDEX_KEY, RECORD_KEY_PREFIX, record_key};
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error as ThisError;

///
/// StoreError
///
/// Failure of an underlying store round trip. A rejected write (the signer
/// declined) stays distinguishable from a transport failure so callers can
/// branch on it.
///

#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("store rejected the write: {reason}")]
    Rejected { reason: String },

    #[error("store transport failure: {message}")]
    Transport { message: String },
}

impl StoreError {
    #[must_use]
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

///
/// KeyValueStore
///
/// Contract surface of the external ledger store. The store has no
/// transactions, no secondary indexes, and no enumeration; everything above
/// raw `get`/`set` lives in this crate.
///
/// Semantics consumed here:
/// - `get_data` never fails for absence; an absent key is the empty byte
///   string.
/// - `set_data` may fail on rejection by the signer or the transport.
/// - `is_available` must be probed before reads; an unavailable store is not
///   the same thing as an empty one.
///

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn is_available(&self) -> bool;

    async fn get_data(&self, key: &str) -> Result<Vec<u8>, StoreError>;

    async fn set_data(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;
}
