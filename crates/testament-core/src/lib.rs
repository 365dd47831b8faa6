//! Core runtime for Testament: will records, the key/value index scheme, and
//! the lifecycle registry that drives both against an external ledger store.
//!
//! The store itself is an external collaborator reached through
//! [`store::KeyValueStore`]; this crate owns everything layered on top of its
//! raw `get`/`set` surface.

pub mod codec;
pub mod error;
pub mod index;
pub mod registry;
pub mod serialize;
pub mod store;
pub mod types;

///
/// CONSTANTS
///

/// Maximum encoded size accepted for a single record envelope.
///
/// Bounds decode work per index entry so one oversized value cannot stall a
/// whole listing pass.
pub const MAX_RECORD_BYTES: usize = 256 * 1024;

/// Maximum encoded size accepted for the id index.
pub const MAX_INDEX_BYTES: usize = 4 * 1024 * 1024;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, stores, serializers, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::types::{Address, Payload, WillId, WillRecord, WillStatus};
}
