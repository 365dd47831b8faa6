use crate::{
    codec,
    serialize::SerializeError,
    store::{INDEX_KEY, KeyValueStore, StoreError},
    types::WillId,
};
use thiserror::Error as ThisError;

///
/// IndexManager
///
/// The store has no native enumeration, so the single source of listing truth
/// is one serialized id list under [`INDEX_KEY`]. Appends are whole-list
/// read-modify-write: two concurrent appenders can lose each other's entry
/// (last writer wins). That race is a property of the store surface, not
/// something this layer arbitrates; a store with compare-and-swap would be
/// needed to close it.
///

pub struct IndexManager<'a, S> {
    store: &'a S,
}

///
/// IndexError
///

#[derive(Debug, ThisError)]
pub enum IndexError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Encode(#[from] SerializeError),
}

///
/// AppendOutcome
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AppendOutcome {
    Appended,
    Skipped,
}

impl<'a, S: KeyValueStore> IndexManager<'a, S> {
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Load the full id list.
    ///
    /// An absent index is an empty list. Malformed index bytes are also an
    /// empty list: the index is reconstructable state, so corruption here is
    /// logged and survived rather than surfaced.
    pub async fn load(&self) -> Result<Vec<WillId>, StoreError> {
        let bytes = self.store.get_data(INDEX_KEY).await?;
        if bytes.is_empty() {
            return Ok(Vec::new());
        }

        match codec::decode_index(&bytes) {
            Ok(ids) => Ok(ids),
            Err(err) => {
                tracing::warn!(error = %err, "malformed will index, treating as empty");

                Ok(Vec::new())
            }
        }
    }

    /// Append `id` to the list and write the whole list back.
    ///
    /// An id already present is skipped, so a caller retry after a lost ack
    /// cannot produce a duplicate entry.
    pub async fn append(&self, id: &WillId) -> Result<AppendOutcome, IndexError> {
        let mut ids = self.load().await?;
        if ids.contains(id) {
            return Ok(AppendOutcome::Skipped);
        }

        ids.push(id.clone());
        let bytes = codec::encode_index(&ids)?;
        self.store.set_data(INDEX_KEY, bytes).await?;

        Ok(AppendOutcome::Appended)
    }
}

///
/// TESTS
///
