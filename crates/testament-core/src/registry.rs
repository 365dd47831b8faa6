use crate::{
    codec,
    error::RegistryError,
    index::IndexManager,
    store::{KeyValueStore, record_key},
    types::{Address, Payload, WillId, WillRecord, WillStatus},
};
use std::time::{SystemTime, UNIX_EPOCH};

///
/// WillRegistry
///
/// The lifecycle core: orchestrates record and index writes over the external
/// store, and enforces the state machine and ownership rules regardless of
/// whatever the presentation layer filters on its side.
///
/// Nothing here is transactional. Create is two independent writes, and
/// transitions are read-modify-write of the whole record; the store offers no
/// compare-and-swap, so concurrent writers can silently overwrite each other
/// (last write wins). Callers that stop awaiting simply discard the result;
/// an in-flight store operation may still complete and mutate external state.
///

pub struct WillRegistry<S> {
    store: S,
}

impl<S: KeyValueStore> WillRegistry<S> {
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    // ======================================================================
    // Mutating operations
    // ======================================================================

    /// Create a record in draft status and register it in the index.
    ///
    /// The record is written first, then the index entry. There is no
    /// rollback: if the index append fails, the error propagates and the
    /// record stays behind as an orphan reachable only via [`Self::get`].
    pub async fn create(
        &self,
        owner: Address,
        beneficiary: Address,
        payload: Payload,
    ) -> Result<WillId, RegistryError> {
        if beneficiary.is_empty() {
            return Err(RegistryError::InvalidInput {
                field: "beneficiary",
            });
        }
        if payload.is_empty() {
            return Err(RegistryError::InvalidInput { field: "payload" });
        }

        let id = WillId::generate()?;
        let record = WillRecord {
            id: id.clone(),
            payload,
            created_at: now_secs(),
            owner,
            beneficiary,
            status: WillStatus::Draft,
        };

        let bytes = codec::encode_record(&record)?;
        self.store.set_data(&record_key(&id), bytes).await?;

        IndexManager::new(&self.store).append(&id).await?;

        Ok(id)
    }

    /// Move a draft record to active. Owner-only.
    pub async fn activate(
        &self,
        id: &WillId,
        acting: &Address,
    ) -> Result<WillRecord, RegistryError> {
        self.transition(id, acting, WillStatus::Active).await
    }

    /// Move an active record to revoked. Owner-only. Terminal.
    pub async fn revoke(&self, id: &WillId, acting: &Address) -> Result<WillRecord, RegistryError> {
        self.transition(id, acting, WillStatus::Revoked).await
    }

    /// Read-modify-write of the status field; everything else is carried
    /// through unchanged, payload included (never re-encoded on transition
    /// beyond the envelope itself).
    async fn transition(
        &self,
        id: &WillId,
        acting: &Address,
        to: WillStatus,
    ) -> Result<WillRecord, RegistryError> {
        let mut record = self.fetch(id).await?;

        if !record.is_owned_by(acting) {
            return Err(RegistryError::NotAuthorized {
                owner: record.owner,
                acting: acting.clone(),
            });
        }
        if !record.status.can_transition(to) {
            return Err(RegistryError::InvalidTransition {
                from: record.status,
                to,
            });
        }

        record.status = to;
        let bytes = codec::encode_record(&record)?;
        self.store.set_data(&record_key(id), bytes).await?;

        Ok(record)
    }

    // ======================================================================
    // Read operations
    // ======================================================================

    /// Load one record by id.
    ///
    /// This is the direct-by-id path, so it also reaches orphans that a
    /// partially-completed create left out of the index.
    pub async fn get(&self, id: &WillId) -> Result<WillRecord, RegistryError> {
        if !self.store.is_available().await {
            return Err(RegistryError::StoreUnavailable);
        }

        self.fetch(id).await
    }

    /// List all indexed records, newest first.
    ///
    /// Index entries whose record is missing, unreadable, or undecodable are
    /// logged and skipped; one bad entry never fails the listing. An
    /// unavailable store is an error, never an empty list.
    pub async fn list(&self) -> Result<Vec<WillRecord>, RegistryError> {
        if !self.store.is_available().await {
            return Err(RegistryError::StoreUnavailable);
        }

        let ids = IndexManager::new(&self.store).load().await?;
        let mut records = Vec::with_capacity(ids.len());

        for id in ids {
            let bytes = match self.store.get_data(&record_key(&id)).await {
                Ok(bytes) => bytes,
                Err(err) => {
                    tracing::warn!(%id, error = %err, "failed to load will, skipping");
                    continue;
                }
            };
            if bytes.is_empty() {
                // index entry with no record: a create that never finished
                tracing::debug!(%id, "index entry without record, skipping");
                continue;
            }

            match codec::decode_record(id.clone(), &bytes) {
                Ok(record) => records.push(record),
                Err(err) => {
                    tracing::warn!(%id, error = %err, "failed to decode will, skipping");
                }
            }
        }

        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(records)
    }

    async fn fetch(&self, id: &WillId) -> Result<WillRecord, RegistryError> {
        let bytes = self.store.get_data(&record_key(id)).await?;
        if bytes.is_empty() {
            return Err(RegistryError::NotFound { id: id.clone() });
        }

        Ok(codec::decode_record(id.clone(), &bytes)?)
    }
}

/// Unix seconds for `created_at`.
fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

///
/// StatusCounts
///
/// Per-status tallies over a listed snapshot, for dashboard surfaces.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StatusCounts {
    pub total: usize,
    pub draft: usize,
    pub active: usize,
    pub executed: usize,
    pub revoked: usize,
}

/// Tally statuses over a listed snapshot. Pure; no store I/O.
#[must_use]
pub fn status_counts(records: &[WillRecord]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for record in records {
        counts.total += 1;
        match record.status {
            WillStatus::Draft => counts.draft += 1,
            WillStatus::Active => counts.active += 1,
            WillStatus::Executed => counts.executed += 1,
            WillStatus::Revoked => counts.revoked += 1,
        }
    }

    counts
}

/// Filter a listed snapshot by case-insensitive substring match on
/// beneficiary or status. An empty term matches everything. Pure; no store
/// I/O.
#[must_use]
pub fn find<'a>(records: &'a [WillRecord], term: &str) -> Vec<&'a WillRecord> {
    let term = term.to_ascii_lowercase();

    records
        .iter()
        .filter(|record| {
            record
                .beneficiary
                .as_str()
                .to_ascii_lowercase()
                .contains(&term)
                || record.status.as_str().contains(&term)
        })
        .collect()
}

///
/// TESTS
///
