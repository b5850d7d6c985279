//! `HistoryStore` and its blob-backed implementation.

use tracing::debug;

use gw_core::{GeneratorConfig, LocationId};
use gw_generator::LocationRecord;

use crate::HistoryResult;
use crate::blob::BlobStore;

/// Key under which the serialized history array is stored.
pub const HISTORY_KEY: &str = "location_history";

/// Bounded, most-recent-first list of generated locations.
pub trait HistoryStore {
    /// Prepend `record`, dropping the oldest entries beyond the limit.
    fn save(&mut self, record: LocationRecord) -> HistoryResult<()>;

    /// All records, most recent first.  Empty when nothing was ever saved.
    fn fetch_all(&self) -> HistoryResult<Vec<LocationRecord>>;

    /// Remove every record with `id`.  A missing id is not an error.
    fn delete(&mut self, id: LocationId) -> HistoryResult<()>;

    /// Remove all records.
    fn clear_all(&mut self) -> HistoryResult<()>;
}

/// [`HistoryStore`] that keeps the whole list as one JSON array under
/// [`HISTORY_KEY`] in a [`BlobStore`].
///
/// Every mutation is a read-modify-write of the full array, which is fine at
/// the default limit of 100 records.
pub struct BlobHistory<S: BlobStore> {
    store: S,
    limit: usize,
}

impl<S: BlobStore> BlobHistory<S> {
    /// History over `store` with the default limit.
    pub fn new(store: S) -> Self {
        Self::with_limit(store, GeneratorConfig::DEFAULT_HISTORY_LIMIT)
    }

    /// History over `store` keeping at most `limit` records (minimum 1).
    pub fn with_limit(store: S, limit: usize) -> Self {
        Self { store, limit: limit.max(1) }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Give back the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }

    fn write(&mut self, records: &[LocationRecord]) -> HistoryResult<()> {
        let bytes = serde_json::to_vec(records)?;
        self.store.set(HISTORY_KEY, &bytes)
    }
}

impl<S: BlobStore> HistoryStore for BlobHistory<S> {
    fn save(&mut self, record: LocationRecord) -> HistoryResult<()> {
        let mut records = self.fetch_all()?;
        debug!(id = %record.id(), name = %record.location_name(), "saving location to history");
        records.insert(0, record);
        records.truncate(self.limit);
        self.write(&records)
    }

    fn fetch_all(&self) -> HistoryResult<Vec<LocationRecord>> {
        match self.store.get(HISTORY_KEY)? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(Vec::new()),
        }
    }

    fn delete(&mut self, id: LocationId) -> HistoryResult<()> {
        let mut records = self.fetch_all()?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        debug!(%id, removed = before - records.len(), "deleted from history");
        self.write(&records)
    }

    fn clear_all(&mut self) -> HistoryResult<()> {
        debug!("clearing history");
        self.store.remove(HISTORY_KEY)
    }
}
