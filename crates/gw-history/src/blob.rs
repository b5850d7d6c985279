//! The `BlobStore` trait implemented by all storage backends.

use crate::HistoryResult;

/// Opaque key/value byte storage.
///
/// Values are replaced wholesale on `set`; there is no partial update.
pub trait BlobStore {
    /// The value under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> HistoryResult<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &[u8]) -> HistoryResult<()>;

    /// Remove `key`.  Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> HistoryResult<()>;
}
