//! `gw-history` — persisted list of generated locations, most recent first.
//!
//! The whole history is one JSON array stored under a single key in a
//! [`BlobStore`].  Three blob backends are provided:
//!
//! | Feature   | Backend            | Storage                                  |
//! |-----------|--------------------|------------------------------------------|
//! | *(none)*  | `MemoryBlobStore`  | In-process `HashMap`                     |
//! | *(none)*  | `FileBlobStore`    | One `<key>.json` file per key in a dir   |
//! | `sqlite`  | `SqliteBlobStore`  | `kv` table in a SQLite database          |
//!
//! [`BlobHistory`] implements [`HistoryStore`] over any of them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gw_history::{BlobHistory, FileBlobStore, HistoryStore};
//!
//! let mut history = BlobHistory::new(FileBlobStore::new(Path::new("./data"))?);
//! history.save(record)?;
//! for rec in history.fetch_all()? {
//!     println!("{}", rec.location_name());
//! }
//! ```
//!
//! Failures surface as [`HistoryError`]; nothing here retries.

pub mod blob;
pub mod error;
pub mod file;
pub mod history;
pub mod memory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use blob::BlobStore;
pub use error::{HistoryError, HistoryResult};
pub use file::FileBlobStore;
pub use history::{BlobHistory, HISTORY_KEY, HistoryStore};
pub use memory::MemoryBlobStore;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteBlobStore;
