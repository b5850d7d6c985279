//! Shared error type.
//!
//! The sampling and resolution paths are total and never produce errors.
//! `GwError` covers the edges around them: configuration validation and
//! name lookups made on behalf of a user.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GwError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown region {0:?}")]
    UnknownRegion(String),

    #[error("invalid location id: {0}")]
    InvalidId(#[from] uuid::Error),
}

/// Shorthand result type for `gw-*` crates.
pub type GwResult<T> = Result<T, GwError>;
