//! Directions error type.

use thiserror::Error;

use gw_core::GeoPoint;

/// Errors produced by a [`DirectionsService`][crate::DirectionsService].
#[derive(Debug, Error)]
pub enum DirectionsError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: GeoPoint, to: GeoPoint },

    #[error("directions provider error: {0}")]
    Provider(String),
}

pub type DirectionsResult<T> = Result<T, DirectionsError>;
