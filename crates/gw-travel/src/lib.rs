//! `gw-travel` — what happens after a location is picked.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`directions`] | `DirectionsService` trait, `GreatCircleDirections`       |
//! | [`estimate`]   | `TravelEstimate` — duration, arrival, Korean formatting  |
//! | [`search`]     | `SearchHandoff` — query string + destination             |
//! | [`error`]      | `DirectionsError`, `DirectionsResult<T>`                 |
//!
//! Real routing lives behind [`DirectionsService`]; applications plug in a
//! mapping provider.  Records never carry travel data themselves.

pub mod directions;
pub mod error;
pub mod estimate;
pub mod search;

#[cfg(test)]
mod tests;

pub use directions::{DirectionsService, GreatCircleDirections};
pub use error::{DirectionsError, DirectionsResult};
pub use estimate::TravelEstimate;
pub use search::{SEARCH_SUFFIX, SearchHandoff};
