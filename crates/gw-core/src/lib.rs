//! `gw-core` — foundational types for the `gowhere` random location picker.
//!
//! This crate is a dependency of every other `gw-*` crate.  It has no `gw-*`
//! dependencies and only a handful of external ones (`rand`, `thiserror`,
//! `uuid`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`ids`]      | `RegionId`, `LocationId`                                 |
//! | [`geo`]      | `GeoPoint`, haversine distance, metre/degree conversion  |
//! | [`rng`]      | `GeoRng` (seedable or entropy-backed)                    |
//! | [`config`]   | `GeneratorConfig`                                        |
//! | [`error`]    | `GwError`, `GwResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types (gw-history) |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::GeneratorConfig;
pub use error::{GwError, GwResult};
pub use geo::{GeoPoint, METERS_PER_DEGREE};
pub use ids::{LocationId, RegionId};
pub use rng::GeoRng;
