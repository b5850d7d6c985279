//! `gw-resolver` — classify a coordinate into a named district and derive a
//! neighborhood label for it.
//!
//! # Crate layout
//!
//! | Module           | Contents                                              |
//! |------------------|-------------------------------------------------------|
//! | [`resolver`]     | `DistrictResolver`                                    |
//! | [`neighborhood`] | Curated and generic neighborhood name lists, digest   |
//!
//! Districts are circles, not polygons, and neighborhood labels are
//! cosmetic: deterministic for a given coordinate, but not real addressing
//! data.

pub mod neighborhood;
pub mod resolver;


pub use resolver::DistrictResolver;
