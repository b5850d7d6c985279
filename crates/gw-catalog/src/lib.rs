//! `gw-catalog` — the static table of sampling regions and their districts.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`region`]   | `Region`, `District`, `RegionCategory`                     |
//! | [`catalog`]  | `RegionCatalog`, `RegionCatalogBuilder`                    |
//! | [`korea`]    | The shipped tables: 20 cities, 7 district tables           |
//!
//! The catalog is immutable once built.  Share it by reference (or `Arc`)
//! between resolver and generator; nothing in this crate holds global state.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod catalog;
pub mod korea;
pub mod region;


pub use catalog::{RegionCatalog, RegionCatalogBuilder};
pub use region::{District, Region, RegionCategory};
