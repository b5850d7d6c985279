//! `gw-generator` — pick a random point inside a region and label it.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`sampler`]   | `CoordinateSampler` — uniform-by-area disc sampling       |
//! | [`generator`] | `LocationGenerator` — bounded sample-and-resolve loop     |
//! | [`record`]    | `LocationRecord` — the immutable result                   |
//!
//! Everything here is synchronous, allocation-light, and free of shared
//! mutable state.  Randomness comes from a caller-owned `GeoRng`.
//!
//! # Usage
//!
//! ```rust,ignore
//! let catalog = RegionCatalog::korea();
//! let generator = LocationGenerator::new(&catalog);
//! let mut rng = GeoRng::from_entropy();
//! let record = generator.generate(catalog.by_name("서울").unwrap(), &mut rng);
//! println!("{}", record.location_name());
//! ```
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `LocationRecord`.       |

pub mod generator;
pub mod record;
pub mod sampler;


pub use generator::LocationGenerator;
pub use record::LocationRecord;
pub use sampler::CoordinateSampler;
