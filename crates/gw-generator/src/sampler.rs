//! Uniform random points inside a disc.
//!
//! # Transform
//!
//! Given two independent uniforms `u, v ∈ [0, 1]`:
//!
//! ```text
//! w = R · √u          radial distance (√ gives uniform density per unit area)
//! t = 2π · v          bearing
//! x = w · cos t       east offset, degrees
//! y = w · sin t       north offset, degrees
//! lat = lat₀ + y
//! lon = lon₀ + x / cos(lat₀)
//! ```
//!
//! `R` is converted from metres with the flat `METERS_PER_DEGREE` constant,
//! and the longitude offset is stretched by `1 / cos(lat₀)` to undo meridian
//! convergence.  Undefined at exactly ±90°, which no catalog region uses.

use std::f64::consts::TAU;

use gw_core::{GeoPoint, GeoRng, METERS_PER_DEGREE};

#[derive(Copy, Clone, Debug, Default)]
pub struct CoordinateSampler;

impl CoordinateSampler {
    /// Apply the disc transform to explicit variates.
    ///
    /// Rim points (`u = 1`) can land up to about 0.2% beyond `radius_m` by
    /// haversine distance, since 111 km/° overstates a degree of latitude
    /// and the east-west stretch is flat.
    pub fn offset(center: GeoPoint, radius_m: f64, u: f64, v: f64) -> GeoPoint {
        let radius_deg = radius_m / METERS_PER_DEGREE;

        let w = radius_deg * u.sqrt();
        let t = TAU * v;

        let x = w * t.cos();
        let y = w * t.sin();

        GeoPoint::new(center.lat + y, center.lon + x / center.lat.to_radians().cos())
    }

    /// Draw a point uniformly distributed over the disc of `radius_m` metres
    /// around `center`.
    pub fn sample_uniform(&self, center: GeoPoint, radius_m: f64, rng: &mut GeoRng) -> GeoPoint {
        let u = rng.unit();
        let v = rng.unit();
        Self::offset(center, radius_m, u, v)
    }
}
