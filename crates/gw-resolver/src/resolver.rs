//! `DistrictResolver` — nearest-centre classification with a radius cutoff.
//!
//! # Algorithm
//!
//! A linear scan over the region's district table.  For each district the
//! great-circle distance to its centre is converted to degrees and compared
//! against that district's own radius.  Among districts that contain the
//! point, the one with the strictly smallest distance wins, so equal-distance
//! ties go to the earlier table entry.  When no district contains the point
//! the result is `None`; the scan never falls back to an arbitrary entry.
//!
//! Tables hold at most a few dozen entries, so no spatial index is used.

use gw_catalog::{District, RegionCatalog};
use gw_core::GeoPoint;

use crate::neighborhood;

/// Classifies coordinates against a borrowed [`RegionCatalog`].
///
/// Holds no mutable state; share freely across threads.
#[derive(Copy, Clone, Debug)]
pub struct DistrictResolver<'a> {
    catalog: &'a RegionCatalog,
}

impl<'a> DistrictResolver<'a> {
    pub fn new(catalog: &'a RegionCatalog) -> Self {
        Self { catalog }
    }

    /// Name of the nearest district of `region_name` whose radius contains
    /// `coord`.
    ///
    /// Unknown region names, the nationwide region, and regions without a
    /// district table all yield `None`.
    pub fn resolve_district(&self, coord: GeoPoint, region_name: &str) -> Option<&'a str> {
        nearest_containing(coord, self.catalog.districts_of(region_name))
            .map(|d| d.name.as_str())
    }

    /// Cosmetic neighborhood label for `coord`.
    ///
    /// `None` exactly when `district` is `None`.
    pub fn resolve_neighborhood(
        &self,
        coord:       GeoPoint,
        region_name: &str,
        district:    Option<&str>,
    ) -> Option<&'static str> {
        let district = district?;
        let candidates = neighborhood::candidates(region_name, district);
        Some(candidates[neighborhood::coordinate_digest(coord) % candidates.len()])
    }
}

/// Strict-less-than scan; see the module docs.
fn nearest_containing(coord: GeoPoint, table: &[District]) -> Option<&District> {
    let mut best: Option<(&District, f64)> = None;

    for district in table {
        let dist = coord.distance_deg(district.center);
        // Negated comparison so a NaN distance is rejected too.
        if !(dist <= district.radius_deg) {
            continue;
        }
        if best.is_none_or(|(_, best_dist)| dist < best_dist) {
            best = Some((district, dist));
        }
    }

    best.map(|(district, _)| district)
}
