//! `LocationGenerator` — sample, resolve, retry.
//!
//! # Loop
//!
//! Each attempt picks an *effective* region (the input itself, or for the
//! nationwide region a fresh uniformly chosen concrete city), samples a point
//! in its disc, and resolves the district.  The first attempt with a district
//! wins.  After `max_attempts` misses the last attempt is returned as-is with
//! no district or neighborhood, so `generate` always terminates and never
//! fails.
//!
//! Cities without district tables can never resolve, so they always run the
//! full attempt budget.  Each attempt is a scan over at most a few dozen
//! districts.

use tracing::{debug, trace, warn};

use gw_catalog::{Region, RegionCatalog};
use gw_core::{GeneratorConfig, GeoPoint, GeoRng, GwResult};
use gw_resolver::DistrictResolver;

use crate::{CoordinateSampler, LocationRecord};

/// Generates [`LocationRecord`]s against a borrowed catalog.
///
/// Holds only shared references and plain values, so one generator can serve
/// concurrent callers as long as each brings its own `GeoRng`.
#[derive(Clone, Debug)]
pub struct LocationGenerator<'a> {
    catalog:      &'a RegionCatalog,
    resolver:     DistrictResolver<'a>,
    sampler:      CoordinateSampler,
    max_attempts: u32,
}

/// One sample-and-resolve attempt.
struct Attempt<'r, 'a> {
    region:     &'r Region,
    coordinate: GeoPoint,
    district:   Option<&'a str>,
}

impl<'a> LocationGenerator<'a> {
    /// Generator with the default attempt budget.
    pub fn new(catalog: &'a RegionCatalog) -> Self {
        Self {
            catalog,
            resolver: DistrictResolver::new(catalog),
            sampler: CoordinateSampler,
            max_attempts: GeneratorConfig::DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Generator using `config.max_attempts`.  Fails if `config` does not
    /// validate.
    pub fn with_config(catalog: &'a RegionCatalog, config: &GeneratorConfig) -> GwResult<Self> {
        config.validate()?;
        Ok(Self {
            max_attempts: config.max_attempts,
            ..Self::new(catalog)
        })
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Generate a location inside `region`.
    ///
    /// For a concrete region the record's region equals `region`.  For the
    /// nationwide region it is whichever concrete city the final attempt drew.
    pub fn generate(&self, region: &Region, rng: &mut GeoRng) -> LocationRecord {
        let mut attempt = self.attempt(region, rng);
        let mut attempts = 1;

        while attempt.district.is_none() && attempts < self.max_attempts {
            trace!(tried = attempts, region = %attempt.region, coordinate = %attempt.coordinate, "no district, resampling");
            attempt = self.attempt(region, rng);
            attempts += 1;
        }

        match attempt.district {
            Some(district) => debug!(
                region = %attempt.region,
                district,
                attempts,
                "resolved location"
            ),
            None => warn!(
                region = %attempt.region,
                attempts,
                "attempt budget exhausted; returning location without district"
            ),
        }

        LocationRecord::with_district(attempt.region, attempt.coordinate, attempt.district, &self.resolver)
    }

    fn attempt<'r>(&self, requested: &'r Region, rng: &mut GeoRng) -> Attempt<'r, 'a>
    where
        'a: 'r,
    {
        let region = self.effective_region(requested, rng);
        let coordinate = self.sampler.sample_uniform(region.center, region.radius_m, rng);
        let district = self.resolver.resolve_district(coordinate, &region.name);
        Attempt { region, coordinate, district }
    }

    /// The region to sample this attempt: a fresh random concrete city when
    /// `requested` is nationwide, otherwise `requested` itself.
    fn effective_region<'r>(&self, requested: &'r Region, rng: &mut GeoRng) -> &'r Region
    where
        'a: 'r,
    {
        if !requested.is_nationwide {
            return requested;
        }
        rng.choose(self.catalog.concrete()).unwrap_or(requested)
    }
}
