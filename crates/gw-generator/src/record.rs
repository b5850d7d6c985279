//! `LocationRecord` — one generated location.

use chrono::{DateTime, Utc};

use gw_catalog::Region;
use gw_core::{GeoPoint, LocationId};
use gw_resolver::DistrictResolver;

/// A generated point with its region and resolved labels.
///
/// Immutable once built: fields are private and only readable.  The record
/// owns a full copy of its `Region`, not a reference into the catalog.
///
/// `neighborhood` is `Some` only when `district` is `Some`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationRecord {
    id:           LocationId,
    region:       Region,
    coordinate:   GeoPoint,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    district:     Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    neighborhood: Option<String>,
    generated_at: DateTime<Utc>,
}

impl LocationRecord {
    /// Classify `coordinate` within `region` and stamp the record with a new
    /// id and the current time.
    pub fn resolve(region: &Region, coordinate: GeoPoint, resolver: &DistrictResolver<'_>) -> Self {
        let district = resolver.resolve_district(coordinate, &region.name);
        Self::with_district(region, coordinate, district, resolver)
    }

    /// Build from an already-resolved district, deriving the neighborhood.
    pub(crate) fn with_district(
        region:     &Region,
        coordinate: GeoPoint,
        district:   Option<&str>,
        resolver:   &DistrictResolver<'_>,
    ) -> Self {
        let neighborhood = resolver.resolve_neighborhood(coordinate, &region.name, district);
        Self {
            id:           LocationId::new_random(),
            region:       region.clone(),
            coordinate,
            district:     district.map(str::to_owned),
            neighborhood: neighborhood.map(str::to_owned),
            generated_at: Utc::now(),
        }
    }

    pub fn id(&self) -> LocationId {
        self.id
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn coordinate(&self) -> GeoPoint {
        self.coordinate
    }

    pub fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    pub fn neighborhood(&self) -> Option<&str> {
        self.neighborhood.as_deref()
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Space-joined region, district, and neighborhood, skipping absent parts:
    /// `"서울 강남구 역삼동"`, `"수원"`.
    pub fn location_name(&self) -> String {
        let mut parts = vec![self.region.name.as_str()];
        parts.extend(self.district());
        parts.extend(self.neighborhood());
        parts.join(" ")
    }

    /// Region plus district when known: `"서울 강남구"` or `"서울"`.
    pub fn search_query(&self) -> String {
        match self.district() {
            Some(district) => format!("{} {district}", self.region.name),
            None => self.region.name.clone(),
        }
    }
}
