//! Hand-off data for an external map/search app.
//!
//! Turning this into a URI (app scheme or web fallback) is the caller's job.

use gw_core::GeoPoint;
use gw_generator::LocationRecord;

/// Term appended to every search query ("restaurants").
pub const SEARCH_SUFFIX: &str = "맛집";

/// What to search for and where.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchHandoff {
    /// `"{region} {district} 맛집"`, or `"{region} 맛집"` without a district.
    pub query:       String,
    pub destination: GeoPoint,
}

impl SearchHandoff {
    pub fn for_record(record: &LocationRecord) -> Self {
        Self {
            query:       format!("{} {SEARCH_SUFFIX}", record.search_query()),
            destination: record.coordinate(),
        }
    }
}
