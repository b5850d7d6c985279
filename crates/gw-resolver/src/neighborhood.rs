//! Neighborhood (dong) name lists and the coordinate digest that picks one.
//!
//! Three Seoul districts have hand-curated lists; every other district shares
//! the generic suffix list.

use gw_core::GeoPoint;

/// Fallback list for districts without a curated one.
pub const GENERIC: [&str; 10] = [
    "1동", "2동", "3동", "본동", "역삼동", "논현동", "청담동", "삼성동", "대치동", "도곡동",
];

/// `((region, district), names)`
const CURATED: &[((&str, &str), &[&str])] = &[
    (("서울", "강남구"), &["역삼동", "논현동", "청담동", "삼성동", "대치동", "도곡동"]),
    (("서울", "서초구"), &["서초동", "반포동", "잠원동", "방배동", "양재동"]),
    (("서울", "송파구"), &["잠실동", "신천동", "풍납동", "송파동", "가락동", "문정동"]),
];

/// Candidate names for `district` of `region_name`.  Never empty.
pub fn candidates(region_name: &str, district: &str) -> &'static [&'static str] {
    CURATED
        .iter()
        .find(|((r, d), _)| *r == region_name && *d == district)
        .map(|(_, names)| *names)
        .unwrap_or(&GENERIC[..])
}

/// Digest in `0..GENERIC.len()` derived from the millidegree digit of each
/// axis.
///
/// Each axis contributes `trunc((deg * 1000) mod 10)`, a value in `-9..=9`
/// (negative only for southern/western coordinates).  The sum is reduced
/// Euclidean-modulo the generic list length, so the result is always a valid
/// index.  Curated lists reduce this digest once more by their own length.
pub fn coordinate_digest(coord: GeoPoint) -> usize {
    let lat_digit = ((coord.lat * 1000.0) % 10.0) as i64;
    let lon_digit = ((coord.lon * 1000.0) % 10.0) as i64;
    (lat_digit + lon_digit).rem_euclid(GENERIC.len() as i64) as usize
}
