//! Region, district, and category value types.

use std::fmt;

use gw_core::{GeoPoint, RegionId};

// ── RegionCategory ────────────────────────────────────────────────────────────

/// Broad geographic grouping used to narrow city selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegionCategory {
    /// 수도권 — Seoul metropolitan area.
    Capital,
    /// 충청권
    Chungcheong,
    /// 전라권
    Jeolla,
    /// 경상권
    Gyeongsang,
    /// 강원권
    Gangwon,
    /// 제주
    Jeju,
}

impl RegionCategory {
    /// All categories in display order.
    pub const ALL: [RegionCategory; 6] = [
        RegionCategory::Capital,
        RegionCategory::Chungcheong,
        RegionCategory::Jeolla,
        RegionCategory::Gyeongsang,
        RegionCategory::Gangwon,
        RegionCategory::Jeju,
    ];

    /// Korean display label.
    pub fn label(self) -> &'static str {
        match self {
            RegionCategory::Capital     => "수도권",
            RegionCategory::Chungcheong => "충청권",
            RegionCategory::Jeolla      => "전라권",
            RegionCategory::Gyeongsang  => "경상권",
            RegionCategory::Gangwon     => "강원권",
            RegionCategory::Jeju        => "제주",
        }
    }

    /// Inverse of [`label`][Self::label].
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for RegionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Region ────────────────────────────────────────────────────────────────────

/// A city-level sampling area, or the single nationwide pseudo-region.
///
/// Records carry an owned clone of their `Region`, so later catalog changes
/// never rewrite history.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub id:            RegionId,
    pub name:          String,
    pub center:        GeoPoint,
    /// Sampling disc radius in metres.  Always `> 0`.
    pub radius_m:      f64,
    pub is_nationwide: bool,
    /// `None` for the nationwide entry.
    pub category:      Option<RegionCategory>,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// ── District ──────────────────────────────────────────────────────────────────

/// An administrative subdivision of a region, approximated as a circle.
///
/// The radius is stored in degrees of arc (not metres) and tuned per entry;
/// neighbouring districts overlap freely.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct District {
    pub name:       String,
    pub center:     GeoPoint,
    pub radius_deg: f64,
}
