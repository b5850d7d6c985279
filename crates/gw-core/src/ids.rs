//! Strongly typed identifier wrappers.
//!
//! `RegionId` is the position of a region in its catalog, so it doubles as a
//! direct index via `.index()`.  `LocationId` is a random UUID: records are
//! created independently (possibly concurrently) and must never collide once
//! merged into a single history.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// Index of a region in `RegionCatalog` order.  Max 65,535 regions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionId(pub u16);

impl RegionId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegionId({})", self.0)
    }
}

impl TryFrom<usize> for RegionId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<RegionId, Self::Error> {
        u16::try_from(n).map(RegionId)
    }
}

/// Unique identifier of a generated `LocationRecord`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LocationId(pub Uuid);

impl LocationId {
    /// A fresh random (v4) identifier.
    pub fn new_random() -> Self {
        LocationId(Uuid::new_v4())
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LocationId {
    type Err = uuid::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(LocationId)
    }
}
