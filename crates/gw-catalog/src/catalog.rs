//! `RegionCatalog` and its builder.
//!
//! # Data layout
//!
//! Regions are stored in catalog order and indexed by `RegionId`.  District
//! tables are a parallel `Vec<Vec<District>>`, so `districts[id.index()]` is
//! the table for region `id` (empty for regions without one, including the
//! nationwide entry).
//!
//! The nationwide region is always `RegionId(0)`; the builder takes it as a
//! constructor argument so "exactly one nationwide entry" holds by
//! construction.

use gw_core::{GeoPoint, RegionId};

use crate::region::{District, Region, RegionCategory};

// ── RegionCatalog ─────────────────────────────────────────────────────────────

/// Immutable table of regions and their district tables.
///
/// Do not construct directly; use [`RegionCatalogBuilder`] or
/// [`RegionCatalog::korea`].
#[derive(Clone, Debug)]
pub struct RegionCatalog {
    regions:   Vec<Region>,
    districts: Vec<Vec<District>>,
}

impl RegionCatalog {
    /// Every region in catalog order, nationwide first.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// The single nationwide pseudo-region.
    pub fn nationwide(&self) -> &Region {
        &self.regions[0]
    }

    /// Concrete (non-nationwide) regions in catalog order.  This is the pool
    /// nationwide generation draws from.
    pub fn concrete(&self) -> &[Region] {
        &self.regions[1..]
    }

    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id.index())
    }

    /// First region whose name equals `name` exactly.
    pub fn by_name(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// Concrete regions in `category`, in catalog order.
    pub fn in_category(&self, category: RegionCategory) -> impl Iterator<Item = &Region> + '_ {
        self.concrete()
            .iter()
            .filter(move |r| r.category == Some(category))
    }

    /// District table for the region named `name`.
    ///
    /// Unknown names and regions without a table both yield an empty slice.
    pub fn districts_of(&self, name: &str) -> &[District] {
        self.by_name(name)
            .map(|r| self.districts[r.id.index()].as_slice())
            .unwrap_or(&[])
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }
}

// ── RegionCatalogBuilder ──────────────────────────────────────────────────────

/// Incrementally assembles a [`RegionCatalog`].
///
/// ```rust,ignore
/// let mut b = RegionCatalogBuilder::new("전국", GeoPoint::new(36.5, 127.5), 500_000.0);
/// let seoul = b.add_region("서울", GeoPoint::new(37.5665, 126.9780), 15_000.0, Some(RegionCategory::Capital));
/// b.add_district(seoul, "강남구", GeoPoint::new(37.4979, 127.0276), 0.05);
/// let catalog = b.build();
/// ```
pub struct RegionCatalogBuilder {
    regions:   Vec<Region>,
    districts: Vec<Vec<District>>,
}

impl RegionCatalogBuilder {
    /// Start a catalog whose nationwide entry has the given name and disc.
    ///
    /// # Panics
    /// Panics if `radius_m` is not strictly positive.
    pub fn new(nationwide_name: &str, center: GeoPoint, radius_m: f64) -> Self {
        assert!(radius_m > 0.0, "nationwide radius must be positive");
        let nationwide = Region {
            id:            RegionId(0),
            name:          nationwide_name.to_owned(),
            center,
            radius_m,
            is_nationwide: true,
            category:      None,
        };
        Self {
            regions:   vec![nationwide],
            districts: vec![Vec::new()],
        }
    }

    /// Append a concrete region and return its id.
    ///
    /// # Panics
    /// Panics if `radius_m` is not strictly positive or the catalog already
    /// holds `u16::MAX` regions.
    pub fn add_region(
        &mut self,
        name:     &str,
        center:   GeoPoint,
        radius_m: f64,
        category: Option<RegionCategory>,
    ) -> RegionId {
        assert!(radius_m > 0.0, "region {name:?} radius must be positive");
        assert!(self.regions.len() < u16::MAX as usize, "region count exceeds u16::MAX");
        let id = RegionId(self.regions.len() as u16);
        self.regions.push(Region {
            id,
            name: name.to_owned(),
            center,
            radius_m,
            is_nationwide: false,
            category,
        });
        self.districts.push(Vec::new());
        id
    }

    /// Append a district to `region`'s table.  Table order is significant:
    /// equal-distance ties resolve to the earlier entry.
    ///
    /// # Panics
    /// Panics if `region` was not returned by this builder or
    /// `radius_deg` is not strictly positive.
    pub fn add_district(&mut self, region: RegionId, name: &str, center: GeoPoint, radius_deg: f64) {
        assert!(radius_deg > 0.0, "district {name:?} radius must be positive");
        self.districts[region.index()].push(District {
            name: name.to_owned(),
            center,
            radius_deg,
        });
    }

    pub fn build(self) -> RegionCatalog {
        RegionCatalog {
            regions:   self.regions,
            districts: self.districts,
        }
    }
}
