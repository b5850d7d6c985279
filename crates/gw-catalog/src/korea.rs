//! The shipped South Korea catalog.
//!
//! City discs are hand-picked to cover each urban core; district centres are
//! approximate ward-office locations with radii tuned per entry (0.05° by
//! default, up to 0.08° for the large rural counties).  Only the seven
//! metropolitan cities have district tables; every other city resolves to
//! "no district".

use gw_core::GeoPoint;

use crate::catalog::{RegionCatalog, RegionCatalogBuilder};
use crate::region::RegionCategory::{self, *};

// ── Cities ────────────────────────────────────────────────────────────────────

const NATIONWIDE: (&str, f64, f64, f64) = ("전국", 36.5, 127.5, 500_000.0);

/// `(name, lat, lon, radius_m, category)`
const CITIES: &[(&str, f64, f64, f64, RegionCategory)] = &[
    ("서울", 37.5665, 126.9780, 15_000.0, Capital),
    ("수원", 37.2636, 127.0286, 10_000.0, Capital),
    ("성남", 37.4201, 127.1262, 10_000.0, Capital),
    ("고양", 37.6584, 126.8320, 10_000.0, Capital),
    ("용인", 37.2410, 127.1776, 10_000.0, Capital),
    ("인천", 37.4563, 126.7052, 12_000.0, Capital),
    ("대전", 36.3504, 127.3845, 10_000.0, Chungcheong),
    ("대구", 35.8714, 128.6014, 10_000.0, Gyeongsang),
    ("부산", 35.1796, 129.0756, 12_000.0, Gyeongsang),
    ("광주", 35.1595, 126.8526, 10_000.0, Jeolla),
    ("울산", 35.5384, 129.3114, 10_000.0, Gyeongsang),
    ("춘천", 37.8813, 127.7300,  8_000.0, Gangwon),
    ("강릉", 37.7519, 128.8761,  8_000.0, Gangwon),
    ("청주", 36.6424, 127.4890,  9_000.0, Chungcheong),
    ("천안", 36.8151, 127.1139,  9_000.0, Chungcheong),
    ("전주", 35.8242, 127.1480,  8_000.0, Jeolla),
    ("여수", 34.7604, 127.6622,  8_000.0, Jeolla),
    ("포항", 36.0190, 129.3435,  9_000.0, Gyeongsang),
    ("창원", 35.2272, 128.6811,  9_000.0, Gyeongsang),
    ("제주", 33.4996, 126.5312, 12_000.0, Jeju),
];

// ── Districts ─────────────────────────────────────────────────────────────────

/// `(name, lat, lon, radius_deg)`
type DistrictRow = (&'static str, f64, f64, f64);

const SEOUL: &[DistrictRow] = &[
    ("강남구",   37.4979, 127.0276, 0.05),
    ("강동구",   37.5301, 127.1238, 0.05),
    ("강북구",   37.6396, 127.0257, 0.05),
    ("강서구",   37.5509, 126.8495, 0.05),
    ("관악구",   37.4784, 126.9516, 0.05),
    ("광진구",   37.5384, 127.0822, 0.05),
    ("구로구",   37.4955, 126.8874, 0.05),
    ("금천구",   37.4519, 126.9018, 0.05),
    ("노원구",   37.6542, 127.0568, 0.05),
    ("도봉구",   37.6688, 127.0471, 0.05),
    ("동대문구", 37.5744, 127.0396, 0.05),
    ("동작구",   37.5124, 126.9393, 0.05),
    ("마포구",   37.5663, 126.9019, 0.05),
    ("서대문구", 37.5791, 126.9368, 0.05),
    ("서초구",   37.4837, 127.0324, 0.05),
    ("성동구",   37.5634, 127.0369, 0.05),
    ("성북구",   37.5894, 127.0167, 0.05),
    ("송파구",   37.5145, 127.1059, 0.05),
    ("양천구",   37.5170, 126.8664, 0.05),
    ("영등포구", 37.5264, 126.8962, 0.05),
    ("용산구",   37.5384, 126.9654, 0.05),
    ("은평구",   37.6027, 126.9291, 0.05),
    ("종로구",   37.5735, 126.9788, 0.05),
    ("중구",     37.5641, 126.9979, 0.05),
    ("중랑구",   37.6063, 127.0925, 0.05),
];

const BUSAN: &[DistrictRow] = &[
    ("중구",     35.1063, 129.0326, 0.05),
    ("서구",     35.0979, 129.0246, 0.05),
    ("동구",     35.1295, 129.0454, 0.05),
    ("영도구",   35.0913, 129.0679, 0.05),
    ("부산진구", 35.1628, 129.0530, 0.05),
    ("동래구",   35.2049, 129.0825, 0.05),
    ("남구",     35.1362, 129.0845, 0.05),
    ("북구",     35.1976, 128.9906, 0.05),
    ("해운대구", 35.1631, 129.1635, 0.05),
    ("사하구",   35.1045, 128.9746, 0.05),
    ("금정구",   35.2429, 129.0929, 0.05),
    ("강서구",   35.2120, 128.9808, 0.05),
    ("연제구",   35.1765, 129.0819, 0.05),
    ("수영구",   35.1454, 129.1134, 0.05),
    ("사상구",   35.1528, 128.9909, 0.05),
    ("기장군",   35.2446, 129.2217, 0.08),
];

const DAEGU: &[DistrictRow] = &[
    ("중구",   35.8694, 128.6067, 0.05),
    ("동구",   35.8869, 128.6350, 0.05),
    ("서구",   35.8719, 128.5592, 0.05),
    ("남구",   35.8464, 128.5975, 0.05),
    ("북구",   35.8858, 128.5829, 0.05),
    ("수성구", 35.8581, 128.6311, 0.05),
    ("달서구", 35.8299, 128.5326, 0.05),
    ("달성군", 35.7749, 128.4314, 0.08),
];

const INCHEON: &[DistrictRow] = &[
    ("중구",     37.4738, 126.6216, 0.05),
    ("동구",     37.4739, 126.6432, 0.05),
    ("미추홀구", 37.4635, 126.6505, 0.05),
    ("연수구",   37.4106, 126.6779, 0.05),
    ("남동구",   37.4469, 126.7314, 0.05),
    ("부평구",   37.5069, 126.7219, 0.05),
    ("계양구",   37.5376, 126.7379, 0.05),
    ("서구",     37.5453, 126.6759, 0.05),
];

const GWANGJU: &[DistrictRow] = &[
    ("동구",   35.1461, 126.9228, 0.05),
    ("서구",   35.1518, 126.8895, 0.05),
    ("남구",   35.1327, 126.9024, 0.05),
    ("북구",   35.1740, 126.9117, 0.05),
    ("광산구", 35.1396, 126.7935, 0.06),
];

const DAEJEON: &[DistrictRow] = &[
    ("동구",   36.3504, 127.4548, 0.05),
    ("중구",   36.3255, 127.4211, 0.05),
    ("서구",   36.3556, 127.3835, 0.05),
    ("유성구", 36.3624, 127.3563, 0.06),
    ("대덕구", 36.3467, 127.4169, 0.05),
];

const ULSAN: &[DistrictRow] = &[
    ("중구",   35.5694, 129.3319, 0.05),
    ("남구",   35.5460, 129.3300, 0.05),
    ("동구",   35.5050, 129.4163, 0.05),
    ("북구",   35.5819, 129.3614, 0.06),
    ("울주군", 35.5226, 129.1536, 0.08),
];

const DISTRICT_TABLES: &[(&str, &[DistrictRow])] = &[
    ("서울", SEOUL),
    ("부산", BUSAN),
    ("대구", DAEGU),
    ("인천", INCHEON),
    ("광주", GWANGJU),
    ("대전", DAEJEON),
    ("울산", ULSAN),
];

impl RegionCatalog {
    /// The shipped catalog: 전국 plus 20 cities, with district tables for
    /// the seven metropolitan cities.
    pub fn korea() -> RegionCatalog {
        let (name, lat, lon, radius_m) = NATIONWIDE;
        let mut b = RegionCatalogBuilder::new(name, GeoPoint::new(lat, lon), radius_m);

        for &(city, lat, lon, radius_m, category) in CITIES {
            let id = b.add_region(city, GeoPoint::new(lat, lon), radius_m, Some(category));

            let table = DISTRICT_TABLES
                .iter()
                .find(|(n, _)| *n == city)
                .map(|(_, rows)| *rows)
                .unwrap_or(&[]);
            for &(district, lat, lon, radius_deg) in table {
                b.add_district(id, district, GeoPoint::new(lat, lon), radius_deg);
            }
        }

        b.build()
    }
}
