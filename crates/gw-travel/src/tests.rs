//! Unit tests for gw-travel.

#[cfg(test)]
mod directions {
    use gw_core::GeoPoint;

    use crate::{DirectionsService, GreatCircleDirections};

    #[test]
    fn one_degree_at_thirty_kmh() {
        let svc = GreatCircleDirections::default();
        let a = GeoPoint::new(37.0, 127.0);
        let b = GeoPoint::new(38.0, 127.0);
        let secs = svc.estimate(a, b).unwrap().as_secs_f64();
        // ~111.2 km at 30 km/h ≈ 13,343 s.
        assert!((secs - 13_343.0).abs() < 10.0, "got {secs}");
    }

    #[test]
    fn same_point_is_instant() {
        let svc = GreatCircleDirections::new(50.0);
        let p = GeoPoint::new(35.1796, 129.0756);
        assert_eq!(svc.estimate(p, p).unwrap().as_secs(), 0);
    }

    #[test]
    fn bad_speed_falls_back_to_default() {
        assert_eq!(GreatCircleDirections::new(0.0).speed_kmh(), 30.0);
        assert_eq!(GreatCircleDirections::new(-5.0).speed_kmh(), 30.0);
        assert_eq!(GreatCircleDirections::new(f64::NAN).speed_kmh(), 30.0);
        assert_eq!(GreatCircleDirections::new(60.0).speed_kmh(), 60.0);
    }

    #[test]
    fn vanishing_speed_has_no_route() {
        let svc = GreatCircleDirections::new(1e-20);
        assert_eq!(svc.speed_kmh(), 1e-20);
        let seoul = GeoPoint::new(37.5665, 126.9780);
        let busan = GeoPoint::new(35.1796, 129.0756);
        let err = svc.estimate(seoul, busan).unwrap_err();
        assert!(matches!(err, crate::DirectionsError::NoRoute { .. }));
        // Same point is still representable: 0 / tiny speed.
        assert_eq!(svc.estimate(seoul, seoul).unwrap().as_secs(), 0);
    }

    #[test]
    fn nan_coordinate_has_no_route() {
        let svc = GreatCircleDirections::default();
        let err = svc
            .estimate(GeoPoint::new(f64::NAN, 0.0), GeoPoint::new(0.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, crate::DirectionsError::NoRoute { .. }));
    }
}

#[cfg(test)]
mod estimate {
    use std::time::Duration;

    use chrono::{FixedOffset, TimeZone};

    use gw_core::GeoPoint;

    use crate::{DirectionsError, DirectionsResult, DirectionsService, TravelEstimate};

    fn kst_noon() -> chrono::DateTime<FixedOffset> {
        FixedOffset::east_opt(9 * 3_600)
            .unwrap()
            .with_ymd_and_hms(2026, 10, 16, 12, 0, 0)
            .unwrap()
    }

    struct Unreachable;

    impl DirectionsService for Unreachable {
        fn estimate(&self, _: GeoPoint, _: GeoPoint) -> DirectionsResult<Duration> {
            Err(DirectionsError::Provider("offline".into()))
        }
    }

    #[test]
    fn formats_hours_and_minutes() {
        let est = TravelEstimate::new(Duration::from_secs(3_900), kst_noon());
        assert_eq!(est.formatted_travel_time(), "1시간 5분");
    }

    #[test]
    fn formats_minutes_only() {
        let est = TravelEstimate::new(Duration::from_secs(42 * 60 + 59), kst_noon());
        assert_eq!(est.formatted_travel_time(), "42분");
        let short = TravelEstimate::new(Duration::from_secs(30), kst_noon());
        assert_eq!(short.formatted_travel_time(), "0분");
    }

    #[test]
    fn arrival_in_estimate_time_zone() {
        let est = TravelEstimate::new(Duration::from_secs(90 * 60), kst_noon());
        assert_eq!(est.formatted_arrival(), "13:30 도착 예정");
        assert_eq!(est.arrival, kst_noon() + chrono::Duration::minutes(90));
    }

    #[test]
    fn arrival_wraps_past_midnight() {
        let est = TravelEstimate::new(Duration::from_secs(13 * 3_600), kst_noon());
        assert_eq!(est.formatted_arrival(), "01:00 도착 예정");
        assert_eq!(est.formatted_travel_time(), "13시간 0분");
    }

    #[test]
    fn request_propagates_provider_errors() {
        let p = GeoPoint::new(37.5, 127.0);
        let res = TravelEstimate::request(&Unreachable, p, p, kst_noon());
        assert!(matches!(res, Err(DirectionsError::Provider(_))));
    }

    #[test]
    fn request_uses_service_duration() {
        let svc = crate::GreatCircleDirections::new(60.0);
        let a = GeoPoint::new(37.0, 127.0);
        let b = GeoPoint::new(37.5, 127.0);
        let est = TravelEstimate::request(&svc, a, b, kst_noon()).unwrap();
        // ~55.6 km at 60 km/h ≈ 55 min.
        assert_eq!(est.formatted_travel_time(), "55분");
    }
}

#[cfg(test)]
mod search {
    use gw_catalog::RegionCatalog;
    use gw_core::GeoPoint;
    use gw_generator::LocationRecord;
    use gw_resolver::DistrictResolver;

    use crate::SearchHandoff;

    #[test]
    fn query_includes_district_when_known() {
        let cat = RegionCatalog::korea();
        let res = DistrictResolver::new(&cat);
        let p = GeoPoint::new(35.1631, 129.1635);
        let rec = LocationRecord::resolve(cat.by_name("부산").unwrap(), p, &res);

        let handoff = SearchHandoff::for_record(&rec);
        assert_eq!(handoff.query, "부산 해운대구 맛집");
        assert_eq!(handoff.destination, p);
    }

    #[test]
    fn query_without_district() {
        let cat = RegionCatalog::korea();
        let res = DistrictResolver::new(&cat);
        let jeju = cat.by_name("제주").unwrap();
        let rec = LocationRecord::resolve(jeju, jeju.center, &res);

        assert_eq!(SearchHandoff::for_record(&rec).query, "제주 맛집");
    }
}
