//! `TravelEstimate` — a travel duration anchored to a departure time.

use std::time::Duration;

use chrono::{DateTime, TimeZone};

use gw_core::GeoPoint;

use crate::{DirectionsResult, DirectionsService};

/// Travel time to a picked location and the implied arrival time.
///
/// Generic over the time zone so arrival can be shown in local time
/// (`chrono::Local`) while tests pin a fixed offset.
#[derive(Clone, Debug, PartialEq)]
pub struct TravelEstimate<Tz: TimeZone> {
    pub travel:  Duration,
    pub arrival: DateTime<Tz>,
}

impl<Tz: TimeZone> TravelEstimate<Tz> {
    /// Estimate departing at `now`.
    pub fn new(travel: Duration, now: DateTime<Tz>) -> Self {
        // Durations beyond chrono's range leave the arrival at `now`.
        let arrival = chrono::Duration::from_std(travel)
            .ok()
            .and_then(|delta| now.clone().checked_add_signed(delta))
            .unwrap_or(now);
        Self { travel, arrival }
    }

    /// Ask `service` for the travel time and anchor it at `now`.
    pub fn request(
        service:     &dyn DirectionsService,
        origin:      GeoPoint,
        destination: GeoPoint,
        now:         DateTime<Tz>,
    ) -> DirectionsResult<Self> {
        let travel = service.estimate(origin, destination)?;
        Ok(Self::new(travel, now))
    }

    /// `"1시간 5분"` when at least an hour, otherwise `"42분"`.  Seconds are
    /// truncated.
    pub fn formatted_travel_time(&self) -> String {
        let total = self.travel.as_secs();
        let hours = total / 3_600;
        let minutes = total % 3_600 / 60;
        if hours > 0 {
            format!("{hours}시간 {minutes}분")
        } else {
            format!("{minutes}분")
        }
    }

    /// `"HH:mm 도착 예정"` in the estimate's time zone.
    pub fn formatted_arrival(&self) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        format!("{} 도착 예정", self.arrival.format("%H:%M"))
    }
}
