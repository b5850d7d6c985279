//! Directions trait and an offline great-circle estimator.
//!
//! # Pluggability
//!
//! Callers ask for travel time through [`DirectionsService`], so a real
//! driving-directions provider can replace [`GreatCircleDirections`] without
//! touching anything else.

use std::time::Duration;

use gw_core::GeoPoint;

use crate::{DirectionsError, DirectionsResult};

/// Estimated travel time between two coordinates.
///
/// Implementations must be `Send + Sync` so one service can be shared by
/// concurrent UI actions.
pub trait DirectionsService: Send + Sync {
    fn estimate(&self, origin: GeoPoint, destination: GeoPoint) -> DirectionsResult<Duration>;
}

/// Straight-line distance at a fixed average speed.
///
/// Useful offline and in tests; real road routes are always longer.
#[derive(Copy, Clone, Debug)]
pub struct GreatCircleDirections {
    speed_kmh: f64,
}

impl GreatCircleDirections {
    /// Typical urban driving speed.
    pub const DEFAULT_SPEED_KMH: f64 = 30.0;

    /// Estimator at `speed_kmh`.  Non-positive or non-finite speeds fall back
    /// to [`DEFAULT_SPEED_KMH`][Self::DEFAULT_SPEED_KMH].
    pub fn new(speed_kmh: f64) -> Self {
        let speed_kmh = if speed_kmh.is_finite() && speed_kmh > 0.0 {
            speed_kmh
        } else {
            Self::DEFAULT_SPEED_KMH
        };
        Self { speed_kmh }
    }

    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }
}

impl Default for GreatCircleDirections {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SPEED_KMH)
    }
}

impl DirectionsService for GreatCircleDirections {
    fn estimate(&self, origin: GeoPoint, destination: GeoPoint) -> DirectionsResult<Duration> {
        let metres = origin.distance_m(destination);
        let secs = metres / (self.speed_kmh * 1_000.0 / 3_600.0);
        // NaN coordinates or a vanishing speed leave no representable duration.
        Duration::try_from_secs_f64(secs)
            .map_err(|_| DirectionsError::NoRoute { from: origin, to: destination })
    }
}
