//! Proximity
//!
//! Distance, step and calorie labels for a shop relative to the user's last
//! known position, plus arrival tracking for a walk toward one shop. Positions
//! are plain values handed in by the caller; nothing here talks to a location
//! service.

use std::time::Duration;

use humanize_duration::{Truncate, prelude::DurationExt};

use crate::shops::{GeoPoint, Shop};

/// Mean earth radius in metres.
pub const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// Estimated steps walked per metre.
pub const STEPS_PER_METER: f64 = 1.3;

/// Estimated steps per kilocalorie burned.
pub const STEPS_PER_KCAL: u64 = 20;

/// Distance at which a walker counts as arrived.
pub const ARRIVAL_THRESHOLD_METERS: f64 = 50.0;

/// Great-circle distance between two points, in metres.
pub fn distance_meters(from: GeoPoint, to: GeoPoint) -> f64 {
    let from_lat = from.latitude.to_radians();
    let to_lat = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + from_lat.cos() * to_lat.cos() * (delta_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_METERS * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Estimated steps to walk `meters`, truncated.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "step counts are whole, non-negative and far below u64::MAX"
)]
pub fn steps_for_distance(meters: f64) -> u64 {
    (meters.max(0.0) * STEPS_PER_METER) as u64
}

/// Estimated kilocalories for a step count, truncated.
pub fn calories_for_steps(steps: u64) -> u64 {
    steps / STEPS_PER_KCAL
}

fn format_meters(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{meters:.0} m")
    } else {
        format!("{:.1} km", meters / 1000.0)
    }
}

impl Shop {
    /// Live distance from the user, if both positions are known.
    ///
    /// A shop whose latitude or longitude is exactly zero is treated as having
    /// no coordinate.
    pub fn distance_from(&self, user: Option<GeoPoint>) -> Option<f64> {
        let user = user?;
        let shop = self.coordinate();

        if shop.latitude == 0.0 || shop.longitude == 0.0 {
            return None;
        }

        Some(distance_meters(user, shop))
    }

    /// `"350 m"` or `"1.2 km"`, live when possible, static otherwise.
    pub fn display_distance(&self, user: Option<GeoPoint>) -> String {
        match self.distance_from(user) {
            Some(meters) => format_meters(meters),
            None if self.details().static_distance < 1000 => {
                format!("{} m", self.details().static_distance)
            }
            None => format!("{:.1} km", f64::from(self.details().static_distance) / 1000.0),
        }
    }

    /// `"455 steps"`, live when possible, static otherwise.
    pub fn display_steps(&self, user: Option<GeoPoint>) -> String {
        match self.distance_from(user) {
            Some(meters) => format!("{} steps", steps_for_distance(meters)),
            None => format!("{} steps", self.details().static_steps),
        }
    }

    /// `"22 kcal"`, live when possible, static otherwise.
    pub fn display_calories(&self, user: Option<GeoPoint>) -> String {
        match self.distance_from(user) {
            Some(meters) => format!("{} kcal", calories_for_steps(steps_for_distance(meters))),
            None => format!("{} kcal", self.details().static_calories),
        }
    }
}

/// State of the travel-time estimate from the routing collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteEstimate {
    /// A route has been requested.
    Pending,

    /// The routing request failed.
    Failed,

    /// The routing service found no route.
    NotFound,

    /// Expected travel time.
    Ready(Duration),
}

/// Result of feeding a new position to [`WalkProgress::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WalkStatus {
    /// Still walking, with the remaining straight-line distance.
    EnRoute {
        /// Metres to the destination
        remaining_meters: f64,
    },

    /// This update crossed the arrival threshold.
    JustArrived,

    /// Arrival was already recorded.
    Arrived,
}

/// Tracks a walk toward one destination.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkProgress {
    destination: GeoPoint,
    threshold_meters: f64,
    last_distance: Option<f64>,
    has_arrived: bool,
}

impl WalkProgress {
    /// Start a walk with the default 50 m arrival threshold.
    pub fn new(destination: GeoPoint) -> Self {
        Self::with_threshold(destination, ARRIVAL_THRESHOLD_METERS)
    }

    /// Start a walk with a custom arrival threshold.
    pub fn with_threshold(destination: GeoPoint, threshold_meters: f64) -> Self {
        Self {
            destination,
            threshold_meters,
            last_distance: None,
            has_arrived: false,
        }
    }

    /// Record a new user position. Arrival is sticky once reached.
    pub fn update(&mut self, position: GeoPoint) -> WalkStatus {
        let remaining_meters = distance_meters(position, self.destination);

        self.last_distance = Some(remaining_meters);

        if self.has_arrived {
            return WalkStatus::Arrived;
        }

        if remaining_meters <= self.threshold_meters {
            self.has_arrived = true;

            return WalkStatus::JustArrived;
        }

        WalkStatus::EnRoute { remaining_meters }
    }

    /// Destination of the walk.
    pub fn destination(&self) -> GeoPoint {
        self.destination
    }

    /// Distance at the most recent update.
    pub fn last_distance(&self) -> Option<f64> {
        self.last_distance
    }

    /// Whether the walker has arrived.
    pub fn has_arrived(&self) -> bool {
        self.has_arrived
    }

    /// Label for the ETA badge.
    pub fn eta_label(&self, estimate: RouteEstimate) -> String {
        if self.has_arrived {
            return "Arrived!".to_string();
        }

        match estimate {
            RouteEstimate::Pending => "Calculating route...".to_string(),
            RouteEstimate::Failed => "Failed to load route".to_string(),
            RouteEstimate::NotFound => "Route not found".to_string(),
            RouteEstimate::Ready(travel_time) => {
                format!("{}", travel_time.human(Truncate::Second))
            }
        }
    }
}
