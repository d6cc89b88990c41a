// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Partial data accepted by the builder calls.
//!
//! Every field has a default, so callers name only what they know and use
//! struct update syntax for the rest:
//!
//! ```
//! use orcast::StopData;
//!
//! let stop: StopData = StopData {
//!     cost: 12.5,
//!     ..StopData::new("Lime Kiln Point")
//! };
//! assert_eq!(stop.duration_minutes, 0);
//! ```

use orcast_domain::{ActivityType, Coordinates, DayTripKind, GroupSizeRange, Sighting};
use time::{Date, Time};

/// Input for [`create_trip`](crate::create_trip).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TripData {
    /// Required.
    pub title: String,
    /// Required; at least 1.
    pub duration: u32,
    /// Defaults to today (UTC).
    pub start_date: Option<Date>,
    /// Defaults to 1.
    pub group_size: Option<u32>,
}

impl TripData {
    /// Creates trip data with the two required fields.
    #[must_use]
    pub fn new(title: &str, duration: u32) -> Self {
        Self {
            title: title.to_string(),
            duration,
            ..Self::default()
        }
    }
}

/// Input for [`add_day`](crate::add_day).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DayData {
    /// Defaults to the trip start date plus the day's index.
    pub date: Option<Date>,
    /// Defaults to `"Day {n}"`.
    pub theme: Option<String>,
}

/// Input for [`add_day_trip`](crate::add_day_trip).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DayTripData {
    /// Required.
    pub title: String,
    /// Defaults to 09:00.
    pub start_time: Option<Time>,
    /// Defaults to 12:00.
    pub end_time: Option<Time>,
    pub kind: DayTripKind,
    /// Non-finite values are stored as 0.
    pub cost: f64,
}

impl DayTripData {
    /// Creates day trip data with the required title.
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }
}

/// Input for [`add_stop`](crate::add_stop).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StopData {
    /// Required.
    pub name: String,
    pub coordinates: Coordinates,
    pub arrival_time: Option<Time>,
    pub departure_time: Option<Time>,
    /// Ignored when both arrival and departure are given.
    pub duration_minutes: u32,
    /// Non-finite values are stored as 0.
    pub cost: f64,
    /// Clamped to `[0, 1]`.
    pub probability_score: f64,
}

impl StopData {
    /// Creates stop data with the required name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

/// Input for [`add_activity`](crate::add_activity).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActivityData {
    /// Required.
    pub title: String,
    pub activity_type: ActivityType,
    pub duration_minutes: u32,
    /// Non-finite values are stored as 0.
    pub cost: f64,
    /// Clamped to `[0, 1]`.
    pub probability_score: f64,
    /// Defaults to `{ min: 1, max: 10, optimal: 4 }`.
    pub group_size: GroupSizeRange,
    /// Blank and repeated labels are dropped.
    pub expected_behaviors: Vec<String>,
}

impl ActivityData {
    /// Creates activity data with the required title and a type.
    #[must_use]
    pub fn new(title: &str, activity_type: ActivityType) -> Self {
        Self {
            title: title.to_string(),
            activity_type,
            ..Self::default()
        }
    }
}

/// Input for [`add_viewing_zone`](crate::add_viewing_zone).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewingZoneData {
    /// Required.
    pub name: String,
    pub coordinates: Coordinates,
    /// Clamped to `[0, 1]`.
    pub probability: f64,
    /// Clamped to `[0, 1]`.
    pub confidence: f64,
    /// Oldest first; only the most recent entries are kept.
    pub recent_sightings: Vec<Sighting>,
    /// Zero-padded or truncated to the embedding dimension. `None` stores
    /// the zero vector.
    pub features: Option<Vec<f32>>,
}

impl ViewingZoneData {
    /// Creates zone data with the required name and the two estimates.
    #[must_use]
    pub fn new(name: &str, probability: f64, confidence: f64) -> Self {
        Self {
            name: name.to_string(),
            probability,
            confidence,
            ..Self::default()
        }
    }
}

/// Changes applied by [`update_viewing_zone`](crate::update_viewing_zone).
///
/// `None` leaves the field as it is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewingZoneUpdate {
    pub name: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub probability: Option<f64>,
    pub confidence: Option<f64>,
    pub features: Option<Vec<f32>>,
}
