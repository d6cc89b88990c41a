// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The six entity kinds of the trip hierarchy.
//!
//! Every parent owns its children by value in insertion order, so the tree
//! has no cycles and no shared nodes. Fields documented as derived are
//! maintained by the aggregate engine and must not be set by hand.

use crate::embedding::VectorEmbedding;
use crate::formats::{clock, iso_date, unit_interval};
use crate::types::{ActivityType, Coordinates, DayTripKind, GroupSizeRange, Sighting};
use crate::validation::{Entity, EntityKind};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, Time};

/// The whole planned excursion; root of the hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Unique identifier.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Length of the trip in days (at least 1).
    pub duration: u32,
    /// First day of the trip.
    #[serde(with = "iso_date")]
    pub start_date: Date,
    /// Last day of the trip (`start_date + duration - 1`).
    #[serde(with = "iso_date")]
    pub end_date: Date,
    /// Number of travellers.
    pub group_size: u32,
    /// Derived: cost of every day trip, stop and activity.
    pub total_cost: f64,
    /// Derived: mean of `probability × confidence` over all viewing zones.
    pub overall_probability: f64,
    /// Derived: mean confidence over all viewing zones.
    pub overall_confidence: f64,
    /// Days in chronological order.
    pub days: Vec<Day>,
}

/// One calendar day of a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    pub id: String,
    pub trip_id: String,
    /// 1-based position within the trip.
    pub day_number: u32,
    #[serde(with = "iso_date")]
    pub date: Date,
    pub theme: String,
    /// Derived: cost of the day's subtree.
    pub estimated_cost: f64,
    /// Derived: mean of `probability × confidence` over the day's zones.
    pub probability_score: f64,
    pub day_trips: Vec<DayTrip>,
}

/// A scheduled outing within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTrip {
    pub id: String,
    pub day_id: String,
    pub title: String,
    #[serde(with = "clock")]
    pub start_time: Time,
    #[serde(with = "clock")]
    pub end_time: Time,
    /// Minutes between `start_time` and `end_time`.
    pub duration_minutes: u32,
    #[serde(rename = "type")]
    pub kind: DayTripKind,
    pub cost: f64,
    /// Derived: mean of `probability × confidence` over the outing's zones.
    pub probability_score: f64,
    /// Derived: mean confidence over the outing's zones.
    pub confidence: f64,
    pub stops: Vec<Stop>,
}

/// A physical location visited during a day trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub id: String,
    pub day_trip_id: String,
    pub name: String,
    pub coordinates: Coordinates,
    #[serde(with = "clock::option")]
    pub arrival_time: Option<Time>,
    #[serde(with = "clock::option")]
    pub departure_time: Option<Time>,
    pub duration_minutes: u32,
    pub cost: f64,
    /// Caller-supplied estimate, clamped to `[0, 1]`.
    #[serde(deserialize_with = "unit_interval::deserialize")]
    pub probability_score: f64,
    pub activities: Vec<Activity>,
}

/// A specific undertaking at a stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub stop_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub duration_minutes: u32,
    pub cost: f64,
    /// Caller-supplied estimate, clamped to `[0, 1]`.
    #[serde(deserialize_with = "unit_interval::deserialize")]
    pub probability_score: f64,
    pub group_size: GroupSizeRange,
    /// Behaviour labels the activity hopes to observe, without duplicates.
    pub expected_behaviors: Vec<String>,
    pub viewing_zones: Vec<ViewingZone>,
}

/// A precise sub-area with an estimated sighting probability; the leaf level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewingZone {
    pub id: String,
    pub activity_id: String,
    pub name: String,
    pub coordinates: Coordinates,
    /// Sighting probability in `[0, 1]`.
    #[serde(deserialize_with = "unit_interval::deserialize")]
    pub probability: f64,
    /// Confidence in the probability estimate, in `[0, 1]`.
    #[serde(deserialize_with = "unit_interval::deserialize")]
    pub confidence: f64,
    /// Oldest first.
    pub recent_sightings: Vec<Sighting>,
    pub vector_embedding: VectorEmbedding,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
}

impl ViewingZone {
    /// The zone's contribution to probability rollups.
    #[must_use]
    pub fn weighted_probability(&self) -> f64 {
        self.probability * self.confidence
    }
}

impl Entity for Trip {
    const KIND: EntityKind = EntityKind::Trip;
    const PARENT_FIELD: Option<&'static str> = None;
    const LABEL_FIELD: &'static str = "title";

    fn id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self) -> Option<&str> {
        None
    }

    fn label(&self) -> &str {
        &self.title
    }
}

impl Entity for Day {
    const KIND: EntityKind = EntityKind::Day;
    const PARENT_FIELD: Option<&'static str> = Some("tripId");
    const LABEL_FIELD: &'static str = "theme";

    fn id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self) -> Option<&str> {
        Some(&self.trip_id)
    }

    fn label(&self) -> &str {
        &self.theme
    }
}

impl Entity for DayTrip {
    const KIND: EntityKind = EntityKind::DayTrip;
    const PARENT_FIELD: Option<&'static str> = Some("dayId");
    const LABEL_FIELD: &'static str = "title";

    fn id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self) -> Option<&str> {
        Some(&self.day_id)
    }

    fn label(&self) -> &str {
        &self.title
    }
}

impl Entity for Stop {
    const KIND: EntityKind = EntityKind::Stop;
    const PARENT_FIELD: Option<&'static str> = Some("dayTripId");
    const LABEL_FIELD: &'static str = "name";

    fn id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self) -> Option<&str> {
        Some(&self.day_trip_id)
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Entity for Activity {
    const KIND: EntityKind = EntityKind::Activity;
    const PARENT_FIELD: Option<&'static str> = Some("stopId");
    const LABEL_FIELD: &'static str = "title";

    fn id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self) -> Option<&str> {
        Some(&self.stop_id)
    }

    fn label(&self) -> &str {
        &self.title
    }
}

impl Entity for ViewingZone {
    const KIND: EntityKind = EntityKind::ViewingZone;
    const PARENT_FIELD: Option<&'static str> = Some("activityId");
    const LABEL_FIELD: &'static str = "name";

    fn id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self) -> Option<&str> {
        Some(&self.activity_id)
    }

    fn label(&self) -> &str {
        &self.name
    }
}
