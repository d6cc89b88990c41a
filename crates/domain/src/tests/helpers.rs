// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Activity, ActivityType, Coordinates, Day, DayTrip, DayTripKind, GroupSizeRange, Stop, Trip,
    VectorEmbedding, ViewingZone,
};
use time::macros::{date, datetime, time};

pub fn create_test_trip() -> Trip {
    Trip {
        id: String::from("trip-1"),
        title: String::from("San Juan Orca Weekend"),
        duration: 2,
        start_date: date!(2024-07-01),
        end_date: date!(2024-07-02),
        group_size: 4,
        total_cost: 0.0,
        overall_probability: 0.0,
        overall_confidence: 0.0,
        days: Vec::new(),
    }
}

pub fn create_test_zone(id: &str, activity_id: &str) -> ViewingZone {
    ViewingZone {
        id: id.to_string(),
        activity_id: activity_id.to_string(),
        name: String::from("Haro Strait north"),
        coordinates: Coordinates::new(48.55, -123.17),
        probability: 0.8,
        confidence: 0.9,
        recent_sightings: Vec::new(),
        vector_embedding: VectorEmbedding::zeros(),
        last_updated: datetime!(2024-07-01 8:00 UTC),
    }
}

/// A single-branch tree: one of every level, ids `trip-1`, `day-1`, `dt-1`,
/// `stop-1`, `act-1`, `zone-1`.
pub fn create_test_tree() -> Trip {
    let mut trip: Trip = create_test_trip();

    let activity: Activity = Activity {
        id: String::from("act-1"),
        stop_id: String::from("stop-1"),
        title: String::from("Orca watch"),
        activity_type: ActivityType::Viewing,
        duration_minutes: 60,
        cost: 5.0,
        probability_score: 0.7,
        group_size: GroupSizeRange::default(),
        expected_behaviors: vec![String::from("breaching")],
        viewing_zones: vec![create_test_zone("zone-1", "act-1")],
    };

    let stop: Stop = Stop {
        id: String::from("stop-1"),
        day_trip_id: String::from("dt-1"),
        name: String::from("Lime Kiln Point"),
        coordinates: Coordinates::new(48.516, -123.152),
        arrival_time: Some(time!(9:30)),
        departure_time: Some(time!(11:00)),
        duration_minutes: 90,
        cost: 10.0,
        probability_score: 0.6,
        activities: vec![activity],
    };

    let day_trip: DayTrip = DayTrip {
        id: String::from("dt-1"),
        day_id: String::from("day-1"),
        title: String::from("West side cruise"),
        start_time: time!(9:00),
        end_time: time!(12:00),
        duration_minutes: 180,
        kind: DayTripKind::Boat,
        cost: 50.0,
        probability_score: 0.0,
        confidence: 0.0,
        stops: vec![stop],
    };

    trip.days.push(Day {
        id: String::from("day-1"),
        trip_id: String::from("trip-1"),
        day_number: 1,
        date: date!(2024-07-01),
        theme: String::from("Arrival"),
        estimated_cost: 0.0,
        probability_score: 0.0,
        day_trips: vec![day_trip],
    });

    trip
}
