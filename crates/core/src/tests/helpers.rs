// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ActivityData, DayData, DayTripData, StopData, TripData, ViewingZoneData, add_activity,
    add_day, add_day_trip, add_stop, add_viewing_zone, create_trip,
};
use orcast_domain::{ActivityType, Trip};
use time::macros::date;

pub const TOLERANCE: f64 = 1e-9;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

/// Ids of the nodes created by [`create_test_branch`].
pub struct Branch {
    pub day_id: String,
    pub day_trip_id: String,
    pub stop_id: String,
    pub activity_id: String,
    pub zone_id: String,
}

pub fn create_test_trip() -> Trip {
    create_trip(TripData {
        start_date: Some(date!(2024-07-01)),
        group_size: Some(4),
        ..TripData::new("San Juan Orca Weekend", 3)
    })
    .unwrap()
}

/// Adds one node at every level: outing cost 50, stop cost 10, activity
/// cost 5 and a zone with probability 0.8 and confidence 0.9.
pub fn create_test_branch(trip: &mut Trip) -> Branch {
    let day_id: String = add_day(trip, DayData::default()).unwrap().id.clone();
    let day_trip_id: String = add_day_trip(
        trip,
        &day_id,
        DayTripData {
            cost: 50.0,
            ..DayTripData::new("West side cruise")
        },
    )
    .unwrap()
    .id
    .clone();
    let stop_id: String = add_stop(
        trip,
        &day_trip_id,
        StopData {
            cost: 10.0,
            ..StopData::new("Lime Kiln Point")
        },
    )
    .unwrap()
    .id
    .clone();
    let activity_id: String = add_activity(
        trip,
        &stop_id,
        ActivityData {
            cost: 5.0,
            ..ActivityData::new("Orca watch", ActivityType::Viewing)
        },
    )
    .unwrap()
    .id
    .clone();
    let zone_id: String = add_viewing_zone(
        trip,
        &activity_id,
        ViewingZoneData::new("Haro Strait north", 0.8, 0.9),
    )
    .unwrap()
    .id
    .clone();

    Branch {
        day_id,
        day_trip_id,
        stop_id,
        activity_id,
        zone_id,
    }
}

pub fn add_test_zone(trip: &mut Trip, activity_id: &str, name: &str, p: f64, c: f64) -> String {
    add_viewing_zone(trip, activity_id, ViewingZoneData::new(name, p, c))
        .unwrap()
        .id
        .clone()
}
