// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The San Juan Islands demo trip.

use orcast::{
    ActivityData, CoreError, DayData, DayTripData, StopData, TripData, ViewingZoneData,
    add_activity, add_day, add_day_trip, add_stop, add_viewing_zone, create_trip, record_sighting,
};
use orcast_domain::{ActivityType, Coordinates, DayTripKind, GroupSizeRange, Sighting, Trip};
use time::macros::{date, datetime, time};

/// Builds a three-day orca watching trip around San Juan Island.
///
/// # Errors
///
/// Returns an error only if a builder call rejects the fixed data.
pub fn build_demo_trip() -> Result<Trip, CoreError> {
    let mut trip: Trip = create_trip(TripData {
        start_date: Some(date!(2024-07-12)),
        group_size: Some(4),
        ..TripData::new("San Juan Islands Orca Weekend", 3)
    })?;

    // Day 1: west side by boat.
    let day_id: String = add_day(
        &mut trip,
        DayData {
            theme: Some(String::from("West side waters")),
            ..DayData::default()
        },
    )?
    .id
    .clone();
    let cruise_id: String = add_day_trip(
        &mut trip,
        &day_id,
        DayTripData {
            start_time: Some(time!(8:30)),
            end_time: Some(time!(12:30)),
            kind: DayTripKind::Boat,
            cost: 189.0,
            ..DayTripData::new("Haro Strait whale cruise")
        },
    )?
    .id
    .clone();
    let stop_id: String = add_stop(
        &mut trip,
        &cruise_id,
        StopData {
            coordinates: Coordinates::new(48.516, -123.152),
            arrival_time: Some(time!(9:15)),
            departure_time: Some(time!(10:45)),
            probability_score: 0.8,
            ..StopData::new("Off Lime Kiln Point")
        },
    )?
    .id
    .clone();
    let watch_id: String = add_activity(
        &mut trip,
        &stop_id,
        ActivityData {
            duration_minutes: 90,
            probability_score: 0.75,
            group_size: GroupSizeRange {
                min: 1,
                max: 40,
                optimal: 12,
            },
            expected_behaviors: vec![
                String::from("foraging"),
                String::from("breaching"),
                String::from("spyhopping"),
            ],
            ..ActivityData::new("Southern Resident watch", ActivityType::Viewing)
        },
    )?
    .id
    .clone();
    let haro_id: String = add_viewing_zone(
        &mut trip,
        &watch_id,
        ViewingZoneData {
            coordinates: Coordinates::new(48.52, -123.18),
            features: Some(vec![0.8, 0.6, 0.9, 0.4]),
            ..ViewingZoneData::new("Haro Strait north", 0.82, 0.9)
        },
    )?
    .id
    .clone();
    add_viewing_zone(
        &mut trip,
        &watch_id,
        ViewingZoneData {
            coordinates: Coordinates::new(48.47, -123.09),
            ..ViewingZoneData::new("False Bay approach", 0.45, 0.6)
        },
    )?;
    record_sighting(
        &mut trip,
        &haro_id,
        Sighting {
            behavior: Some(String::from("foraging along the kelp line")),
            ..Sighting::new(datetime!(2024-07-10 7:40 UTC), "orca", 7)
        },
    )?;

    // Day 2: shore watching and a paddle.
    let day_id: String = add_day(
        &mut trip,
        DayData {
            theme: Some(String::from("Shoreline")),
            ..DayData::default()
        },
    )?
    .id
    .clone();
    let shore_id: String = add_day_trip(
        &mut trip,
        &day_id,
        DayTripData {
            start_time: Some(time!(10:00)),
            end_time: Some(time!(16:00)),
            kind: DayTripKind::Mixed,
            cost: 25.0,
            ..DayTripData::new("Lime Kiln and kayak")
        },
    )?
    .id
    .clone();
    let park_id: String = add_stop(
        &mut trip,
        &shore_id,
        StopData {
            coordinates: Coordinates::new(48.515, -123.152),
            duration_minutes: 120,
            cost: 10.0,
            probability_score: 0.6,
            ..StopData::new("Lime Kiln Point State Park")
        },
    )?
    .id
    .clone();
    let lighthouse_id: String = add_activity(
        &mut trip,
        &park_id,
        ActivityData {
            duration_minutes: 120,
            probability_score: 0.6,
            expected_behaviors: vec![String::from("traveling")],
            ..ActivityData::new("Lighthouse watch", ActivityType::Viewing)
        },
    )?
    .id
    .clone();
    add_viewing_zone(
        &mut trip,
        &lighthouse_id,
        ViewingZoneData {
            coordinates: Coordinates::new(48.515, -123.155),
            ..ViewingZoneData::new("Lighthouse rocks", 0.6, 0.7)
        },
    )?;
    add_activity(
        &mut trip,
        &park_id,
        ActivityData {
            duration_minutes: 45,
            ..ActivityData::new("Interpretive center", ActivityType::Education)
        },
    )?;
    let bay_id: String = add_stop(
        &mut trip,
        &shore_id,
        StopData {
            coordinates: Coordinates::new(48.557, -123.173),
            arrival_time: Some(time!(13:00)),
            departure_time: Some(time!(15:30)),
            cost: 15.0,
            probability_score: 0.35,
            ..StopData::new("Smallpox Bay")
        },
    )?
    .id
    .clone();
    let kayak_id: String = add_activity(
        &mut trip,
        &bay_id,
        ActivityData {
            duration_minutes: 150,
            cost: 89.0,
            probability_score: 0.35,
            group_size: GroupSizeRange {
                min: 2,
                max: 12,
                optimal: 6,
            },
            ..ActivityData::new("Guided sea kayak", ActivityType::Kayaking)
        },
    )?
    .id
    .clone();
    add_viewing_zone(
        &mut trip,
        &kayak_id,
        ViewingZoneData::new("Open water off Smallpox Bay", 0.35, 0.5),
    )?;

    // Day 3: town and ferry home.
    let day_id: String = add_day(
        &mut trip,
        DayData {
            theme: Some(String::from("Friday Harbor")),
            ..DayData::default()
        },
    )?
    .id
    .clone();
    let town_id: String = add_day_trip(
        &mut trip,
        &day_id,
        DayTripData {
            kind: DayTripKind::Land,
            ..DayTripData::new("Friday Harbor morning")
        },
    )?
    .id
    .clone();
    let museum_id: String = add_stop(
        &mut trip,
        &town_id,
        StopData {
            coordinates: Coordinates::new(48.535, -123.014),
            duration_minutes: 60,
            cost: 12.0,
            ..StopData::new("The Whale Museum")
        },
    )?
    .id
    .clone();
    add_activity(
        &mut trip,
        &museum_id,
        ActivityData {
            duration_minutes: 60,
            ..ActivityData::new("Orca ID workshop", ActivityType::Education)
        },
    )?;
    add_activity(
        &mut trip,
        &museum_id,
        ActivityData {
            duration_minutes: 45,
            cost: 30.0,
            ..ActivityData::new("Harbor lunch", ActivityType::Dining)
        },
    )?;

    Ok(trip)
}
