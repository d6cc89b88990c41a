// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The builder API: the only sanctioned way to grow a trip.
//!
//! Each call builds and validates the new node before touching the tree, so a
//! failed call leaves the trip exactly as it was. Each successful call ends
//! with [`recalculate`], so stored aggregates are never stale.

use crate::data::{
    ActivityData, DayData, DayTripData, StopData, TripData, ViewingZoneData, ViewingZoneUpdate,
};
use crate::error::CoreError;
use crate::rollup::recalculate;
use orcast_domain::{
    Activity, Day, DayTrip, DomainError, EntityKind, Sighting, Stop, Trip, VectorEmbedding,
    ViewingZone, clamp_unit, finite_or_zero, validate, validate_trip,
};
use time::macros::time;
use time::{Date, Duration, OffsetDateTime, Time};
use tracing::debug;
use uuid::Uuid;

/// Start time given to a day trip that names none.
pub const DEFAULT_DAY_TRIP_START: Time = time!(9:00);

/// End time given to a day trip that names none.
pub const DEFAULT_DAY_TRIP_END: Time = time!(12:00);

/// Number of sightings a viewing zone keeps; older entries are dropped.
pub const MAX_RECENT_SIGHTINGS: usize = 20;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn position(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

fn add_days(date: Date, days: u32, operation: &str) -> Result<Date, DomainError> {
    date.checked_add(Duration::days(i64::from(days)))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: operation.to_string(),
        })
}

/// Minutes from `start` to `end` on the same day.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimeRange` if `end` is before `start`; ranges
/// never wrap past midnight.
fn minutes_between(start: Time, end: Time) -> Result<u32, DomainError> {
    if end < start {
        return Err(DomainError::InvalidTimeRange { start, end });
    }
    let minutes: i64 = (end - start).whole_minutes();
    Ok(u32::try_from(minutes).unwrap_or(u32::MAX))
}

fn keep_recent(sightings: &mut Vec<Sighting>) {
    if sightings.len() > MAX_RECENT_SIGHTINGS {
        let excess: usize = sightings.len() - MAX_RECENT_SIGHTINGS;
        sightings.drain(..excess);
    }
}

fn distinct_labels(labels: Vec<String>) -> Vec<String> {
    let mut distinct: Vec<String> = Vec::with_capacity(labels.len());
    for label in labels {
        let label: String = label.trim().to_string();
        if !label.is_empty() && !distinct.contains(&label) {
            distinct.push(label);
        }
    }
    distinct
}

fn locate_day(trip: &Trip, day_id: &str) -> Option<usize> {
    trip.days.iter().position(|day| day.id == day_id)
}

fn locate_day_trip(trip: &Trip, day_trip_id: &str) -> Option<(usize, usize)> {
    trip.days.iter().enumerate().find_map(|(d, day)| {
        day.day_trips
            .iter()
            .position(|day_trip| day_trip.id == day_trip_id)
            .map(|t| (d, t))
    })
}

fn locate_stop(trip: &Trip, stop_id: &str) -> Option<(usize, usize, usize)> {
    trip.days.iter().enumerate().find_map(|(d, day)| {
        day.day_trips.iter().enumerate().find_map(|(t, day_trip)| {
            day_trip
                .stops
                .iter()
                .position(|stop| stop.id == stop_id)
                .map(|s| (d, t, s))
        })
    })
}

fn locate_activity(trip: &Trip, activity_id: &str) -> Option<(usize, usize, usize, usize)> {
    trip.days.iter().enumerate().find_map(|(d, day)| {
        day.day_trips.iter().enumerate().find_map(|(t, day_trip)| {
            day_trip.stops.iter().enumerate().find_map(|(s, stop)| {
                stop.activities
                    .iter()
                    .position(|activity| activity.id == activity_id)
                    .map(|a| (d, t, s, a))
            })
        })
    })
}

fn locate_zone(trip: &Trip, zone_id: &str) -> Option<(usize, usize, usize, usize, usize)> {
    trip.days.iter().enumerate().find_map(|(d, day)| {
        day.day_trips.iter().enumerate().find_map(|(t, day_trip)| {
            day_trip.stops.iter().enumerate().find_map(|(s, stop)| {
                stop.activities.iter().enumerate().find_map(|(a, activity)| {
                    activity
                        .viewing_zones
                        .iter()
                        .position(|zone| zone.id == zone_id)
                        .map(|z| (d, t, s, a, z))
                })
            })
        })
    })
}

fn parent_not_found(kind: EntityKind, id: &str) -> CoreError {
    CoreError::ParentNotFound {
        kind,
        id: id.to_string(),
    }
}

/// Creates a new, empty trip.
///
/// The end date is `start_date + duration - 1` days and every derived field
/// starts at zero.
///
/// # Arguments
///
/// * `data` - The trip fields; `title` and `duration` are required
///
/// # Returns
///
/// * `Ok(Trip)` with a fresh id and no days
/// * `Err(CoreError)` if validation fails
///
/// # Errors
///
/// Returns an error if:
/// - The title is blank
/// - The duration is zero
/// - The end date overflows the calendar
pub fn create_trip(data: TripData) -> Result<Trip, CoreError> {
    let start_date: Date = data
        .start_date
        .unwrap_or_else(|| OffsetDateTime::now_utc().date());

    let mut trip: Trip = Trip {
        id: new_id(),
        title: data.title,
        duration: data.duration,
        start_date,
        end_date: start_date,
        group_size: data.group_size.unwrap_or(1),
        total_cost: 0.0,
        overall_probability: 0.0,
        overall_confidence: 0.0,
        days: Vec::new(),
    };
    validate_trip(&trip)?;

    trip.end_date = add_days(start_date, trip.duration - 1, "calculating trip end date")?;

    debug!(trip_id = %trip.id, duration = trip.duration, "Created trip");
    Ok(trip)
}

/// Appends a day to the trip.
///
/// The day number is the day's 1-based position; days cannot be reordered.
///
/// # Errors
///
/// Returns an error if:
/// - The supplied theme is blank
/// - The default date overflows the calendar
pub fn add_day(trip: &mut Trip, data: DayData) -> Result<&Day, CoreError> {
    let index: usize = trip.days.len();
    let day_number: u32 = position(index);

    let date: Date = match data.date {
        Some(date) => date,
        None => add_days(trip.start_date, day_number - 1, "calculating day date")?,
    };

    let day: Day = Day {
        id: new_id(),
        trip_id: trip.id.clone(),
        day_number,
        date,
        theme: data.theme.unwrap_or_else(|| format!("Day {day_number}")),
        estimated_cost: 0.0,
        probability_score: 0.0,
        day_trips: Vec::new(),
    };
    validate(&day)?;

    debug!(trip_id = %trip.id, day_id = %day.id, day_number, "Added day");
    trip.days.push(day);
    recalculate(trip);
    Ok(&trip.days[index])
}

/// Appends a day trip to the day with id `day_id`.
///
/// A non-finite cost is stored as 0 so the trip stays exportable.
///
/// # Errors
///
/// Returns an error if:
/// - No day has id `day_id`
/// - The title is blank
/// - The end time is before the start time
pub fn add_day_trip<'a>(
    trip: &'a mut Trip,
    day_id: &str,
    data: DayTripData,
) -> Result<&'a DayTrip, CoreError> {
    let d: usize =
        locate_day(trip, day_id).ok_or_else(|| parent_not_found(EntityKind::Day, day_id))?;

    let start_time: Time = data.start_time.unwrap_or(DEFAULT_DAY_TRIP_START);
    let end_time: Time = data.end_time.unwrap_or(DEFAULT_DAY_TRIP_END);
    let duration_minutes: u32 = minutes_between(start_time, end_time)?;

    let day_trip: DayTrip = DayTrip {
        id: new_id(),
        day_id: day_id.to_string(),
        title: data.title,
        start_time,
        end_time,
        duration_minutes,
        kind: data.kind,
        cost: finite_or_zero(data.cost),
        probability_score: 0.0,
        confidence: 0.0,
        stops: Vec::new(),
    };
    validate(&day_trip)?;

    debug!(day_id, day_trip_id = %day_trip.id, "Added day trip");
    let day_trips: &mut Vec<DayTrip> = &mut trip.days[d].day_trips;
    let t: usize = day_trips.len();
    day_trips.push(day_trip);
    recalculate(trip);
    Ok(&trip.days[d].day_trips[t])
}

/// Appends a stop to the day trip with id `day_trip_id`.
///
/// When both arrival and departure are given the stop's duration is derived
/// from them; otherwise the supplied duration is kept.
///
/// # Errors
///
/// Returns an error if:
/// - No day trip has id `day_trip_id`
/// - The name is blank
/// - The departure time is before the arrival time
pub fn add_stop<'a>(
    trip: &'a mut Trip,
    day_trip_id: &str,
    data: StopData,
) -> Result<&'a Stop, CoreError> {
    let (d, t): (usize, usize) = locate_day_trip(trip, day_trip_id)
        .ok_or_else(|| parent_not_found(EntityKind::DayTrip, day_trip_id))?;

    let duration_minutes: u32 = match (data.arrival_time, data.departure_time) {
        (Some(arrival), Some(departure)) => minutes_between(arrival, departure)?,
        _ => data.duration_minutes,
    };

    let stop: Stop = Stop {
        id: new_id(),
        day_trip_id: day_trip_id.to_string(),
        name: data.name,
        coordinates: data.coordinates.finite(),
        arrival_time: data.arrival_time,
        departure_time: data.departure_time,
        duration_minutes,
        cost: finite_or_zero(data.cost),
        probability_score: clamp_unit(data.probability_score),
        activities: Vec::new(),
    };
    validate(&stop)?;

    debug!(day_trip_id, stop_id = %stop.id, "Added stop");
    let stops: &mut Vec<Stop> = &mut trip.days[d].day_trips[t].stops;
    let s: usize = stops.len();
    stops.push(stop);
    recalculate(trip);
    Ok(&trip.days[d].day_trips[t].stops[s])
}

/// Appends an activity to the stop with id `stop_id`.
///
/// # Errors
///
/// Returns an error if:
/// - No stop has id `stop_id`
/// - The title is blank
pub fn add_activity<'a>(
    trip: &'a mut Trip,
    stop_id: &str,
    data: ActivityData,
) -> Result<&'a Activity, CoreError> {
    let (d, t, s): (usize, usize, usize) =
        locate_stop(trip, stop_id).ok_or_else(|| parent_not_found(EntityKind::Stop, stop_id))?;

    let activity: Activity = Activity {
        id: new_id(),
        stop_id: stop_id.to_string(),
        title: data.title,
        activity_type: data.activity_type,
        duration_minutes: data.duration_minutes,
        cost: finite_or_zero(data.cost),
        probability_score: clamp_unit(data.probability_score),
        group_size: data.group_size,
        expected_behaviors: distinct_labels(data.expected_behaviors),
        viewing_zones: Vec::new(),
    };
    validate(&activity)?;

    debug!(stop_id, activity_id = %activity.id, "Added activity");
    let activities: &mut Vec<Activity> = &mut trip.days[d].day_trips[t].stops[s].activities;
    let a: usize = activities.len();
    activities.push(activity);
    recalculate(trip);
    Ok(&trip.days[d].day_trips[t].stops[s].activities[a])
}

/// Appends a viewing zone to the activity with id `activity_id`.
///
/// Probability and confidence are clamped to `[0, 1]`, the embedding is
/// normalised to its fixed dimension and `last_updated` is set to now.
///
/// # Errors
///
/// Returns an error if:
/// - No activity has id `activity_id`
/// - The name is blank
pub fn add_viewing_zone<'a>(
    trip: &'a mut Trip,
    activity_id: &str,
    data: ViewingZoneData,
) -> Result<&'a ViewingZone, CoreError> {
    let (d, t, s, a): (usize, usize, usize, usize) = locate_activity(trip, activity_id)
        .ok_or_else(|| parent_not_found(EntityKind::Activity, activity_id))?;

    let mut recent_sightings: Vec<Sighting> = data.recent_sightings;
    keep_recent(&mut recent_sightings);

    let zone: ViewingZone = ViewingZone {
        id: new_id(),
        activity_id: activity_id.to_string(),
        name: data.name,
        coordinates: data.coordinates.finite(),
        probability: clamp_unit(data.probability),
        confidence: clamp_unit(data.confidence),
        recent_sightings,
        vector_embedding: data
            .features
            .map_or_else(VectorEmbedding::zeros, VectorEmbedding::from),
        last_updated: OffsetDateTime::now_utc(),
    };
    validate(&zone)?;

    debug!(
        activity_id,
        zone_id = %zone.id,
        probability = zone.probability,
        confidence = zone.confidence,
        "Added viewing zone"
    );
    let zones: &mut Vec<ViewingZone> =
        &mut trip.days[d].day_trips[t].stops[s].activities[a].viewing_zones;
    let z: usize = zones.len();
    zones.push(zone);
    recalculate(trip);
    Ok(&trip.days[d].day_trips[t].stops[s].activities[a].viewing_zones[z])
}

fn zone_mut<'a>(
    trip: &'a mut Trip,
    zone_id: &str,
) -> Result<&'a mut ViewingZone, CoreError> {
    let (d, t, s, a, z) = locate_zone(trip, zone_id).ok_or_else(|| CoreError::EntityNotFound {
        kind: EntityKind::ViewingZone,
        id: zone_id.to_string(),
    })?;
    Ok(&mut trip.days[d].day_trips[t].stops[s].activities[a].viewing_zones[z])
}

/// Applies changes to a viewing zone and re-stamps `last_updated`.
///
/// # Errors
///
/// Returns an error if:
/// - No zone has id `zone_id`
/// - The new name is blank
pub fn update_viewing_zone<'a>(
    trip: &'a mut Trip,
    zone_id: &str,
    update: ViewingZoneUpdate,
) -> Result<&'a ViewingZone, CoreError> {
    let zone: &mut ViewingZone = zone_mut(trip, zone_id)?;

    let mut updated: ViewingZone = zone.clone();
    if let Some(name) = update.name {
        updated.name = name;
    }
    if let Some(coordinates) = update.coordinates {
        updated.coordinates = coordinates.finite();
    }
    if let Some(probability) = update.probability {
        updated.probability = clamp_unit(probability);
    }
    if let Some(confidence) = update.confidence {
        updated.confidence = clamp_unit(confidence);
    }
    if let Some(features) = update.features {
        updated.vector_embedding = VectorEmbedding::from(features);
    }
    updated.last_updated = OffsetDateTime::now_utc();
    validate(&updated)?;

    debug!(
        zone_id,
        probability = updated.probability,
        confidence = updated.confidence,
        "Updated viewing zone"
    );
    *zone = updated;
    recalculate(trip);
    zone_by_id(trip, zone_id)
}

/// Appends a sighting to a viewing zone, keeping only the most recent
/// [`MAX_RECENT_SIGHTINGS`], and re-stamps `last_updated`.
///
/// # Errors
///
/// Returns an error if no zone has id `zone_id`.
pub fn record_sighting<'a>(
    trip: &'a mut Trip,
    zone_id: &str,
    sighting: Sighting,
) -> Result<&'a ViewingZone, CoreError> {
    let zone: &mut ViewingZone = zone_mut(trip, zone_id)?;
    zone.recent_sightings.push(sighting);
    keep_recent(&mut zone.recent_sightings);
    zone.last_updated = OffsetDateTime::now_utc();

    debug!(zone_id, sightings = zone.recent_sightings.len(), "Recorded sighting");
    recalculate(trip);
    zone_by_id(trip, zone_id)
}

fn zone_by_id<'a>(trip: &'a Trip, zone_id: &str) -> Result<&'a ViewingZone, CoreError> {
    crate::query::find_viewing_zone(trip, zone_id)
        .map(|found| found.zone)
        .ok_or_else(|| CoreError::EntityNotFound {
            kind: EntityKind::ViewingZone,
            id: zone_id.to_string(),
        })
}
