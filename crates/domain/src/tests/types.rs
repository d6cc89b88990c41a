// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::formats::{CLOCK_FORMAT, DATE_FORMAT};
use crate::tests::helpers::create_test_tree;
use crate::{
    ActivityType, Coordinates, DayTripKind, DomainError, GroupSizeRange, Trip,
    clamp_unit, finite_or_zero,
};
use std::str::FromStr;
use time::macros::{date, time};
use time::{Date, Time};

#[test]
fn test_clamp_unit_limits_range() {
    assert!((clamp_unit(1.7) - 1.0).abs() < f64::EPSILON);
    assert!(clamp_unit(-0.3).abs() < f64::EPSILON);
    assert!((clamp_unit(0.42) - 0.42).abs() < f64::EPSILON);
}

#[test]
fn test_clamp_unit_maps_nan_to_zero() {
    assert!(clamp_unit(f64::NAN).abs() < f64::EPSILON);
}

#[test]
fn test_group_size_default() {
    let range: GroupSizeRange = GroupSizeRange::default();

    assert_eq!(range.min, 1);
    assert_eq!(range.max, 10);
    assert_eq!(range.optimal, 4);
    assert!(range.accommodates(4));
    assert!(!range.accommodates(11));
}

#[test]
fn test_activity_type_parses_case_insensitively() {
    assert_eq!(
        ActivityType::from_str("Photography"),
        Ok(ActivityType::Photography)
    );
    assert_eq!(
        ActivityType::from_str("surfing"),
        Err(DomainError::InvalidActivityType(String::from("surfing")))
    );
}

#[test]
fn test_day_trip_kind_round_trips_through_display() {
    for kind in [DayTripKind::Land, DayTripKind::Boat, DayTripKind::Mixed] {
        assert_eq!(DayTripKind::from_str(&kind.to_string()), Ok(kind));
    }
}

#[test]
fn test_clock_and_date_formats() {
    assert_eq!(time!(9:05).format(CLOCK_FORMAT).unwrap(), "09:05");
    assert_eq!(Time::parse("17:45", CLOCK_FORMAT).unwrap(), time!(17:45));
    assert!(Time::parse("25:00", CLOCK_FORMAT).is_err());

    assert_eq!(date!(2024-07-03).format(DATE_FORMAT).unwrap(), "2024-07-03");
    assert_eq!(
        Date::parse("2024-02-29", DATE_FORMAT).unwrap(),
        date!(2024-02-29)
    );
    assert!(Date::parse("2023-02-29", DATE_FORMAT).is_err());
}

#[test]
fn test_finite_or_zero_replaces_non_finite_amounts() {
    assert!((finite_or_zero(42.5) - 42.5).abs() < f64::EPSILON);
    assert!(finite_or_zero(f64::INFINITY).abs() < f64::EPSILON);
    assert!(finite_or_zero(f64::NEG_INFINITY).abs() < f64::EPSILON);
    assert!(finite_or_zero(f64::NAN).abs() < f64::EPSILON);

    let coordinates: Coordinates = Coordinates::new(f64::NAN, -123.15).finite();
    assert!(coordinates.lat.abs() < f64::EPSILON);
    assert!((coordinates.lng + 123.15).abs() < f64::EPSILON);
}

#[test]
fn test_entity_document_uses_camel_case_and_iso_strings() {
    let trip: Trip = create_test_tree();
    let value: serde_json::Value = serde_json::to_value(&trip).unwrap();

    assert_eq!(value["startDate"], "2024-07-01");
    assert_eq!(value["days"][0]["dayTrips"][0]["startTime"], "09:00");
    assert_eq!(value["days"][0]["dayTrips"][0]["type"], "boat");

    let zone: &serde_json::Value =
        &value["days"][0]["dayTrips"][0]["stops"][0]["activities"][0]["viewingZones"][0];
    assert_eq!(zone["lastUpdated"], "2024-07-01T08:00:00Z");
    assert_eq!(zone["vectorEmbedding"].as_array().unwrap().len(), 128);
}

#[test]
fn test_entity_document_clamps_scores_on_read() {
    let trip: Trip = create_test_tree();
    let mut value: serde_json::Value = serde_json::to_value(&trip).unwrap();
    let stop: &mut serde_json::Value = &mut value["days"][0]["dayTrips"][0]["stops"][0];
    stop["probabilityScore"] = serde_json::Value::from(-2.0);
    stop["activities"][0]["probabilityScore"] = serde_json::Value::from(3.0);
    stop["activities"][0]["viewingZones"][0]["probability"] = serde_json::Value::from(7.5);
    stop["activities"][0]["viewingZones"][0]["confidence"] = serde_json::Value::from(-0.4);

    let read: Trip = serde_json::from_value(value).unwrap();

    let stop = &read.days[0].day_trips[0].stops[0];
    assert!(stop.probability_score.abs() < f64::EPSILON);
    assert!((stop.activities[0].probability_score - 1.0).abs() < f64::EPSILON);
    let zone = &stop.activities[0].viewing_zones[0];
    assert!((zone.probability - 1.0).abs() < f64::EPSILON);
    assert!(zone.confidence.abs() < f64::EPSILON);
}

#[test]
fn test_entity_document_rejects_malformed_clock() {
    let trip: Trip = create_test_tree();
    let mut value: serde_json::Value = serde_json::to_value(&trip).unwrap();
    value["days"][0]["dayTrips"][0]["startTime"] = serde_json::Value::from("9 o'clock");

    assert!(serde_json::from_value::<Trip>(value).is_err());
}
