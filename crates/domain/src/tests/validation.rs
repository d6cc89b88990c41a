// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_trip, create_test_tree, create_test_zone};
use crate::{DomainError, EntityKind, Trip, ViewingZone, validate, validate_tree, validate_trip};

#[test]
fn test_validate_accepts_complete_trip() {
    let trip: Trip = create_test_trip();

    let result: Result<(), DomainError> = validate(&trip);
    assert!(result.is_ok());
}

#[test]
fn test_validate_rejects_blank_trip_title() {
    let mut trip: Trip = create_test_trip();
    trip.title = String::from("   ");

    let result: Result<(), DomainError> = validate(&trip);
    assert_eq!(
        result,
        Err(DomainError::MissingFields {
            kind: EntityKind::Trip,
            fields: vec!["title"],
        })
    );
}

#[test]
fn test_validate_names_every_missing_field() {
    let mut zone: ViewingZone = create_test_zone("", "");
    zone.name = String::new();

    let result: Result<(), DomainError> = validate(&zone);
    assert_eq!(
        result,
        Err(DomainError::MissingFields {
            kind: EntityKind::ViewingZone,
            fields: vec!["id", "activityId", "name"],
        })
    );
}

#[test]
fn test_validate_ignores_out_of_range_probability() {
    let mut zone: ViewingZone = create_test_zone("zone-1", "act-1");
    zone.probability = 4.2;

    assert!(validate(&zone).is_ok());
}

#[test]
fn test_validate_trip_rejects_zero_duration() {
    let mut trip: Trip = create_test_trip();
    trip.duration = 0;

    let result: Result<(), DomainError> = validate_trip(&trip);
    assert_eq!(result, Err(DomainError::InvalidDuration { days: 0 }));
}

#[test]
fn test_validate_tree_accepts_consistent_tree() {
    let trip: Trip = create_test_tree();

    assert!(validate_tree(&trip).is_ok());
}

#[test]
fn test_validate_tree_rejects_parent_mismatch() {
    let mut trip: Trip = create_test_tree();
    trip.days[0].day_trips[0].stops[0].day_trip_id = String::from("dt-other");

    let result: Result<(), DomainError> = validate_tree(&trip);
    assert_eq!(
        result,
        Err(DomainError::ParentMismatch {
            kind: EntityKind::Stop,
            id: String::from("stop-1"),
            expected: String::from("dt-1"),
            actual: String::from("dt-other"),
        })
    );
}

#[test]
fn test_validate_tree_rejects_blank_descendant() {
    let mut trip: Trip = create_test_tree();
    trip.days[0].day_trips[0].stops[0].activities[0].title = String::new();

    let result: Result<(), DomainError> = validate_tree(&trip);
    assert!(matches!(
        result,
        Err(DomainError::MissingFields {
            kind: EntityKind::Activity,
            ..
        })
    ));
}

#[test]
fn test_validate_tree_rejects_day_number_gap() {
    let mut trip: Trip = create_test_tree();
    trip.days[0].day_number = 2;

    let result: Result<(), DomainError> = validate_tree(&trip);
    assert_eq!(
        result,
        Err(DomainError::DayNumberOutOfSequence {
            expected: 1,
            actual: 2,
        })
    );
}

#[test]
fn test_validate_tree_rejects_duplicate_ids() {
    let mut trip: Trip = create_test_tree();
    let activity = &mut trip.days[0].day_trips[0].stops[0].activities[0];
    activity
        .viewing_zones
        .push(create_test_zone("zone-1", "act-1"));

    let result: Result<(), DomainError> = validate_tree(&trip);
    assert_eq!(result, Err(DomainError::DuplicateId(String::from("zone-1"))));
}
