// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::sample::build_demo_trip;
use orcast::{TripSummary, aggregates_are_current};
use orcast_domain::{Trip, validate_tree};
use time::macros::date;

#[test]
fn test_demo_trip_shape() {
    let trip: Trip = build_demo_trip().unwrap();

    let summary: TripSummary = TripSummary::from_trip(&trip);
    assert_eq!(summary.days, 3);
    assert_eq!(summary.day_trips, 3);
    assert_eq!(summary.stops, 4);
    assert_eq!(summary.activities, 6);
    assert_eq!(summary.viewing_zones, 4);
    assert_eq!(summary.sightings, 1);
    assert_eq!(summary.best_zone.as_deref(), Some("Haro Strait north"));
    assert_eq!(trip.end_date, date!(2024-07-14));
}

#[test]
fn test_demo_trip_rollups() {
    let trip: Trip = build_demo_trip().unwrap();

    assert!((trip.total_cost - 370.0).abs() < 1e-9);
    assert!((trip.days[1].estimated_cost - 139.0).abs() < 1e-9);
    assert!((trip.overall_probability - 0.400_75).abs() < 1e-9);
    assert!((trip.overall_confidence - 0.675).abs() < 1e-9);
    assert!(aggregates_are_current(&trip));
    assert!(validate_tree(&trip).is_ok());
}
