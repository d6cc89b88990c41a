// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{TripSummary, record_sighting};
use orcast_domain::{Sighting, Trip};
use time::macros::datetime;

use super::helpers::{Branch, add_test_zone, assert_close, create_test_branch, create_test_trip};

#[test]
fn test_summary_counts_every_level() {
    let mut trip: Trip = create_test_trip();
    let branch: Branch = create_test_branch(&mut trip);
    add_test_zone(&mut trip, &branch.activity_id, "Best", 0.95, 0.3);
    record_sighting(
        &mut trip,
        &branch.zone_id,
        Sighting::new(datetime!(2024-07-01 9:15 UTC), "orca", 6),
    )
    .unwrap();

    let summary: TripSummary = TripSummary::from_trip(&trip);

    assert_eq!(summary.days, 1);
    assert_eq!(summary.day_trips, 1);
    assert_eq!(summary.stops, 1);
    assert_eq!(summary.activities, 1);
    assert_eq!(summary.viewing_zones, 2);
    assert_eq!(summary.sightings, 1);
    assert_close(summary.total_cost, 65.0);
    assert_eq!(summary.best_zone.as_deref(), Some("Best"));
}

#[test]
fn test_summary_of_empty_trip() {
    let trip: Trip = create_test_trip();

    let summary: TripSummary = TripSummary::from_trip(&trip);

    assert_eq!(summary.viewing_zones, 0);
    assert_eq!(summary.best_zone, None);
    assert!(summary.to_string().ends_with("best zone: none"));
}
