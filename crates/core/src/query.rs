// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only traversal of a trip.
//!
//! Every query is a full depth-first scan; trips hold tens of nodes, so no
//! index is kept.

use orcast_domain::{Activity, ActivityType, Trip, ViewingZone};
use std::cmp::Ordering;

/// Where an activity sits in its trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityPath<'a> {
    pub day_number: u32,
    pub day_trip_title: &'a str,
    pub stop_name: &'a str,
}

/// Where a viewing zone sits in its trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonePath<'a> {
    pub day_number: u32,
    pub day_trip_title: &'a str,
    pub stop_name: &'a str,
    pub activity_title: &'a str,
}

impl std::fmt::Display for ZonePath<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Day {} / {} / {} / {}",
            self.day_number, self.day_trip_title, self.stop_name, self.activity_title
        )
    }
}

/// An activity together with its path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityMatch<'a> {
    pub activity: &'a Activity,
    pub path: ActivityPath<'a>,
}

/// A viewing zone together with its path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneMatch<'a> {
    pub zone: &'a ViewingZone,
    pub path: ZonePath<'a>,
}

/// Visits every activity in depth-first insertion order.
pub fn iter_activities(trip: &Trip) -> impl Iterator<Item = ActivityMatch<'_>> {
    trip.days.iter().flat_map(|day| {
        day.day_trips.iter().flat_map(move |day_trip| {
            day_trip.stops.iter().flat_map(move |stop| {
                stop.activities.iter().map(move |activity| ActivityMatch {
                    activity,
                    path: ActivityPath {
                        day_number: day.day_number,
                        day_trip_title: &day_trip.title,
                        stop_name: &stop.name,
                    },
                })
            })
        })
    })
}

/// Visits every viewing zone in depth-first insertion order.
pub fn iter_viewing_zones(trip: &Trip) -> impl Iterator<Item = ZoneMatch<'_>> {
    iter_activities(trip).flat_map(|ActivityMatch { activity, path }| {
        activity.viewing_zones.iter().map(move |zone| ZoneMatch {
            zone,
            path: ZonePath {
                day_number: path.day_number,
                day_trip_title: path.day_trip_title,
                stop_name: path.stop_name,
                activity_title: &activity.title,
            },
        })
    })
}

/// Returns zones with `probability >= min_probability`, best first.
///
/// The sort is stable, so zones with equal probability keep depth-first
/// order.
#[must_use]
pub fn find_viewing_zones_by_probability(trip: &Trip, min_probability: f64) -> Vec<ZoneMatch<'_>> {
    let mut matches: Vec<ZoneMatch<'_>> = iter_viewing_zones(trip)
        .filter(|found| found.zone.probability >= min_probability)
        .collect();
    matches.sort_by(|a, b| {
        b.zone
            .probability
            .partial_cmp(&a.zone.probability)
            .unwrap_or(Ordering::Equal)
    });
    matches
}

/// Returns activities of the given type in depth-first insertion order.
#[must_use]
pub fn find_activities_by_type(trip: &Trip, activity_type: ActivityType) -> Vec<ActivityMatch<'_>> {
    iter_activities(trip)
        .filter(|found| found.activity.activity_type == activity_type)
        .collect()
}

/// Looks up a viewing zone by id.
#[must_use]
pub fn find_viewing_zone<'a>(trip: &'a Trip, zone_id: &str) -> Option<ZoneMatch<'a>> {
    iter_viewing_zones(trip).find(|found| found.zone.id == zone_id)
}
