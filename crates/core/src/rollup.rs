// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Aggregate rollups from the leaves up to the trip root.
//!
//! Every `compute_*` function is pure: it reads the subtree and returns a
//! value without touching stored aggregates. [`recalculate`] is the one
//! writer and is called by every builder mutation.

use orcast_domain::{Day, DayTrip, Trip, ViewingZone};

/// Running sums over a set of viewing zones.
#[derive(Debug, Clone, Copy, Default)]
struct ZoneTally {
    weighted: f64,
    confidence: f64,
    count: usize,
}

impl ZoneTally {
    fn collect<'a>(zones: impl Iterator<Item = &'a ViewingZone>) -> Self {
        zones.fold(Self::default(), |tally, zone| Self {
            weighted: tally.weighted + zone.weighted_probability(),
            confidence: tally.confidence + zone.confidence,
            count: tally.count + 1,
        })
    }

    #[allow(clippy::cast_precision_loss)]
    fn mean(&self, sum: f64) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            sum / self.count as f64
        }
    }

    fn probability(&self) -> f64 {
        self.mean(self.weighted)
    }

    fn confidence(&self) -> f64 {
        self.mean(self.confidence)
    }
}

fn day_trip_zones(day_trip: &DayTrip) -> impl Iterator<Item = &ViewingZone> {
    day_trip
        .stops
        .iter()
        .flat_map(|stop| stop.activities.iter())
        .flat_map(|activity| activity.viewing_zones.iter())
}

fn day_zones(day: &Day) -> impl Iterator<Item = &ViewingZone> {
    day.day_trips.iter().flat_map(day_trip_zones)
}

fn trip_zones(trip: &Trip) -> impl Iterator<Item = &ViewingZone> {
    trip.days.iter().flat_map(day_zones)
}

/// Sums the cost of a day trip, its stops and their activities.
#[must_use]
pub fn day_trip_cost(day_trip: &DayTrip) -> f64 {
    let stops: f64 = day_trip
        .stops
        .iter()
        .map(|stop| {
            stop.cost
                + stop
                    .activities
                    .iter()
                    .map(|activity| activity.cost)
                    .sum::<f64>()
        })
        .sum();
    day_trip.cost + stops
}

/// Sums the cost of every day trip, stop and activity in a day.
#[must_use]
pub fn day_cost(day: &Day) -> f64 {
    day.day_trips.iter().map(day_trip_cost).sum()
}

/// Sums the cost of every day trip, stop and activity in a trip.
///
/// Viewing zones carry no cost.
#[must_use]
pub fn compute_total_cost(trip: &Trip) -> f64 {
    trip.days.iter().map(day_cost).sum()
}

/// Mean of `probability × confidence` over a day trip's zones; 0 if none.
#[must_use]
pub fn day_trip_probability(day_trip: &DayTrip) -> f64 {
    ZoneTally::collect(day_trip_zones(day_trip)).probability()
}

/// Mean confidence over a day trip's zones; 0 if none.
#[must_use]
pub fn day_trip_confidence(day_trip: &DayTrip) -> f64 {
    ZoneTally::collect(day_trip_zones(day_trip)).confidence()
}

/// Mean of `probability × confidence` over a day's zones; 0 if none.
#[must_use]
pub fn day_probability(day: &Day) -> f64 {
    ZoneTally::collect(day_zones(day)).probability()
}

/// Mean of `probability × confidence` over every zone in the trip; 0 if none.
#[must_use]
pub fn compute_overall_probability(trip: &Trip) -> f64 {
    ZoneTally::collect(trip_zones(trip)).probability()
}

/// Mean confidence over every zone in the trip; 0 if none.
#[must_use]
pub fn compute_overall_confidence(trip: &Trip) -> f64 {
    ZoneTally::collect(trip_zones(trip)).confidence()
}

/// Recomputes and stores every derived field, day trips first.
///
/// Calling it twice without an intervening mutation changes nothing.
pub fn recalculate(trip: &mut Trip) {
    for day in &mut trip.days {
        for day_trip in &mut day.day_trips {
            let tally: ZoneTally = ZoneTally::collect(day_trip_zones(day_trip));
            day_trip.probability_score = tally.probability();
            day_trip.confidence = tally.confidence();
        }
        day.estimated_cost = day_cost(day);
        day.probability_score = day_probability(day);
    }

    let tally: ZoneTally = ZoneTally::collect(trip_zones(trip));
    trip.total_cost = compute_total_cost(trip);
    trip.overall_probability = tally.probability();
    trip.overall_confidence = tally.confidence();
}

/// Returns whether every stored aggregate equals its recomputed value.
#[must_use]
pub fn aggregates_are_current(trip: &Trip) -> bool {
    let mut fresh: Trip = trip.clone();
    recalculate(&mut fresh);
    fresh == *trip
}
