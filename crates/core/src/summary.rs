// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::query::{iter_activities, iter_viewing_zones};
use orcast_domain::Trip;
use serde::Serialize;

/// Entity counts and headline numbers for a trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    pub title: String,
    pub days: usize,
    pub day_trips: usize,
    pub stops: usize,
    pub activities: usize,
    pub viewing_zones: usize,
    pub sightings: usize,
    pub total_cost: f64,
    pub overall_probability: f64,
    pub overall_confidence: f64,
    /// Name of the zone with the highest probability, first one on ties.
    pub best_zone: Option<String>,
}

impl TripSummary {
    /// Summarises a trip from its stored aggregates.
    #[must_use]
    pub fn from_trip(trip: &Trip) -> Self {
        let day_trips: usize = trip.days.iter().map(|day| day.day_trips.len()).sum();
        let stops: usize = trip
            .days
            .iter()
            .flat_map(|day| day.day_trips.iter())
            .map(|day_trip| day_trip.stops.len())
            .sum();

        let mut viewing_zones: usize = 0;
        let mut sightings: usize = 0;
        let mut best: Option<(&str, f64)> = None;
        for found in iter_viewing_zones(trip) {
            viewing_zones += 1;
            sightings += found.zone.recent_sightings.len();
            if best.is_none_or(|(_, probability)| found.zone.probability > probability) {
                best = Some((&found.zone.name, found.zone.probability));
            }
        }

        Self {
            title: trip.title.clone(),
            days: trip.days.len(),
            day_trips,
            stops,
            activities: iter_activities(trip).count(),
            viewing_zones,
            sightings,
            total_cost: trip.total_cost,
            overall_probability: trip.overall_probability,
            overall_confidence: trip.overall_confidence,
            best_zone: best.map(|(name, _)| name.to_string()),
        }
    }
}

impl std::fmt::Display for TripSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(
            f,
            "  {} days, {} day trips, {} stops, {} activities, {} viewing zones",
            self.days, self.day_trips, self.stops, self.activities, self.viewing_zones
        )?;
        writeln!(f, "  recent sightings: {}", self.sightings)?;
        writeln!(f, "  total cost: {:.2}", self.total_cost)?;
        writeln!(
            f,
            "  overall probability: {:.3} (confidence {:.3})",
            self.overall_probability, self.overall_confidence
        )?;
        match &self.best_zone {
            Some(name) => write!(f, "  best zone: {name}"),
            None => write!(f, "  best zone: none"),
        }
    }
}
