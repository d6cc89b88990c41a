// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Subcommand bodies.
//!
//! Each function takes document text and returns the text to print, so file
//! handling stays in `main`.

use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use orcast::{
    ActivityMatch, TripSummary, ZoneMatch, aggregates_are_current, export_trip,
    find_activities_by_type, find_viewing_zones_by_probability, import_trip, recalculate,
};
use orcast_domain::{ActivityType, Trip};
use std::fmt::Write;
use tracing::{debug, info};

use crate::sample::build_demo_trip;

/// Builds the demo trip and exports it.
pub fn demo() -> Result<String> {
    let trip: Trip = build_demo_trip().wrap_err("failed to build the demo trip")?;
    info!(trip_id = %trip.id, "Built demo trip");
    Ok(export_trip(&trip)?)
}

/// Summarises a trip document as text or JSON.
pub fn summary(text: &str, json: bool) -> Result<String> {
    let trip: Trip = import_trip(text)?;
    let summary: TripSummary = TripSummary::from_trip(&trip);
    if json {
        return serde_json::to_string_pretty(&summary).wrap_err("failed to encode the summary");
    }
    Ok(summary.to_string())
}

/// Lists viewing zones at or above `min_probability`, best first.
pub fn zones(text: &str, min_probability: f64) -> Result<String> {
    let trip: Trip = import_trip(text)?;
    let matches: Vec<ZoneMatch<'_>> = find_viewing_zones_by_probability(&trip, min_probability);
    debug!(min_probability, found = matches.len(), "Queried viewing zones");

    let mut out: String = String::new();
    for found in &matches {
        writeln!(
            out,
            "{:.2}  conf {:.2}  {}  ({})",
            found.zone.probability, found.zone.confidence, found.zone.name, found.path
        )?;
    }
    if matches.is_empty() {
        writeln!(out, "no viewing zones at or above {min_probability:.2}")?;
    }
    Ok(out)
}

/// Lists activities of one type in trip order, flagging any whose group
/// size range excludes the trip's party.
pub fn activities(text: &str, activity_type: ActivityType) -> Result<String> {
    let trip: Trip = import_trip(text)?;
    let matches: Vec<ActivityMatch<'_>> = find_activities_by_type(&trip, activity_type);

    let mut out: String = String::new();
    for found in &matches {
        write!(
            out,
            "Day {} / {} / {}: {} ({} min, {:.2})",
            found.path.day_number,
            found.path.day_trip_title,
            found.path.stop_name,
            found.activity.title,
            found.activity.duration_minutes,
            found.activity.cost
        )?;
        let range = found.activity.group_size;
        if !range.accommodates(trip.group_size) {
            write!(
                out,
                " [group of {} outside {}-{}]",
                trip.group_size, range.min, range.max
            )?;
        }
        writeln!(out)?;
    }
    if matches.is_empty() {
        writeln!(out, "no {activity_type} activities")?;
    }
    Ok(out)
}

/// Imports a document, which validates the whole tree, then checks that
/// the stored aggregates match a fresh rollup.
pub fn validate(text: &str) -> Result<String> {
    let trip: Trip = import_trip(text)?;
    if !aggregates_are_current(&trip) {
        return Err(eyre!(
            "stored aggregates for trip '{}' are stale; run `orcast recalculate`",
            trip.id
        ));
    }
    Ok(format!("trip '{}' is valid", trip.title))
}

/// Imports a document, refreshes every aggregate and exports it again.
pub fn recalculate_document(text: &str) -> Result<String> {
    let mut trip: Trip = import_trip(text)?;
    recalculate(&mut trip);
    info!(trip_id = %trip.id, total_cost = trip.total_cost, "Recalculated trip");
    Ok(export_trip(&trip)?)
}
