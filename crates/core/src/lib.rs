// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

//! Builder, aggregate engine, queries and documents for the ORCAST trip
//! hierarchy.
//!
//! A trip is grown only through the builder calls, which keep the stored
//! rollups (`total_cost`, `overall_probability`, `overall_confidence` and
//! the per-day and per-outing scores) consistent after every mutation.
//!
//! ```
//! use orcast::{
//!     ActivityData, DayData, DayTripData, StopData, TripData, ViewingZoneData, add_activity,
//!     add_day, add_day_trip, add_stop, add_viewing_zone, create_trip,
//! };
//! use orcast_domain::ActivityType;
//!
//! let mut trip = create_trip(TripData::new("Orca weekend", 2)).unwrap();
//! let day_id = add_day(&mut trip, DayData::default()).unwrap().id.clone();
//! let outing_id = add_day_trip(
//!     &mut trip,
//!     &day_id,
//!     DayTripData { cost: 50.0, ..DayTripData::new("West side cruise") },
//! )
//! .unwrap()
//! .id
//! .clone();
//! let stop_id = add_stop(&mut trip, &outing_id, StopData::new("Lime Kiln Point"))
//!     .unwrap()
//!     .id
//!     .clone();
//! let activity_id = add_activity(
//!     &mut trip,
//!     &stop_id,
//!     ActivityData::new("Orca watch", ActivityType::Viewing),
//! )
//! .unwrap()
//! .id
//! .clone();
//! add_viewing_zone(&mut trip, &activity_id, ViewingZoneData::new("Haro Strait", 0.5, 1.0))
//!     .unwrap();
//!
//! assert!((trip.total_cost - 50.0).abs() < 1e-9);
//! assert!((trip.overall_probability - 0.5).abs() < 1e-9);
//! ```

mod builder;
mod data;
mod document;
mod error;
mod query;
mod rollup;
mod summary;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use builder::{
    DEFAULT_DAY_TRIP_END, DEFAULT_DAY_TRIP_START, MAX_RECENT_SIGHTINGS, add_activity, add_day,
    add_day_trip, add_stop, add_viewing_zone, create_trip, record_sighting, update_viewing_zone,
};
pub use data::{
    ActivityData, DayData, DayTripData, StopData, TripData, ViewingZoneData, ViewingZoneUpdate,
};
pub use document::{DocumentError, export_trip, import_trip};
pub use error::CoreError;
pub use query::{
    ActivityMatch, ActivityPath, ZoneMatch, ZonePath, find_activities_by_type, find_viewing_zone,
    find_viewing_zones_by_probability, iter_activities, iter_viewing_zones,
};
pub use rollup::{
    aggregates_are_current, compute_overall_confidence, compute_overall_probability,
    compute_total_cost, day_cost, day_probability, day_trip_confidence, day_trip_cost,
    day_trip_probability, recalculate,
};
pub use summary::TripSummary;
