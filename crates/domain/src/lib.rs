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

//! Entity schema for the ORCAST trip hierarchy.
//!
//! A trip is a six-level ownership tree:
//! `Trip → Day → DayTrip → Stop → Activity → ViewingZone`.
//! This crate defines the entities, their value types and the structural
//! validators. Construction and aggregation live in the `orcast` crate.

mod embedding;
mod entities;
mod error;
pub mod formats;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use embedding::{EMBEDDING_DIMENSION, VectorEmbedding};
pub use entities::{Activity, Day, DayTrip, Stop, Trip, ViewingZone};
pub use error::DomainError;
pub use types::{
    ActivityType, Coordinates, DayTripKind, GroupSizeRange, Sighting, clamp_unit, finite_or_zero,
};
pub use validation::{Entity, EntityKind, validate, validate_tree, validate_trip};
