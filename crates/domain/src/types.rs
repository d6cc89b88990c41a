// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Clamps a probability or confidence value into `[0, 1]`.
///
/// Out-of-range input is never an error. `NaN` is stored as `0`.
#[must_use]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Replaces a non-finite amount (`NaN` or infinite) with `0`.
///
/// Trip documents carry plain JSON numbers, which cannot hold non-finite
/// values, so costs and coordinates are stored finite.
#[must_use]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl Coordinates {
    /// Creates new coordinates.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns these coordinates with non-finite components set to `0`.
    #[must_use]
    pub fn finite(self) -> Self {
        Self {
            lat: finite_or_zero(self.lat),
            lng: finite_or_zero(self.lng),
        }
    }
}

/// The group size an activity can accommodate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSizeRange {
    /// Smallest group the activity runs for.
    pub min: u32,
    /// Largest group the activity accepts.
    pub max: u32,
    /// Group size the operator recommends.
    pub optimal: u32,
}

impl Default for GroupSizeRange {
    fn default() -> Self {
        Self {
            min: 1,
            max: 10,
            optimal: 4,
        }
    }
}

impl GroupSizeRange {
    /// Returns whether a group of `size` people fits this range.
    #[must_use]
    pub const fn accommodates(&self, size: u32) -> bool {
        size >= self.min && size <= self.max
    }
}

/// How a day trip gets out to the water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DayTripKind {
    /// Shore-based viewing.
    Land,
    /// On-water excursion.
    #[default]
    Boat,
    /// Combination of shore and water segments.
    Mixed,
}

impl DayTripKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Land => "land",
            Self::Boat => "boat",
            Self::Mixed => "mixed",
        }
    }
}

impl FromStr for DayTripKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "land" => Ok(Self::Land),
            "boat" => Ok(Self::Boat),
            "mixed" => Ok(Self::Mixed),
            _ => Err(DomainError::InvalidDayTripKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for DayTripKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of undertaking an activity represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    /// Watching for whales.
    #[default]
    Viewing,
    /// Dedicated photography session.
    Photography,
    /// Naturalist talk or museum visit.
    Education,
    /// Paddling.
    Kayaking,
    /// Shoreline or ridge walk.
    Hiking,
    /// Meal stop.
    Dining,
    /// Ferry or transfer leg.
    Transport,
    /// Anything else.
    Other,
}

impl ActivityType {
    /// Every activity type, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Viewing,
        Self::Photography,
        Self::Education,
        Self::Kayaking,
        Self::Hiking,
        Self::Dining,
        Self::Transport,
        Self::Other,
    ];

    /// Converts this activity type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Viewing => "viewing",
            Self::Photography => "photography",
            Self::Education => "education",
            Self::Kayaking => "kayaking",
            Self::Hiking => "hiking",
            Self::Dining => "dining",
            Self::Transport => "transport",
            Self::Other => "other",
        }
    }
}

impl FromStr for ActivityType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered: String = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lowered)
            .ok_or_else(|| DomainError::InvalidActivityType(s.to_string()))
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single reported whale sighting within a viewing zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sighting {
    /// When the sighting was reported.
    #[serde(with = "time::serde::rfc3339")]
    pub observed_at: OffsetDateTime,
    /// Species or pod label (e.g. "Southern Resident J-pod").
    pub species: String,
    /// Number of animals observed.
    pub count: u32,
    /// Observed behaviour, if reported.
    #[serde(default)]
    pub behavior: Option<String>,
}

impl Sighting {
    /// Creates a new sighting without a behaviour note.
    #[must_use]
    pub fn new(observed_at: OffsetDateTime, species: &str, count: u32) -> Self {
        Self {
            observed_at,
            species: species.to_string(),
            count,
            behavior: None,
        }
    }
}
