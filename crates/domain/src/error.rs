// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::formats::CLOCK_FORMAT;
use crate::validation::EntityKind;
use time::Time;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more mandatory identity fields are empty.
    MissingFields {
        /// The kind of entity that failed validation.
        kind: EntityKind,
        /// The names of every missing field, in declaration order.
        fields: Vec<&'static str>,
    },
    /// Trip duration must cover at least one day.
    InvalidDuration {
        /// The invalid duration in days.
        days: u32,
    },
    /// An end time lies before its start time.
    InvalidTimeRange {
        /// The start time.
        start: Time,
        /// The end time.
        end: Time,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// A child's parent reference does not match its owning parent.
    ParentMismatch {
        /// The kind of the child entity.
        kind: EntityKind,
        /// The child's id.
        id: String,
        /// The id of the parent that owns the child.
        expected: String,
        /// The parent id recorded on the child.
        actual: String,
    },
    /// A day number does not match its position within the trip.
    DayNumberOutOfSequence {
        /// The 1-based position of the day.
        expected: u32,
        /// The recorded day number.
        actual: u32,
    },
    /// The same id appears on more than one entity in a trip.
    DuplicateId(String),
    /// Activity type string is not recognised.
    InvalidActivityType(String),
    /// Day trip kind string is not recognised.
    InvalidDayTripKind(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields { kind, fields } => {
                write!(
                    f,
                    "{kind} is missing required field(s): {}",
                    fields.join(", ")
                )
            }
            Self::InvalidDuration { days } => {
                write!(
                    f,
                    "Invalid trip duration: {days} days. Must be at least 1"
                )
            }
            Self::InvalidTimeRange { start, end } => {
                let start: String = start.format(CLOCK_FORMAT).map_err(|_| std::fmt::Error)?;
                let end: String = end.format(CLOCK_FORMAT).map_err(|_| std::fmt::Error)?;
                write!(f, "End time {end} is before start time {start}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::ParentMismatch {
                kind,
                id,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{kind} '{id}' references parent '{actual}' but is owned by '{expected}'"
                )
            }
            Self::DayNumberOutOfSequence { expected, actual } => {
                write!(
                    f,
                    "Day number {actual} is out of sequence; expected {expected}"
                )
            }
            Self::DuplicateId(id) => write!(f, "Id '{id}' is used by more than one entity"),
            Self::InvalidActivityType(msg) => write!(f, "Invalid activity type: {msg}"),
            Self::InvalidDayTripKind(msg) => write!(f, "Invalid day trip kind: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
