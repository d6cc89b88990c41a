// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Serde adapters for the textual and numeric forms used in trip documents.
//!
//! Dates are `YYYY-MM-DD` and clock times are `HH:MM`, both ISO-8601. Each
//! form is described once and that description drives both parsing and
//! formatting.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Time};

/// Calendar dates, `YYYY-MM-DD`.
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Clock times on a 24-hour clock, `HH:MM`.
pub const CLOCK_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

time::serde::format_description!(pub iso_date, Date, DATE_FORMAT);
time::serde::format_description!(pub clock, Time, CLOCK_FORMAT);

/// `#[serde(deserialize_with = "unit_interval::deserialize")]` for
/// probability, confidence and score fields read from a document.
///
/// Values are clamped into `[0, 1]` the same way the builder clamps them.
pub mod unit_interval {
    use serde::{Deserialize, Deserializer};

    /// Reads a number and clamps it into `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a number.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        f64::deserialize(deserializer).map(crate::clamp_unit)
    }
}
