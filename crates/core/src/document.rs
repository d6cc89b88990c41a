// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Whole-tree export and import as a JSON document.
//!
//! The document mirrors the tree one-to-one: children nest under their
//! parents in order, every field (derived aggregates included) is written,
//! dates and times are ISO-8601 strings and the embedding is a plain array.

use orcast_domain::{DomainError, Trip, validate_tree};
use thiserror::Error;
use tracing::debug;

/// Errors produced while reading or writing a trip document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The text is not well-formed JSON or does not have the trip shape.
    #[error("Failed to parse trip document: {message}")]
    Parse { message: String },

    /// The document parsed but the tree is structurally invalid.
    #[error("Trip document failed validation: {0}")]
    Validation(#[from] DomainError),

    /// The trip could not be written.
    #[error("Failed to serialize trip document: {message}")]
    Serialize { message: String },
}

/// Writes the whole trip as a pretty-printed JSON document.
///
/// Aggregates are written as they stand; nothing is recomputed.
///
/// # Errors
///
/// Returns `DocumentError::Serialize` if a value cannot be represented.
pub fn export_trip(trip: &Trip) -> Result<String, DocumentError> {
    let text: String =
        serde_json::to_string_pretty(trip).map_err(|err| DocumentError::Serialize {
            message: err.to_string(),
        })?;
    debug!(trip_id = %trip.id, bytes = text.len(), "Exported trip document");
    Ok(text)
}

/// Reads a trip from a JSON document and validates the entire tree.
///
/// Stored aggregates are taken as written; call
/// [`recalculate`](crate::recalculate) to refresh them.
///
/// # Errors
///
/// Returns an error if:
/// - The text is not a well-formed trip document (`DocumentError::Parse`)
/// - The root or any descendant fails validation (`DocumentError::Validation`)
pub fn import_trip(text: &str) -> Result<Trip, DocumentError> {
    let trip: Trip = serde_json::from_str(text).map_err(|err| DocumentError::Parse {
        message: err.to_string(),
    })?;
    validate_tree(&trip)?;

    debug!(trip_id = %trip.id, days = trip.days.len(), "Imported trip document");
    Ok(trip)
}
