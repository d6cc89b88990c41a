// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::entities::Trip;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The six levels of the trip hierarchy, root first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Trip,
    Day,
    DayTrip,
    Stop,
    Activity,
    ViewingZone,
}

impl EntityKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Trip => "Trip",
            Self::Day => "Day",
            Self::DayTrip => "DayTrip",
            Self::Stop => "Stop",
            Self::Activity => "Activity",
            Self::ViewingZone => "ViewingZone",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The identity contract shared by every entity kind.
///
/// Each entity has its own id, a reference to its parent (except the root)
/// and a human-readable label. All three are mandatory.
pub trait Entity {
    /// The level this entity occupies.
    const KIND: EntityKind;
    /// Document name of the parent reference, `None` for the root.
    const PARENT_FIELD: Option<&'static str>;
    /// Document name of the human-readable label.
    const LABEL_FIELD: &'static str;

    /// Returns the entity's own id.
    fn id(&self) -> &str;

    /// Returns the id of the owning parent, `None` for the root.
    fn parent_id(&self) -> Option<&str>;

    /// Returns the title or name.
    fn label(&self) -> &str;
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates that an entity's mandatory identity fields are present.
///
/// Validation is structural only; numeric ranges are not checked here.
///
/// # Arguments
///
/// * `entity` - The entity to validate
///
/// # Returns
///
/// * `Ok(())` if the id, parent id and label are all non-blank
/// * `Err(DomainError::MissingFields)` naming every blank field otherwise
///
/// # Errors
///
/// Returns an error if any mandatory identity field is empty or whitespace.
pub fn validate<E: Entity>(entity: &E) -> Result<(), DomainError> {
    let mut fields: Vec<&'static str> = Vec::new();

    if is_blank(entity.id()) {
        fields.push("id");
    }

    if let Some(field) = E::PARENT_FIELD.filter(|_| entity.parent_id().is_some_and(is_blank)) {
        fields.push(field);
    }

    if is_blank(entity.label()) {
        fields.push(E::LABEL_FIELD);
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(DomainError::MissingFields {
            kind: E::KIND,
            fields,
        })
    }
}

/// Validates a trip root: identity fields plus a duration of at least one day.
///
/// # Errors
///
/// Returns an error if:
/// - The id or title is blank
/// - The duration is zero
pub fn validate_trip(trip: &Trip) -> Result<(), DomainError> {
    validate(trip)?;

    if trip.duration < 1 {
        return Err(DomainError::InvalidDuration {
            days: trip.duration,
        });
    }

    Ok(())
}

/// Validates an entire trip tree.
///
/// Beyond [`validate_trip`] this checks every descendant's identity fields,
/// that each child's parent reference names its owning parent, that day
/// numbers follow position, and that no id is used twice.
///
/// # Errors
///
/// Returns the first violation found in depth-first order.
pub fn validate_tree(trip: &Trip) -> Result<(), DomainError> {
    validate_trip(trip)?;

    let mut seen: HashSet<&str> = HashSet::new();
    claim_id(&mut seen, &trip.id)?;

    for (index, day) in trip.days.iter().enumerate() {
        validate_child(day, &trip.id, &mut seen)?;

        let expected: u32 = u32::try_from(index + 1).unwrap_or(u32::MAX);
        if day.day_number != expected {
            return Err(DomainError::DayNumberOutOfSequence {
                expected,
                actual: day.day_number,
            });
        }

        for day_trip in &day.day_trips {
            validate_child(day_trip, &day.id, &mut seen)?;
            for stop in &day_trip.stops {
                validate_child(stop, &day_trip.id, &mut seen)?;
                for activity in &stop.activities {
                    validate_child(activity, &stop.id, &mut seen)?;
                    for zone in &activity.viewing_zones {
                        validate_child(zone, &activity.id, &mut seen)?;
                    }
                }
            }
        }
    }

    Ok(())
}

fn validate_child<'a, E: Entity>(
    entity: &'a E,
    owner_id: &str,
    seen: &mut HashSet<&'a str>,
) -> Result<(), DomainError> {
    validate(entity)?;

    let parent: &str = entity.parent_id().unwrap_or_default();
    if parent != owner_id {
        return Err(DomainError::ParentMismatch {
            kind: E::KIND,
            id: entity.id().to_string(),
            expected: owner_id.to_string(),
            actual: parent.to_string(),
        });
    }

    claim_id(seen, entity.id())
}

fn claim_id<'a>(seen: &mut HashSet<&'a str>, id: &'a str) -> Result<(), DomainError> {
    if !seen.insert(id) {
        return Err(DomainError::DuplicateId(id.to_string()));
    }
    Ok(())
}
