// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use orcast_domain::{DomainError, EntityKind};

/// Errors that can occur while building or mutating a trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The parent named by a builder call does not exist in the trip.
    ParentNotFound {
        /// The kind of parent that was looked up.
        kind: EntityKind,
        /// The id that was looked up.
        id: String,
    },
    /// The entity named by a mutation does not exist in the trip.
    EntityNotFound {
        /// The kind of entity that was looked up.
        kind: EntityKind,
        /// The id that was looked up.
        id: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::ParentNotFound { kind, id } => {
                write!(f, "Parent {kind} '{id}' not found in trip")
            }
            Self::EntityNotFound { kind, id } => write!(f, "{kind} '{id}' not found in trip"),
        }
    }
}

impl std::error::Error for CoreError {}

impl CoreError {
    /// Returns whether the caller supplied data that failed validation, as
    /// opposed to naming a node that does not exist.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::DomainViolation(_))
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
