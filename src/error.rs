//! Error types for the relationship conversion layer
//!
//! Distinguishes the two error classes of this layer: legitimate absence of a
//! related object is never an error (it maps to `None` or an empty container),
//! while violated hook preconditions are explicit, loud errors.

use std::fmt;

use crate::object::{ObjectId, StoreId};

/// Result type alias for relationship conversions
pub type RelationResult<T> = Result<T, RelationError>;

/// Error types for relationship conversions
///
/// Every variant is a programmer error at the engine boundary; none of them
/// is produced for an empty or absent relationship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationError {
    /// Record handle was invalidated by the persistence engine
    InvalidatedRecord { entity: &'static str, id: ObjectId },
    /// Record belongs to a different entity than the target domain type
    EntityMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    /// Record is owned by a different store than the one in use
    ForeignStore { expected: StoreId, actual: StoreId },
    /// Domain object has no backing record
    MissingRecord { entity: &'static str },
}

impl fmt::Display for RelationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationError::InvalidatedRecord { entity, id } => {
                write!(f, "Record {} for entity '{}' was invalidated", id, entity)
            }
            RelationError::EntityMismatch { expected, actual } => {
                write!(
                    f,
                    "Entity mismatch: expected '{}', record belongs to '{}'",
                    expected, actual
                )
            }
            RelationError::ForeignStore { expected, actual } => {
                write!(
                    f,
                    "Record is owned by store {} but store {} was expected",
                    actual, expected
                )
            }
            RelationError::MissingRecord { entity } => {
                write!(f, "Domain object for entity '{}' has no backing record", entity)
            }
        }
    }
}

impl std::error::Error for RelationError {}
