//! Form errors

use super::field::PersonField;
use super::person::PersonId;

/// Errors raised by form operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// Index outside `0..len`
    #[error("index {index} out of range for {len} people")]
    IndexOutOfRange { index: usize, len: usize },

    /// No entry carries this id (already removed)
    #[error("no person with id {0}")]
    UnknownPerson(PersonId),

    /// Value kind does not match the field
    #[error("field `{field}` expects {expected}")]
    TypeMismatch {
        field: PersonField,
        expected: &'static str,
    },

    /// Field path string could not be parsed
    #[error("invalid field path: {0}")]
    InvalidPath(String),
}
