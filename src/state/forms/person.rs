//! Person records and their stable identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A single person entry as it appears in the submitted values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first: String,
    pub last: String,
    pub age: i64,
}

impl Person {
    #[allow(dead_code)]
    pub fn new(first: impl Into<String>, last: impl Into<String>, age: i64) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
            age,
        }
    }
}

impl Default for Person {
    /// The empty person used for new entries: no names, age 21
    fn default() -> Self {
        Self {
            first: String::new(),
            last: String::new(),
            age: 21,
        }
    }
}

/// Stable identifier assigned to an entry when it is created.
///
/// Positions change when earlier entries are removed; the id does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonId(Uuid);

impl PersonId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person together with its stable id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonEntry {
    pub id: PersonId,
    pub person: Person,
}

impl PersonEntry {
    pub fn new(person: Person) -> Self {
        Self {
            id: PersonId::new(),
            person,
        }
    }
}
