//! Form domain layer
//!
//! Type-safe state for the people form: person records, typed field
//! paths, the value store and the controller that edits it.

mod error;
mod field;
mod form_state;
mod person;

pub use field::{FieldPath, PersonField};
pub use form_state::{Focus, Form, PeopleForm, Submission};
pub use person::{Person, PersonEntry};
