//! Form domain layer
//!
//! Field descriptors, text editing and keyboard focus for the course form.

mod field;
mod form_state;

pub use field::{FormField, TextEdit};
pub use form_state::{CourseForm, FocusTarget, Form};
