//! Form rendering module
//!
//! - `field_renderer`: text and file field rendering
//! - `course_form`: the course form with its module list

mod course_form;
mod field_renderer;

pub use course_form::draw as draw_course_form;
