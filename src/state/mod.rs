//! Application state module

mod app_state;
mod draft;
mod file_ref;
mod forms;
mod notice;
mod preview;
mod submission;

pub use app_state::*;
pub use draft::*;
pub use file_ref::*;
pub use forms::*;
pub use notice::*;
pub use preview::*;
pub use submission::*;

#[cfg(test)]
pub(crate) use file_ref::test_support;
