//! Course backend: payload encoding and HTTP transport

mod client;
mod payload;
mod traits;

pub use client::{ApiError, CourseClient};
pub use payload::*;
pub use traits::CourseApi;

#[cfg(test)]
pub use traits::MockCourseApi;

#[cfg(test)]
pub(crate) use client::test_server;
