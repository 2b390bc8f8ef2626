//! Trait abstraction for the course backend to enable mocking in tests

use super::client::ApiError;
use super::payload::CoursePayload;
use async_trait::async_trait;

/// Operations the form needs from the course backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseApi: Send + Sync {
    /// Send one course-create request and return the HTTP status code.
    ///
    /// Any response counts as `Ok`, whatever its status; `Err` means no
    /// response arrived.
    async fn create_course(&self, payload: CoursePayload) -> Result<u16, ApiError>;
}
