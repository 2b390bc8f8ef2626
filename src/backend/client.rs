//! HTTP client for the course backend
//!
//! Posts a [`CoursePayload`] as `multipart/form-data` to the course-create
//! endpoint. reqwest writes the `Content-Type` header itself so the
//! boundary parameter is always present.

use super::payload::{CoursePayload, PayloadError, ENCODING_HEADER};
use super::traits::CourseApi;
use async_trait::async_trait;
use std::time::Duration;

/// Errors from the transport layer
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The request body could not be assembled
    #[error("could not build request body: {0}")]
    Payload(#[from] PayloadError),
}

/// Client for the course-create endpoint
pub struct CourseClient {
    client: reqwest::Client,
    endpoint: String,
}

impl CourseClient {
    /// Create a client posting to `endpoint`.
    ///
    /// `timeout` bounds the whole request; `None` waits indefinitely.
    pub fn new(endpoint: String, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl CourseApi for CourseClient {
    async fn create_course(&self, payload: CoursePayload) -> Result<u16, ApiError> {
        let encoding = payload.encoding;
        tracing::info!(
            endpoint = %self.endpoint,
            %encoding,
            bytes = payload.content_length(),
            parts = ?payload.part_names(),
            "posting course"
        );

        let form = payload.into_form()?;
        let response = self
            .client
            .post(&self.endpoint)
            .header(ENCODING_HEADER, encoding.as_str())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("course backend answered {status}: {body}");
        } else {
            tracing::debug!("course backend answered {status}");
        }

        Ok(status.as_u16())
    }
}
