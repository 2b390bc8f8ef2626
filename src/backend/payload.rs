//! Multipart payload for the course-create endpoint
//!
//! The backend expects course metadata and module metadata as text fields
//! and every binary as its own part:
//!
//! | part                 | content                                       |
//! |----------------------|-----------------------------------------------|
//! | `courseName`         | course name                                   |
//! | `courseImage`        | image bytes                                   |
//! | `modules`            | JSON `[{"title","description"}, ...]`          |
//! | `modules[<i>][video]`| video bytes of module `i` (zero-based)        |
//!
//! Videos are kept out of the JSON so the receiver can pair each binary
//! with its module by index without decoding files from text. File parts
//! are streamed from disk when the request is sent.

use crate::state::{CourseDraft, FileRef};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub const COURSE_NAME_FIELD: &str = "courseName";
pub const COURSE_IMAGE_FIELD: &str = "courseImage";
pub const MODULES_FIELD: &str = "modules";

/// Header announcing which encoding the body uses
pub const ENCODING_HEADER: &str = "X-Course-Payload-Encoding";

/// Versioned name of the wire layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PayloadEncoding {
    /// Module metadata as JSON, videos as index-keyed sidecar parts
    #[default]
    ModulesSidecarV1,
}

impl PayloadEncoding {
    pub fn as_str(self) -> &'static str {
        match self {
            PayloadEncoding::ModulesSidecarV1 => "modules-sidecar/1",
        }
    }
}

impl fmt::Display for PayloadEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Part name carrying the video of module `index`
pub fn module_video_field(index: usize) -> String {
    format!("modules[{index}][video]")
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("course image is missing")]
    MissingImage,
    #[error("module {index} has no video")]
    MissingVideo { index: usize },
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode module metadata: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Module metadata as it appears in the `modules` JSON array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct ModuleMetadata {
    pub title: String,
    pub description: String,
}

#[derive(Debug)]
pub enum PartContent {
    Text(String),
    /// An open file, sent as a stream of `length` bytes
    File {
        file_name: String,
        content_type: String,
        length: u64,
        file: tokio::fs::File,
    },
}

#[derive(Debug)]
pub struct PayloadPart {
    pub name: String,
    pub content: PartContent,
}

impl PayloadPart {
    fn text(name: &str, value: String) -> Self {
        Self {
            name: name.to_string(),
            content: PartContent::Text(value),
        }
    }

    async fn file(name: String, file: &FileRef) -> Result<Self, PayloadError> {
        let (handle, length) = file.open_upload().await.map_err(|source| PayloadError::Read {
            path: file.path().display().to_string(),
            source,
        })?;
        Ok(Self {
            name,
            content: PartContent::File {
                file_name: file.file_name().to_string(),
                content_type: file.content_type().to_string(),
                length,
                file: handle,
            },
        })
    }
}

/// Ordered parts of one course-create request
#[derive(Debug)]
pub struct CoursePayload {
    pub encoding: PayloadEncoding,
    pub parts: Vec<PayloadPart>,
}

impl CoursePayload {
    /// Build the request body from a validated draft, opening every file.
    pub async fn build(draft: &CourseDraft) -> Result<Self, PayloadError> {
        let image = draft.image().ok_or(PayloadError::MissingImage)?;

        let metadata: Vec<ModuleMetadata> = draft
            .modules()
            .iter()
            .map(|m| ModuleMetadata {
                title: m.title.clone(),
                description: m.description.clone(),
            })
            .collect();

        let mut parts = vec![
            PayloadPart::text(COURSE_NAME_FIELD, draft.name().to_string()),
            PayloadPart::file(COURSE_IMAGE_FIELD.to_string(), image).await?,
            PayloadPart::text(MODULES_FIELD, serde_json::to_string(&metadata)?),
        ];

        for (index, module) in draft.modules().iter().enumerate() {
            let video = module
                .video
                .as_ref()
                .ok_or(PayloadError::MissingVideo { index })?;
            parts.push(PayloadPart::file(module_video_field(index), video).await?);
        }

        Ok(Self {
            encoding: PayloadEncoding::default(),
            parts,
        })
    }

    #[cfg(test)]
    pub fn part(&self, name: &str) -> Option<&PayloadPart> {
        self.parts.iter().find(|p| p.name == name)
    }

    pub fn part_names(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.name.as_str()).collect()
    }

    /// Sum of all part contents in bytes
    pub fn content_length(&self) -> u64 {
        self.parts
            .iter()
            .map(|p| match &p.content {
                PartContent::Text(s) => s.len() as u64,
                PartContent::File { length, .. } => *length,
            })
            .sum()
    }

    /// Convert into a reqwest multipart form, preserving part order
    pub fn into_form(self) -> Result<reqwest::multipart::Form, reqwest::Error> {
        let mut form = reqwest::multipart::Form::new();
        for part in self.parts {
            form = match part.content {
                PartContent::Text(value) => form.text(part.name, value),
                PartContent::File {
                    file_name,
                    content_type,
                    length,
                    file,
                } => {
                    let body = reqwest::Body::from(file);
                    let file_part = reqwest::multipart::Part::stream_with_length(body, length)
                        .file_name(file_name)
                        .mime_str(&content_type)?;
                    form.part(part.name, file_part)
                }
            };
        }
        Ok(form)
    }
}
