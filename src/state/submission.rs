//! Submission state machine: validation guards and outcome mapping

use super::draft::CourseDraft;
use std::fmt;
use thiserror::Error;

/// The only status the course backend uses to acknowledge a new course.
/// Other 2xx codes are not treated as success.
pub const STATUS_CREATED: u16 = 201;

pub const SUCCESS_MESSAGE: &str = "Course created successfully";
pub const FAILURE_MESSAGE: &str = "Error creating course. Check the log for details.";
pub const IN_FLIGHT_MESSAGE: &str = "A submission is already in progress";
pub const QUIT_IN_FLIGHT_MESSAGE: &str =
    "Waiting for the submission to finish. Press Ctrl+C to abandon it";

/// Where the submit flow currently is.
///
/// `Success` and `Failure` are not stored: they are reported as a
/// [`SubmissionOutcome`] and the phase drops straight back to `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
}

impl SubmissionPhase {
    pub fn is_in_flight(self) -> bool {
        matches!(self, SubmissionPhase::Submitting)
    }

    pub fn label(self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "Ready",
            SubmissionPhase::Validating => "Validating",
            SubmissionPhase::Submitting => "Submitting...",
        }
    }
}

/// A draft that cannot be submitted yet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in the course name")]
    BlankCourseName,
    #[error("Please fill in the title of module {}", .index + 1)]
    BlankModuleTitle { index: usize },
    #[error("Please fill in the description of module {}", .index + 1)]
    BlankModuleDescription { index: usize },
    #[error("Please upload a course image")]
    MissingImage,
    #[error("Please upload a video for each module")]
    MissingVideo { index: usize },
}

/// Check the draft before anything is sent.
///
/// Controls are checked in the order they appear on the form: course name,
/// course image, then title, video and description of each module. The
/// first failure wins. Text inputs only need to be non-empty.
pub fn validate(draft: &CourseDraft) -> Result<(), ValidationError> {
    if draft.name().is_empty() {
        return Err(ValidationError::BlankCourseName);
    }
    if draft.image().is_none() {
        return Err(ValidationError::MissingImage);
    }
    for (index, module) in draft.modules().iter().enumerate() {
        if module.title.is_empty() {
            return Err(ValidationError::BlankModuleTitle { index });
        }
        if module.video.is_none() {
            return Err(ValidationError::MissingVideo { index });
        }
        if module.description.is_empty() {
            return Err(ValidationError::BlankModuleDescription { index });
        }
    }
    Ok(())
}

/// How a finished request is interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Backend answered 201
    Created,
    /// Backend answered with any other status
    Rejected { status: u16 },
    /// The request never produced a response
    Failed(String),
}

impl SubmissionOutcome {
    pub fn from_status(status: u16) -> Self {
        if status == STATUS_CREATED {
            SubmissionOutcome::Created
        } else {
            SubmissionOutcome::Rejected { status }
        }
    }

    pub fn from_result<E: fmt::Display>(result: Result<u16, E>) -> Self {
        match result {
            Ok(status) => Self::from_status(status),
            Err(e) => SubmissionOutcome::Failed(e.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Created)
    }
}

impl fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionOutcome::Created => write!(f, "created"),
            SubmissionOutcome::Rejected { status } => write!(f, "rejected with status {status}"),
            SubmissionOutcome::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::draft::ModuleField;
    use crate::state::file_ref::test_support::file_ref;
    use crate::state::FileSelection;

    fn complete_draft(dir: &tempfile::TempDir) -> CourseDraft {
        let mut draft = CourseDraft::new();
        draft.set_name("Intro to Systems".into());
        draft.select_image(FileSelection::single(file_ref(dir, "a.png", b"img")));
        draft.set_module_field(0, ModuleField::Title("Lesson 1".into()));
        draft.set_module_field(0, ModuleField::Description("Overview".into()));
        draft.set_module_video(0, FileSelection::single(file_ref(dir, "b.mp4", b"vid")));
        draft
    }

    #[test]
    fn test_complete_draft_passes() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(validate(&complete_draft(&dir)), Ok(()));
    }

    #[test]
    fn test_missing_image() {
        let dir = tempfile::tempdir().unwrap();
        let mut draft = complete_draft(&dir);
        draft.set_image(None);
        assert_eq!(validate(&draft), Err(ValidationError::MissingImage));
    }

    #[test]
    fn test_missing_video_on_second_module() {
        let dir = tempfile::tempdir().unwrap();
        let mut draft = complete_draft(&dir);
        draft.add_module();
        draft.set_module_field(1, ModuleField::Title("Lesson 2".into()));
        draft.set_module_field(1, ModuleField::Description("More".into()));
        assert_eq!(
            validate(&draft),
            Err(ValidationError::MissingVideo { index: 1 })
        );
    }

    #[test]
    fn test_empty_text_inputs_are_required() {
        let dir = tempfile::tempdir().unwrap();
        let mut draft = complete_draft(&dir);
        draft.set_module_field(0, ModuleField::Title(String::new()));
        assert_eq!(
            validate(&draft),
            Err(ValidationError::BlankModuleTitle { index: 0 })
        );

        draft.set_module_field(0, ModuleField::Title("ok".into()));
        draft.set_module_field(0, ModuleField::Description(String::new()));
        assert_eq!(
            validate(&draft),
            Err(ValidationError::BlankModuleDescription { index: 0 })
        );

        draft.set_name(String::new());
        assert_eq!(validate(&draft), Err(ValidationError::BlankCourseName));
    }

    #[test]
    fn test_whitespace_counts_as_filled_in() {
        let dir = tempfile::tempdir().unwrap();
        let mut draft = complete_draft(&dir);
        draft.set_name(" ".into());
        draft.set_module_field(0, ModuleField::Title("  ".into()));
        draft.set_module_field(0, ModuleField::Description("\n".into()));
        assert_eq!(validate(&draft), Ok(()));
    }

    #[test]
    fn test_checks_follow_form_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut draft = complete_draft(&dir);
        draft.set_image(None);
        draft.set_module_field(0, ModuleField::Title(String::new()));
        assert_eq!(validate(&draft), Err(ValidationError::MissingImage));

        let mut draft = complete_draft(&dir);
        draft.set_module_field(0, ModuleField::Video(None));
        draft.set_module_field(0, ModuleField::Description(String::new()));
        assert_eq!(
            validate(&draft),
            Err(ValidationError::MissingVideo { index: 0 })
        );

        let mut draft = complete_draft(&dir);
        draft.add_module();
        draft.set_module_field(0, ModuleField::Title(String::new()));
        assert_eq!(
            validate(&draft),
            Err(ValidationError::BlankModuleTitle { index: 0 })
        );
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::MissingImage.to_string(),
            "Please upload a course image"
        );
        assert_eq!(
            ValidationError::MissingVideo { index: 3 }.to_string(),
            "Please upload a video for each module"
        );
        assert_eq!(
            ValidationError::BlankModuleTitle { index: 0 }.to_string(),
            "Please fill in the title of module 1"
        );
    }

    #[test]
    fn test_only_201_is_success() {
        assert_eq!(SubmissionOutcome::from_status(201), SubmissionOutcome::Created);
        assert_eq!(
            SubmissionOutcome::from_status(200),
            SubmissionOutcome::Rejected { status: 200 }
        );
        assert!(!SubmissionOutcome::from_status(204).is_success());
        assert!(!SubmissionOutcome::from_status(500).is_success());
    }

    #[test]
    fn test_from_result_maps_errors() {
        let outcome = SubmissionOutcome::from_result::<String>(Err("connection refused".into()));
        assert_eq!(
            outcome,
            SubmissionOutcome::Failed("connection refused".into())
        );
        assert_eq!(outcome.to_string(), "failed: connection refused");
    }

    #[test]
    fn test_phase_in_flight() {
        assert!(SubmissionPhase::Submitting.is_in_flight());
        assert!(!SubmissionPhase::Idle.is_in_flight());
        assert_eq!(SubmissionPhase::default(), SubmissionPhase::Idle);
    }
}
