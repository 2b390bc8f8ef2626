//! Read-only projection of the draft for the preview panel

use super::draft::CourseDraft;

pub const MODULE_TITLE_PLACEHOLDER: &str = "Module Title";
pub const MODULE_DESCRIPTION_PLACEHOLDER: &str = "Module Description";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePreview {
    pub title: String,
    pub video: Option<String>,
    pub description: String,
    /// True when the title is the placeholder
    pub title_is_placeholder: bool,
    pub description_is_placeholder: bool,
}

/// What the preview panel shows for the current draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoursePreview {
    pub image: Option<String>,
    pub heading: String,
    pub modules: Vec<ModulePreview>,
}

impl CoursePreview {
    /// Build the preview; recomputed every frame, never mutates the draft
    pub fn of(draft: &CourseDraft) -> Self {
        let modules = draft
            .modules()
            .iter()
            .map(|m| {
                let (title, title_is_placeholder) = or_placeholder(&m.title, MODULE_TITLE_PLACEHOLDER);
                let (description, description_is_placeholder) =
                    or_placeholder(&m.description, MODULE_DESCRIPTION_PLACEHOLDER);
                ModulePreview {
                    title,
                    video: m.video.as_ref().map(|v| v.preview_label()),
                    description,
                    title_is_placeholder,
                    description_is_placeholder,
                }
            })
            .collect();

        Self {
            image: draft.image().map(|i| i.preview_label()),
            heading: draft.name().to_string(),
            modules,
        }
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> (String, bool) {
    if value.is_empty() {
        (placeholder.to_string(), true)
    } else {
        (value.to_string(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::draft::ModuleField;
    use crate::state::file_ref::test_support::file_ref;
    use crate::state::FileSelection;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_draft_uses_placeholders() {
        let preview = CoursePreview::of(&CourseDraft::new());
        assert!(preview.image.is_none());
        assert_eq!(preview.heading, "");
        assert_eq!(
            preview.modules,
            vec![ModulePreview {
                title: "Module Title".into(),
                video: None,
                description: "Module Description".into(),
                title_is_placeholder: true,
                description_is_placeholder: true,
            }]
        );
    }

    #[test]
    fn test_filled_draft_shows_values() {
        let dir = tempfile::tempdir().unwrap();
        let mut draft = CourseDraft::new();
        draft.set_name("Intro to Systems".into());
        draft.select_image(FileSelection::single(file_ref(&dir, "a.png", b"img")));
        draft.set_module_field(0, ModuleField::Title("Lesson 1".into()));
        draft.set_module_video(0, FileSelection::single(file_ref(&dir, "b.mp4", b"vid")));

        let preview = CoursePreview::of(&draft);

        assert_eq!(preview.heading, "Intro to Systems");
        assert_eq!(preview.image.as_deref(), Some("a.png (image/png, 3 B)"));
        assert_eq!(preview.modules[0].title, "Lesson 1");
        assert!(!preview.modules[0].title_is_placeholder);
        assert_eq!(preview.modules[0].video.as_deref(), Some("b.mp4 (video/mp4, 3 B)"));
        assert!(preview.modules[0].description_is_placeholder);
    }

    #[test]
    fn test_preview_does_not_mutate_draft() {
        let draft = CourseDraft::new();
        let before = draft.clone();
        let _ = CoursePreview::of(&draft);
        assert_eq!(draft, before);
    }
}
