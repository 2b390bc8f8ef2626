//! Main application state

use super::draft::{CourseDraft, ModuleField};
use super::file_ref::FileSelection;
use super::forms::{CourseForm, FocusTarget, Form, TextEdit};
use super::notice::Notice;
use super::submission::SubmissionPhase;
use std::collections::VecDeque;

/// Everything the UI renders and the key handlers mutate
pub struct AppState {
    /// The course being authored
    pub draft: CourseDraft,
    /// Focus and path input of the form
    pub form: CourseForm,
    pub phase: SubmissionPhase,
    /// Blocking notices, front one is shown
    pub notices: VecDeque<Notice>,
    /// One-line hint in the status bar
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let draft = CourseDraft::new();
        let form = CourseForm::new(draft.module_count());
        Self {
            draft,
            form,
            phase: SubmissionPhase::Idle,
            notices: VecDeque::new(),
            status_message: None,
        }
    }
}

impl AppState {
    pub fn active_target(&self) -> FocusTarget {
        self.form.active_target()
    }

    /// Move to next form field
    pub fn next_form_field(&mut self) {
        self.commit_path_input();
        self.form.next_field();
        self.load_path_input();
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self) {
        self.commit_path_input();
        self.form.prev_field();
        self.load_path_input();
    }

    /// Handle character input in form
    pub fn form_input_char(&mut self, c: char) {
        self.edit_active(TextEdit::Insert(c));
    }

    /// Handle backspace in form
    pub fn form_backspace(&mut self) {
        self.edit_active(TextEdit::Backspace);
    }

    /// Newline, only meaningful in the multiline description
    pub fn form_newline(&mut self) {
        if matches!(self.active_target(), FocusTarget::ModuleDescription(_)) {
            self.edit_active(TextEdit::Insert('\n'));
        }
    }

    fn edit_active(&mut self, edit: TextEdit) {
        match self.active_target() {
            FocusTarget::CourseName => {
                let name = edit.apply(self.draft.name());
                self.draft.set_name(name);
            }
            FocusTarget::ModuleTitle(i) => {
                let title = edit.apply(&self.draft.modules()[i].title);
                self.draft.set_module_field(i, ModuleField::Title(title));
            }
            FocusTarget::ModuleDescription(i) => {
                let description = edit.apply(&self.draft.modules()[i].description);
                self.draft
                    .set_module_field(i, ModuleField::Description(description));
            }
            FocusTarget::CourseImage | FocusTarget::ModuleVideo(_) => {
                self.form.path_input = edit.apply(&self.form.path_input);
            }
            FocusTarget::AddModule | FocusTarget::Submit => {}
        }
    }

    /// Resolve the typed path of the focused file input and apply it.
    ///
    /// An unusable path leaves the draft unchanged and explains why in the
    /// status bar.
    pub fn apply_path_input(&mut self) {
        let target = self.active_target();
        if !target.is_file_input() {
            return;
        }

        let (selection, reason) = FileSelection::from_path_input(&self.form.path_input);
        if let Some(reason) = reason {
            self.status_message = Some(reason);
        }
        self.apply_selection(target, selection);
    }

    /// Apply a path typed into the focused file input that has not been
    /// applied yet. Called before focus leaves the input.
    pub fn commit_path_input(&mut self) {
        let target = self.active_target();
        if !target.is_file_input() || self.form.path_input.trim().is_empty() {
            return;
        }
        if self.form.path_input != self.current_path(target) {
            self.apply_path_input();
        }
    }

    /// Apply a file-selection event to a file input
    pub fn apply_selection(&mut self, target: FocusTarget, selection: FileSelection) {
        let accept = target.field().accepts();
        if let (Some(kind), Some(file)) = (accept, selection.first()) {
            if !kind.accepts(file.content_type()) {
                self.status_message = Some(format!(
                    "{} does not look like {}",
                    file.file_name(),
                    kind.accept_hint()
                ));
            } else {
                self.status_message = Some(format!("Selected {}", file.file_name()));
            }
        }

        match target {
            FocusTarget::CourseImage => self.draft.select_image(selection),
            FocusTarget::ModuleVideo(i) => self.draft.set_module_video(i, selection),
            _ => {}
        }
    }

    /// Append a module and focus its title
    pub fn add_module(&mut self) {
        self.commit_path_input();
        self.draft.add_module();
        let count = self.draft.module_count();
        self.form.sync_module_count(count);
        self.form.focus(FocusTarget::ModuleTitle(count - 1));
        self.load_path_input();
    }

    /// Prefill the path buffer with the focused input's current file
    fn load_path_input(&mut self) {
        self.form.path_input = self.current_path(self.active_target());
    }

    /// Path of the file selected for `target`, empty when none
    fn current_path(&self, target: FocusTarget) -> String {
        let current = match target {
            FocusTarget::CourseImage => self.draft.image(),
            FocusTarget::ModuleVideo(i) => self.draft.modules()[i].video.as_ref(),
            _ => None,
        };
        current
            .map(|f| f.path().display().to_string())
            .unwrap_or_default()
    }

    /// Return the draft and form to their initial state
    pub fn reset_draft(&mut self) {
        self.draft.reset();
        self.form = CourseForm::new(self.draft.module_count());
    }

    /// Queue a blocking notice
    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::file_ref::test_support::file_ref;

    fn type_str(state: &mut AppState, s: &str) {
        for c in s.chars() {
            state.form_input_char(c);
        }
    }

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.draft, CourseDraft::new());
        assert_eq!(state.active_target(), FocusTarget::CourseName);
        assert_eq!(state.phase, SubmissionPhase::Idle);
        assert!(state.current_notice().is_none());
    }

    #[test]
    fn test_typing_edits_course_name() {
        let mut state = AppState::default();
        type_str(&mut state, "Intro");
        state.form_backspace();
        assert_eq!(state.draft.name(), "Intr");
    }

    #[test]
    fn test_typing_edits_module_fields() {
        let mut state = AppState::default();
        state.form.focus(FocusTarget::ModuleTitle(0));
        type_str(&mut state, "Lesson 1");
        state.form.focus(FocusTarget::ModuleDescription(0));
        type_str(&mut state, "Line");
        state.form_newline();
        type_str(&mut state, "two");

        assert_eq!(state.draft.modules()[0].title, "Lesson 1");
        assert_eq!(state.draft.modules()[0].description, "Line\ntwo");
    }

    #[test]
    fn test_newline_ignored_outside_description() {
        let mut state = AppState::default();
        state.form_newline();
        assert_eq!(state.draft.name(), "");
    }

    #[test]
    fn test_typing_on_button_does_nothing() {
        let mut state = AppState::default();
        state.form.focus(FocusTarget::Submit);
        type_str(&mut state, "abc");
        assert_eq!(state.draft, CourseDraft::new());
    }

    #[test]
    fn test_apply_path_input_selects_video() {
        let dir = tempfile::tempdir().unwrap();
        let video = file_ref(&dir, "lesson.mp4", b"v");
        let mut state = AppState::default();
        state.form.focus(FocusTarget::ModuleVideo(0));
        type_str(&mut state, &video.path().display().to_string());

        state.apply_path_input();

        assert_eq!(state.draft.modules()[0].video, Some(video));
        assert_eq!(state.status_message.as_deref(), Some("Selected lesson.mp4"));
    }

    #[test]
    fn test_apply_missing_path_leaves_draft_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::default();
        state.form.focus(FocusTarget::CourseImage);
        type_str(&mut state, &dir.path().join("missing.png").display().to_string());

        state.apply_path_input();

        assert!(state.draft.image().is_none());
        assert!(state.status_message.unwrap().starts_with("Cannot use"));
    }

    #[test]
    fn test_mismatched_media_kind_is_advisory() {
        let dir = tempfile::tempdir().unwrap();
        let not_an_image = file_ref(&dir, "clip.mp4", b"v");
        let mut state = AppState::default();

        state.apply_selection(
            FocusTarget::CourseImage,
            FileSelection::single(not_an_image.clone()),
        );

        assert_eq!(state.draft.image(), Some(&not_an_image));
        assert_eq!(
            state.status_message.as_deref(),
            Some("clip.mp4 does not look like image/*")
        );
    }

    #[test]
    fn test_focus_change_prefills_selected_path() {
        let dir = tempfile::tempdir().unwrap();
        let image = file_ref(&dir, "cover.png", b"i");
        let mut state = AppState::default();
        state.apply_selection(FocusTarget::CourseImage, FileSelection::single(image.clone()));

        state.next_form_field();

        assert_eq!(state.active_target(), FocusTarget::CourseImage);
        assert_eq!(state.form.path_input, image.path().display().to_string());
    }

    #[test]
    fn test_leaving_file_input_applies_typed_path() {
        let dir = tempfile::tempdir().unwrap();
        let image = file_ref(&dir, "cover.png", b"i");
        let mut state = AppState::default();
        state.form.focus(FocusTarget::CourseImage);
        type_str(&mut state, &image.path().display().to_string());

        state.next_form_field();

        assert_eq!(state.draft.image(), Some(&image));
        assert_eq!(state.active_target(), FocusTarget::ModuleTitle(0));
        assert_eq!(state.status_message.as_deref(), Some("Selected cover.png"));
    }

    #[test]
    fn test_leaving_file_input_with_bad_path_explains() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::default();
        state.form.focus(FocusTarget::ModuleVideo(0));
        type_str(&mut state, &dir.path().join("gone.mp4").display().to_string());

        state.prev_form_field();

        assert!(state.draft.modules()[0].video.is_none());
        assert!(state.status_message.unwrap().starts_with("Cannot use"));
    }

    #[test]
    fn test_leaving_untouched_file_input_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let image = file_ref(&dir, "cover.png", b"i");
        let mut state = AppState::default();
        state.apply_selection(FocusTarget::CourseImage, FileSelection::single(image.clone()));
        state.status_message = None;
        state.form.focus(FocusTarget::CourseImage);
        state.form.path_input = image.path().display().to_string();

        state.next_form_field();
        state.form.focus(FocusTarget::ModuleVideo(0));
        state.next_form_field();

        assert_eq!(state.draft.image(), Some(&image));
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_add_module_focuses_new_title() {
        let mut state = AppState::default();
        state.form.focus(FocusTarget::AddModule);
        state.add_module();

        assert_eq!(state.draft.module_count(), 2);
        assert_eq!(state.active_target(), FocusTarget::ModuleTitle(1));
    }

    #[test]
    fn test_reset_draft() {
        let mut state = AppState::default();
        type_str(&mut state, "Name");
        state.add_module();

        state.reset_draft();

        assert_eq!(state.draft, CourseDraft::new());
        assert_eq!(state.active_target(), FocusTarget::CourseName);
    }

    #[test]
    fn test_notice_queue() {
        let mut state = AppState::default();
        state.push_notice(Notice::error("first"));
        state.push_notice(Notice::info("second"));

        assert_eq!(state.current_notice().unwrap().message, "first");
        state.dismiss_notice();
        assert_eq!(state.current_notice().unwrap().message, "second");
        state.dismiss_notice();
        assert!(state.current_notice().is_none());
    }
}
