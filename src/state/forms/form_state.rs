//! Focus navigation for the course form

use super::field::FormField;
use crate::state::file_ref::MediaKind;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Every focusable control, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    CourseName,
    CourseImage,
    ModuleTitle(usize),
    ModuleVideo(usize),
    ModuleDescription(usize),
    AddModule,
    Submit,
}

/// Fields per module: title, video, description
const MODULE_FIELDS: usize = 3;
/// Course name and image come before the modules
const LEADING_FIELDS: usize = 2;
/// Add-module and submit buttons come after them
const TRAILING_FIELDS: usize = 2;

impl FocusTarget {
    /// Describe the control for rendering
    pub fn field(self) -> FormField {
        match self {
            FocusTarget::CourseName => FormField::text("Course Name", false),
            FocusTarget::CourseImage => FormField::file("Course Image", MediaKind::Image),
            FocusTarget::ModuleTitle(_) => FormField::text("Module Title", false),
            FocusTarget::ModuleVideo(_) => FormField::file("Upload Video", MediaKind::Video),
            FocusTarget::ModuleDescription(_) => FormField::text("Module Description", true),
            FocusTarget::AddModule => FormField::button("Add Module"),
            FocusTarget::Submit => FormField::button("Create Course"),
        }
    }

    pub fn is_file_input(self) -> bool {
        matches!(self, FocusTarget::CourseImage | FocusTarget::ModuleVideo(_))
    }
}

/// Keyboard state of the course form.
///
/// The number of focusable controls depends on how many modules the
/// draft holds, so the form tracks that count.
#[derive(Debug, Clone)]
pub struct CourseForm {
    pub active_field_index: usize,
    module_count: usize,
    /// Path typed into the focused file input
    pub path_input: String,
}

impl CourseForm {
    pub fn new(module_count: usize) -> Self {
        Self {
            active_field_index: 0,
            module_count: module_count.max(1),
            path_input: String::new(),
        }
    }

    /// Follow a change in the draft's module count, keeping focus in range
    pub fn sync_module_count(&mut self, module_count: usize) {
        self.module_count = module_count.max(1);
        let last = self.field_count() - 1;
        self.active_field_index = self.active_field_index.min(last);
    }

    /// Map a tab-order index to its control
    pub fn target_at(&self, index: usize) -> Option<FocusTarget> {
        let module_end = LEADING_FIELDS + self.module_count * MODULE_FIELDS;
        match index {
            0 => Some(FocusTarget::CourseName),
            1 => Some(FocusTarget::CourseImage),
            i if i < module_end => {
                let offset = i - LEADING_FIELDS;
                let module = offset / MODULE_FIELDS;
                Some(match offset % MODULE_FIELDS {
                    0 => FocusTarget::ModuleTitle(module),
                    1 => FocusTarget::ModuleVideo(module),
                    _ => FocusTarget::ModuleDescription(module),
                })
            }
            i if i == module_end => Some(FocusTarget::AddModule),
            i if i == module_end + 1 => Some(FocusTarget::Submit),
            _ => None,
        }
    }

    /// Tab-order index of a control
    pub fn index_of(&self, target: FocusTarget) -> Option<usize> {
        let module_end = LEADING_FIELDS + self.module_count * MODULE_FIELDS;
        let in_range = |i: usize| (i < self.module_count).then_some(i);
        match target {
            FocusTarget::CourseName => Some(0),
            FocusTarget::CourseImage => Some(1),
            FocusTarget::ModuleTitle(i) => in_range(i).map(|i| LEADING_FIELDS + i * MODULE_FIELDS),
            FocusTarget::ModuleVideo(i) => {
                in_range(i).map(|i| LEADING_FIELDS + i * MODULE_FIELDS + 1)
            }
            FocusTarget::ModuleDescription(i) => {
                in_range(i).map(|i| LEADING_FIELDS + i * MODULE_FIELDS + 2)
            }
            FocusTarget::AddModule => Some(module_end),
            FocusTarget::Submit => Some(module_end + 1),
        }
    }

    pub fn active_target(&self) -> FocusTarget {
        self.target_at(self.active_field_index)
            .unwrap_or(FocusTarget::Submit)
    }

    pub fn is_active(&self, target: FocusTarget) -> bool {
        self.active_target() == target
    }

    /// Move focus to a specific control
    pub fn focus(&mut self, target: FocusTarget) {
        if let Some(index) = self.index_of(target) {
            self.set_active_field(index);
        }
    }
}

impl Form for CourseForm {
    fn field_count(&self) -> usize {
        LEADING_FIELDS + self.module_count * MODULE_FIELDS + TRAILING_FIELDS
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
}
