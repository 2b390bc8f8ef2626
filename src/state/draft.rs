//! Course draft: the in-progress course being authored

use super::file_ref::{FileRef, FileSelection};

/// One unit of course content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleDraft {
    pub title: String,
    pub video: Option<FileRef>,
    pub description: String,
}

impl ModuleDraft {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A replacement value for one field of a module
#[derive(Debug, Clone)]
pub enum ModuleField {
    Title(String),
    Video(Option<FileRef>),
    Description(String),
}

/// The course being authored.
///
/// Setters replace whole values and never validate; blank or missing
/// fields are legal while editing. The module list always holds at least
/// one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDraft {
    name: String,
    image: Option<FileRef>,
    modules: Vec<ModuleDraft>,
}

impl Default for CourseDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseDraft {
    /// Empty name, no image, one blank module
    pub fn new() -> Self {
        Self {
            name: String::new(),
            image: None,
            modules: vec![ModuleDraft::new()],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> Option<&FileRef> {
        self.image.as_ref()
    }

    pub fn modules(&self) -> &[ModuleDraft] {
        &self.modules
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn set_image(&mut self, image: Option<FileRef>) {
        self.image = image;
    }

    /// Replace the module list. An empty list is replaced by one blank module.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn set_modules(&mut self, modules: Vec<ModuleDraft>) {
        self.modules = if modules.is_empty() {
            vec![ModuleDraft::new()]
        } else {
            modules
        };
    }

    /// Apply an image file-selection event; an empty selection changes nothing
    pub fn select_image(&mut self, selection: FileSelection) {
        if let Some(file) = selection.into_first() {
            self.image = Some(file);
        }
    }

    /// Append a blank module at the end
    pub fn add_module(&mut self) {
        self.modules.push(ModuleDraft::new());
    }

    /// Replace one field of the module at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. The form only addresses modules
    /// it rendered, so this is a caller bug.
    pub fn set_module_field(&mut self, index: usize, field: ModuleField) {
        let module = &mut self.modules[index];
        match field {
            ModuleField::Title(title) => module.title = title,
            ModuleField::Video(video) => module.video = video,
            ModuleField::Description(description) => module.description = description,
        }
    }

    /// Apply a video file-selection event to module `index`.
    ///
    /// An empty selection is ignored.
    pub fn set_module_video(&mut self, index: usize, selection: FileSelection) {
        if let Some(file) = selection.into_first() {
            self.set_module_field(index, ModuleField::Video(Some(file)));
        }
    }

    /// Discard everything and return to the initial state
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
