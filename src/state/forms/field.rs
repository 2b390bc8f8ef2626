//! Form field descriptors and text editing

use crate::state::file_ref::MediaKind;

/// What kind of input a field is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text { multiline: bool },
    File(MediaKind),
    Button,
}

/// Describes a single focusable control of the course form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FormField {
    /// Create a required text field
    pub fn text(label: &str, is_multiline: bool) -> Self {
        Self {
            label: label.to_string(),
            kind: FieldKind::Text {
                multiline: is_multiline,
            },
            required: true,
        }
    }

    /// Create a required file input
    pub fn file(label: &str, accept: MediaKind) -> Self {
        Self {
            label: label.to_string(),
            kind: FieldKind::File(accept),
            required: true,
        }
    }

    pub fn button(label: &str) -> Self {
        Self {
            label: label.to_string(),
            kind: FieldKind::Button,
            required: false,
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind, FieldKind::Text { multiline: true })
    }

    pub fn accepts(&self) -> Option<MediaKind> {
        match self.kind {
            FieldKind::File(kind) => Some(kind),
            _ => None,
        }
    }

    /// Label with the required marker
    pub fn title(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        }
    }
}

/// A single keystroke applied to a text value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Backspace,
}

impl TextEdit {
    /// Produce the edited value; the original is left untouched
    pub fn apply(self, value: &str) -> String {
        let mut edited = value.to_string();
        match self {
            TextEdit::Insert(c) => edited.push(c),
            TextEdit::Backspace => {
                edited.pop();
            }
        }
        edited
    }
}
