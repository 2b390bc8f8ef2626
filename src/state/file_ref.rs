//! File handles for user-selected images and videos

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Broad media class a file input accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// The `accept` filter shown next to the input
    pub fn accept_hint(self) -> &'static str {
        match self {
            MediaKind::Image => "image/*",
            MediaKind::Video => "video/*",
        }
    }

    /// Whether a content type falls inside this class
    pub fn accepts(self, content_type: &str) -> bool {
        let prefix = match self {
            MediaKind::Image => "image/",
            MediaKind::Video => "video/",
        };
        content_type.starts_with(prefix)
    }
}

/// Guess a Content-Type from a file extension.
pub fn content_type_for_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "mp4" | "m4v" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Handle to a file the user picked.
///
/// Holds the path plus the metadata captured at selection time. Bytes are
/// only read when the file is attached to an outgoing request, so the draft
/// never owns file contents. Dropping the handle releases everything it
/// holds.
#[derive(Clone, PartialEq, Eq)]
pub struct FileRef {
    path: PathBuf,
    file_name: String,
    content_type: String,
    size: u64,
}

impl FileRef {
    /// Open a handle for an existing regular file
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", path.display()),
            ));
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            content_type: content_type_for_extension(path).to_string(),
            size: metadata.len(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Open the file for streaming, returning the handle and its current
    /// length. The length is read again since the file may have changed
    /// after it was selected.
    pub async fn open_upload(&self) -> io::Result<(tokio::fs::File, u64)> {
        let file = tokio::fs::File::open(&self.path).await?;
        let len = file.metadata().await?.len();
        Ok((file, len))
    }

    /// Short human-readable label used by the preview
    pub fn preview_label(&self) -> String {
        format!(
            "{} ({}, {})",
            self.file_name,
            self.content_type,
            format_size(self.size)
        )
    }
}

impl fmt::Debug for FileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileRef")
            .field("path", &self.path)
            .field("content_type", &self.content_type)
            .field("size", &self.size)
            .finish()
    }
}

/// Result of a file-selection event: zero or more chosen files
#[derive(Debug, Clone, Default)]
pub struct FileSelection {
    files: Vec<FileRef>,
}

impl FileSelection {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(file: FileRef) -> Self {
        Self { files: vec![file] }
    }

    /// Resolve a typed path into a selection.
    ///
    /// A blank input or a path that does not name a readable file yields an
    /// empty selection together with the reason.
    pub fn from_path_input(input: &str) -> (Self, Option<String>) {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return (Self::empty(), None);
        }

        match FileRef::open(expand_home(trimmed)) {
            Ok(file) => (Self::single(file), None),
            Err(e) => {
                tracing::debug!("file selection failed for {trimmed}: {e}");
                (Self::empty(), Some(format!("Cannot use {trimmed}: {e}")))
            }
        }
    }

    pub fn first(&self) -> Option<&FileRef> {
        self.files.first()
    }

    /// Take ownership of the first file, dropping the rest
    pub fn into_first(self) -> Option<FileRef> {
        self.files.into_iter().next()
    }

}

fn expand_home(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix("~/") {
        if let Some(dirs) = directories::BaseDirs::new() {
            return dirs.home_dir().join(rest);
        }
    }
    PathBuf::from(input)
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    match bytes {
        b if b >= GB => format!("{:.1} GB", b as f64 / GB as f64),
        b if b >= MB => format!("{:.1} MB", b as f64 / MB as f64),
        b if b >= KB => format!("{:.1} KB", b as f64 / KB as f64),
        b => format!("{b} B"),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::file_ref;
    use super::*;

    #[test]
    fn test_content_type_for_extension() {
        assert_eq!(content_type_for_extension(Path::new("a.MP4")), "video/mp4");
        assert_eq!(content_type_for_extension(Path::new("a.png")), "image/png");
        assert_eq!(content_type_for_extension(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(
            content_type_for_extension(Path::new("noext")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_media_kind_accepts() {
        assert!(MediaKind::Image.accepts("image/png"));
        assert!(!MediaKind::Image.accepts("video/mp4"));
        assert!(MediaKind::Video.accepts("video/webm"));
        assert_eq!(MediaKind::Video.accept_hint(), "video/*");
    }

    #[test]
    fn test_open_captures_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let file = file_ref(&dir, "cover.png", b"12345");
        assert_eq!(file.file_name(), "cover.png");
        assert_eq!(file.content_type(), "image/png");
        assert_eq!(file.preview_label(), "cover.png (image/png, 5 B)");
    }

    #[test]
    fn test_open_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileRef::open(dir.path()).is_err());
    }

    #[tokio::test]
    async fn test_open_upload_reports_current_length() {
        use tokio::io::AsyncReadExt;

        let dir = tempfile::tempdir().unwrap();
        let file = file_ref(&dir, "lesson.mp4", b"video");
        std::fs::write(file.path(), b"video-bytes").unwrap();

        let (mut handle, len) = file.open_upload().await.unwrap();
        assert_eq!(len, 11);
        let mut contents = Vec::new();
        handle.read_to_end(&mut contents).await.unwrap();
        assert_eq!(contents, b"video-bytes");
    }

    #[test]
    fn test_selection_from_blank_input_is_empty_without_reason() {
        let (selection, reason) = FileSelection::from_path_input("   ");
        assert!(selection.first().is_none());
        assert!(reason.is_none());
    }

    #[test]
    fn test_selection_from_missing_path_reports_reason() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.mp4");
        let (selection, reason) = FileSelection::from_path_input(missing.to_str().unwrap());
        assert!(selection.first().is_none());
        assert!(reason.unwrap().starts_with("Cannot use"));
    }

    #[test]
    fn test_selection_from_existing_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = file_ref(&dir, "intro.webm", b"x");
        let input = format!("  {}  ", file.path().display());
        let (selection, reason) = FileSelection::from_path_input(&input);
        assert!(reason.is_none());
        assert_eq!(selection.first(), Some(&file));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }
}
