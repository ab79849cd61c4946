use std::path::{Path, PathBuf};

use crate::app::services::text_ops::{extension_of, extract_filename};

/// On-disk format of a document, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    PlainText,
    /// Word-processor document (`.docx`), one paragraph per line.
    Structured,
}

impl DocumentFormat {
    /// Pick a format from the path's extension. Anything that isn't `.docx`
    /// is treated as plain text.
    pub fn from_path(path: &Path) -> Self {
        match extension_of(path).as_deref() {
            Some("docx") => Self::Structured,
            _ => Self::PlainText,
        }
    }
}

/// The text being edited and the file it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// `None` until the buffer has been saved or opened from disk.
    pub path: Option<PathBuf>,
    pub content: String,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file(path: PathBuf, content: String) -> Self {
        Self {
            path: Some(path),
            content,
        }
    }

    pub fn display_name(&self) -> String {
        match self.path {
            Some(ref path) => extract_filename(&path.to_string_lossy()),
            None => "Untitled".to_string(),
        }
    }
}
