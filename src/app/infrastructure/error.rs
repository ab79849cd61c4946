use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Invalid font: {0}")]
    InvalidFont(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with EditorError
pub type Result<T> = std::result::Result<T, EditorError>;

/// The user-facing file operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    Open,
    Save,
    Export,
}

impl fmt::Display for FileOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open => "Open",
            Self::Save => "Save",
            Self::Export => "Export",
        };
        f.write_str(name)
    }
}

/// A failed file operation, carrying enough context for the alert shown to the user.
#[derive(Error, Debug)]
#[error("{operation} failed for {}: {source}", .path.display())]
pub struct FileOpError {
    pub operation: FileOperation,
    pub path: PathBuf,
    #[source]
    pub source: EditorError,
}

impl FileOpError {
    pub fn new(operation: FileOperation, path: impl Into<PathBuf>, source: EditorError) -> Self {
        Self {
            operation,
            path: path.into(),
            source,
        }
    }
}
