use std::path::{Path, PathBuf};

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Lowercased extension of `path`, without the dot.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .map(|e| e.to_ascii_lowercase())
}

/// Append `ext` when the user typed a name with no extension at all.
/// An existing extension is left alone, whatever it is.
pub fn with_default_extension(path: PathBuf, ext: &str) -> PathBuf {
    if extension_of(&path).is_some() {
        path
    } else {
        path.with_extension(ext)
    }
}

/// Parent directory of `path` as a string, for seeding the next file dialog.
pub fn parent_directory(path: &Path) -> Option<String> {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.to_string_lossy().to_string())
}
