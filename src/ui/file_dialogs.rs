use std::path::PathBuf;

use fltk::dialog;

const CURRENT_DIR: &str = ".";

pub fn native_open_dialog(filter: &str, start_dir: Option<&str>) -> Option<PathBuf> {
    dialog::file_chooser("Open File", filter, start_dir.unwrap_or(CURRENT_DIR), false)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

pub fn native_save_dialog(title: &str, filter: &str, start_dir: Option<&str>) -> Option<PathBuf> {
    dialog::file_chooser(title, filter, start_dir.unwrap_or(CURRENT_DIR), false)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}
