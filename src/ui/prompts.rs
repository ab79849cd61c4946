use std::path::PathBuf;

use fltk::dialog::{self, ColorMode};

use crate::app::controllers::{FileKind, Prompts, ThemeChoice};
use crate::app::domain::{FontSpec, Theme, ThemeColor};
use crate::app::file_filters::filter_for;
use crate::ui::dialogs::font::show_font_dialog;
use crate::ui::dialogs::theme::show_theme_dialog;
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};

/// Prompts backed by FLTK's modal dialogs.
#[derive(Debug, Default)]
pub struct NativePrompts;

impl Prompts for NativePrompts {
    fn choose_open_path(&mut self, start_dir: Option<&str>) -> Option<PathBuf> {
        native_open_dialog(&filter_for(FileKind::Document), start_dir)
    }

    fn choose_save_path(&mut self, kind: FileKind, start_dir: Option<&str>) -> Option<PathBuf> {
        let title = match kind {
            FileKind::Document => "Save As",
            FileKind::Pdf => "Export as PDF",
        };
        native_save_dialog(title, &filter_for(kind), start_dir)
    }

    fn choose_color(&mut self, title: &str, _current: ThemeColor) -> Option<ThemeColor> {
        dialog::color_chooser(title, ColorMode::Rgb).map(ThemeColor::from)
    }

    fn choose_font(&mut self, current: &FontSpec) -> Option<(String, u32)> {
        show_font_dialog(current)
    }

    fn choose_theme(&mut self, current: &Theme) -> Option<ThemeChoice> {
        show_theme_dialog(current)
    }
}
