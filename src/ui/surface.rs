use fltk::{
    enums::{Color, Font},
    prelude::*,
    text::{TextBuffer, TextEditor},
};

use crate::app::controllers::DisplaySurface;
use crate::app::domain::{FontSpec, ThemeColor};

/// The FLTK text editor as seen by the session.
pub struct EditorSurface {
    editor: TextEditor,
    buffer: TextBuffer,
}

impl EditorSurface {
    pub fn new(mut editor: TextEditor) -> Self {
        let buffer = TextBuffer::default();
        editor.set_buffer(buffer.clone());
        Self { editor, buffer }
    }
}

impl DisplaySurface for EditorSurface {
    fn text(&self) -> String {
        self.buffer.text()
    }

    fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.editor.set_insert_position(0);
        self.editor.show_insert_position();
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.editor.set_text_font(font_for_family(&font.family));
        self.editor.set_text_size(font.size as i32);
        self.editor.redraw();
    }

    fn set_colors(&mut self, background: ThemeColor, foreground: ThemeColor) {
        self.editor.set_color(to_fltk_color(background));
        self.editor.set_text_color(to_fltk_color(foreground));
        self.editor.set_cursor_color(to_fltk_color(foreground));
        self.editor.redraw();
    }
}

pub fn to_fltk_color(color: ThemeColor) -> Color {
    Color::from_rgb(color.r, color.g, color.b)
}

/// Map a family name typed by the user to an FLTK font.
///
/// Common names map onto FLTK's built-in faces; anything else is looked up
/// among the fonts FLTK knows about (Helvetica if not found).
pub fn font_for_family(family: &str) -> Font {
    let family = family.trim();
    match family.to_ascii_lowercase().as_str() {
        "helvetica" | "arial" | "sans" | "sans-serif" => Font::Helvetica,
        "courier" | "courier new" | "mono" | "monospace" => Font::Courier,
        "times" | "times new roman" | "serif" => Font::Times,
        "screen" => Font::Screen,
        _ => Font::by_name(family),
    }
}
