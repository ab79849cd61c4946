//! The editor session: one Document, one Theme and the surface that shows them.
//!
//! All user actions go through here. The UI layer supplies a `DisplaySurface`
//! (the live text widget) and a `Prompts` implementation (file, color and font
//! dialogs); tests supply in-memory versions of both.

use std::path::PathBuf;

use crate::app::domain::{Document, FontSpec, Theme, ThemeColor};
use crate::app::infrastructure::error::{FileOpError, FileOperation, Result};
use crate::app::services::document_io::{load_document, save_document};
use crate::app::services::export::export_to_page_format;
use crate::app::services::text_ops::{parent_directory, with_default_extension};

pub const DEFAULT_SAVE_EXTENSION: &str = "docx";
pub const EXPORT_EXTENSION: &str = "pdf";

/// The widget that displays the document text with the current theme.
pub trait DisplaySurface {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
    fn set_font(&mut self, font: &FontSpec);
    fn set_colors(&mut self, background: ThemeColor, foreground: ThemeColor);
}

/// What the user picked in the theme dialog. Either color may be left unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeChoice {
    pub background: Option<ThemeColor>,
    pub foreground: Option<ThemeColor>,
}

/// Which kind of file a dialog should offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Document,
    Pdf,
}

/// Requests for input from the user. `None` always means "cancelled".
pub trait Prompts {
    fn choose_open_path(&mut self, start_dir: Option<&str>) -> Option<PathBuf>;
    fn choose_save_path(&mut self, kind: FileKind, start_dir: Option<&str>) -> Option<PathBuf>;
    fn choose_color(&mut self, title: &str, current: ThemeColor) -> Option<ThemeColor>;
    /// Returns the raw family and size; validation happens in the session.
    fn choose_font(&mut self, current: &FontSpec) -> Option<(String, u32)>;
    fn choose_theme(&mut self, current: &Theme) -> Option<ThemeChoice>;
}

/// Result of a user-driven operation that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Cancelled,
}

pub struct EditorSession<S: DisplaySurface> {
    document: Document,
    theme: Theme,
    surface: S,
    /// Last directory used in a file open/save dialog.
    last_directory: Option<String>,
}

impl<S: DisplaySurface> EditorSession<S> {
    /// Start with an empty document and the default theme applied to `surface`.
    pub fn new(mut surface: S, start_directory: Option<String>) -> Self {
        let theme = Theme::default();
        surface.set_text("");
        surface.set_font(&theme.font);
        surface.set_colors(theme.background, theme.foreground);
        Self {
            document: Document::new(),
            theme,
            surface,
            last_directory: start_directory,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn last_directory(&self) -> Option<&str> {
        self.last_directory.as_deref()
    }

    /// Pull the surface text into the document; the widget owns edits.
    fn sync_content(&mut self) {
        self.document.content = self.surface.text();
    }

    fn remember_directory(&mut self, path: &std::path::Path) {
        if let Some(dir) = parent_directory(path) {
            self.last_directory = Some(dir);
        }
    }

    // --- Document ---

    pub fn new_document(&mut self) {
        self.document = Document::new();
        self.surface.set_text("");
        tracing::debug!("New document");
    }

    pub fn open(&mut self, prompts: &mut impl Prompts) -> std::result::Result<Outcome, FileOpError> {
        let Some(path) = prompts.choose_open_path(self.last_directory()) else {
            tracing::debug!("Open cancelled");
            return Ok(Outcome::Cancelled);
        };
        self.open_path(path)?;
        Ok(Outcome::Applied)
    }

    /// Replace the document with the contents of `path`. On failure nothing changes.
    pub fn open_path(&mut self, path: PathBuf) -> std::result::Result<(), FileOpError> {
        let content = load_document(&path)
            .map_err(|e| FileOpError::new(FileOperation::Open, &path, e))?;

        self.remember_directory(&path);
        self.surface.set_text(&content);
        tracing::info!("Opened {} ({} bytes)", path.display(), content.len());
        self.document = Document::from_file(path, content);
        Ok(())
    }

    /// Save to the current path, asking for one if the document is untitled.
    pub fn save(&mut self, prompts: &mut impl Prompts) -> std::result::Result<Outcome, FileOpError> {
        match self.document.path.clone() {
            Some(path) => {
                self.save_to(path)?;
                Ok(Outcome::Applied)
            }
            None => self.save_as(prompts),
        }
    }

    pub fn save_as(&mut self, prompts: &mut impl Prompts) -> std::result::Result<Outcome, FileOpError> {
        let Some(path) = prompts.choose_save_path(FileKind::Document, self.last_directory()) else {
            tracing::debug!("Save cancelled");
            return Ok(Outcome::Cancelled);
        };
        let path = with_default_extension(path, DEFAULT_SAVE_EXTENSION);
        self.save_to(path)?;
        Ok(Outcome::Applied)
    }

    /// Write the document to `path`. The path is only adopted once the write succeeded.
    pub fn save_to(&mut self, path: PathBuf) -> std::result::Result<(), FileOpError> {
        self.sync_content();
        save_document(&path, &self.document.content)
            .map_err(|e| FileOpError::new(FileOperation::Save, &path, e))?;

        tracing::info!("Saved {}", path.display());
        self.remember_directory(&path);
        self.document.path = Some(path);
        Ok(())
    }

    pub fn export_pdf(&mut self, prompts: &mut impl Prompts) -> std::result::Result<Outcome, FileOpError> {
        let Some(path) = prompts.choose_save_path(FileKind::Pdf, self.last_directory()) else {
            tracing::debug!("Export cancelled");
            return Ok(Outcome::Cancelled);
        };
        let path = with_default_extension(path, EXPORT_EXTENSION);

        self.sync_content();
        let pages = export_to_page_format(&path, &self.document.content)
            .map_err(|e| FileOpError::new(FileOperation::Export, &path, e))?;
        self.remember_directory(&path);
        tracing::info!("Exported {} page(s) to {}", pages, path.display());
        Ok(Outcome::Applied)
    }

    // --- Theme ---

    /// Validate and apply a font. A rejected font leaves everything as it was.
    pub fn apply_font(&mut self, family: &str, size: u32) -> Result<()> {
        let font = FontSpec::new(family, size)?;
        self.surface.set_font(&font);
        tracing::debug!("Font set to {} {}", font.family, font.size);
        self.theme.font = font;
        Ok(())
    }

    pub fn apply_foreground(&mut self, color: ThemeColor) {
        self.surface.set_colors(self.theme.background, color);
        self.theme.foreground = color;
        tracing::debug!("Foreground set to {}", color);
    }

    pub fn apply_background(&mut self, color: ThemeColor) {
        self.surface.set_colors(color, self.theme.foreground);
        self.theme.background = color;
        tracing::debug!("Background set to {}", color);
    }

    pub fn change_font(&mut self, prompts: &mut impl Prompts) -> Result<Outcome> {
        match prompts.choose_font(&self.theme.font) {
            Some((family, size)) => {
                self.apply_font(&family, size)?;
                Ok(Outcome::Applied)
            }
            None => Ok(Outcome::Cancelled),
        }
    }

    pub fn change_foreground(&mut self, prompts: &mut impl Prompts) -> Outcome {
        match prompts.choose_color("Choose font color", self.theme.foreground) {
            Some(color) => {
                self.apply_foreground(color);
                Outcome::Applied
            }
            None => Outcome::Cancelled,
        }
    }

    pub fn change_background(&mut self, prompts: &mut impl Prompts) -> Outcome {
        match prompts.choose_color("Choose background color", self.theme.background) {
            Some(color) => {
                self.apply_background(color);
                Outcome::Applied
            }
            None => Outcome::Cancelled,
        }
    }

    /// Apply both colors picked in the theme dialog in one step.
    pub fn set_theme(&mut self, prompts: &mut impl Prompts) -> Outcome {
        let Some(choice) = prompts.choose_theme(&self.theme) else {
            return Outcome::Cancelled;
        };
        if choice == ThemeChoice::default() {
            return Outcome::Cancelled;
        }

        let background = choice.background.unwrap_or(self.theme.background);
        let foreground = choice.foreground.unwrap_or(self.theme.foreground);
        self.surface.set_colors(background, foreground);
        self.theme.background = background;
        self.theme.foreground = foreground;
        tracing::debug!("Theme set to {} on {}", foreground, background);
        Outcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::error::EditorError;
    use std::collections::VecDeque;
    use std::fs;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct MemorySurface {
        text: String,
        font: Option<FontSpec>,
        colors: Option<(ThemeColor, ThemeColor)>,
    }

    impl DisplaySurface for MemorySurface {
        fn text(&self) -> String {
            self.text.clone()
        }
        fn set_text(&mut self, text: &str) {
            self.text = text.to_string();
        }
        fn set_font(&mut self, font: &FontSpec) {
            self.font = Some(font.clone());
        }
        fn set_colors(&mut self, background: ThemeColor, foreground: ThemeColor) {
            self.colors = Some((background, foreground));
        }
    }

    /// Answers prompts from queues; an empty queue means the user cancelled.
    #[derive(Default)]
    struct ScriptedPrompts {
        paths: VecDeque<PathBuf>,
        colors: VecDeque<ThemeColor>,
        fonts: VecDeque<(String, u32)>,
        themes: VecDeque<ThemeChoice>,
        asked_kinds: Vec<FileKind>,
    }

    impl Prompts for ScriptedPrompts {
        fn choose_open_path(&mut self, _start_dir: Option<&str>) -> Option<PathBuf> {
            self.paths.pop_front()
        }
        fn choose_save_path(&mut self, kind: FileKind, _start_dir: Option<&str>) -> Option<PathBuf> {
            self.asked_kinds.push(kind);
            self.paths.pop_front()
        }
        fn choose_color(&mut self, _title: &str, _current: ThemeColor) -> Option<ThemeColor> {
            self.colors.pop_front()
        }
        fn choose_font(&mut self, _current: &FontSpec) -> Option<(String, u32)> {
            self.fonts.pop_front()
        }
        fn choose_theme(&mut self, _current: &Theme) -> Option<ThemeChoice> {
            self.themes.pop_front()
        }
    }

    fn session() -> EditorSession<MemorySurface> {
        EditorSession::new(MemorySurface::default(), None)
    }

    fn type_text(session: &mut EditorSession<MemorySurface>, text: &str) {
        session.surface_mut().set_text(text);
    }

    #[test]
    fn test_new_session_applies_default_theme() {
        let s = session();
        assert_eq!(s.theme(), &Theme::default());
        assert_eq!(s.surface().font, Some(FontSpec::default()));
        assert_eq!(s.surface().colors, Some((ThemeColor::WHITE, ThemeColor::BLACK)));
        assert!(s.document().path.is_none());
    }

    #[test]
    fn test_new_document_is_idempotent() {
        let mut s = session();
        type_text(&mut s, "scratch");
        s.new_document();
        let once = (s.document().clone(), s.surface().clone());
        s.new_document();

        assert_eq!((s.document().clone(), s.surface().clone()), once);
        assert!(s.document().content.is_empty());
        assert!(s.document().path.is_none());
        assert!(s.surface().text.is_empty());
    }

    #[test]
    fn test_save_and_reopen_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        let mut s = session();
        type_text(&mut s, "Hello\nWorld");

        let mut prompts = ScriptedPrompts::default();
        prompts.paths.push_back(path.clone());
        assert_eq!(s.save(&mut prompts).unwrap(), Outcome::Applied);
        assert_eq!(s.document().path.as_deref(), Some(path.as_path()));

        s.new_document();
        prompts.paths.push_back(path.clone());
        assert_eq!(s.open(&mut prompts).unwrap(), Outcome::Applied);
        assert_eq!(s.document().content, "Hello\nWorld");
        assert_eq!(s.surface().text, "Hello\nWorld");
    }

    #[test]
    fn test_save_untitled_adds_docx_extension() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session();
        type_text(&mut s, "Line1\nLine2");

        let mut prompts = ScriptedPrompts::default();
        prompts.paths.push_back(dir.path().join("letter"));
        s.save(&mut prompts).unwrap();

        let saved = dir.path().join("letter.docx");
        assert_eq!(s.document().path.as_deref(), Some(saved.as_path()));
        assert_eq!(prompts.asked_kinds, vec![FileKind::Document]);
        assert_eq!(&fs::read(&saved).unwrap()[..2], b"PK");
    }

    #[test]
    fn test_save_with_known_path_does_not_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "old").unwrap();

        let mut s = session();
        s.open_path(path.clone()).unwrap();
        type_text(&mut s, "new text\n");

        let mut prompts = ScriptedPrompts::default();
        assert_eq!(s.save(&mut prompts).unwrap(), Outcome::Applied);
        assert!(prompts.asked_kinds.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "new text");
        assert_eq!(s.document().content, "new text\n");
    }

    #[test]
    fn test_cancelled_prompts_are_no_ops() {
        let mut s = session();
        type_text(&mut s, "keep me");
        let before = (s.document().clone(), s.surface().clone(), s.theme().clone());

        let mut prompts = ScriptedPrompts::default();
        assert_eq!(s.open(&mut prompts).unwrap(), Outcome::Cancelled);
        assert_eq!(s.save(&mut prompts).unwrap(), Outcome::Cancelled);
        assert_eq!(s.export_pdf(&mut prompts).unwrap(), Outcome::Cancelled);
        assert_eq!(s.change_font(&mut prompts).unwrap(), Outcome::Cancelled);
        assert_eq!(s.change_foreground(&mut prompts), Outcome::Cancelled);
        assert_eq!(s.change_background(&mut prompts), Outcome::Cancelled);
        assert_eq!(s.set_theme(&mut prompts), Outcome::Cancelled);

        assert!(s.document().path.is_none());
        assert_eq!(s.surface(), &before.1);
        assert_eq!(s.theme(), &before.2);
    }

    #[test]
    fn test_failed_open_leaves_state_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("broken.docx");
        fs::write(&bad, "not a zip").unwrap();

        let mut s = session();
        type_text(&mut s, "work in progress");
        let mut prompts = ScriptedPrompts::default();
        prompts.paths.push_back(bad.clone());

        let err = s.open(&mut prompts).unwrap_err();
        assert_eq!(err.operation, FileOperation::Open);
        assert_eq!(err.path, bad);
        assert!(matches!(err.source, EditorError::Format(_)));
        assert!(s.document().path.is_none());
        assert_eq!(s.surface().text, "work in progress");
    }

    #[test]
    fn test_failed_open_keeps_last_directory() {
        let start = tempfile::tempdir().unwrap();
        let other = tempfile::tempdir().unwrap();
        let start_dir = start.path().to_string_lossy().to_string();
        let mut s = EditorSession::new(MemorySurface::default(), Some(start_dir.clone()));

        let err = s.open_path(other.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err.source, EditorError::Io(_)));
        assert_eq!(s.last_directory(), Some(start_dir.as_str()));

        let good = other.path().join("found.txt");
        fs::write(&good, "hi").unwrap();
        s.open_path(good).unwrap();
        assert_eq!(s.last_directory(), other.path().to_str());
    }

    #[test]
    fn test_failed_save_keeps_previous_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session();
        type_text(&mut s, "draft");

        let mut prompts = ScriptedPrompts::default();
        prompts.paths.push_back(dir.path().join("missing").join("draft.txt"));
        let err = s.save(&mut prompts).unwrap_err();

        assert_eq!(err.operation, FileOperation::Save);
        assert!(matches!(err.source, EditorError::Io(_)));
        assert!(s.document().path.is_none());
        assert_eq!(s.last_directory(), None);
    }

    #[test]
    fn test_export_ignores_theme_and_keeps_document_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session();
        s.apply_font("Courier", 30).unwrap();
        type_text(&mut s, &"A".repeat(500));

        let mut prompts = ScriptedPrompts::default();
        prompts.paths.push_back(dir.path().join("long"));
        assert_eq!(s.export_pdf(&mut prompts).unwrap(), Outcome::Applied);

        assert_eq!(prompts.asked_kinds, vec![FileKind::Pdf]);
        assert!(fs::read(dir.path().join("long.pdf")).unwrap().starts_with(b"%PDF"));
        assert!(s.document().path.is_none());
        assert_eq!(s.last_directory(), dir.path().to_str());
    }

    #[test]
    fn test_out_of_range_font_is_rejected() {
        let mut s = session();
        let before = (s.theme().clone(), s.surface().clone());

        let err = s.apply_font("Mono", 90).unwrap_err();
        assert!(matches!(err, EditorError::InvalidFont(_)));
        assert_eq!((s.theme().clone(), s.surface().clone()), before);
    }

    #[test]
    fn test_change_font_from_prompt() {
        let mut s = session();
        let mut prompts = ScriptedPrompts::default();
        prompts.fonts.push_back(("Courier".to_string(), 18));

        assert_eq!(s.change_font(&mut prompts).unwrap(), Outcome::Applied);
        let expected = FontSpec::new("Courier", 18).unwrap();
        assert_eq!(s.theme().font, expected);
        assert_eq!(s.surface().font, Some(expected));
    }

    #[test]
    fn test_color_changes_update_theme_and_surface() {
        let mut s = session();
        let navy = ThemeColor::rgb(0, 0, 128);
        let cream = ThemeColor::rgb(255, 253, 208);
        let mut prompts = ScriptedPrompts::default();
        prompts.colors.extend([navy, cream]);

        assert_eq!(s.change_foreground(&mut prompts), Outcome::Applied);
        assert_eq!(s.change_background(&mut prompts), Outcome::Applied);

        assert_eq!(s.theme().foreground, navy);
        assert_eq!(s.theme().background, cream);
        assert_eq!(s.surface().colors, Some((cream, navy)));
    }

    #[test]
    fn test_set_theme_applies_only_picked_colors() {
        let mut s = session();
        let dark = ThemeColor::rgb(30, 30, 30);
        let mut prompts = ScriptedPrompts::default();
        prompts.themes.push_back(ThemeChoice {
            background: Some(dark),
            foreground: None,
        });

        assert_eq!(s.set_theme(&mut prompts), Outcome::Applied);
        assert_eq!(s.theme().background, dark);
        assert_eq!(s.theme().foreground, ThemeColor::BLACK);
        assert_eq!(s.surface().colors, Some((dark, ThemeColor::BLACK)));
    }

    #[test]
    fn test_theme_dialog_with_no_picks_is_cancelled() {
        let mut s = session();
        let mut prompts = ScriptedPrompts::default();
        prompts.themes.push_back(ThemeChoice::default());

        assert_eq!(s.set_theme(&mut prompts), Outcome::Cancelled);
        assert_eq!(s.theme(), &Theme::default());
    }
}
