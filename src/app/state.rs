use fltk::{dialog, prelude::*, window::Window};

use super::controllers::{EditorSession, Outcome};
use super::domain::{EditorSettings, Message};
use super::infrastructure::error::FileOpError;
use crate::ui::main_window::{MainWidgets, APP_NAME};
use crate::ui::prompts::NativePrompts;
use crate::ui::surface::EditorSurface;

pub struct AppState {
    pub session: EditorSession<EditorSurface>,
    pub prompts: NativePrompts,
    pub window: Window,
}

impl AppState {
    pub fn new(widgets: MainWidgets, settings: &EditorSettings) -> Self {
        let surface = EditorSurface::new(widgets.text_editor);
        let session = EditorSession::new(surface, settings.start_directory.clone());

        let mut state = Self {
            session,
            prompts: NativePrompts,
            window: widgets.wind,
        };
        state.update_window_title();
        state
    }

    /// Handle one message from the menu channel. Returns `true` if the app should exit.
    pub fn handle(&mut self, msg: Message) -> bool {
        match msg {
            Message::FileNew => self.file_new(),
            Message::FileOpen => self.file_open(),
            Message::FileSave => self.file_save(),
            Message::FileSaveAs => self.file_save_as(),
            Message::ExportPdf => self.export_pdf(),
            Message::FileQuit | Message::WindowClose => return true,
            Message::ChangeFont => self.change_font(),
            Message::ChangeFontColor => self.change_font_color(),
            Message::ChangeBackgroundColor => self.change_background_color(),
            Message::SetTheme => self.set_theme(),
        }
        false
    }

    /// Update the window title based on the current document
    pub fn update_window_title(&mut self) {
        let name = self.session.document().display_name();
        self.window.set_label(&format!("{} - {}", name, APP_NAME));
    }

    fn report(&self, err: &FileOpError) {
        tracing::warn!("{}", err);
        dialog::alert_default(&err.to_string());
    }

    // --- File operations ---

    pub fn file_new(&mut self) {
        self.session.new_document();
        self.update_window_title();
    }

    pub fn file_open(&mut self) {
        match self.session.open(&mut self.prompts) {
            Ok(Outcome::Applied) => self.update_window_title(),
            Ok(Outcome::Cancelled) => {}
            Err(e) => self.report(&e),
        }
    }

    pub fn file_save(&mut self) {
        match self.session.save(&mut self.prompts) {
            Ok(Outcome::Applied) => self.update_window_title(),
            Ok(Outcome::Cancelled) => {}
            Err(e) => self.report(&e),
        }
    }

    pub fn file_save_as(&mut self) {
        match self.session.save_as(&mut self.prompts) {
            Ok(Outcome::Applied) => self.update_window_title(),
            Ok(Outcome::Cancelled) => {}
            Err(e) => self.report(&e),
        }
    }

    pub fn export_pdf(&mut self) {
        if let Err(e) = self.session.export_pdf(&mut self.prompts) {
            self.report(&e);
        }
    }

    // --- Format ---

    pub fn change_font(&mut self) {
        if let Err(e) = self.session.change_font(&mut self.prompts) {
            tracing::warn!("Font rejected: {}", e);
            dialog::alert_default(&e.to_string());
        }
    }

    pub fn change_font_color(&mut self) {
        self.session.change_foreground(&mut self.prompts);
    }

    pub fn change_background_color(&mut self) {
        self.session.change_background(&mut self.prompts);
    }

    pub fn set_theme(&mut self) {
        self.session.set_theme(&mut self.prompts);
    }
}
