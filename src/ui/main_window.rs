use fltk::{
    app::{self, Sender},
    enums::Event,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextEditor, WrapMode},
    window::Window,
};

use crate::app::domain::{EditorSettings, Message};

pub const APP_NAME: &str = "InkPad";
const MENU_HEIGHT: i32 = 30;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
}

pub fn build_main_window(settings: &EditorSettings, sender: &Sender<Message>) -> MainWidgets {
    let (width, height) = (settings.window_width, settings.window_height);
    let mut wind = Window::new(100, 100, width, height, None);
    wind.set_label(&format!("Untitled - {}", APP_NAME));
    wind.set_xclass(APP_NAME);

    let mut flex = Flex::new(0, 0, width, height, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    if settings.word_wrap_enabled {
        text_editor.wrap_mode(WrapMode::AtBounds, 0);
    }

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // Closing the window goes through the dispatch loop like File/Exit;
    // Escape is ignored so it doesn't close the editor
    let s = *sender;
    wind.set_callback(move |_| {
        if app::event() == Event::Close {
            s.send(Message::WindowClose);
        }
    });

    MainWidgets {
        wind,
        menu,
        text_editor,
    }
}
