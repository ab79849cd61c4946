use fltk::{app, prelude::*};

use ink_pad::app::domain::{EditorSettings, Message};
use ink_pad::app::infrastructure::logging;
use ink_pad::app::state::AppState;
use ink_pad::ui::main_window::build_main_window;
use ink_pad::ui::menu::build_menu;

fn main() {
    logging::init();

    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let settings = EditorSettings::load();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&settings, &sender);
    build_menu(&mut widgets.menu, &sender);
    widgets.wind.show();

    let mut state = AppState::new(widgets, &settings);
    tracing::info!("InkPad started");

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if state.handle(msg) {
                tracing::info!("Exiting");
                app.quit();
            }
        }
    }
}
