//! FLTK presentation layer: window, menus, dialogs and the adapters that
//! let the editor session drive them.

pub mod dialogs;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod prompts;
pub mod surface;
