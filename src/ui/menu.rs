use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::Message;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("File/New", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Save", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Save As...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add("File/Save as PDF...", Shortcut::Ctrl | 'p', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::ExportPdf) });
    menu.add("File/Exit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Format
    menu.add("Format/Font...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ChangeFont) });
    menu.add("Format/Font Color...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ChangeFontColor) });
    menu.add("Format/Background Color...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ChangeBackgroundColor) });

    // Customize
    menu.add("Customize/Set Theme...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetTheme) });
}
