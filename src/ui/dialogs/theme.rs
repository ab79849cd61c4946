use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    button::Button,
    dialog::{self, ColorMode},
    enums::{Align, FrameType},
    frame::Frame,
    prelude::*,
    window::Window,
};

use super::run_dialog;
use crate::app::controllers::ThemeChoice;
use crate::app::domain::{Theme, ThemeColor};
use crate::ui::surface::to_fltk_color;

/// Show the theme dialog: pick background and/or font color, then Apply.
/// Returns `None` on Cancel or close.
pub fn show_theme_dialog(current: &Theme) -> Option<ThemeChoice> {
    let mut dialog = Window::default()
        .with_size(300, 170)
        .with_label("Set Theme")
        .center_screen();
    dialog.make_modal(true);

    let choice = Rc::new(RefCell::new(ThemeChoice::default()));

    let mut bg_btn = color_row(20, "Background Color:", current.background);
    let mut fg_btn = color_row(60, "Font Color:", current.foreground);

    let mut apply_btn = Button::default()
        .with_pos(90, 120)
        .with_size(90, 30)
        .with_label("Apply");
    let mut cancel_btn = Button::default()
        .with_pos(190, 120)
        .with_size(90, 30)
        .with_label("Cancel");

    dialog.end();
    dialog.show();

    let bg_choice = choice.clone();
    bg_btn.1.set_callback({
        let mut swatch = bg_btn.0.clone();
        move |_| {
            if let Some(rgb) = dialog::color_chooser("Choose background color", ColorMode::Rgb) {
                let color = ThemeColor::from(rgb);
                bg_choice.borrow_mut().background = Some(color);
                swatch.set_color(to_fltk_color(color));
                swatch.redraw();
            }
        }
    });

    let fg_choice = choice.clone();
    fg_btn.1.set_callback({
        let mut swatch = fg_btn.0.clone();
        move |_| {
            if let Some(rgb) = dialog::color_chooser("Choose font color", ColorMode::Rgb) {
                let color = ThemeColor::from(rgb);
                fg_choice.borrow_mut().foreground = Some(color);
                swatch.set_color(to_fltk_color(color));
                swatch.redraw();
            }
        }
    });

    let applied = Rc::new(RefCell::new(false));
    let applied_btn = applied.clone();
    let dialog_apply = dialog.clone();
    apply_btn.set_callback(move |_| {
        *applied_btn.borrow_mut() = true;
        dialog_apply.clone().hide();
    });

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| dialog_cancel.clone().hide());

    run_dialog(&dialog);

    if *applied.borrow() {
        Some(*choice.borrow())
    } else {
        None
    }
}

/// Label, color swatch and "Choose" button on one row.
fn color_row(y: i32, label: &str, color: ThemeColor) -> (Frame, Button) {
    Frame::default()
        .with_pos(20, y)
        .with_size(130, 25)
        .with_label(label)
        .with_align(Align::Left | Align::Inside);
    let mut swatch = Frame::default().with_pos(155, y).with_size(25, 25);
    swatch.set_frame(FrameType::DownBox);
    swatch.set_color(to_fltk_color(color));
    let button = Button::default()
        .with_pos(190, y)
        .with_size(90, 25)
        .with_label("Choose...");
    (swatch, button)
}
