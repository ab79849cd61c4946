use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    button::Button,
    enums::{Align, CallbackTrigger},
    frame::Frame,
    input::Input,
    misc::Spinner,
    prelude::*,
    window::Window,
};

use super::run_dialog;
use crate::app::domain::FontSpec;
use crate::app::domain::theme::{MAX_FONT_SIZE, MIN_FONT_SIZE};

/// Show the font dialog. Returns the entered family and size when the user
/// clicks Apply, `None` on Cancel or close.
pub fn show_font_dialog(current: &FontSpec) -> Option<(String, u32)> {
    let mut dialog = Window::default()
        .with_size(280, 170)
        .with_label("Choose Font")
        .center_screen();
    dialog.make_modal(true);

    Frame::default()
        .with_pos(20, 15)
        .with_size(100, 25)
        .with_label("Font Family:")
        .with_align(Align::Left | Align::Inside);
    let mut family_input = Input::default().with_pos(130, 15).with_size(130, 25);
    family_input.set_value(&current.family);

    Frame::default()
        .with_pos(20, 55)
        .with_size(100, 25)
        .with_label("Font Size:")
        .with_align(Align::Left | Align::Inside);
    let mut size_spinner = Spinner::default().with_pos(130, 55).with_size(80, 25);
    size_spinner.set_range(MIN_FONT_SIZE as f64, MAX_FONT_SIZE as f64);
    size_spinner.set_step(1.0);
    size_spinner.set_value(current.size as f64);

    let mut apply_btn = Button::default()
        .with_pos(70, 115)
        .with_size(90, 30)
        .with_label("Apply");
    let mut cancel_btn = Button::default()
        .with_pos(170, 115)
        .with_size(90, 30)
        .with_label("Cancel");

    dialog.end();
    dialog.show();

    let result: Rc<RefCell<Option<(String, u32)>>> = Rc::new(RefCell::new(None));

    let result_apply = result.clone();
    let dialog_apply = dialog.clone();
    let family = family_input.clone();
    let size = size_spinner.clone();
    apply_btn.set_callback(move |_| {
        let chosen = (family.value(), size.value().round().max(0.0) as u32);
        *result_apply.borrow_mut() = Some(chosen);
        dialog_apply.clone().hide();
    });

    // Enter in the family field applies
    let mut apply_enter = apply_btn.clone();
    family_input.set_trigger(CallbackTrigger::EnterKey);
    family_input.set_callback(move |_| apply_enter.do_callback());

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| dialog_cancel.clone().hide());

    run_dialog(&dialog);

    result.borrow_mut().take()
}
