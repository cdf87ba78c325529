use crate::constants::*;
use crate::core::{ModalAction, ShellAction, ShellState};
use crate::dom;
use crate::ui;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Apply `action` and re-render the shell when it changed anything.
pub fn dispatch(document: &web::Document, shell: &Rc<RefCell<ShellState>>, action: ShellAction) {
    let mut state = shell.borrow_mut();
    let before = state.modal;
    if state.apply(action) {
        log::info!("[shell] {:?}: {:?} -> {:?}", action, before, state.modal);
        ui::sync_shell(document, &state);
    } else {
        log::debug!("[shell] {:?} ignored in {:?}", action, state.modal);
    }
}

pub fn wire_shell(document: &web::Document, shell: Rc<RefCell<ShellState>>) {
    let bindings: [(&str, ShellAction); 11] = [
        (HEADER_SIGN_IN_ID, ShellAction::Modal(ModalAction::OpenSignIn)),
        (HEADER_SIGN_UP_ID, ShellAction::Modal(ModalAction::OpenSignUp)),
        (SIGN_IN_CLOSE_ID, ShellAction::Modal(ModalAction::Close)),
        (SIGN_IN_BACKDROP_ID, ShellAction::Modal(ModalAction::Close)),
        (SIGN_UP_CLOSE_ID, ShellAction::Modal(ModalAction::Close)),
        (SIGN_UP_BACKDROP_ID, ShellAction::Modal(ModalAction::Close)),
        (SWITCH_TO_SIGN_UP_ID, ShellAction::Modal(ModalAction::SwitchToSignUp)),
        (SWITCH_TO_SIGN_IN_ID, ShellAction::Modal(ModalAction::SwitchToSignIn)),
        (MOBILE_MENU_TOGGLE_ID, ShellAction::ToggleMobileMenu),
        (SIGN_IN_PASSWORD_TOGGLE_ID, ShellAction::TogglePasswordVisibility),
        (SIGN_UP_PASSWORD_TOGGLE_ID, ShellAction::TogglePasswordVisibility),
    ];
    for (id, action) in bindings {
        let doc = document.clone();
        let shell = shell.clone();
        dom::add_click_listener(document, id, move || dispatch(&doc, &shell, action));
    }

    for (id, form) in [(SIGN_IN_FORM_ID, "sign-in"), (SIGN_UP_FORM_ID, "sign-up")] {
        dom::add_listener(document, id, "submit", move |ev: web::Event| {
            ev.prevent_default();
            log::info!("[shell] {} form submitted; no backend configured", form);
        });
    }

    ui::sync_shell(document, &shell.borrow());
}
