use crate::constants::*;
use crate::core::{ChatDraft, ShellState};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Reflect the shell state onto the static markup.
pub fn sync_shell(document: &web::Document, state: &ShellState) {
    dom::set_visible(document, SIGN_IN_MODAL_ID, state.modal.sign_in_visible());
    dom::set_visible(document, SIGN_UP_MODAL_ID, state.modal.sign_up_visible());
    dom::set_visible(document, MOBILE_MENU_ID, state.mobile_menu_open);

    if let Some(toggle) = document.get_element_by_id(MOBILE_MENU_TOGGLE_ID) {
        let open = if state.mobile_menu_open { "true" } else { "false" };
        _ = toggle.set_attribute("aria-expanded", open);
    }

    let input_type = if state.password_visible { "text" } else { "password" };
    for id in [SIGN_IN_PASSWORD_ID, SIGN_UP_PASSWORD_ID] {
        if let Some(input) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        {
            input.set_type(input_type);
        }
    }
    for id in [SIGN_IN_PASSWORD_TOGGLE_ID, SIGN_UP_PASSWORD_TOGGLE_ID] {
        if let Some(toggle) = document.get_element_by_id(id) {
            let pressed = if state.password_visible { "true" } else { "false" };
            _ = toggle.set_attribute("aria-pressed", pressed);
        }
    }
}

/// Enable the send button only while the draft has content.
pub fn sync_chat(document: &web::Document, draft: &ChatDraft) {
    if let Some(input) = document
        .get_element_by_id(CHAT_INPUT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
    {
        if input.value() != draft.text() {
            input.set_value(draft.text());
        }
    }
    if let Some(button) = document
        .get_element_by_id(CHAT_SEND_ID)
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    {
        let ready = draft.can_send();
        button.set_disabled(!ready);
        let cl = button.class_list();
        _ = if ready {
            cl.add_1(SEND_READY_CLASS)
        } else {
            cl.remove_1(SEND_READY_CLASS)
        };
    }
}
