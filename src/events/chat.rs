use crate::constants::{CHAT_FILE_ID, CHAT_INPUT_ID, CHAT_SEND_ID, CHAT_UPLOAD_ID};
use crate::core::ChatDraft;
use crate::dom;
use crate::ui;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_chat(document: &web::Document, draft: Rc<RefCell<ChatDraft>>) {
    {
        let doc = document.clone();
        let draft = draft.clone();
        dom::add_listener(document, CHAT_INPUT_ID, "input", move |ev: web::Event| {
            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web::HtmlTextAreaElement>().ok())
            else {
                return;
            };
            let mut d = draft.borrow_mut();
            d.set(input.value());
            ui::sync_chat(&doc, &d);
        });
    }

    {
        let doc = document.clone();
        let draft = draft.clone();
        dom::add_click_listener(document, CHAT_SEND_ID, move || {
            let mut d = draft.borrow_mut();
            if let Some(message) = d.send() {
                log::info!("[chat] Sending message: {}", message);
            }
            ui::sync_chat(&doc, &d);
        });
    }

    {
        let doc = document.clone();
        dom::add_click_listener(document, CHAT_UPLOAD_ID, move || {
            if let Some(picker) = doc
                .get_element_by_id(CHAT_FILE_ID)
                .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
            {
                picker.click();
            }
        });
    }

    dom::add_listener(document, CHAT_FILE_ID, "change", move |ev: web::Event| {
        if let Some(picker) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        {
            log::info!("[chat] file selected: {}", picker.value());
        }
    });

    ui::sync_chat(document, &draft.borrow());
}
