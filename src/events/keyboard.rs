use crate::core::{action_for_key, ShellState};
use crate::events::shell::dispatch;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_global_keydown(document: &web::Document, shell: Rc<RefCell<ShellState>>) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let key = ev.key();
        let action = action_for_key(&key, &shell.borrow());
        if let Some(action) = action {
            dispatch(&doc, &shell, action);
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
