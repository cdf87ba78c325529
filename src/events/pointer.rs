use crate::core::{CursorOverlay, PointerTracker};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: Option<web::HtmlCanvasElement>,
    pub tracker: Rc<RefCell<PointerTracker>>,
    pub cursor: Rc<RefCell<CursorOverlay>>,
}

pub fn wire_pointer(document: &web::Document, w: PointerWiring) {
    wire_pointermove(&w);
    wire_document_leave(document, &w);
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);

        if let Some(canvas) = &w.canvas {
            let rect = canvas.get_bounding_client_rect();
            let origin = Vec2::new(rect.left() as f32, rect.top() as f32);
            w.tracker.borrow_mut().on_move(client, origin);
        }

        let mut cursor = w.cursor.borrow_mut();
        let was_visible = cursor.is_visible();
        cursor.on_move(client);
        if !was_visible {
            log::debug!("[cursor] shown at ({:.0}, {:.0})", client.x, client.y);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_document_leave(document: &web::Document, w: &PointerWiring) {
    let Some(root) = document.document_element() else {
        return;
    };
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        w.tracker.borrow_mut().on_leave();
        w.cursor.borrow_mut().on_leave();
        log::debug!("[cursor] pointer left the document");
    }) as Box<dyn FnMut(_)>);
    _ = root.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
