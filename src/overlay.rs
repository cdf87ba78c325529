use crate::constants::{CURSOR_DOT_ID, CURSOR_LAYER_ID, CURSOR_RING_ID};
use crate::core::CursorOverlay;
use crate::dom;
use crate::frame::AnimationLoop;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct CursorElements {
    layer: web::Element,
    ring: web::HtmlElement,
    dot: web::HtmlElement,
}

impl CursorElements {
    fn find(document: &web::Document) -> Option<Self> {
        let layer = document.get_element_by_id(CURSOR_LAYER_ID)?;
        let ring = document
            .get_element_by_id(CURSOR_RING_ID)?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        let dot = document
            .get_element_by_id(CURSOR_DOT_ID)?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        Some(Self { layer, ring, dot })
    }
}

#[inline]
fn place(el: &web::HtmlElement, at: Vec2) {
    _ = el.style().set_property(
        "transform",
        &format!("translate({:.1}px, {:.1}px) translate(-50%, -50%)", at.x, at.y),
    );
}

/// Drive the cursor markers from `overlay` on every frame.
///
/// Returns `None` when the markers are missing from the page.
pub fn start(
    document: &web::Document,
    overlay: Rc<RefCell<CursorOverlay>>,
) -> Option<AnimationLoop> {
    let Some(els) = CursorElements::find(document) else {
        log::warn!("[cursor] overlay markup missing; custom cursor disabled");
        return None;
    };
    dom::set_element_visible(&els.layer, false);

    let mut last_instant = Instant::now();
    let mut shown = false;
    Some(AnimationLoop::start("cursor", move || {
        let now = Instant::now();
        let dt_sec = (now - last_instant).as_secs_f32();
        last_instant = now;

        let mut cursor = overlay.borrow_mut();
        cursor.step(dt_sec);
        match cursor.marker_positions() {
            Some((ring, dot)) => {
                if !shown {
                    dom::set_element_visible(&els.layer, true);
                    shown = true;
                }
                place(&els.ring, ring);
                place(&els.dot, dot);
            }
            None if shown => {
                dom::set_element_visible(&els.layer, false);
                shown = false;
            }
            None => {}
        }
    }))
}
