use crate::constants::HIDDEN_CLASS;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach `handler` to `event` on the element with `element_id`.
/// Returns false when the element is missing from the page.
pub fn add_listener<E>(
    document: &web::Document,
    element_id: &str,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) -> bool
where
    E: JsCast + 'static,
{
    let Some(el) = document.get_element_by_id(element_id) else {
        log::warn!("[dom] missing #{} for `{}` listener", element_id, event);
        return false;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
    true
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    add_listener(document, element_id, "click", move |_: web::MouseEvent| handler())
}

/// Show or hide an element by id, with an inline-style fallback for pages
/// without the `hidden` CSS class.
pub fn set_visible(document: &web::Document, element_id: &str, visible: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        set_element_visible(&el, visible);
    }
}

pub fn set_element_visible(el: &web::Element, visible: bool) {
    let cl = el.class_list();
    if visible {
        _ = cl.remove_1(HIDDEN_CLASS);
        _ = el.remove_attribute("style");
    } else {
        _ = cl.add_1(HIDDEN_CLASS);
        _ = el.set_attribute("style", "display:none");
    }
}

/// Viewport size in CSS pixels.
pub fn viewport_size() -> Option<(f64, f64)> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some((width, height))
}
