#![cfg(target_arch = "wasm32")]
use crate::core::{
    parse_log_level, BackgroundConfig, ChatDraft, CursorConfig, CursorOverlay, LayerCommand,
    PageLifecycle, PointerTracker, ShellState,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod ui;

use constants::{BACKGROUND_CANVAS_ID, LOG_LEVEL_ATTR};
use frame::AnimationLoop;
use render::Background;

/// Everything with a frame loop, kept alive for the page's lifetime.
struct Layers {
    document: web::Document,
    lifecycle: PageLifecycle,
    background: Option<Rc<RefCell<Background>>>,
    cursor_model: Rc<RefCell<CursorOverlay>>,
    cursor: Option<AnimationLoop>,
}

impl Layers {
    fn run(&mut self, command: LayerCommand) {
        match command {
            LayerCommand::Suspend => {
                self.stop_loops();
                log::info!("[frame] layers suspended");
            }
            LayerCommand::Resume => {
                // Stale marker positions must not reappear before the next move.
                self.cursor_model.borrow_mut().on_leave();
                if let Some(bg) = &self.background {
                    bg.borrow_mut().resize();
                }
                self.cursor = overlay::start(&self.document, self.cursor_model.clone());
                log::info!("[frame] layers resumed");
            }
            LayerCommand::TearDown => {
                self.stop_loops();
                self.background = None;
                log::info!("[frame] layers torn down");
            }
            LayerCommand::Nothing => {}
        }
    }

    fn stop_loops(&mut self) {
        if let Some(bg) = &self.background {
            bg.borrow_mut().stop();
        }
        if let Some(cursor) = self.cursor.take() {
            cursor.stop();
        }
    }

    fn resize(&self) {
        if !self.lifecycle.allows_resize() {
            return;
        }
        if let Some(bg) = &self.background {
            bg.borrow_mut().resize();
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = dom::window_document()
        .and_then(|d| d.body())
        .and_then(|b| b.get_attribute(LOG_LEVEL_ATTR));
    console_log::init_with_level(parse_log_level(level.as_deref())).ok();
    log::info!("guidedoc-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let shell = Rc::new(RefCell::new(ShellState::default()));
    let draft = Rc::new(RefCell::new(ChatDraft::default()));
    events::wire_shell(&document, shell.clone());
    events::wire_global_keydown(&document, shell);
    events::wire_chat(&document, draft);

    let tracker = Rc::new(RefCell::new(PointerTracker::default()));
    let cursor = Rc::new(RefCell::new(CursorOverlay::new(&CursorConfig::default())));

    // The page stays usable without the decorative background.
    let background = match find_canvas(&document) {
        Ok(canvas) => {
            let config = background_config(&canvas);
            let bg = Background::new(canvas, config, tracker.clone(), StdRng::from_entropy());
            Some(Rc::new(RefCell::new(bg)))
        }
        Err(e) => {
            log::warn!("[grid] background disabled: {}", e);
            None
        }
    };

    events::wire_pointer(
        &document,
        events::PointerWiring {
            canvas: background.as_ref().map(|bg| bg.borrow().canvas().clone()),
            tracker,
            cursor: cursor.clone(),
        },
    );

    if let Some(bg) = &background {
        bg.borrow_mut().resize();
    }

    let layers = Rc::new(RefCell::new(Layers {
        document: document.clone(),
        lifecycle: PageLifecycle::default(),
        background,
        cursor: overlay::start(&document, cursor.clone()),
        cursor_model: cursor,
    }));
    wire_resize(layers.clone());
    wire_page_lifecycle(layers);
    Ok(())
}

fn find_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas_el = document
        .get_element_by_id(BACKGROUND_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", BACKGROUND_CANVAS_ID))?;
    canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Defaults, overridden by any `data-*` tuning attributes on the canvas.
fn background_config(canvas: &web::HtmlCanvasElement) -> BackgroundConfig {
    let raw: Vec<(&str, String)> = BackgroundConfig::OVERRIDE_KEYS
        .iter()
        .filter_map(|key| {
            canvas
                .get_attribute(&format!("data-{key}"))
                .map(|v| (*key, v))
        })
        .collect();
    let defaults = BackgroundConfig::default();
    match defaults.with_overrides(raw.iter().map(|(k, v)| (*k, v.as_str()))) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[grid] ignoring canvas overrides: {}", e);
            defaults
        }
    }
}

fn wire_resize(layers: Rc<RefCell<Layers>>) {
    let resize_closure = Closure::wrap(Box::new(move || {
        layers.borrow().resize();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// `pagehide`/`pageshow` suspend and resume the loops across the
/// back/forward cache; a non-persisted `pagehide` tears them down.
fn wire_page_lifecycle(layers: Rc<RefCell<Layers>>) {
    let Some(window) = web::window() else {
        return;
    };
    for event in ["pagehide", "pageshow"] {
        let layers = layers.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
            let mut l = layers.borrow_mut();
            let command = match ev.type_().as_str() {
                "pagehide" => l.lifecycle.on_page_hide(ev.persisted()),
                _ => l.lifecycle.on_page_show(ev.persisted()),
            };
            l.run(command);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
