use crate::core::{FrameGuard, FrameHost};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` ids are cancelled through the window.
pub struct RafHost;

impl FrameHost for RafHost {
    type Handle = i32;

    fn cancel(&self, handle: i32) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle);
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running `requestAnimationFrame` loop.
///
/// The loop keeps itself alive through a self-referencing closure; `stop` (or
/// dropping the loop) cancels the pending frame and breaks that cycle.
pub struct AnimationLoop {
    name: &'static str,
    guard: Rc<RefCell<FrameGuard<RafHost>>>,
    tick: TickSlot,
}

impl AnimationLoop {
    pub fn start(name: &'static str, mut body: impl FnMut() + 'static) -> Self {
        let guard = Rc::new(RefCell::new(FrameGuard::new(RafHost)));
        let tick: TickSlot = Rc::new(RefCell::new(None));

        let tick_clone = tick.clone();
        let guard_tick = guard.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            guard_tick.borrow_mut().fired();
            body();
            if let Some(cb) = tick_clone.borrow().as_ref() {
                if let Some(id) = request_frame(cb) {
                    guard_tick.borrow_mut().arm(id);
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = tick.borrow().as_ref() {
            if let Some(id) = request_frame(cb) {
                guard.borrow_mut().arm(id);
            }
        }
        log::debug!("[frame] {} loop started", name);
        Self { name, guard, tick }
    }

    pub fn stop(&self) {
        self.guard.borrow_mut().cancel();
        if self.tick.borrow_mut().take().is_some() {
            log::debug!("[frame] {} loop stopped", self.name);
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    let w = web::window()?;
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}
