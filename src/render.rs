use crate::core::{paint_frame, BackgroundConfig, DotGrid, Painter, PointerTracker};
use crate::frame::AnimationLoop;
use glam::Vec2;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D implementation of the background draw calls.
pub struct CanvasPainter<'a> {
    pub ctx: &'a web::CanvasRenderingContext2d,
}

impl Painter for CanvasPainter<'_> {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&format!(
            "rgba({}, {}, {}, {:.3})",
            rgb[0], rgb[1], rgb[2], alpha
        ));
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

/// The dot-grid background: canvas, grid, pointer and its frame loop.
pub struct Background {
    canvas: web::HtmlCanvasElement,
    ctx: Option<web::CanvasRenderingContext2d>,
    config: BackgroundConfig,
    pointer: Rc<RefCell<PointerTracker>>,
    rng: StdRng,
    animation: Option<AnimationLoop>,
}

impl Background {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        config: BackgroundConfig,
        pointer: Rc<RefCell<PointerTracker>>,
        rng: StdRng,
    ) -> Self {
        let ctx = context_2d(&canvas);
        if ctx.is_none() {
            log::warn!("[grid] no 2d context; background frames will be skipped");
        }
        Self {
            canvas,
            ctx,
            config,
            pointer,
            rng,
            animation: None,
        }
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    /// Match the canvas to the viewport, rebuild the grid and restart the
    /// loop. The old loop is cancelled before the new one is requested.
    pub fn resize(&mut self) {
        self.stop();

        let (width, height) = crate::dom::viewport_size().unwrap_or((0.0, 0.0));
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
        let surface = Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32);

        let mut grid = DotGrid::generate(surface.x, surface.y, &self.config, &mut self.rng);
        if grid.is_empty() {
            log::debug!("[grid] {}x{} surface has no dots", surface.x, surface.y);
        } else {
            log::debug!(
                "[grid] {}x{} surface -> {}x{} = {} dots",
                surface.x,
                surface.y,
                grid.cols,
                grid.rows,
                grid.len()
            );
        }

        let ctx = self.ctx.clone();
        let pointer = self.pointer.clone();
        let config = self.config;
        self.animation = Some(AnimationLoop::start("background", move || {
            let Some(ctx) = ctx.as_ref() else {
                return;
            };
            let snapshot = pointer.borrow().snapshot();
            paint_frame(
                &mut grid,
                snapshot,
                &config,
                surface,
                &mut CanvasPainter { ctx },
            );
        }));
    }

    pub fn stop(&mut self) {
        if let Some(animation) = self.animation.take() {
            animation.stop();
        }
    }
}
