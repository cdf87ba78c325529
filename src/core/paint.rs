use super::config::BackgroundConfig;
use super::constants::{INTERACTION_OPACITY_BOOST, INTERACTION_RADIUS_BOOST};
use super::grid::{Dot, DotGrid};
use glam::Vec2;

/// Draw calls the render loop issues against a 2D surface.
pub trait Painter {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32);
}

/// Quadratic falloff: 1 at the pointer, 0 at `radius` and beyond.
#[inline]
pub fn interaction_factor(distance: f32, radius: f32) -> f32 {
    if distance < radius {
        let f = (1.0 - distance / radius).max(0.0);
        f * f
    } else {
        0.0
    }
}

/// Update a dot's displayed opacity/radius for the given pointer snapshot.
#[inline]
pub fn apply_pointer(dot: &mut Dot, pointer: Option<Vec2>, interaction_radius: f32) {
    let factor = pointer
        .map(|p| interaction_factor(dot.position.distance(p), interaction_radius))
        .unwrap_or(0.0);
    dot.current_opacity = (dot.rest_opacity + factor * INTERACTION_OPACITY_BOOST).min(1.0);
    dot.current_radius = dot.base_radius + factor * INTERACTION_RADIUS_BOOST;
}

/// One full frame: clear the surface, then restyle and draw every dot.
///
/// `pointer` is read once by the caller so every dot in the frame sees the
/// same position.
pub fn paint_frame<P: Painter + ?Sized>(
    grid: &mut DotGrid,
    pointer: Option<Vec2>,
    config: &BackgroundConfig,
    surface: Vec2,
    painter: &mut P,
) {
    painter.clear(surface.x, surface.y);
    for dot in grid.dots.iter_mut() {
        apply_pointer(dot, pointer, config.interaction_radius);
        painter.fill_circle(
            dot.position,
            dot.current_radius,
            config.color_rgb,
            dot.current_opacity,
        );
    }
}
