use super::config::BackgroundConfig;
use super::constants::{OPACITY_SPEED_MIN, OPACITY_SPEED_SPAN};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Dot {
    pub position: Vec2,
    pub rest_opacity: f32,
    // Generated for every dot but never applied; idle dots stay at rest opacity.
    pub opacity_speed: f32,
    pub base_radius: f32,
    pub current_opacity: f32,
    pub current_radius: f32,
}

/// Uniform lattice of dots covering the background surface.
///
/// The grid is immutable in shape: a resize throws the whole set away and
/// builds a new one with [`DotGrid::generate`].
#[derive(Clone, Debug, Default)]
pub struct DotGrid {
    pub cols: usize,
    pub rows: usize,
    pub dots: Vec<Dot>,
}

/// Number of cells needed to cover `extent` with cells of `spacing`.
#[inline]
pub fn cell_count(extent: f32, spacing: f32) -> usize {
    if extent <= 0.0 || spacing <= 0.0 {
        return 0;
    }
    (extent / spacing).ceil() as usize
}

impl DotGrid {
    pub fn generate<R: Rng + ?Sized>(
        width: f32,
        height: f32,
        config: &BackgroundConfig,
        rng: &mut R,
    ) -> Self {
        let spacing = config.dot_spacing;
        let cols = cell_count(width, spacing);
        let rows = cell_count(height, spacing);
        let Some(count) = cols.checked_mul(rows) else {
            log::warn!("[grid] {}x{} dots overflow; leaving the surface empty", cols, rows);
            return Self::default();
        };
        let opacity_span = config.opacity_max - config.opacity_min;

        let mut dots = Vec::with_capacity(count);
        for i in 0..cols {
            for j in 0..rows {
                let position = Vec2::new(
                    i as f32 * spacing + spacing / 2.0,
                    j as f32 * spacing + spacing / 2.0,
                );
                let rest_opacity = config.opacity_min + rng.gen::<f32>() * opacity_span;
                let opacity_speed = OPACITY_SPEED_MIN + rng.gen::<f32>() * OPACITY_SPEED_SPAN;
                dots.push(Dot {
                    position,
                    rest_opacity,
                    opacity_speed,
                    base_radius: config.base_radius,
                    current_opacity: rest_opacity,
                    current_radius: config.base_radius,
                });
            }
        }
        Self { cols, rows, dots }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }
}
