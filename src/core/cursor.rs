use super::config::CursorConfig;
use super::spring::Spring2;
use glam::Vec2;

/// Ring and dot markers trailing the pointer in client coordinates.
#[derive(Clone, Copy, Debug)]
pub struct CursorOverlay {
    pub ring: Spring2,
    pub dot: Spring2,
    visible: bool,
}

impl CursorOverlay {
    pub fn new(config: &CursorConfig) -> Self {
        Self {
            ring: Spring2::new(config.ring),
            dot: Spring2::new(config.dot),
            visible: false,
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed a raw pointer position. The first move after being hidden places
    /// both markers on the pointer instead of sweeping them in.
    pub fn on_move(&mut self, client: Vec2) {
        if self.visible {
            self.ring.set_target(client);
            self.dot.set_target(client);
        } else {
            self.ring.snap_to(client);
            self.dot.snap_to(client);
            self.visible = true;
        }
    }

    #[inline]
    pub fn on_leave(&mut self) {
        self.visible = false;
    }

    pub fn step(&mut self, dt_sec: f32) {
        if !self.visible {
            return;
        }
        self.ring.step(dt_sec);
        self.dot.step(dt_sec);
    }

    /// `(ring, dot)` centres to draw, or `None` while hidden.
    #[inline]
    pub fn marker_positions(&self) -> Option<(Vec2, Vec2)> {
        self.visible.then_some((self.ring.position, self.dot.position))
    }
}
