use super::config::SpringParams;
use super::constants::{
    MAX_FRAME_DT_SEC, SPRING_REST_DELTA, SPRING_REST_SPEED, SPRING_SUBSTEP_SEC,
};
use glam::Vec2;

/// Unit-mass damped spring pulling a 2D point toward a target.
#[derive(Clone, Copy, Debug)]
pub struct Spring2 {
    pub params: SpringParams,
    pub position: Vec2,
    pub velocity: Vec2,
    pub target: Vec2,
}

impl Spring2 {
    pub fn new(params: SpringParams) -> Self {
        Self {
            params,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            target: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Jump to `target` with no residual motion.
    #[inline]
    pub fn snap_to(&mut self, target: Vec2) {
        self.position = target;
        self.target = target;
        self.velocity = Vec2::ZERO;
    }

    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.position.distance(self.target) <= SPRING_REST_DELTA
            && self.velocity.length() <= SPRING_REST_SPEED
    }

    /// Advance by `dt_sec`, sub-stepping with semi-implicit Euler.
    pub fn step(&mut self, dt_sec: f32) {
        if self.is_at_rest() {
            self.snap_to(self.target);
            return;
        }
        let mut remaining = dt_sec.clamp(0.0, MAX_FRAME_DT_SEC);
        let k = self.params.stiffness;
        let c = self.params.damping;
        while remaining > 0.0 {
            let h = remaining.min(SPRING_SUBSTEP_SEC);
            let accel = (self.target - self.position) * k - self.velocity * c;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
    }
}
