use glam::Vec2;

/// Last known pointer position in surface-local pixels.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerTracker {
    position: Option<Vec2>,
}

impl PointerTracker {
    /// Record a move given client coordinates and the surface's on-screen origin.
    #[inline]
    pub fn on_move(&mut self, client: Vec2, surface_origin: Vec2) {
        self.position = Some(client - surface_origin);
    }

    #[inline]
    pub fn on_leave(&mut self) {
        self.position = None;
    }

    /// Position to use for one whole frame.
    #[inline]
    pub fn snapshot(&self) -> Option<Vec2> {
        self.position
    }
}
