/// Something that can cancel a scheduled frame callback by handle.
pub trait FrameHost {
    type Handle: Copy + PartialEq + std::fmt::Debug;
    fn cancel(&self, handle: Self::Handle);
}

/// Owns at most one pending frame request and cancels it on every exit path:
/// re-arming, explicit cancel, or drop.
pub struct FrameGuard<H: FrameHost> {
    host: H,
    pending: Option<H::Handle>,
}

impl<H: FrameHost> FrameGuard<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            pending: None,
        }
    }

    /// Track a freshly requested frame, cancelling any older request.
    pub fn arm(&mut self, handle: H::Handle) {
        if let Some(old) = self.pending.replace(handle) {
            if old != handle {
                self.host.cancel(old);
            }
        }
    }

    /// The pending request ran; nothing left to cancel.
    #[inline]
    pub fn fired(&mut self) {
        self.pending = None;
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.host.cancel(handle);
        }
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

impl<H: FrameHost> Drop for FrameGuard<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}
