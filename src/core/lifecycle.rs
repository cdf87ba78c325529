/// Where the page is in its show/hide lifecycle.
///
/// A `pagehide` into the back/forward cache only suspends the frame loops;
/// they come back on the matching `pageshow`. A `pagehide` that is not
/// persisted ends the page for good.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageLifecycle {
    #[default]
    Running,
    Suspended,
    TornDown,
}

/// What the layers have to do after a lifecycle event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerCommand {
    Suspend,
    Resume,
    TearDown,
    Nothing,
}

impl PageLifecycle {
    pub fn on_page_hide(&mut self, persisted: bool) -> LayerCommand {
        match (*self, persisted) {
            (PageLifecycle::TornDown, _) => LayerCommand::Nothing,
            (PageLifecycle::Running, true) => {
                *self = PageLifecycle::Suspended;
                LayerCommand::Suspend
            }
            (PageLifecycle::Suspended, true) => LayerCommand::Nothing,
            (_, false) => {
                *self = PageLifecycle::TornDown;
                LayerCommand::TearDown
            }
        }
    }

    pub fn on_page_show(&mut self, persisted: bool) -> LayerCommand {
        match (*self, persisted) {
            (PageLifecycle::Suspended, true) => {
                *self = PageLifecycle::Running;
                LayerCommand::Resume
            }
            _ => LayerCommand::Nothing,
        }
    }

    /// Resize rebuilds and restarts the background, so it only applies while running.
    #[inline]
    pub fn allows_resize(self) -> bool {
        self == PageLifecycle::Running
    }
}
