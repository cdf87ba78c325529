pub mod chat;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod frame_guard;
pub mod grid;
pub mod lifecycle;
pub mod paint;
pub mod pointer;
pub mod shell;
pub mod spring;

pub use chat::ChatDraft;
pub use config::{parse_log_level, BackgroundConfig, ConfigError, CursorConfig};
pub use cursor::CursorOverlay;
pub use frame_guard::{FrameGuard, FrameHost};
pub use grid::DotGrid;
pub use lifecycle::{LayerCommand, PageLifecycle};
pub use paint::{paint_frame, Painter};
pub use pointer::PointerTracker;
pub use shell::{action_for_key, ModalAction, ModalState, ShellAction, ShellState};
