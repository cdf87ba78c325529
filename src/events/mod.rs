pub mod chat;
pub mod keyboard;
pub mod pointer;
pub mod shell;

pub use chat::wire_chat;
pub use keyboard::wire_global_keydown;
pub use pointer::{wire_pointer, PointerWiring};
pub use shell::wire_shell;
