/// DOM element ids and class names shared with `index.html`.
///
/// Keeping them here lets the wiring code and the markup stay in sync
/// without string literals scattered through the event handlers.
// Background layer
pub const BACKGROUND_CANVAS_ID: &str = "background-canvas";

// Cursor overlay
pub const CURSOR_LAYER_ID: &str = "cursor-layer";
pub const CURSOR_RING_ID: &str = "cursor-ring";
pub const CURSOR_DOT_ID: &str = "cursor-dot";

// Header
pub const HEADER_SIGN_IN_ID: &str = "header-sign-in";
pub const HEADER_SIGN_UP_ID: &str = "header-sign-up";
pub const MOBILE_MENU_TOGGLE_ID: &str = "mobile-menu-toggle";
pub const MOBILE_MENU_ID: &str = "mobile-menu";

// Sign-in modal
pub const SIGN_IN_MODAL_ID: &str = "sign-in-modal";
pub const SIGN_IN_BACKDROP_ID: &str = "sign-in-backdrop";
pub const SIGN_IN_CLOSE_ID: &str = "sign-in-close";
pub const SIGN_IN_FORM_ID: &str = "sign-in-form";
pub const SIGN_IN_PASSWORD_ID: &str = "sign-in-password";
pub const SIGN_IN_PASSWORD_TOGGLE_ID: &str = "sign-in-password-toggle";
pub const SWITCH_TO_SIGN_UP_ID: &str = "switch-to-sign-up";

// Sign-up modal
pub const SIGN_UP_MODAL_ID: &str = "sign-up-modal";
pub const SIGN_UP_BACKDROP_ID: &str = "sign-up-backdrop";
pub const SIGN_UP_CLOSE_ID: &str = "sign-up-close";
pub const SIGN_UP_FORM_ID: &str = "sign-up-form";
pub const SIGN_UP_PASSWORD_ID: &str = "sign-up-password";
pub const SIGN_UP_PASSWORD_TOGGLE_ID: &str = "sign-up-password-toggle";
pub const SWITCH_TO_SIGN_IN_ID: &str = "switch-to-sign-in";

// Chat panel
pub const CHAT_INPUT_ID: &str = "chat-input";
pub const CHAT_SEND_ID: &str = "chat-send";
pub const CHAT_UPLOAD_ID: &str = "chat-upload";
pub const CHAT_FILE_ID: &str = "chat-file";

// Classes toggled from Rust
pub const HIDDEN_CLASS: &str = "hidden";
pub const SEND_READY_CLASS: &str = "send-ready";

// Attributes
pub const LOG_LEVEL_ATTR: &str = "data-log-level";
