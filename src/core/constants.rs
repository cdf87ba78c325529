// Shared visual tuning constants for the background and cursor layers.

// Dot grid
pub const DOT_SPACING: f32 = 30.0; // px between neighbouring dot centres
pub const MIN_DOT_SPACING: f32 = 4.0; // smallest accepted override
pub const BASE_OPACITY_MIN: f32 = 0.1;
pub const BASE_OPACITY_MAX: f32 = 0.3;
pub const BASE_RADIUS: f32 = 1.0; // px, idle dot size
pub const DOT_COLOR_RGB: [u8; 3] = [135, 206, 235]; // sky blue

// Idle oscillation speed range, generated per dot but not animated
pub const OPACITY_SPEED_MIN: f32 = 0.002;
pub const OPACITY_SPEED_SPAN: f32 = 0.005;

// Pointer interaction
pub const INTERACTION_RADIUS: f32 = 100.0; // px
pub const INTERACTION_OPACITY_BOOST: f32 = 0.7; // added opacity at full factor
pub const INTERACTION_RADIUS_BOOST: f32 = 2.0; // added radius at full factor

// Cursor springs (unit mass)
pub const RING_STIFFNESS: f32 = 150.0;
pub const RING_DAMPING: f32 = 20.0;
pub const DOT_STIFFNESS: f32 = 300.0;
pub const DOT_DAMPING: f32 = 25.0;

// Spring integration
pub const SPRING_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after a backgrounded tab resumes
pub const SPRING_REST_DELTA: f32 = 0.5; // px
pub const SPRING_REST_SPEED: f32 = 2.0; // px per second
