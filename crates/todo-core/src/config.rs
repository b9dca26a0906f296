//! Compile-time settings for persistence and gestures.

/// Name of the cookie holding the serialized task array
pub const TASKS_COOKIE_KEY: &str = "tasks";

/// Cookie path scope (whole site)
pub const COOKIE_PATH: &str = "/";

/// One year, in seconds
pub const COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

/// Cross-site requests only carry the cookie on top-level navigation
pub const COOKIE_SAME_SITE: &str = "Lax";

/// Browsers commonly cap a single cookie (`name=value`) at 4096 bytes
pub const COOKIE_SIZE_LIMIT: usize = 4096;

/// How long a press must be held before it turns into a drag
pub const DRAG_ARM_DELAY_MS: u32 = 150;

/// Displacement applied to the hovered neighbor while dragging
pub const NEIGHBOR_SHIFT_PX: f64 = 10.0;

/// How long the delete button waits for a second press
pub const DELETE_CONFIRM_TIMEOUT_MS: u32 = 3000;
