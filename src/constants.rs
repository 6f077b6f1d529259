// DOM hooks and input bindings for the web frontend.
// Kept free of web_sys so host tests can include this file directly.

// Elements expected in the host page
pub const CANVAS_ID: &str = "frost-canvas";
pub const VIDEO_ID: &str = "frost-video";
pub const BREATH_METER_ID: &str = "breath-meter";
pub const HAND_STATUS_ID: &str = "hand-status";
pub const SYMMETRY_BUTTON_ID: &str = "symmetry-toggle";

// Class toggled on the symmetry button while mirroring is on
pub const ACTIVE_CLASS: &str = "active";

// Keyboard
pub const MANUAL_BREATH_KEY: &str = " "; // held
pub const SYMMETRY_KEYS: [&str; 2] = ["m", "M"];

// Fallback fill when the camera frame is not ready yet
pub const BACKDROP_FALLBACK_FILL: &str = "#0b0f18";
