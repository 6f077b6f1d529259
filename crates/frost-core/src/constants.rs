//! Tuning constants for the frost effect.
//!
//! Units are noted per constant. Pixel values are in backing-store pixels of
//! the visible canvas; alphas are in \[0, 1\].

// Landmark indices (hand model: 21 points, face mesh: 468+ points)
pub const INDEX_PIP: usize = 6;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;
pub const RING_PIP: usize = 14;
pub const RING_TIP: usize = 16;
pub const PINKY_PIP: usize = 18;
pub const PINKY_TIP: usize = 20;
pub const UPPER_INNER_LIP: usize = 13;
pub const LOWER_INNER_LIP: usize = 14;

// Breath mapping: clamp((lip_distance - OFFSET) * GAIN, 0, 1)
pub const BREATH_DISTANCE_OFFSET: f32 = 0.01;
pub const BREATH_DISTANCE_GAIN: f32 = 15.0;
pub const MANUAL_BREATH_INTENSITY: f32 = 0.8;

// Fog deposit
pub const DEPOSIT_MIN_INTENSITY: f32 = 0.1; // dead zone against tracker noise
pub const DEPOSIT_BASE_RADIUS: f32 = 100.0; // px
pub const DEPOSIT_RADIUS_PER_INTENSITY: f32 = 150.0; // px at intensity 1
pub const DEPOSIT_ALPHA_PER_INTENSITY: f32 = 0.04; // centre alpha at intensity 1

// Fog erase
pub const ERASE_RADIUS: f32 = 45.0; // px
pub const ERASE_PLATEAU: f32 = 0.2; // fraction of radius erased fully

// Fog surface
pub const FOG_RESEED_ALPHA: f32 = 0.15; // uniform fill after (re)allocation
pub const FOG_DRAW_OPACITY: f32 = 0.85; // ceiling applied at draw time
pub const FOG_COLOR_RGB: [u8; 3] = [255, 255, 255];

// Wipe
pub const WIPE_PRESENCE_DELAY_MS: u64 = 1000;
pub const WIPE_SMOOTHING: f32 = 0.15; // s += (t - s) * k

// Snow
pub const SNOW_COUNT: usize = 60;
pub const SNOW_REFERENCE_EXTENT: [f32; 2] = [1920.0, 1080.0];
pub const SNOW_SIZE_RANGE: (f32, f32) = (1.0, 4.0); // px radius
pub const SNOW_SPEED_RANGE: (f32, f32) = (0.5, 2.0); // px per frame
pub const SNOW_OPACITY_RANGE: (f32, f32) = (0.2, 0.7);
pub const SNOW_WIND_RANGE: (f32, f32) = (-0.25, 0.25); // px per frame
pub const SNOW_RESPAWN_Y: f32 = -10.0;

// Backdrop and overlays
pub const BACKDROP_BLUR_PX: f32 = 10.0;
pub const BACKDROP_BRIGHTNESS: f32 = 0.6;
pub const PEACE_GLYPH: &str = "\u{270C}";
pub const PEACE_GLYPH_SIZE_PX: f32 = 160.0;
pub const PEACE_GLYPH_OPACITY: f32 = 0.25;
