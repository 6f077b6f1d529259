//! Parameter groups for each stage of the effect.
//!
//! Every struct defaults to the values in [`crate::constants`]; callers
//! override single fields with struct-update syntax.

use crate::constants::*;

#[derive(Clone, Debug)]
pub struct FogParams {
    pub min_intensity: f32,
    pub base_radius: f32,
    pub radius_per_intensity: f32,
    pub alpha_per_intensity: f32,
    pub erase_radius: f32,
    pub erase_plateau: f32,
    pub reseed_alpha: f32,
}

impl Default for FogParams {
    fn default() -> Self {
        Self {
            min_intensity: DEPOSIT_MIN_INTENSITY,
            base_radius: DEPOSIT_BASE_RADIUS,
            radius_per_intensity: DEPOSIT_RADIUS_PER_INTENSITY,
            alpha_per_intensity: DEPOSIT_ALPHA_PER_INTENSITY,
            erase_radius: ERASE_RADIUS,
            erase_plateau: ERASE_PLATEAU,
            reseed_alpha: FOG_RESEED_ALPHA,
        }
    }
}

#[derive(Clone, Debug)]
pub struct WipeParams {
    pub presence_delay_ms: u64,
    pub smoothing: f32,
}

impl Default for WipeParams {
    fn default() -> Self {
        Self {
            presence_delay_ms: WIPE_PRESENCE_DELAY_MS,
            smoothing: WIPE_SMOOTHING,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ParticleParams {
    pub count: usize,
    pub reference_extent: [f32; 2],
    pub size: (f32, f32),
    pub speed: (f32, f32),
    pub opacity: (f32, f32),
    pub wind: (f32, f32),
    pub respawn_y: f32,
    /// Fixed RNG seed; `None` draws one from the platform entropy source.
    pub seed: Option<u64>,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            count: SNOW_COUNT,
            reference_extent: SNOW_REFERENCE_EXTENT,
            size: SNOW_SIZE_RANGE,
            speed: SNOW_SPEED_RANGE,
            opacity: SNOW_OPACITY_RANGE,
            wind: SNOW_WIND_RANGE,
            respawn_y: SNOW_RESPAWN_Y,
            seed: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CompositorParams {
    pub fog_opacity: f32,
    pub backdrop_blur_px: f32,
    pub backdrop_brightness: f32,
    pub glyph: &'static str,
    pub glyph_size_px: f32,
    pub glyph_opacity: f32,
}

impl Default for CompositorParams {
    fn default() -> Self {
        Self {
            fog_opacity: FOG_DRAW_OPACITY,
            backdrop_blur_px: BACKDROP_BLUR_PX,
            backdrop_brightness: BACKDROP_BRIGHTNESS,
            glyph: PEACE_GLYPH,
            glyph_size_px: PEACE_GLYPH_SIZE_PX,
            glyph_opacity: PEACE_GLYPH_OPACITY,
        }
    }
}

/// All tunables for one compositor instance.
#[derive(Clone, Debug, Default)]
pub struct EffectParams {
    pub fog: FogParams,
    pub wipe: WipeParams,
    pub particles: ParticleParams,
    pub compositor: CompositorParams,
}
