//! Per-frame orchestration: update the gesture-driven state, then draw every
//! layer in back-to-front order onto a [`RenderTarget`].

use crate::config::{CompositorParams, EffectParams};
use crate::controls::Controls;
use crate::error::{FrostError, Result};
use crate::fog::FogSurface;
use crate::gesture::{effective_intensity, GestureState};
use crate::observation::ObservationSlot;
use crate::particles::ParticleSystem;
use crate::status::Status;
use crate::wipe::{EraseTargets, WipeController};
use glam::Vec2;
use std::rc::Rc;
use std::time::Duration;

/// How the camera frame is drawn behind the glass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackdropStyle {
    pub mirrored: bool,
    pub blur_px: f32,
    pub brightness: f32,
}

/// One colour stop of the glass-shine gradient (white with the given alpha).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub alpha: f32,
}

/// Diagonal shine, top-left to bottom-right.
pub const GLASS_SHINE: [GradientStop; 3] = [
    GradientStop {
        offset: 0.0,
        alpha: 0.10,
    },
    GradientStop {
        offset: 0.5,
        alpha: 0.0,
    },
    GradientStop {
        offset: 1.0,
        alpha: 0.05,
    },
];

/// Drawing seam. The browser implements it on a 2D canvas; tests record calls.
pub trait RenderTarget {
    fn clear(&mut self, viewport: Vec2);
    fn draw_video_backdrop(&mut self, viewport: Vec2, style: BackdropStyle);
    fn fill_linear_gradient(&mut self, viewport: Vec2, stops: &[GradientStop]);
    fn draw_fog(&mut self, fog: &FogSurface, opacity: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, opacity: f32);
    fn draw_glyph(&mut self, glyph: &str, center: Vec2, size_px: f32, opacity: f32);
}

/// What changed during one frame, for logging and tests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub deposited: bool,
    pub erased_at: EraseTargets,
    pub glyph_drawn: bool,
}

pub struct FrameCompositor {
    viewport: Vec2,
    fog: FogSurface,
    wipe: WipeController,
    snow: ParticleSystem,
    gestures: ObservationSlot<GestureState>,
    controls: Rc<Controls>,
    params: CompositorParams,
}

impl FrameCompositor {
    pub fn new(
        width: u32,
        height: u32,
        params: EffectParams,
        gestures: ObservationSlot<GestureState>,
        controls: Rc<Controls>,
    ) -> Result<Self> {
        check_viewport(width, height)?;
        Ok(Self {
            viewport: Vec2::new(width as f32, height as f32),
            fog: FogSurface::new(width, height, params.fog),
            wipe: WipeController::new(params.wipe),
            snow: ParticleSystem::new(params.particles),
            gestures,
            controls,
            params: params.compositor,
        })
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn fog(&self) -> &FogSurface {
        &self.fog
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.snow
    }

    pub fn controls(&self) -> &Rc<Controls> {
        &self.controls
    }

    /// Status line values for the surrounding UI.
    pub fn status(&self) -> Status {
        Status::capture(&self.gestures.latest(), &self.controls)
    }

    /// Track a new viewport size. The fog is reseeded rather than rescaled.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<bool> {
        check_viewport(width, height)?;
        self.viewport = Vec2::new(width as f32, height as f32);
        Ok(self.fog.resize(width, height))
    }

    /// Run one frame: update fog from the latest gestures, then draw all layers.
    pub fn render_frame<T: RenderTarget + ?Sized>(
        &mut self,
        target: &mut T,
        now: Duration,
    ) -> FrameReport {
        let g = self.gestures.latest();
        let mut report = FrameReport::default();

        let intensity = effective_intensity(g.breath_intensity, self.controls.manual_breath());
        report.deposited = self.fog.deposit(g.mouth_point, intensity);

        report.erased_at =
            self.wipe
                .update(g.fingertip, now, self.viewport, self.controls.symmetry());
        for p in &report.erased_at {
            self.fog.erase(*p);
        }

        let vp = self.viewport;
        target.clear(vp);
        target.draw_video_backdrop(
            vp,
            BackdropStyle {
                mirrored: true,
                blur_px: self.params.backdrop_blur_px,
                brightness: self.params.backdrop_brightness,
            },
        );
        target.fill_linear_gradient(vp, &GLASS_SHINE);
        target.draw_fog(&self.fog, self.params.fog_opacity);

        self.snow.advance(vp);
        for p in self.snow.particles() {
            target.fill_circle(Vec2::new(p.x, p.y), p.size, p.opacity);
        }

        if g.peace_sign {
            target.draw_glyph(
                self.params.glyph,
                vp * 0.5,
                self.params.glyph_size_px,
                self.params.glyph_opacity,
            );
            report.glyph_drawn = true;
        }
        report
    }
}

fn check_viewport(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(FrostError::InvalidViewport { width, height });
    }
    Ok(())
}
