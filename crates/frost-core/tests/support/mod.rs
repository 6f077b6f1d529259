// Shared fixtures for the integration tests.
#![allow(dead_code)]

use frost_core::*;
use glam::Vec2;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    Backdrop(BackdropStyle),
    Gradient(usize),
    Fog(f32),
    Circle { center: Vec2, radius: f32, opacity: f32 },
    Glyph(String),
}

/// Render target that records every call instead of drawing.
#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl RenderTarget for Recorder {
    fn clear(&mut self, _viewport: Vec2) {
        self.ops.push(Op::Clear);
    }
    fn draw_video_backdrop(&mut self, _viewport: Vec2, style: BackdropStyle) {
        self.ops.push(Op::Backdrop(style));
    }
    fn fill_linear_gradient(&mut self, _viewport: Vec2, stops: &[GradientStop]) {
        self.ops.push(Op::Gradient(stops.len()));
    }
    fn draw_fog(&mut self, _fog: &FogSurface, opacity: f32) {
        self.ops.push(Op::Fog(opacity));
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, opacity: f32) {
        self.ops.push(Op::Circle {
            center,
            radius,
            opacity,
        });
    }
    fn draw_glyph(&mut self, glyph: &str, _center: Vec2, _size_px: f32, _opacity: f32) {
        self.ops.push(Op::Glyph(glyph.to_string()));
    }
}

pub struct Rig {
    pub slot: ObservationSlot<GestureState>,
    pub adapter: GestureAdapter,
    pub controls: Rc<Controls>,
    pub compositor: FrameCompositor,
}

pub fn rig(width: u32, height: u32) -> Rig {
    let slot = ObservationSlot::default();
    let controls = Rc::new(Controls::new());
    let mut params = EffectParams::default();
    params.particles.seed = Some(11);
    let compositor = FrameCompositor::new(width, height, params, slot.clone(), controls.clone())
        .expect("valid viewport");
    Rig {
        adapter: GestureAdapter::new(slot.clone()),
        slot,
        controls,
        compositor,
    }
}

/// A 21-point hand centred in the frame with the index tip at `tip`.
pub fn hand_at(tip: Vec2) -> HandResult {
    let mut points: Vec<Vec2> = (0..21).map(|_| Vec2::new(0.5, 0.5)).collect();
    points[8] = tip;
    HandResult {
        hands: vec![LandmarkSet::from_ordered(points)],
    }
}

/// Hand whose finger tips/joints have the given y values:
/// `[index_tip, index_pip, middle_tip, middle_pip, ring_tip, ring_pip, pinky_tip, pinky_pip]`.
pub fn hand_with_fingers(ys: [f32; 8]) -> HandResult {
    let idx = [8, 6, 12, 10, 16, 14, 20, 18];
    let set = LandmarkSet::from_indexed(idx.iter().zip(ys).map(|(i, y)| (*i, Vec2::new(0.5, y))));
    HandResult { hands: vec![set] }
}

pub fn face_with_opening(distance: f32) -> FaceResult {
    FaceResult {
        faces: vec![LandmarkSet::from_indexed([
            (13, Vec2::new(0.5, 0.6)),
            (14, Vec2::new(0.5, 0.6 + distance)),
        ])],
    }
}
