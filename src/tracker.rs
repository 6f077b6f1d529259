//! Bridge to the JS landmark tracker.
//!
//! The tracker (camera capture plus hand/face models) lives in JS. It hands
//! us its raw result objects; they are converted here into the core's
//! landmark contract before any gesture logic sees them.

use frost_core::{FaceResult, FrostError, HandResult, LandmarkSet};
use glam::Vec2;
use js_sys::{Array, Reflect};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// JS object owning camera capture and the landmark models.
    pub type Tracker;

    #[wasm_bindgen(method, catch, js_name = startCapture)]
    pub fn start_capture(this: &Tracker) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = stopCapture)]
    pub fn stop_capture(this: &Tracker) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    pub fn close(this: &Tracker) -> Result<(), JsValue>;
}

fn number(obj: &JsValue, key: &str) -> Result<f32, FrostError> {
    Reflect::get(obj, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|v| v as f32)
        .ok_or_else(|| FrostError::MalformedPayload(format!("landmark without numeric `{key}`")))
}

/// Read `result[key]` as a list of landmark lists. Missing or null means
/// "nothing detected".
fn landmark_lists(result: &JsValue, key: &str) -> Result<Vec<LandmarkSet>, FrostError> {
    if result.is_undefined() || result.is_null() {
        return Ok(Vec::new());
    }
    let lists = Reflect::get(result, &JsValue::from_str(key))
        .map_err(|e| FrostError::MalformedPayload(format!("{key}: {e:?}")))?;
    if lists.is_undefined() || lists.is_null() {
        return Ok(Vec::new());
    }
    if !Array::is_array(&lists) {
        return Err(FrostError::MalformedPayload(format!("`{key}` is not an array")));
    }
    Array::from(&lists)
        .iter()
        .map(|set| {
            if !Array::is_array(&set) {
                return Err(FrostError::MalformedPayload(format!(
                    "`{key}` entry is not an array"
                )));
            }
            let points = Array::from(&set)
                .iter()
                .map(|p| Ok(Vec2::new(number(&p, "x")?, number(&p, "y")?)))
                .collect::<Result<Vec<_>, FrostError>>()?;
            Ok(LandmarkSet::from_ordered(points))
        })
        .collect()
}

/// Parse a hand-landmarker result (`{ landmarks: [[{x, y, z}, ...], ...] }`).
pub fn parse_hand_result(result: &JsValue) -> Result<HandResult, FrostError> {
    Ok(HandResult {
        hands: landmark_lists(result, "landmarks")?,
    })
}

/// Parse a face-landmarker result (`{ faceLandmarks: [[{x, y, z}, ...]] }`).
pub fn parse_face_result(result: &JsValue) -> Result<FaceResult, FrostError> {
    Ok(FaceResult {
        faces: landmark_lists(result, "faceLandmarks")?,
    })
}
