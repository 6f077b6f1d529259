#![cfg(target_arch = "wasm32")]
use frost_core::{
    Controls, EffectParams, FaceResult, FrameClock, FrameCompositor, FrameLoop, GestureAdapter,
    GestureState, HandResult, ObservationSlot, Status,
};
use listeners::ListenerSet;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod listeners;
mod overlay;
mod render;
mod status_text;
mod tracker;

pub use tracker::Tracker;

static MOUNTED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("frost-web starting");
    Ok(())
}

/// Handle returned to the page. The tracker glue pushes results into it and
/// the UI reads status and toggles from it.
#[wasm_bindgen]
pub struct FrostApp {
    adapter: GestureAdapter,
    gestures: ObservationSlot<GestureState>,
    controls: Rc<Controls>,
    frame_loop: FrameLoop,
    tracker: Tracker,
    listeners: ListenerSet,
}

#[wasm_bindgen]
impl FrostApp {
    #[wasm_bindgen(js_name = pushHandResult)]
    pub fn push_hand_result(&mut self, result: JsValue) {
        let hands = tracker::parse_hand_result(&result).unwrap_or_else(|e| {
            log::warn!("[tracker] {}", e);
            HandResult::default()
        });
        self.adapter.on_hand_result(&hands);
    }

    #[wasm_bindgen(js_name = pushFaceResult)]
    pub fn push_face_result(&mut self, result: JsValue) {
        let faces = tracker::parse_face_result(&result).unwrap_or_else(|e| {
            log::warn!("[tracker] {}", e);
            FaceResult::default()
        });
        self.adapter.on_face_result(&faces);
    }

    pub fn symmetry(&self) -> bool {
        self.controls.symmetry()
    }

    #[wasm_bindgen(js_name = toggleSymmetry)]
    pub fn toggle_symmetry(&self) -> bool {
        self.controls.toggle_symmetry()
    }

    #[wasm_bindgen(js_name = setManualBreath)]
    pub fn set_manual_breath(&self, active: bool) {
        self.controls.set_manual_breath(active);
    }

    #[wasm_bindgen(js_name = breathPercent)]
    pub fn breath_percent(&self) -> u8 {
        self.status().breath_percent
    }

    #[wasm_bindgen(js_name = handDetected)]
    pub fn hand_detected(&self) -> bool {
        self.status().hand_detected
    }

    /// Stop rendering, detach page listeners and release camera and tracker
    /// resources.
    pub fn unmount(&mut self) {
        self.frame_loop.stop();
        let detached = self.listeners.detach_all();
        log::debug!("[frame] {} listeners detached", detached);
        if let Err(e) = self.tracker.stop_capture() {
            log::warn!("[tracker] stopCapture failed: {:?}", e);
        }
        if let Err(e) = self.tracker.close() {
            log::warn!("[tracker] close failed: {:?}", e);
        }
        MOUNTED.store(false, Ordering::SeqCst);
        log::info!("[tracker] released");
    }
}

impl FrostApp {
    fn status(&self) -> Status {
        Status::capture(&self.gestures.latest(), &self.controls)
    }
}

/// Build the compositor on the page's canvas, start the camera through the
/// tracker, and begin the frame loop.
#[wasm_bindgen]
pub async fn mount(tracker: Tracker) -> Result<FrostApp, JsValue> {
    if MOUNTED.swap(true, Ordering::SeqCst) {
        return Err(JsValue::from_str("frost-web is already mounted"));
    }
    match init(tracker).await {
        Ok(app) => Ok(app),
        Err(e) => {
            MOUNTED.store(false, Ordering::SeqCst);
            log::error!("init error: {:?}", e);
            Err(JsValue::from_str(&format!("{:#}", e)))
        }
    }
}

async fn init(tracker: Tracker) -> anyhow::Result<FrostApp> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::element_as(&document, constants::CANVAS_ID)?;
    let video: web::HtmlVideoElement = dom::element_as(&document, constants::VIDEO_ID)?;

    let (width, height) = dom::sync_canvas_backing_size(&canvas);

    let gestures = ObservationSlot::default();
    let controls = Rc::new(Controls::new());
    let compositor = FrameCompositor::new(
        width,
        height,
        EffectParams::default(),
        gestures.clone(),
        controls.clone(),
    )?;
    log::info!("[frame] viewport {}x{}", width, height);

    let start = tracker
        .start_capture()
        .map_err(|e| anyhow::anyhow!("startCapture: {:?}", e))?;
    JsFuture::from(start)
        .await
        .map_err(|e| anyhow::anyhow!("camera/tracker start failed: {:?}", e))?;
    log::info!("[tracker] capture started");

    let frame_loop = FrameLoop::new();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        compositor,
        frame_loop: frame_loop.clone(),
        clock: FrameClock::start(),
        document: document.clone(),
        canvas,
        video,
        target: None,
    }));

    let mut listeners = ListenerSet::new();
    frame::wire_canvas_resize(&frame_ctx, &mut listeners);
    events::wire_keyboard(controls.clone(), &mut listeners);
    let toggle_controls = controls.clone();
    dom::add_click_listener(
        &mut listeners,
        &document,
        constants::SYMMETRY_BUTTON_ID,
        move || {
            toggle_controls.toggle_symmetry();
        },
    );

    if frame_loop.start() {
        frame::start_loop(frame_ctx);
    }

    Ok(FrostApp {
        adapter: GestureAdapter::new(gestures.clone()),
        gestures,
        controls,
        frame_loop,
        tracker,
        listeners,
    })
}
