use crate::dom;
use crate::listeners::ListenerSet;
use crate::overlay;
use crate::render::CanvasTarget;
use frost_core::{FrameClock, FrameCompositor, FrameLoop, FrostError, LoopState};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub compositor: FrameCompositor,
    pub frame_loop: FrameLoop,
    pub clock: FrameClock,

    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub video: web::HtmlVideoElement,
    // Acquired lazily and retried every tick until it succeeds
    pub target: Option<CanvasTarget>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        if self.target.is_none() {
            match CanvasTarget::acquire(&self.document, &self.canvas, &self.video) {
                Ok(t) => self.target = Some(t),
                Err(e) => log::debug!("[render] {}", e),
            }
        }
        let target = self
            .target
            .as_mut()
            .ok_or(FrostError::SurfaceUnavailable);
        let now = self.clock.now();
        let _ = self.frame_loop.tick(&mut self.compositor, target, now);
        overlay::update_status(&self.document, &self.compositor.status());
    }

    /// Sync the backing store to the element size and reseed the fog if it changed.
    pub fn resize(&mut self) {
        let (w, h) = dom::sync_canvas_backing_size(&self.canvas);
        match self.compositor.resize(w, h) {
            Ok(true) => log::info!("[frame] viewport {}x{}", w, h),
            Ok(false) => {}
            Err(e) => log::warn!("[frame] resize ignored: {}", e),
        }
    }
}

/// Drive `FrameContext::frame` from requestAnimationFrame until the loop is stopped.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let frame_loop = frame_ctx.borrow().frame_loop.clone();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_loop.should_continue() {
            // Drop our own closure to break the Rc cycle; no further frames.
            let _ = tick_clone.borrow_mut().take();
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Resize the canvas with the window. The handler holds the context weakly
/// and ignores events once the loop has been stopped.
pub fn wire_canvas_resize(frame_ctx: &Rc<RefCell<FrameContext>>, listeners: &mut ListenerSet) {
    let Some(window) = web::window() else {
        return;
    };
    let weak: Weak<RefCell<FrameContext>> = Rc::downgrade(frame_ctx);
    let resize_closure = Closure::wrap(Box::new(move || {
        let Some(frame_ctx) = weak.upgrade() else {
            return;
        };
        if frame_ctx.borrow().frame_loop.state() == LoopState::Stopped {
            return;
        }
        frame_ctx.borrow_mut().resize();
        let needs_start = frame_ctx.borrow().frame_loop.on_resize();
        if needs_start {
            start_loop(frame_ctx);
        }
    }) as Box<dyn FnMut()>);
    dom::listen(listeners, &window, "resize", resize_closure);
}
