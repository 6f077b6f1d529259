use crate::listeners::ListenerSet;
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up an element by id and cast it to a concrete element type.
pub fn element_as<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?;
    el.dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", id, e))
}

/// Attach `closure` to `target`. The registration is removed, and the closure
/// freed, when `listeners` detaches.
pub fn listen<F>(
    listeners: &mut ListenerSet,
    target: &web::EventTarget,
    event: &'static str,
    closure: Closure<F>,
) where
    F: ?Sized + WasmClosure + 'static,
{
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] {} listener not attached: {:?}", event, e);
        return;
    }
    let target = target.clone();
    listeners.push(move || {
        let _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    });
}

pub fn add_click_listener(
    listeners: &mut ListenerSet,
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        listen(listeners, &el, "click", closure);
    }
}

/// Match the canvas backing store to its CSS size, one backing pixel per CSS
/// pixel, so brush radii stay in CSS pixels on HiDPI screens.
/// Returns the new backing size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width().round() as u32).max(1);
    let h_px = (rect.height().round() as u32).max(1);
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    (w_px, h_px)
}
