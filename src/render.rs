use crate::constants::BACKDROP_FALLBACK_FILL;
use frost_core::{BackdropStyle, FogSurface, FrostError, GradientStop, RenderTarget};
use glam::Vec2;
use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys as web;

// HTMLMediaElement.HAVE_CURRENT_DATA
const VIDEO_HAVE_CURRENT_DATA: u16 = 2;

fn context_2d(canvas: &web::HtmlCanvasElement) -> Result<web::CanvasRenderingContext2d, FrostError> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
        .ok_or(FrostError::SurfaceUnavailable)
}

#[inline]
fn white(alpha: f32) -> String {
    format!("rgba(255,255,255,{:.3})", alpha.clamp(0.0, 1.0))
}

/// 2D-canvas implementation of the compositor's drawing calls.
///
/// The fog raster is uploaded into an off-screen canvas only when its
/// revision changes; every frame draws that canvas onto the visible one with
/// the requested opacity.
pub struct CanvasTarget {
    ctx: web::CanvasRenderingContext2d,
    video: web::HtmlVideoElement,
    fog_canvas: web::HtmlCanvasElement,
    fog_ctx: web::CanvasRenderingContext2d,
    fog_pixels: Vec<[u8; 4]>,
    fog_revision: Option<u64>,
}

impl CanvasTarget {
    pub fn acquire(
        document: &web::Document,
        canvas: &web::HtmlCanvasElement,
        video: &web::HtmlVideoElement,
    ) -> Result<Self, FrostError> {
        let ctx = context_2d(canvas)?;
        let fog_canvas = document
            .create_element("canvas")
            .ok()
            .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
            .ok_or(FrostError::SurfaceUnavailable)?;
        let fog_ctx = context_2d(&fog_canvas)?;
        log::info!("[render] 2d context acquired");
        Ok(Self {
            ctx,
            video: video.clone(),
            fog_canvas,
            fog_ctx,
            fog_pixels: Vec::new(),
            fog_revision: None,
        })
    }

    fn upload_fog(&mut self, fog: &FogSurface) -> Result<(), JsValue> {
        let (w, h) = (fog.width(), fog.height());
        if self.fog_canvas.width() != w {
            self.fog_canvas.set_width(w);
        }
        if self.fog_canvas.height() != h {
            self.fog_canvas.set_height(h);
        }
        let bytes = fog.rgba8_bytes(&mut self.fog_pixels);
        let image = web::ImageData::new_with_u8_clamped_array_and_sh(Clamped(bytes), w, h)?;
        self.fog_ctx.put_image_data(&image, 0.0, 0.0)
    }

    #[allow(deprecated)]
    fn set_fill(&self, style: &str) {
        self.ctx.set_fill_style(&JsValue::from_str(style));
    }
}

impl RenderTarget for CanvasTarget {
    fn clear(&mut self, viewport: Vec2) {
        self.ctx
            .clear_rect(0.0, 0.0, viewport.x as f64, viewport.y as f64);
    }

    fn draw_video_backdrop(&mut self, viewport: Vec2, style: BackdropStyle) {
        let (w, h) = (viewport.x as f64, viewport.y as f64);
        if self.video.ready_state() < VIDEO_HAVE_CURRENT_DATA {
            self.set_fill(BACKDROP_FALLBACK_FILL);
            self.ctx.fill_rect(0.0, 0.0, w, h);
            return;
        }
        self.ctx.save();
        self.ctx.set_filter(&format!(
            "blur({}px) brightness({})",
            style.blur_px, style.brightness
        ));
        if style.mirrored {
            let _ = self.ctx.translate(w, 0.0);
            let _ = self.ctx.scale(-1.0, 1.0);
        }
        if let Err(e) = self
            .ctx
            .draw_image_with_html_video_element_and_dw_and_dh(&self.video, 0.0, 0.0, w, h)
        {
            log::debug!("[render] video draw failed: {:?}", e);
        }
        self.ctx.restore();
    }

    fn fill_linear_gradient(&mut self, viewport: Vec2, stops: &[GradientStop]) {
        let (w, h) = (viewport.x as f64, viewport.y as f64);
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, w, h);
        for stop in stops {
            let _ = gradient.add_color_stop(stop.offset, &white(stop.alpha));
        }
        #[allow(deprecated)]
        self.ctx.set_fill_style(&gradient);
        self.ctx.fill_rect(0.0, 0.0, w, h);
    }

    fn draw_fog(&mut self, fog: &FogSurface, opacity: f32) {
        if self.fog_revision != Some(fog.revision()) {
            if let Err(e) = self.upload_fog(fog) {
                log::debug!("[render] fog upload failed: {:?}", e);
                return;
            }
            self.fog_revision = Some(fog.revision());
        }
        self.ctx.set_global_alpha(opacity as f64);
        let _ = self
            .ctx
            .draw_image_with_html_canvas_element(&self.fog_canvas, 0.0, 0.0);
        self.ctx.set_global_alpha(1.0);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, opacity: f32) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.set_fill(&white(opacity));
        self.ctx.fill();
    }

    fn draw_glyph(&mut self, glyph: &str, center: Vec2, size_px: f32, opacity: f32) {
        self.ctx.save();
        self.ctx.set_global_alpha(opacity as f64);
        self.ctx.set_font(&format!("{}px serif", size_px));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.set_fill("#ffffff");
        let _ = self.ctx.fill_text(glyph, center.x as f64, center.y as f64);
        self.ctx.restore();
    }
}
