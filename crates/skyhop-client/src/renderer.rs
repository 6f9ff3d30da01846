use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use skyhop_core::geom::Rect;
use skyhop_core::sprite::Animation;

use crate::assets::AssetCache;
use crate::diag;

/// Sky-blue backdrop behind the level.
const BACKGROUND_FILL: &str = "#87CEEB";

/// Canvas-2D drawing surface. Construction is the one fatal step of
/// startup; after that every draw call degrades gracefully.
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    /// Locate the canvas element, size it, and acquire the 2D context.
    pub fn new(
        document: &Document,
        canvas_id: &str,
        width: f32,
        height: f32,
    ) -> Result<Self, JsValue> {
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("canvas element #{canvas_id} not found")))?
            .dyn_into::<HtmlCanvasElement>()?;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            width: f64::from(width),
            height: f64::from(height),
        })
    }

    /// Repaint the background over the previous frame.
    pub fn clear(&self) {
        self.ctx.set_fill_style_str(BACKGROUND_FILL);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    /// Blit the current frame of `animation` into `dest`. A no-op while
    /// the backing image is missing or still loading.
    pub fn draw_sprite(&self, cache: &AssetCache, animation: &Animation, dest: &Rect) {
        let Some(asset) = cache.get(&animation.sheet.src) else {
            return;
        };
        if !asset.is_ready() {
            return;
        }

        let src = animation.source_rect();
        let result = self
            .ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                &asset.element,
                f64::from(src.x),
                f64::from(src.y),
                f64::from(src.w),
                f64::from(src.h),
                f64::from(dest.x),
                f64::from(dest.y),
                f64::from(dest.w),
                f64::from(dest.h),
            );
        if let Err(e) = result {
            diag::console_warn!("sprite draw failed for {}: {e:?}", animation.sheet.src);
        }
    }
}
