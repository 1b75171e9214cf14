use crate::constants::*;
use affirm_core::Dimensions;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn device_pixel_ratio(window: &web::Window) -> f64 {
    let dpr = window.device_pixel_ratio();
    if dpr.is_finite() && dpr > 0.0 {
        dpr.min(MAX_DPR)
    } else {
        DPR_FALLBACK
    }
}

/// Logical size of the canvas as laid out by CSS, plus the window dpr.
pub fn measure(canvas: &web::HtmlCanvasElement) -> Option<Dimensions> {
    let window = web::window()?;
    let rect = canvas.get_bounding_client_rect();
    Some(Dimensions::new(
        rect.width(),
        rect.height(),
        device_pixel_ratio(&window),
    ))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context(CONTEXT_KIND)
        .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("unexpected context type: {:?}", e))
}

/// Resizes the backing store to `css × dpr` and applies the dpr transform.
/// Setting the width resets the context state, so this runs once per
/// committed size change and never per frame.
pub fn apply_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    dims: Dimensions,
) -> anyhow::Result<()> {
    let (w_px, h_px) = dims.backing_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let dpr = if dims.dpr > 0.0 { dims.dpr } else { DPR_FALLBACK };
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
        .map_err(|e| anyhow::anyhow!("setTransform failed: {:?}", e))
}

/// Window `resize` subscription, removed again when dropped.
pub struct ResizeListener {
    window: web::Window,
    closure: Closure<dyn FnMut()>,
}

impl ResizeListener {
    pub fn attach(handler: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback(RESIZE_EVENT, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("addEventListener failed: {:?}", e))?;
        Ok(Self { window, closure })
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        _ = self
            .window
            .remove_event_listener_with_callback(RESIZE_EVENT, self.closure.as_ref().unchecked_ref());
    }
}
