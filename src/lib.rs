#![cfg(target_arch = "wasm32")]
use affirm_core::Tuning;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas2d;
mod constants;
mod dom;
mod frame;
mod session;

use session::CanvasSession;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("affirm-web loaded");
    Ok(())
}

/// Handle the hosting page keeps for one mounted affirmation canvas.
///
/// The page drives it with `set_active` and `set_text`; everything else
/// (sizing, resize tracking, the frame loop) happens inside.
#[wasm_bindgen]
pub struct AffirmationCanvas {
    session: Rc<RefCell<CanvasSession>>,
}

#[wasm_bindgen]
impl AffirmationCanvas {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: web::HtmlCanvasElement) -> AffirmationCanvas {
        AffirmationCanvas {
            session: CanvasSession::create(canvas, Tuning::default()),
        }
    }

    /// Mounts onto an existing `<canvas>` by id (defaults to
    /// `affirmation-canvas`).
    #[wasm_bindgen(js_name = fromElementId)]
    pub fn from_element_id(id: Option<String>) -> Result<AffirmationCanvas, JsValue> {
        let canvas = find_canvas(id.as_deref().unwrap_or(constants::DEFAULT_CANVAS_ID))
            .map_err(|e| JsValue::from_str(&format!("{e:#}")))?;
        Ok(Self::new(canvas))
    }

    #[wasm_bindgen(js_name = setActive)]
    pub fn set_active(&self, active: bool) {
        self.session.borrow_mut().set_active(active);
    }

    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&self, text: String) {
        self.session.borrow_mut().set_text(text);
    }

    #[wasm_bindgen(getter)]
    pub fn canvas(&self) -> web::HtmlCanvasElement {
        self.session.borrow().canvas().clone()
    }

    #[wasm_bindgen(getter, js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.session.borrow().controller().is_active()
    }

    #[wasm_bindgen(js_name = outstandingFrames)]
    pub fn outstanding_frames(&self) -> u32 {
        self.session.borrow().outstanding_frames()
    }

    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> u32 {
        self.session.borrow().controller().particles().len() as u32
    }

    /// Unmount: stops the loop and drops the resize listener. The handle may
    /// be activated again afterwards.
    pub fn dispose(&self) {
        self.session.borrow_mut().set_active(false);
    }
}

fn find_canvas(id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = web::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{id} is not a canvas: {:?}", e))
}
