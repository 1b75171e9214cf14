use affirm_core::{FrameHost, TimerHost};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` scheduler. The callback closure is created once
/// and reused for every request.
pub struct RafHost {
    window: Option<web::Window>,
    callback: Closure<dyn FnMut(f64)>,
    outstanding: u32,
}

impl RafHost {
    pub fn new(callback: impl FnMut(f64) + 'static) -> Self {
        Self {
            window: web::window(),
            callback: Closure::wrap(Box::new(callback) as Box<dyn FnMut(f64)>),
            outstanding: 0,
        }
    }

    /// Requests the host has accepted and not yet delivered or cancelled.
    pub fn outstanding(&self) -> u32 {
        self.outstanding
    }

    /// The browser invoked the callback; that request is spent.
    pub fn delivered(&mut self) {
        self.outstanding = self.outstanding.saturating_sub(1);
    }
}

impl FrameHost for RafHost {
    type Request = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let window = self.window.as_ref()?;
        match window.request_animation_frame(self.callback.as_ref().unchecked_ref()) {
            Ok(id) => {
                self.outstanding += 1;
                Some(id)
            }
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, request: i32) {
        if let Some(window) = &self.window {
            _ = window.cancel_animation_frame(request);
            self.outstanding = self.outstanding.saturating_sub(1);
        }
    }
}

/// `setTimeout` one-shot timers sharing a single callback.
pub struct TimeoutHost {
    window: Option<web::Window>,
    callback: Closure<dyn FnMut()>,
}

impl TimeoutHost {
    pub fn new(callback: impl FnMut() + 'static) -> Self {
        Self {
            window: web::window(),
            callback: Closure::wrap(Box::new(callback) as Box<dyn FnMut()>),
        }
    }
}

impl TimerHost for TimeoutHost {
    type Timer = i32;

    fn arm(&mut self, delay_ms: u32) -> Option<i32> {
        let window = self.window.as_ref()?;
        let function: &js_sys::Function = self.callback.as_ref().unchecked_ref();
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(function, delay_ms as i32)
            .map_err(|e| log::error!("setTimeout failed: {:?}", e))
            .ok()
    }

    fn disarm(&mut self, timer: i32) {
        if let Some(window) = &self.window {
            window.clear_timeout_with_handle(timer);
        }
    }
}
