//! Activation and resize orchestration around the controller.
//!
//! The browser glue only forwards events here: activation with a fresh
//! measurement, raw `resize` notifications, timer expiry and frame
//! callbacks. Everything ordering-sensitive (listener lifetime, the single
//! pending resize timer, committing only real size changes) lives in
//! `Session` so it runs the same against the fake hosts in tests.

use crate::controller::{Controller, Dimensions, FrameOutcome};
use crate::debounce::{Debouncer, TimerHost};
use crate::frame_loop::FrameHost;
use crate::surface::Surface;
use crate::tuning::Tuning;

/// Where the drawable surface lives: resize subscription and backing store.
pub trait ViewportHost {
    /// Subscribe to resize notifications. Returns `false` if unavailable.
    fn attach_resize(&mut self) -> bool;
    fn detach_resize(&mut self);
    /// Resize the backing store for a committed size and reapply the dpr
    /// transform.
    fn resize_backing(&mut self, dims: Dimensions);
}

pub struct Session<F: FrameHost, T: TimerHost, V: ViewportHost> {
    controller: Controller<F::Request>,
    debouncer: Debouncer<Dimensions, T::Timer>,
    frames: F,
    timers: T,
    viewport: V,
    listening: bool,
}

impl<F: FrameHost, T: TimerHost, V: ViewportHost> Session<F, T, V> {
    pub fn new(tuning: Tuning, frames: F, timers: T, viewport: V) -> Self {
        Self::with_controller(Controller::new(tuning), frames, timers, viewport)
    }

    pub fn with_controller(
        controller: Controller<F::Request>,
        frames: F,
        timers: T,
        viewport: V,
    ) -> Self {
        Self {
            debouncer: Debouncer::new(controller.tuning().resize_debounce_ms),
            controller,
            frames,
            timers,
            viewport,
            listening: false,
        }
    }

    pub fn controller(&self) -> &Controller<F::Request> {
        &self.controller
    }

    pub fn frames(&self) -> &F {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut F {
        &mut self.frames
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn resize_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.controller.set_text(text);
    }

    /// Activation with the surface's current measurement (`None` if it could
    /// not be measured). Returns whether the loop is running afterwards.
    pub fn activate(&mut self, measured: Option<Dimensions>) -> bool {
        if let Some(dims) = measured {
            self.commit(dims);
        }
        if !self.listening {
            self.listening = self.viewport.attach_resize();
            if !self.listening {
                log::warn!("[session] resize tracking unavailable");
            }
        }
        self.controller.set_active(true, &mut self.frames);
        if !self.controller.is_running() {
            self.stop_listening();
            return false;
        }
        true
    }

    /// Cancels the frame, the pending resize commit and the listener.
    pub fn deactivate(&mut self) {
        self.controller.set_active(false, &mut self.frames);
        self.stop_listening();
    }

    fn stop_listening(&mut self) {
        if self.listening {
            self.viewport.detach_resize();
            self.listening = false;
        }
        self.debouncer.cancel(&mut self.timers);
    }

    /// A raw resize notification; arms (or re-arms) the debounce timer.
    pub fn on_resize(&mut self, measured: Dimensions) {
        if !self.controller.is_active() {
            return;
        }
        self.debouncer.trigger(&mut self.timers, measured);
    }

    /// The debounce timer elapsed.
    pub fn on_timer(&mut self) {
        if let Some(dims) = self.debouncer.fire() {
            self.commit(dims);
        }
    }

    fn commit(&mut self, dims: Dimensions) {
        if self.controller.commit_dimensions(dims) {
            self.viewport.resize_backing(dims);
        }
    }

    pub fn on_frame<S: Surface + ?Sized>(&mut self, surface: &mut S, time: f64) -> FrameOutcome {
        self.controller.on_frame(surface, &mut self.frames, time)
    }
}
