use crate::canvas2d::Canvas2d;
use crate::constants::MS_PER_SEC;
use crate::dom::{self, ResizeListener};
use crate::frame::{RafHost, TimeoutHost};
use affirm_core::{Controller, Dimensions, FrameOutcome, Session, Tuning, ViewportHost};
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

/// The mounted canvas: window `resize` subscription and backing store.
pub struct CanvasViewport {
    canvas: web::HtmlCanvasElement,
    ctx: Option<web::CanvasRenderingContext2d>,
    listener: Option<ResizeListener>,
    owner: Weak<RefCell<CanvasSession>>,
}

impl ViewportHost for CanvasViewport {
    fn attach_resize(&mut self) -> bool {
        let owner = self.owner.clone();
        match ResizeListener::attach(move || with_session(&owner, CanvasSession::on_resize)) {
            Ok(listener) => {
                self.listener = Some(listener);
                true
            }
            Err(e) => {
                log::warn!("[viewport] {e:#}");
                false
            }
        }
    }

    fn detach_resize(&mut self) {
        self.listener = None;
    }

    fn resize_backing(&mut self, dims: Dimensions) {
        let Some(ctx) = &self.ctx else {
            return;
        };
        if let Err(e) = dom::apply_backing_size(&self.canvas, ctx, dims) {
            log::warn!("[viewport] backing store not resized: {e:#}");
        }
    }
}

/// Browser side of one mounted canvas. Callbacks reach it through a `Weak`,
/// so dropping the handle tears the whole session down.
pub struct CanvasSession {
    inner: Session<RafHost, TimeoutHost, CanvasViewport>,
    surface: Option<Canvas2d>,
    started: Instant,
}

fn with_session(weak: &Weak<RefCell<CanvasSession>>, f: impl FnOnce(&mut CanvasSession)) {
    let Some(session) = weak.upgrade() else {
        return;
    };
    let Ok(mut session) = session.try_borrow_mut() else {
        log::debug!("[session] busy, callback dropped");
        return;
    };
    f(&mut session);
}

impl CanvasSession {
    pub fn create(canvas: web::HtmlCanvasElement, tuning: Tuning) -> Rc<RefCell<CanvasSession>> {
        Rc::new_cyclic(|this: &Weak<RefCell<CanvasSession>>| {
            let on_frame = this.clone();
            let frames = RafHost::new(move |_timestamp: f64| {
                with_session(&on_frame, CanvasSession::frame);
            });
            let on_timer = this.clone();
            let timers = TimeoutHost::new(move || {
                with_session(&on_timer, |s| s.inner.on_timer());
            });
            let viewport = CanvasViewport {
                canvas,
                ctx: None,
                listener: None,
                owner: this.clone(),
            };
            let inner = Session::with_controller(Controller::new(tuning), frames, timers, viewport);
            let mut session = CanvasSession {
                inner,
                surface: None,
                started: Instant::now(),
            };
            session.acquire_context();
            RefCell::new(session)
        })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.inner.viewport().canvas
    }

    pub fn controller(&self) -> &Controller<i32> {
        self.inner.controller()
    }

    pub fn outstanding_frames(&self) -> u32 {
        self.inner.frames().outstanding()
    }

    pub fn set_text(&mut self, text: String) {
        self.inner.set_text(text);
    }

    fn acquire_context(&mut self) -> bool {
        if self.surface.is_some() {
            return true;
        }
        match dom::context_2d(self.canvas()) {
            Ok(ctx) => {
                self.inner.viewport_mut().ctx = Some(ctx.clone());
                self.surface = Some(Canvas2d::new(ctx));
                true
            }
            Err(e) => {
                log::warn!("[session] no drawing context yet: {e:#}");
                false
            }
        }
    }

    pub fn set_active(&mut self, active: bool) {
        if !active {
            self.inner.deactivate();
            return;
        }
        // the element may have been mounted since construction
        if !self.acquire_context() {
            return;
        }
        let measured = dom::measure(self.canvas());
        self.inner.activate(measured);
    }

    fn on_resize(&mut self) {
        if let Some(dims) = dom::measure(self.canvas()) {
            self.inner.on_resize(dims);
        }
    }

    fn frame(&mut self) {
        self.inner.frames_mut().delivered();
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let time = self.started.elapsed().as_secs_f64() * MS_PER_SEC;
        if let FrameOutcome::Rendered(report) = self.inner.on_frame(surface, time) {
            if !report.failed.is_empty() {
                log::debug!(
                    "[frame] t={:.0}ms drew {} layers, {} failed",
                    report.time,
                    report.drawn.len(),
                    report.failed.len()
                );
            }
        }
    }
}

impl Drop for CanvasSession {
    fn drop(&mut self) {
        self.inner.deactivate();
    }
}
