//! Animation controller: session state, particle pool, frame pacing and the
//! fixed layer composite.

use crate::frame_loop::{FrameHost, FrameLoop};
use crate::layers::text::TextLine;
use crate::layers::{breathing, flowing, text, BackgroundLayer, Layer};
use crate::particle::Particle;
use crate::surface::{Surface, SurfaceError, SurfaceResult};
use crate::tuning::Tuning;
use rand::prelude::*;
use smallvec::SmallVec;

/// Logical canvas size plus the device pixel ratio of the backing store.
/// Always replaced as a whole value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64, dpr: f64) -> Self {
        Self { width, height, dpr }
    }

    pub fn is_drawable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn same_size(&self, other: &Dimensions) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Backing store size in physical pixels, never below 1.
    pub fn backing_size(&self) -> (u32, u32) {
        let dpr = if self.dpr > 0.0 { self.dpr } else { 1.0 };
        (
            ((self.width * dpr).round() as u32).max(1),
            ((self.height * dpr).round() as u32).max(1),
        )
    }
}

#[derive(Debug, Default)]
pub struct FrameReport {
    pub time: f64,
    pub low_power: bool,
    pub drawn: SmallVec<[Layer; 5]>,
    pub failed: SmallVec<[(Layer, SurfaceError); 2]>,
    pub particles_updated: usize,
    pub flow_lines: usize,
    pub text_lines: Vec<TextLine>,
}

impl FrameReport {
    pub fn drew(&self, layer: Layer) -> bool {
        self.drawn.contains(&layer)
    }

    fn record<T>(&mut self, layer: Layer, result: SurfaceResult<T>) -> Option<T> {
        match result {
            Ok(v) => {
                self.drawn.push(layer);
                Some(v)
            }
            Err(e) => {
                log::warn!("[frame] {} layer skipped: {}", layer.name(), e);
                self.failed.push((layer, e));
                None
            }
        }
    }
}

#[derive(Debug)]
pub enum FrameOutcome {
    /// The callback arrived after the loop was stopped; nothing rescheduled.
    Stopped,
    /// Throttled or nothing drawable; the next frame is already scheduled.
    Skipped,
    Rendered(FrameReport),
}

pub struct Controller<Req> {
    tuning: Tuning,
    dims: Option<Dimensions>,
    active: bool,
    text: String,
    particles: Vec<Particle>,
    background: BackgroundLayer,
    frame_loop: FrameLoop<Req>,
    scheduled_frames: u64,
    rng: StdRng,
}

impl<Req> Controller<Req> {
    pub fn new(tuning: Tuning) -> Self {
        Self::with_rng(tuning, StdRng::from_entropy())
    }

    pub fn with_seed(tuning: Tuning, seed: u64) -> Self {
        Self::with_rng(tuning, StdRng::seed_from_u64(seed))
    }

    fn with_rng(tuning: Tuning, rng: StdRng) -> Self {
        Self {
            tuning,
            dims: None,
            active: false,
            text: String::new(),
            particles: Vec::new(),
            background: BackgroundLayer::new(),
            frame_loop: FrameLoop::Stopped,
            scheduled_frames: 0,
            rng,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn dimensions(&self) -> Option<Dimensions> {
        self.dims
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Takes effect on the next rendered frame; the loop and pool are untouched.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Replaces the dimensions if the logical size changed. Returns whether a
    /// commit happened (and therefore whether the backing store must be
    /// resized by the caller).
    pub fn commit_dimensions(&mut self, dims: Dimensions) -> bool {
        if let Some(current) = self.dims {
            if current.same_size(&dims) {
                return false;
            }
        }
        log::info!(
            "[controller] dimensions {:.0}x{:.0} @{:.2}x",
            dims.width,
            dims.height,
            dims.dpr
        );
        self.dims = Some(dims);
        if self.active {
            self.populate();
        }
        true
    }

    fn populate(&mut self) {
        let Some(dims) = self.dims.filter(Dimensions::is_drawable) else {
            log::debug!("[controller] no drawable size yet, particle pool unchanged");
            return;
        };
        let count = self.tuning.particle_count(dims.width);
        let rng = &mut self.rng;
        self.particles = (0..count)
            .map(|_| Particle::spawn(rng, dims.width, dims.height))
            .collect();
        // grouped by color so the draw pass sets each fill once
        self.particles.sort_by_key(|p| p.color);
    }

    /// Activation transition. Activating repopulates the pool and schedules
    /// the first frame; deactivating cancels the outstanding frame and leaves
    /// the pool as it is. Returns whether anything changed.
    ///
    /// Activating while already active and running is a no-op. Activating
    /// while active but stalled (the host refused a reschedule) only restarts
    /// the loop. If the host refuses the first frame the controller stays
    /// inactive.
    pub fn set_active<H>(&mut self, active: bool, host: &mut H) -> bool
    where
        H: FrameHost<Request = Req> + ?Sized,
    {
        if active && self.active {
            if self.frame_loop.is_running() {
                return false;
            }
            let restarted = self.frame_loop.start(host);
            if restarted {
                log::info!("[controller] stalled loop restarted");
            }
            return restarted;
        }
        if active == self.active {
            return false;
        }
        if active {
            if !self.frame_loop.start(host) {
                log::warn!("[controller] host refused to schedule a frame, staying inactive");
                return false;
            }
            self.active = true;
            self.populate();
            self.scheduled_frames = 0;
            log::info!("[controller] active, {} particles", self.particles.len());
        } else {
            self.active = false;
            self.frame_loop.stop(host);
            log::info!("[controller] inactive");
        }
        true
    }

    /// Frame callback entry point: reschedules, applies the frame-skip
    /// policy and renders when due.
    pub fn on_frame<S, H>(&mut self, surface: &mut S, host: &mut H, time: f64) -> FrameOutcome
    where
        S: Surface + ?Sized,
        H: FrameHost<Request = Req> + ?Sized,
    {
        if !self.active || !self.frame_loop.fired(host) {
            return FrameOutcome::Stopped;
        }
        let Some(dims) = self.dims.filter(Dimensions::is_drawable) else {
            return FrameOutcome::Skipped;
        };
        let low_power = self.tuning.is_low_power(dims.width, dims.height);
        let index = self.scheduled_frames;
        self.scheduled_frames += 1;
        if index % self.tuning.frame_skip(low_power) != 0 {
            return FrameOutcome::Skipped;
        }
        FrameOutcome::Rendered(self.render(surface, time))
    }

    /// Draws one full composite at `time` (ms). Every layer is guarded on
    /// its own so a failing layer only drops itself from this frame.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S, time: f64) -> FrameReport {
        let mut report = FrameReport {
            time,
            ..FrameReport::default()
        };
        let Some(dims) = self.dims.filter(Dimensions::is_drawable) else {
            return report;
        };
        let (w, h) = (dims.width, dims.height);
        report.low_power = self.tuning.is_low_power(w, h);

        surface.clear(w, h);

        let bg = self.background.draw(surface, w, h, time);
        report.record(Layer::Background, bg);

        report.record(Layer::BreathingCircle, breathing::draw(surface, w, h, time));

        if w > self.tuning.flow_min_width {
            let lines = flowing::draw(surface, &self.tuning, w, h, time);
            report.flow_lines = report.record(Layer::FlowingLines, lines).unwrap_or(0);
        }

        let ratio = self.tuning.update_ratio(report.low_power);
        let slice = (time.max(0.0).floor() as u64) % ratio;
        let mut first_error = None;
        let mut fill = None;
        for (i, p) in self.particles.iter_mut().enumerate() {
            if i as u64 % ratio == slice && p.update(time, w, h) {
                report.particles_updated += 1;
            }
            if let Err(e) = p.draw_batched(surface, &mut fill) {
                first_error.get_or_insert(e);
            }
        }
        report.record(Layer::Particles, first_error.map_or(Ok(()), Err));

        if !self.text.is_empty() {
            let lines = text::draw(surface, w, h, &self.text);
            report.text_lines = report.record(Layer::Text, lines).unwrap_or_default();
        }
        report
    }
}
