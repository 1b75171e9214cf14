// Host-side fakes for the platform seams.

#![allow(dead_code)]

use affirm_core::*;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Clear,
    Fill(Paint),
    FillRect,
    Stroke(String),
    LineWidth(f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Arc(f64, f64, f64),
    FillPath,
    StrokePath,
    Alpha(f64),
    Font(String),
    Align(TextAlign),
    Text(String, f64, f64),
    Shadow(Shadow),
}

/// Records every call. Text is measured at a fixed advance per char.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
    pub alpha: f64,
    pub char_width: f64,
    pub fail_arc_above: Option<f64>,
    pub fail_text: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            alpha: 1.0,
            char_width: 10.0,
            ..Default::default()
        }
    }

    pub fn texts(&self) -> Vec<(String, f64, f64)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Text(s, x, y) => Some((s.clone(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, _width: f64, _height: f64) {
        self.calls.push(Call::Clear);
    }
    fn set_fill(&mut self, paint: &Paint) -> SurfaceResult {
        self.calls.push(Call::Fill(paint.clone()));
        Ok(())
    }
    fn fill_rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) {
        self.calls.push(Call::FillRect);
    }
    fn set_stroke_color(&mut self, color: &str) {
        self.calls.push(Call::Stroke(color.to_string()));
    }
    fn set_line_width(&mut self, width: f64) {
        self.calls.push(Call::LineWidth(width));
    }
    fn begin_path(&mut self) {
        self.calls.push(Call::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(Call::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(Call::LineTo(x, y));
    }
    fn arc(&mut self, x: f64, y: f64, radius: f64) -> SurfaceResult {
        if let Some(limit) = self.fail_arc_above {
            if radius > limit {
                return Err(SurfaceError::backend("arc", "forced failure"));
            }
        }
        self.calls.push(Call::Arc(x, y, radius));
        Ok(())
    }
    fn fill(&mut self) {
        self.calls.push(Call::FillPath);
    }
    fn stroke(&mut self) {
        self.calls.push(Call::StrokePath);
    }
    fn global_alpha(&self) -> f64 {
        self.alpha
    }
    fn set_global_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
        self.calls.push(Call::Alpha(alpha));
    }
    fn set_font(&mut self, font: &str) {
        self.calls.push(Call::Font(font.to_string()));
    }
    fn set_text_align(&mut self, align: TextAlign) {
        self.calls.push(Call::Align(align));
    }
    fn measure_text(&mut self, text: &str) -> SurfaceResult<f64> {
        Ok(text.chars().count() as f64 * self.char_width)
    }
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> SurfaceResult {
        if self.fail_text {
            return Err(SurfaceError::backend("fillText", "forced failure"));
        }
        self.calls.push(Call::Text(text.to_string(), x, y));
        Ok(())
    }
    fn set_shadow(&mut self, shadow: &Shadow) {
        self.calls.push(Call::Shadow(shadow.clone()));
    }
}

/// Frame scheduler that tracks which request ids are still outstanding.
#[derive(Default)]
pub struct FakeFrames {
    next_id: u32,
    pub outstanding: Vec<u32>,
    pub cancelled: Vec<u32>,
}

impl FakeFrames {
    /// Simulates the host invoking the oldest outstanding callback.
    pub fn take_due(&mut self) -> Option<u32> {
        if self.outstanding.is_empty() {
            None
        } else {
            Some(self.outstanding.remove(0))
        }
    }
}

impl FrameHost for FakeFrames {
    type Request = u32;

    fn request_frame(&mut self) -> Option<u32> {
        self.next_id += 1;
        self.outstanding.push(self.next_id);
        Some(self.next_id)
    }

    fn cancel_frame(&mut self, request: u32) {
        self.outstanding.retain(|&id| id != request);
        self.cancelled.push(request);
    }
}

/// Timers on a manual clock.
#[derive(Default)]
pub struct FakeTimers {
    pub now_ms: u64,
    next_id: u32,
    pub armed: Vec<(u32, u64)>,
}

impl FakeTimers {
    /// Moves the clock forward and returns how many timers elapsed.
    pub fn advance_to(&mut self, now_ms: u64) -> usize {
        self.now_ms = now_ms;
        let before = self.armed.len();
        self.armed.retain(|&(_, due)| due > now_ms);
        before - self.armed.len()
    }
}

impl TimerHost for FakeTimers {
    type Timer = u32;

    fn arm(&mut self, delay_ms: u32) -> Option<u32> {
        self.next_id += 1;
        self.armed.push((self.next_id, self.now_ms + delay_ms as u64));
        Some(self.next_id)
    }

    fn disarm(&mut self, timer: u32) {
        self.armed.retain(|&(id, _)| id != timer);
    }
}

/// Drives the controller through the host's frame callbacks until one is
/// rendered, advancing time by one frame budget per callback.
pub fn run_until_rendered(
    controller: &mut Controller<u32>,
    surface: &mut RecordingSurface,
    frames: &mut FakeFrames,
    mut time: f64,
) -> Option<FrameReport> {
    for _ in 0..16 {
        frames.take_due()?;
        match controller.on_frame(surface, frames, time) {
            FrameOutcome::Rendered(report) => return Some(report),
            FrameOutcome::Skipped => time += FRAME_BUDGET_MS,
            FrameOutcome::Stopped => return None,
        }
    }
    None
}

/// Frame scheduler that refuses requests while `refuse` is set.
#[derive(Default)]
pub struct RefusingFrames {
    pub refuse: bool,
    pub inner: FakeFrames,
}

impl FrameHost for RefusingFrames {
    type Request = u32;

    fn request_frame(&mut self) -> Option<u32> {
        if self.refuse {
            None
        } else {
            self.inner.request_frame()
        }
    }

    fn cancel_frame(&mut self, request: u32) {
        self.inner.cancel_frame(request);
    }
}

/// Viewport that counts listener attachments and records backing resizes.
#[derive(Default)]
pub struct FakeViewport {
    pub attached: bool,
    pub attach_count: usize,
    pub detach_count: usize,
    pub unavailable: bool,
    pub backing: Vec<Dimensions>,
}

impl ViewportHost for FakeViewport {
    fn attach_resize(&mut self) -> bool {
        if self.unavailable {
            return false;
        }
        self.attached = true;
        self.attach_count += 1;
        true
    }

    fn detach_resize(&mut self) {
        self.attached = false;
        self.detach_count += 1;
    }

    fn resize_backing(&mut self, dims: Dimensions) {
        self.backing.push(dims);
    }
}

pub type FakeSession = Session<FakeFrames, FakeTimers, FakeViewport>;

pub fn fake_session(seed: u64) -> FakeSession {
    let controller = Controller::with_seed(Tuning::default(), seed);
    Session::with_controller(
        controller,
        FakeFrames::default(),
        FakeTimers::default(),
        FakeViewport::default(),
    )
}

/// Advances the session's clock and delivers every timer that elapsed.
pub fn advance_session(session: &mut FakeSession, now_ms: u64) {
    if session.timers_mut().advance_to(now_ms) > 0 {
        session.on_timer();
    }
}
