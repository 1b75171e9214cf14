/// Host presentation scheduler (`requestAnimationFrame` on the web).
pub trait FrameHost {
    type Request;

    /// Ask for one callback before the next repaint. `None` if the host
    /// cannot schedule (no window).
    fn request_frame(&mut self) -> Option<Self::Request>;
    fn cancel_frame(&mut self, request: Self::Request);
}

/// Explicit two-state frame loop. `Running` holds exactly one live request.
#[derive(Debug)]
pub enum FrameLoop<R> {
    Stopped,
    Running { pending: R },
}

impl<R> Default for FrameLoop<R> {
    fn default() -> Self {
        FrameLoop::Stopped
    }
}

impl<R> FrameLoop<R> {
    pub fn is_running(&self) -> bool {
        matches!(self, FrameLoop::Running { .. })
    }

    pub fn pending(&self) -> Option<&R> {
        match self {
            FrameLoop::Running { pending } => Some(pending),
            FrameLoop::Stopped => None,
        }
    }

    /// Idempotent: starting a running loop keeps its request.
    pub fn start<H: FrameHost<Request = R> + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.is_running() {
            return true;
        }
        match host.request_frame() {
            Some(pending) => {
                *self = FrameLoop::Running { pending };
                true
            }
            None => false,
        }
    }

    /// Cancels the outstanding request synchronously.
    pub fn stop<H: FrameHost<Request = R> + ?Sized>(&mut self, host: &mut H) {
        if let FrameLoop::Running { pending } = std::mem::take(self) {
            host.cancel_frame(pending);
        }
    }

    /// The pending request fired. Consumes it and schedules the next one.
    /// Returns `false` when the loop is stopped (a stale callback), in
    /// which case the caller must not draw.
    pub fn fired<H: FrameHost<Request = R> + ?Sized>(&mut self, host: &mut H) -> bool {
        if !self.is_running() {
            return false;
        }
        *self = match host.request_frame() {
            Some(pending) => FrameLoop::Running { pending },
            None => {
                log::warn!("[frame] host refused to reschedule, loop stalled");
                FrameLoop::Stopped
            }
        };
        true
    }
}
