/// One-shot host timer (`setTimeout` on the web).
pub trait TimerHost {
    type Timer;

    fn arm(&mut self, delay_ms: u32) -> Option<Self::Timer>;
    fn disarm(&mut self, timer: Self::Timer);
}

/// Single-slot debouncer: arming again cancels the previous timer, so at
/// most one commit is ever pending.
#[derive(Debug)]
pub struct Debouncer<T, K> {
    delay_ms: u32,
    slot: Option<(T, K)>,
}

impl<T, K> Debouncer<T, K> {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            slot: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }

    pub fn trigger<H: TimerHost<Timer = K> + ?Sized>(&mut self, host: &mut H, value: T) {
        self.cancel(host);
        if let Some(timer) = host.arm(self.delay_ms) {
            self.slot = Some((value, timer));
        }
    }

    pub fn cancel<H: TimerHost<Timer = K> + ?Sized>(&mut self, host: &mut H) {
        if let Some((_, timer)) = self.slot.take() {
            host.disarm(timer);
        }
    }

    /// The armed timer elapsed; yields the value to commit.
    pub fn fire(&mut self) -> Option<T> {
        self.slot.take().map(|(value, _)| value)
    }
}
