use crate::constants::*;
use crate::surface::{Paint, Surface, SurfaceResult};
use glam::DVec2;
use rand::Rng;
use std::borrow::Cow;

/// One drifting glow mote. Plain data: the pool is a `Vec<Particle>` and the
/// canvas size is passed in on every call rather than captured.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
    pub size: f64,
    pub max_size: f64,
    pub growth: f64,
    pub color: &'static str,
    pub alpha: f64,
    pub last_update: f64,
    /// Frame ticks between recomputations.
    pub update_interval: u32,
}

impl Particle {
    pub fn spawn<R: Rng>(rng: &mut R, width: f64, height: f64) -> Self {
        let size = rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX);
        let max_size = size + rng.gen_range(0.0..PARTICLE_SIZE_HEADROOM);
        let position = DVec2::new(
            wrap(rng.gen::<f64>() * width, width),
            wrap(rng.gen::<f64>() * height, height),
        );
        let velocity = DVec2::new(
            rng.gen_range(-PARTICLE_SPEED..PARTICLE_SPEED),
            rng.gen_range(-PARTICLE_SPEED..PARTICLE_SPEED),
        );
        Self {
            position,
            velocity,
            size,
            max_size,
            growth: rng.gen_range(0.0..PARTICLE_GROWTH_MAX),
            color: PALETTE[rng.gen_range(0..PALETTE.len())],
            alpha: rng.gen_range(PARTICLE_ALPHA_MIN..PARTICLE_ALPHA_MAX),
            last_update: 0.0,
            update_interval: rng.gen_range(PARTICLE_INTERVAL_MIN..=PARTICLE_INTERVAL_MAX),
        }
    }

    #[inline]
    pub fn is_due(&self, time: f64) -> bool {
        time - self.last_update >= self.update_interval as f64 * FRAME_BUDGET_MS
    }

    /// Advance one step if this particle's own interval has elapsed.
    /// Returns whether anything changed.
    pub fn update(&mut self, time: f64, width: f64, height: f64) -> bool {
        if !self.is_due(time) {
            return false;
        }
        self.last_update = time;
        self.position += self.velocity;
        self.size = (self.size + (time * PARTICLE_PULSE_RATE).sin() * self.growth)
            .clamp(PARTICLE_SIZE_MIN, self.max_size);
        self.position.x = wrap(self.position.x, width);
        self.position.y = wrap(self.position.y, height);
        true
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> SurfaceResult {
        self.draw_batched(surface, &mut None)
    }

    /// Like `draw`, but only sets the fill when `current_fill` (the color
    /// the previous particle left on the surface) differs.
    pub fn draw_batched<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        current_fill: &mut Option<&'static str>,
    ) -> SurfaceResult {
        if self.size < PARTICLE_MIN_VISIBLE {
            return Ok(());
        }
        if *current_fill != Some(self.color) {
            surface.set_fill(&Paint::Color(Cow::Borrowed(self.color)))?;
            *current_fill = Some(self.color);
        }
        let previous = surface.global_alpha();
        surface.set_global_alpha(self.alpha);
        surface.begin_path();
        let drawn = surface.arc(self.position.x, self.position.y, self.size);
        if drawn.is_ok() {
            surface.fill();
        }
        surface.set_global_alpha(previous);
        drawn
    }
}

/// Wrap `v` into `[0, extent)`.
#[inline]
pub fn wrap(v: f64, extent: f64) -> f64 {
    if extent.is_nan() || extent <= 0.0 {
        return 0.0;
    }
    let w = v.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if w >= extent {
        0.0
    } else {
        w
    }
}
