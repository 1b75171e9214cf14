use crate::constants::BACKGROUND_GLOW_MIN_SIDE;
use crate::surface::{Paint, RadialGradient, Surface, SurfaceResult};
use fnv::FnvHashMap;

// (rate rad/ms, phase) pairs for the four independent drifts
const CENTER_X_WAVE: (f64, f64) = (0.00021, 0.0);
const CENTER_Y_WAVE: (f64, f64) = (0.00013, 1.3);
const HUE_START_WAVE: (f64, f64) = (0.00009, 0.0);
const HUE_END_WAVE: (f64, f64) = (0.00011, 2.1);

const HUE_START_BASE: f64 = 220.0;
const HUE_END_BASE: f64 = 265.0;
const HUE_SWING: f64 = 25.0;

/// Hue-shifting radial backdrop. The only state is a cache of formatted HSL
/// strings keyed by integer hue, the draw itself depends on `(w, h, time)`.
#[derive(Default)]
pub struct BackgroundLayer {
    colors: FnvHashMap<(u16, bool), String>,
}

#[inline]
fn wave(time: f64, (rate, phase): (f64, f64)) -> f64 {
    (time * rate + phase).sin()
}

/// Drifting gradient center in logical pixels.
pub fn gradient_center(width: f64, height: f64, time: f64) -> (f64, f64) {
    (
        width * (0.5 + 0.2 * wave(time, CENTER_X_WAVE)),
        height * (0.5 + 0.15 * wave(time, CENTER_Y_WAVE)),
    )
}

/// Start/end hues in degrees, `[0, 360)`.
pub fn hues(time: f64) -> (f64, f64) {
    let start = HUE_START_BASE + HUE_SWING * wave(time, HUE_START_WAVE);
    let end = HUE_END_BASE + HUE_SWING * wave(time, HUE_END_WAVE);
    (start.rem_euclid(360.0), end.rem_euclid(360.0))
}

impl BackgroundLayer {
    pub fn new() -> Self {
        Self::default()
    }

    fn hsl(&mut self, hue: f64, inner: bool) -> String {
        let key = ((hue.round() as u16) % 360, inner);
        self.colors
            .entry(key)
            .or_insert_with(|| {
                if inner {
                    format!("hsl({}, 55%, 32%)", key.0)
                } else {
                    format!("hsl({}, 50%, 14%)", key.0)
                }
            })
            .clone()
    }

    pub fn cached_colors(&self) -> usize {
        self.colors.len()
    }

    pub fn draw<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        width: f64,
        height: f64,
        time: f64,
    ) -> SurfaceResult {
        let (cx, cy) = gradient_center(width, height, time);
        let (hue_start, hue_end) = hues(time);
        let gradient = RadialGradient::centered(cx, cy, width.max(height))
            .stop(0.0, self.hsl(hue_start, true))
            .stop(1.0, self.hsl(hue_end, false));
        surface.set_fill(&Paint::Radial(gradient))?;
        surface.fill_rect(0.0, 0.0, width, height);

        if width > BACKGROUND_GLOW_MIN_SIDE && height > BACKGROUND_GLOW_MIN_SIDE {
            let (gx, gy) = (width * 0.5, height * 0.3);
            let glow = RadialGradient::centered(gx, gy, width.min(height) * 0.6)
                .stop(0.0, "rgba(255, 255, 255, 0.08)")
                .stop(1.0, "rgba(255, 255, 255, 0)");
            surface.set_fill(&Paint::Radial(glow))?;
            surface.fill_rect(0.0, 0.0, width, height);
        }
        Ok(())
    }
}
