use crate::constants::*;
use crate::surface::{Paint, RadialGradient, Surface, SurfaceResult};

/// Fill radius at `time`. `sin · sin²` lingers near full expansion, which
/// reads as a held breath instead of a symmetric pulse.
pub fn radius(width: f64, height: f64, time: f64) -> f64 {
    let side = width.min(height);
    let base = side * BREATH_BASE_FRACTION;
    let amplitude = side * BREATH_AMPLITUDE_FRACTION;
    let s = (time * BREATH_RATE).sin();
    base + amplitude * s * s * s
}

pub fn draw<S: Surface + ?Sized>(
    surface: &mut S,
    width: f64,
    height: f64,
    time: f64,
) -> SurfaceResult {
    let r = radius(width, height, time);
    if r <= 0.0 {
        return Ok(());
    }
    let (cx, cy) = (width * BREATH_CENTER[0], height * BREATH_CENTER[1]);

    let gradient = RadialGradient::centered(cx, cy, r)
        .stop(0.0, "rgba(255, 255, 255, 0.22)")
        .stop(0.6, "rgba(200, 220, 255, 0.10)")
        .stop(1.0, "rgba(200, 220, 255, 0)");
    surface.set_fill(&Paint::Radial(gradient))?;
    surface.begin_path();
    surface.arc(cx, cy, r)?;
    surface.fill();

    surface.set_stroke_color("rgba(255, 255, 255, 0.12)");
    surface.set_line_width(BREATH_RING_WIDTH);
    surface.begin_path();
    surface.arc(cx, cy, r + BREATH_RING_GAP)?;
    surface.stroke();
    Ok(())
}
