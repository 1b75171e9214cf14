use crate::constants::*;
use crate::surface::{Surface, SurfaceResult};
use crate::tuning::Tuning;
use smallvec::SmallVec;
use std::f64::consts::PI;

pub type LinePoints = SmallVec<[(f64, f64); FLOW_MAX_SEGMENTS + 1]>;

/// Vertices of line `j`, `segments + 1` points spanning the full width.
pub fn line_points(width: f64, height: f64, time: f64, j: usize, segments: usize) -> LinePoints {
    let segments = segments.max(1);
    let jf = j as f64;
    let baseline = height * FLOW_BASELINE_FRACTION + jf * FLOW_SPACING - FLOW_SPACING;
    let amplitude = 18.0 + 8.0 * (time * 0.0004 + jf * 0.9).sin();
    (0..=segments)
        .map(|i| {
            let progress = i as f64 / segments as f64;
            let intensity = (progress * PI * 2.0 + time * 0.0009 + jf).sin()
                * (progress * PI * 3.0 - time * 0.0006 + jf * 1.7).sin();
            (progress * width, baseline + intensity * amplitude)
        })
        .collect()
}

/// Draws the lines and returns how many were stroked.
pub fn draw<S: Surface + ?Sized>(
    surface: &mut S,
    tuning: &Tuning,
    width: f64,
    height: f64,
    time: f64,
) -> SurfaceResult<usize> {
    let lines = tuning.flow_line_count(width);
    let segments = tuning.flow_segment_count(width);
    surface.set_line_width(FLOW_LINE_WIDTH);
    for j in 0..lines {
        let points = line_points(width, height, time, j, segments);
        let alpha = 0.1 + j as f64 * 0.1;
        surface.set_stroke_color(&format!("rgba(255, 255, 255, {alpha:.2})"));
        surface.begin_path();
        let mut iter = points.iter();
        if let Some(&(x, y)) = iter.next() {
            surface.move_to(x, y);
        }
        for &(x, y) in iter {
            surface.line_to(x, y);
        }
        surface.stroke();
    }
    Ok(lines)
}
