//! Drawing backend abstraction.
//!
//! The layers only need a small slice of the 2D canvas API. Keeping it behind
//! a trait lets the web front-end forward to `CanvasRenderingContext2d` while
//! host tests record the calls instead.

use smallvec::SmallVec;
use std::borrow::Cow;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurfaceError {
    #[error("{op} failed: {message}")]
    Backend { op: &'static str, message: String },
    #[error("invalid geometry for {op}: {detail}")]
    Geometry { op: &'static str, detail: String },
}

impl SurfaceError {
    pub fn backend(op: &'static str, message: impl Into<String>) -> Self {
        Self::Backend {
            op,
            message: message.into(),
        }
    }
}

pub type SurfaceResult<T = ()> = Result<T, SurfaceError>;

/// Two-circle radial gradient, same parameters as `createRadialGradient`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub x0: f64,
    pub y0: f64,
    pub r0: f64,
    pub x1: f64,
    pub y1: f64,
    pub r1: f64,
    pub stops: SmallVec<[(f64, String); 4]>,
}

impl RadialGradient {
    /// Concentric gradient from the center point out to `radius`.
    pub fn centered(x: f64, y: f64, radius: f64) -> Self {
        Self {
            x0: x,
            y0: y,
            r0: 0.0,
            x1: x,
            y1: y,
            r1: radius,
            stops: SmallVec::new(),
        }
    }

    pub fn stop(mut self, offset: f64, color: impl Into<String>) -> Self {
        self.stops.push((offset, color.into()));
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Color(Cow<'static, str>),
    Radial(RadialGradient),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Shadow {
    pub color: String,
    pub blur: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Shadow {
    pub fn none() -> Self {
        Self {
            color: "rgba(0, 0, 0, 0)".to_string(),
            blur: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        }
    }
}

/// Subset of the 2D context used by the layers. Coordinates are logical
/// (CSS) pixels; the device pixel ratio is applied by the backend transform.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);

    fn set_fill(&mut self, paint: &Paint) -> SurfaceResult;
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn set_stroke_color(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64) -> SurfaceResult;
    fn fill(&mut self);
    fn stroke(&mut self);

    fn global_alpha(&self) -> f64;
    fn set_global_alpha(&mut self, alpha: f64);

    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn measure_text(&mut self, text: &str) -> SurfaceResult<f64>;
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> SurfaceResult;

    fn set_shadow(&mut self, shadow: &Shadow);
}
