use affirm_core::{Paint, RadialGradient, Shadow, Surface, SurfaceError, SurfaceResult, TextAlign};
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
fn js_err(op: &'static str) -> impl Fn(JsValue) -> SurfaceError {
    move |e| SurfaceError::backend(op, format!("{:?}", e))
}

/// `Surface` backed by a browser 2D context.
pub struct Canvas2d {
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &web::CanvasRenderingContext2d {
        &self.ctx
    }

    fn gradient(&self, g: &RadialGradient) -> SurfaceResult<web::CanvasGradient> {
        let gradient = self
            .ctx
            .create_radial_gradient(g.x0, g.y0, g.r0.max(0.0), g.x1, g.y1, g.r1.max(0.0))
            .map_err(js_err("createRadialGradient"))?;
        for (offset, color) in &g.stops {
            gradient
                .add_color_stop(*offset as f32, color)
                .map_err(js_err("addColorStop"))?;
        }
        Ok(gradient)
    }
}

impl Surface for Canvas2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn set_fill(&mut self, paint: &Paint) -> SurfaceResult {
        match paint {
            Paint::Color(color) => self.ctx.set_fill_style_str(color),
            Paint::Radial(g) => {
                let gradient = self.gradient(g)?;
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64) -> SurfaceResult {
        // the browser throws IndexSizeError for these
        if !radius.is_finite() || radius < 0.0 {
            return Err(SurfaceError::Geometry {
                op: "arc",
                detail: format!("radius {radius}"),
            });
        }
        self.ctx
            .arc(x, y, radius, 0.0, TAU)
            .map_err(js_err("arc"))
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn global_alpha(&self) -> f64 {
        self.ctx.global_alpha()
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.ctx.set_text_align(align.as_css());
    }

    fn measure_text(&mut self, text: &str) -> SurfaceResult<f64> {
        self.ctx
            .measure_text(text)
            .map(|m| m.width())
            .map_err(js_err("measureText"))
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> SurfaceResult {
        self.ctx.fill_text(text, x, y).map_err(js_err("fillText"))
    }

    fn set_shadow(&mut self, shadow: &Shadow) {
        self.ctx.set_shadow_color(&shadow.color);
        self.ctx.set_shadow_blur(shadow.blur);
        self.ctx.set_shadow_offset_x(shadow.offset_x);
        self.ctx.set_shadow_offset_y(shadow.offset_y);
    }
}
