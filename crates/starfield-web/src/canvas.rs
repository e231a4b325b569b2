use std::f64::consts::TAU;

use glam::Vec2;
use starfield::renderer::{BlendMode, Canvas2d, Color, ColorStop, Paint};
use starfield::{StarfieldError, StarfieldResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

/// `Canvas2d` over a browser `<canvas>` element and its 2D context.
pub struct WebCanvas {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl WebCanvas {
    pub fn new(canvas: HtmlCanvasElement) -> StarfieldResult<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| StarfieldError::Context(format!("{:?}", e)))?
            .ok_or_else(|| StarfieldError::Context("getContext('2d') returned null".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| StarfieldError::Context("not a CanvasRenderingContext2d".into()))?;
        Ok(Self { canvas, ctx })
    }

    pub fn element(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    #[allow(deprecated)]
    fn set_fill(&self, paint: &Paint<'_>) -> Result<(), JsValue> {
        match *paint {
            Paint::Solid(color) => self.ctx.set_fill_style(&css(color)),
            Paint::Linear { from, to, stops } => {
                let gradient = self.ctx.create_linear_gradient(
                    from.x as f64,
                    from.y as f64,
                    to.x as f64,
                    to.y as f64,
                );
                add_stops(&gradient, stops)?;
                self.ctx.set_fill_style(&gradient);
            }
            Paint::Radial { center, radius, stops } => {
                let (x, y) = (center.x as f64, center.y as f64);
                let gradient = self.ctx.create_radial_gradient(x, y, 0.0, x, y, radius as f64)?;
                add_stops(&gradient, stops)?;
                self.ctx.set_fill_style(&gradient);
            }
        }
        Ok(())
    }
}

impl Canvas2d for WebCanvas {
    fn backend(&self) -> &'static str {
        "canvas2d"
    }

    fn resize_backing_store(&mut self, width: u32, height: u32, css_width: f32, css_height: f32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        let style = self.canvas.style();
        check(style.set_property("width", &format!("{}px", css_width)), "style.width");
        check(style.set_property("height", &format!("{}px", css_height)), "style.height");
    }

    fn set_scale(&mut self, scale: f32) {
        let s = scale as f64;
        check(self.ctx.set_transform(s, 0.0, 0.0, s, 0.0, 0.0), "setTransform");
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        check(
            self.ctx.set_global_composite_operation(mode.composite_operation()),
            "globalCompositeOperation",
        );
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint<'_>) {
        check(self.set_fill(paint), "fillStyle");
        self.ctx.fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint<'_>) {
        check(self.set_fill(paint), "fillStyle");
        self.ctx.begin_path();
        check(
            self.ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU),
            "arc",
        );
        self.ctx.fill();
    }

    #[allow(deprecated)]
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.ctx.set_stroke_style(&css(color));
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }
}

fn css(color: Color) -> JsValue {
    JsValue::from_str(&color.to_css())
}

fn add_stops(gradient: &CanvasGradient, stops: &[ColorStop]) -> Result<(), JsValue> {
    for stop in stops {
        gradient.add_color_stop(stop.offset, &stop.color.to_css())?;
    }
    Ok(())
}

/// Canvas calls only fail on bad arguments; a failed call skips that shape.
fn check(result: Result<(), JsValue>, op: &str) {
    if let Err(err) = result {
        log::debug!("canvas {} failed: {:?}", op, err);
    }
}
