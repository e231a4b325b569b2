//! Drawing surface contract.
//!
//! The engine draws through [`Canvas2d`], an immediate-mode 2D API shaped after
//! the browser's `CanvasRenderingContext2d`. The web bridge implements it over a
//! real context; [`RecordingCanvas`](super::recorder::RecordingCanvas) records
//! calls for tests.

use glam::Vec2;

use super::color::Color;

/// How new pixels combine with what's already drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Standard alpha compositing.
    #[default]
    SourceOver,
    /// Additive: overlapping shapes sum brightness instead of occluding.
    Lighter,
}

impl BlendMode {
    /// Value for `globalCompositeOperation`.
    pub fn composite_operation(self) -> &'static str {
        match self {
            BlendMode::SourceOver => "source-over",
            BlendMode::Lighter => "lighter",
        }
    }
}

/// One colour stop of a gradient, offset in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Color,
}

impl ColorStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Fill style for a shape. Gradient stops are borrowed so a frame can build
/// them on the stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint<'a> {
    Solid(Color),
    /// Linear gradient from `from` to `to`.
    Linear { from: Vec2, to: Vec2, stops: &'a [ColorStop] },
    /// Radial gradient from a zero-radius center out to `radius`.
    Radial { center: Vec2, radius: f32, stops: &'a [ColorStop] },
}

/// Immediate-mode 2D drawing surface.
pub trait Canvas2d {
    /// Backend identifier (e.g. "canvas2d", "recording").
    fn backend(&self) -> &'static str;

    /// Resize the backing store to `width` x `height` device pixels while the
    /// visible size stays `css_width` x `css_height` logical units.
    fn resize_backing_store(&mut self, width: u32, height: u32, css_width: f32, css_height: f32);

    /// Replace the current transform with a uniform scale, so drawing code
    /// can work in logical units.
    fn set_scale(&mut self, scale: f32);

    fn set_blend_mode(&mut self, mode: BlendMode);

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint<'_>);

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint<'_>);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);

    /// Push drawing state (blend mode, styles).
    fn save(&mut self);

    /// Pop drawing state.
    fn restore(&mut self);
}
