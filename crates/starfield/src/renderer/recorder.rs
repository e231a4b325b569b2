use glam::Vec2;

use super::color::Color;
use super::traits::{BlendMode, Canvas2d, ColorStop, Paint};

/// Owned copy of a [`Paint`].
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(Color),
    Linear { from: Vec2, to: Vec2, stops: Vec<ColorStop> },
    Radial { center: Vec2, radius: f32, stops: Vec<ColorStop> },
}

impl From<&Paint<'_>> for Fill {
    fn from(paint: &Paint<'_>) -> Self {
        match *paint {
            Paint::Solid(color) => Fill::Solid(color),
            Paint::Linear { from, to, stops } => Fill::Linear { from, to, stops: stops.to_vec() },
            Paint::Radial { center, radius, stops } => {
                Fill::Radial { center, radius, stops: stops.to_vec() }
            }
        }
    }
}

/// A single recorded canvas call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ResizeBackingStore { width: u32, height: u32, css_width: f32, css_height: f32 },
    SetScale(f32),
    SetBlendMode(BlendMode),
    FillRect { origin: Vec2, size: Vec2, fill: Fill },
    FillCircle { center: Vec2, radius: f32, fill: Fill },
    StrokeLine { from: Vec2, to: Vec2, width: f32, color: Color },
    Save,
    Restore,
}

/// Canvas that records every call instead of rasterizing.
/// Tracks the effective blend mode across save/restore like a real context.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    blend: BlendMode,
    stack: Vec<BlendMode>,
    backing: (u32, u32),
    scale: f32,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self { scale: 1.0, ..Self::default() }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Blend mode currently in effect.
    pub fn blend_mode(&self) -> BlendMode {
        self.blend
    }

    pub fn backing_size(&self) -> (u32, u32) {
        self.backing
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Number of save() calls not yet matched by restore().
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }
}

impl Canvas2d for RecordingCanvas {
    fn backend(&self) -> &'static str {
        "recording"
    }

    fn resize_backing_store(&mut self, width: u32, height: u32, css_width: f32, css_height: f32) {
        self.backing = (width, height);
        self.commands.push(DrawCommand::ResizeBackingStore { width, height, css_width, css_height });
    }

    fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
        self.commands.push(DrawCommand::SetScale(scale));
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend = mode;
        self.commands.push(DrawCommand::SetBlendMode(mode));
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint<'_>) {
        self.commands.push(DrawCommand::FillRect { origin, size, fill: paint.into() });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint<'_>) {
        self.commands.push(DrawCommand::FillCircle { center, radius, fill: paint.into() });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeLine { from, to, width, color });
    }

    fn save(&mut self) {
        self.stack.push(self.blend);
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        if let Some(mode) = self.stack.pop() {
            self.blend = mode;
        }
        self.commands.push(DrawCommand::Restore);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Vec2::ZERO, Vec2::new(10.0, 10.0), &Paint::Solid(Color::white(1.0)));
        canvas.stroke_line(Vec2::ZERO, Vec2::ONE, 2.0, Color::white(0.5));
        assert_eq!(canvas.commands().len(), 2);
        assert!(matches!(canvas.commands()[0], DrawCommand::FillRect { .. }));
        assert!(matches!(canvas.commands()[1], DrawCommand::StrokeLine { width, .. } if width == 2.0));
    }

    #[test]
    fn save_restore_tracks_blend() {
        let mut canvas = RecordingCanvas::new();
        canvas.save();
        canvas.set_blend_mode(BlendMode::Lighter);
        assert_eq!(canvas.blend_mode(), BlendMode::Lighter);
        canvas.restore();
        assert_eq!(canvas.blend_mode(), BlendMode::SourceOver);
        assert_eq!(canvas.save_depth(), 0);
    }

    #[test]
    fn paint_stops_are_copied() {
        let stops = [ColorStop::new(0.0, Color::white(1.0)), ColorStop::new(1.0, Color::TRANSPARENT)];
        let paint = Paint::Radial { center: Vec2::ZERO, radius: 4.0, stops: &stops };
        let fill = Fill::from(&paint);
        assert_eq!(fill, Fill::Radial { center: Vec2::ZERO, radius: 4.0, stops: stops.to_vec() });
    }
}
