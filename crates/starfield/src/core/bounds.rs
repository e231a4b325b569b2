use glam::Vec2;

/// Smallest logical width/height the scene will accept.
pub const MIN_LOGICAL_SIZE: f32 = 300.0;

/// Resolution the base star count is tuned for.
pub const REFERENCE_WIDTH: f32 = 1920.0;
pub const REFERENCE_HEIGHT: f32 = 1080.0;

/// Logical viewport size plus device pixel ratio.
/// All entity positions live in logical (unscaled) units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneBounds {
    pub width: f32,
    pub height: f32,
    pub dpr: f32,
}

impl SceneBounds {
    /// Degenerate input (zero, negative, NaN) is clamped rather than rejected.
    pub fn new(width: f32, height: f32, dpr: f32) -> Self {
        Self {
            width: sanitize(width, MIN_LOGICAL_SIZE),
            height: sanitize(height, MIN_LOGICAL_SIZE),
            dpr: sanitize(dpr, 1.0),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Pixel scale applied to the drawing context.
    pub fn pixel_scale(&self, render_scale: f32) -> f32 {
        self.dpr * render_scale
    }

    /// Backing store size in device pixels.
    pub fn backing_size(&self, render_scale: f32) -> (u32, u32) {
        let scale = self.pixel_scale(render_scale);
        (
            (self.width * scale).floor() as u32,
            (self.height * scale).floor() as u32,
        )
    }
}

impl Default for SceneBounds {
    fn default() -> Self {
        Self::new(MIN_LOGICAL_SIZE, MIN_LOGICAL_SIZE, 1.0)
    }
}

fn sanitize(value: f32, min: f32) -> f32 {
    if value.is_finite() {
        value.max(min)
    } else {
        min
    }
}
