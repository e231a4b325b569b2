use glam::Vec2;

use crate::core::bounds::SceneBounds;

/// Pointer with single-pole smoothing.
///
/// Input writes `target` immediately; `position` eases toward it once per update,
/// so parallax motion is independent of how often input events arrive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub position: Vec2,
    pub target: Vec2,
}

impl Pointer {
    /// Set the target. Non-finite coordinates are ignored; returns whether it was applied.
    pub fn set_target(&mut self, x: f32, y: f32) -> bool {
        if !(x.is_finite() && y.is_finite()) {
            return false;
        }
        self.target = Vec2::new(x, y);
        true
    }

    /// Move `factor` of the remaining distance toward the target.
    pub fn ease(&mut self, factor: f32) {
        self.position += (self.target - self.position) * factor;
    }

    /// Displacement of the smoothed position from `center`.
    pub fn offset_from(&self, center: Vec2) -> Vec2 {
        self.position - center
    }
}

/// Map device tilt to a screen position.
///
/// gamma (left/right, -90..90) spans the width, beta (front/back, -180..180)
/// spans the height. Returns `None` when either angle is missing.
pub fn orientation_to_screen(
    gamma: Option<f32>,
    beta: Option<f32>,
    bounds: &SceneBounds,
) -> Option<Vec2> {
    let gamma = gamma.filter(|g| g.is_finite())?;
    let beta = beta.filter(|b| b.is_finite())?;
    Some(Vec2::new(
        (gamma + 90.0) / 180.0 * bounds.width,
        (beta + 180.0) / 360.0 * bounds.height,
    ))
}
