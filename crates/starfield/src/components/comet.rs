use glam::Vec2;

use crate::core::bounds::SceneBounds;
use crate::core::rng::Rng;

/// Which side of the viewport a comet enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CometEdge {
    Left,
    Right,
}

/// Transient streak crossing the viewport.
/// Alpha and trail length decay exponentially and never grow back.
#[derive(Debug, Clone)]
pub struct Comet {
    pub position: Vec2,
    /// Units per second.
    pub velocity: Vec2,
    pub hue: f32,
    pub alpha: f32,
    pub length: f32,
}

impl Comet {
    pub const ALPHA_DECAY: f32 = 0.997;
    pub const LENGTH_DECAY: f32 = 0.995;
    /// Comets fainter than this are removed.
    pub const FADE_FLOOR: f32 = 0.02;
    /// Horizontal distance past the viewport before removal.
    pub const EXIT_MARGIN: f32 = 200.0;
    /// Half-width of the launch cone around horizontal, in degrees.
    const LAUNCH_CONE_DEG: f32 = 20.0;

    pub fn new(position: Vec2, velocity: Vec2, hue: f32, length: f32) -> Self {
        Comet { position, velocity, hue, alpha: 1.0, length }
    }

    /// Launch a comet from a random side edge, travelling mostly horizontally.
    pub fn spawn(rng: &mut Rng, bounds: &SceneBounds) -> Self {
        let edge = if rng.chance(0.5) { CometEdge::Left } else { CometEdge::Right };
        let y = rng.range(0.0, bounds.height);
        let cone = rng.range(-Self::LAUNCH_CONE_DEG, Self::LAUNCH_CONE_DEG);
        let (x, heading) = match edge {
            CometEdge::Left => (0.0, cone),
            CometEdge::Right => (bounds.width, 180.0 + cone),
        };
        let speed = rng.range(1500.0, 3000.0);
        let velocity = Vec2::from_angle(heading.to_radians()) * speed;
        let hue = rng.range(250.0, 300.0);
        let length = rng.range(80.0, 150.0);
        Comet::new(Vec2::new(x, y), velocity, hue, length)
    }

    pub fn edge(&self) -> CometEdge {
        if self.velocity.x >= 0.0 {
            CometEdge::Left
        } else {
            CometEdge::Right
        }
    }

    /// Advance and decay. Returns false once the comet should be removed.
    pub fn tick(&mut self, dt: f32, bounds: &SceneBounds) -> bool {
        self.position += self.velocity * dt;
        self.length *= Self::LENGTH_DECAY;
        self.alpha *= Self::ALPHA_DECAY;
        self.is_alive(bounds)
    }

    pub fn is_alive(&self, bounds: &SceneBounds) -> bool {
        let x = self.position.x;
        x >= -Self::EXIT_MARGIN
            && x <= bounds.width + Self::EXIT_MARGIN
            && self.alpha >= Self::FADE_FLOOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_starts_on_side_edge_heading_inward() {
        let mut rng = Rng::new(11);
        let bounds = SceneBounds::new(1280.0, 720.0, 1.0);
        let mut seen_left = false;
        let mut seen_right = false;
        for _ in 0..200 {
            let c = Comet::spawn(&mut rng, &bounds);
            assert_eq!(c.alpha, 1.0);
            assert!(c.length >= 80.0 && c.length <= 150.0);
            assert!(c.hue >= 250.0 && c.hue <= 300.0);
            assert!(c.position.y >= 0.0 && c.position.y <= bounds.height);
            let speed = c.velocity.length();
            assert!(speed >= 1499.0 && speed <= 3001.0, "speed {}", speed);
            // Mostly horizontal: within 20 degrees of the x axis
            assert!(c.velocity.y.abs() <= speed * 20f32.to_radians().sin() + 1e-3);
            match c.edge() {
                CometEdge::Left => {
                    seen_left = true;
                    assert_eq!(c.position.x, 0.0);
                }
                CometEdge::Right => {
                    seen_right = true;
                    assert_eq!(c.position.x, bounds.width);
                }
            }
        }
        assert!(seen_left && seen_right);
    }

    #[test]
    fn decay_is_exponential() {
        let bounds = SceneBounds::new(800.0, 600.0, 1.0);
        let mut c = Comet::new(Vec2::new(400.0, 300.0), Vec2::ZERO, 270.0, 100.0);
        for _ in 0..10 {
            assert!(c.tick(1.0 / 60.0, &bounds));
        }
        assert!((c.alpha - 0.997f32.powi(10)).abs() < 1e-5);
        assert!((c.length - 100.0 * 0.995f32.powi(10)).abs() < 1e-3);
    }

    #[test]
    fn dies_when_faded() {
        let bounds = SceneBounds::new(800.0, 600.0, 1.0);
        let mut c = Comet::new(Vec2::new(400.0, 300.0), Vec2::ZERO, 270.0, 100.0);
        c.alpha = 0.02;
        assert!(!c.tick(0.016, &bounds));
    }

    #[test]
    fn dies_past_horizontal_margin() {
        let bounds = SceneBounds::new(800.0, 600.0, 1.0);
        let mut c = Comet::new(Vec2::new(995.0, 300.0), Vec2::new(600.0, 0.0), 270.0, 100.0);
        assert!(!c.tick(0.016, &bounds));

        let mut c = Comet::new(Vec2::new(-195.0, 300.0), Vec2::new(-600.0, 0.0), 270.0, 100.0);
        assert!(!c.tick(0.016, &bounds));
    }

    #[test]
    fn vertical_exit_does_not_remove() {
        let bounds = SceneBounds::new(800.0, 600.0, 1.0);
        let c = Comet::new(Vec2::new(400.0, 5000.0), Vec2::ZERO, 270.0, 100.0);
        assert!(c.is_alive(&bounds));
    }
}
