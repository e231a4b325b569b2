use glam::Vec2;

use crate::core::bounds::SceneBounds;
use crate::core::rng::Rng;

/// Soft ambient glow behind the stars.
#[derive(Debug, Clone)]
pub struct Galaxy {
    pub position: Vec2,
    pub radius: f32,
    pub hue: f32,
    pub alpha: f32,
    /// Horizontal drift rate.
    pub drift: f32,
}

impl Galaxy {
    const DRIFT_SCALE: f32 = 10.0;

    pub fn random(rng: &mut Rng, bounds: &SceneBounds) -> Self {
        Galaxy {
            position: Vec2::new(rng.range(0.0, bounds.width), rng.range(0.0, bounds.height)),
            radius: rng.range(150.0, 450.0),
            hue: rng.range(200.0, 280.0),
            alpha: rng.range(0.05, 0.15),
            drift: rng.range(-0.02, 0.02),
        }
    }

    /// Drift horizontally, wrapping once fully off-screen.
    pub fn tick(&mut self, dt: f32, bounds: &SceneBounds) {
        self.position.x += self.drift * dt * Self::DRIFT_SCALE;

        if self.position.x < -self.radius {
            self.position.x = bounds.width + self.radius;
        } else if self.position.x > bounds.width + self.radius {
            self.position.x = -self.radius;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn galaxy_at(x: f32, drift: f32) -> Galaxy {
        Galaxy { position: Vec2::new(x, 100.0), radius: 200.0, hue: 240.0, alpha: 0.1, drift }
    }

    #[test]
    fn random_galaxy_within_ranges() {
        let mut rng = Rng::new(5);
        let bounds = SceneBounds::new(1000.0, 800.0, 1.0);
        for _ in 0..200 {
            let g = Galaxy::random(&mut rng, &bounds);
            assert!(g.radius >= 150.0 && g.radius <= 450.0);
            assert!(g.hue >= 200.0 && g.hue <= 280.0);
            assert!(g.alpha >= 0.05 && g.alpha <= 0.15);
            assert!(g.drift.abs() <= 0.02);
        }
    }

    #[test]
    fn drifts_horizontally_only() {
        let bounds = SceneBounds::new(1000.0, 800.0, 1.0);
        let mut g = galaxy_at(500.0, 0.02);
        g.tick(1.0, &bounds);
        assert!((g.position.x - 500.2).abs() < 1e-4);
        assert_eq!(g.position.y, 100.0);
    }

    #[test]
    fn wraps_using_radius_margin() {
        let bounds = SceneBounds::new(1000.0, 800.0, 1.0);
        let mut g = galaxy_at(1200.5, 0.0);
        g.tick(0.016, &bounds);
        assert_eq!(g.position.x, -200.0);

        let mut g = galaxy_at(-200.5, 0.0);
        g.tick(0.016, &bounds);
        assert_eq!(g.position.x, 1200.0);
    }
}
