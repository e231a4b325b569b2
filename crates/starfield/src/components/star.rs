use glam::Vec2;
use std::f32::consts::TAU;

use crate::api::config::StarfieldConfig;
use crate::core::bounds::SceneBounds;
use crate::core::rng::Rng;

/// A single background star.
#[derive(Debug, Clone)]
pub struct Star {
    /// Position in scene space.
    pub position: Vec2,
    pub size: f32,
    /// 0.1..1.0, higher is closer: more parallax, brighter.
    pub depth: f32,
    pub base_alpha: f32,
    /// Base alpha modulated by twinkle. Recomputed every update.
    pub current_alpha: f32,
    pub twinkle_phase: f32,
    pub twinkle_speed: f32,
    /// Hue offset applied to the glow mid-stop.
    pub hue_shift: f32,
    /// Drift per 1/60 s, already scaled by depth.
    pub velocity: Vec2,
    render_position: Vec2,
}

impl Star {
    /// How far past the viewport a star travels before wrapping.
    pub const WRAP_MARGIN: f32 = 50.0;
    /// Twinkle never dims a star below this fraction of its base alpha.
    pub const TWINKLE_FLOOR: f32 = 0.6;
    pub const MIN_SIZE: f32 = 0.5;
    const DRIFT: f32 = 0.05;

    pub fn random(rng: &mut Rng, bounds: &SceneBounds, config: &StarfieldConfig) -> Self {
        let size = rng.range(Self::MIN_SIZE, config.max_star_size);
        let depth = rng.range(0.1, 1.0);
        let position = Vec2::new(rng.range(0.0, bounds.width), rng.range(0.0, bounds.height));
        let base_alpha = rng.range(0.3, 0.8) * depth;
        let twinkle_phase = rng.range(0.0, TAU);
        let twinkle_speed = config.twinkle_speed * rng.range(0.8, 1.2);
        let hue_shift = rng.range(-15.0, 15.0);
        let velocity = Vec2::new(
            rng.range(-0.5, 0.5) * Self::DRIFT * depth,
            rng.range(-0.5, 0.5) * Self::DRIFT * depth,
        );
        Star {
            position,
            size,
            depth,
            base_alpha,
            current_alpha: 0.0,
            twinkle_phase,
            twinkle_speed,
            hue_shift,
            velocity,
            render_position: position,
        }
    }

    /// Where the star is drawn: position plus this frame's parallax.
    pub fn render_position(&self) -> Vec2 {
        self.render_position
    }

    /// Advance twinkle and drift by `dt` seconds.
    /// `parallax` is the pointer displacement from center times the global strength.
    pub fn tick(&mut self, dt: f32, parallax: Vec2, bounds: &SceneBounds) {
        self.twinkle_phase += self.twinkle_speed * dt;
        let twinkle = self.twinkle_phase.sin() * 0.5 + 0.5;

        // Velocities are tuned per 60 Hz frame.
        self.position += self.velocity * (dt * 60.0);
        self.wrap(bounds);

        self.render_position = self.position + parallax * self.depth;
        self.current_alpha =
            self.base_alpha * (Self::TWINKLE_FLOOR + (1.0 - Self::TWINKLE_FLOOR) * twinkle);
    }

    /// Teleport to the opposite edge once past the margin.
    fn wrap(&mut self, bounds: &SceneBounds) {
        let m = Self::WRAP_MARGIN;
        if self.position.x < -m {
            self.position.x = bounds.width + m;
        } else if self.position.x > bounds.width + m {
            self.position.x = -m;
        }
        if self.position.y > bounds.height + m {
            self.position.y = -m;
        } else if self.position.y < -m {
            self.position.y = bounds.height + m;
        }
    }
}
