use serde::{Deserialize, Serialize};

use super::device::QualityTier;
use super::error::StarfieldResult;

/// Seed used when the host doesn't provide one.
pub const DEFAULT_SEED: u64 = 42;

/// Engine configuration. Every field has a default, so hosts may pass a
/// partial JSON object (e.g. `{"base_stars": 120}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Star count at the 1920x1080 reference resolution (default: 220).
    pub base_stars: u32,
    /// Number of galaxy glows, independent of viewport (default: 3).
    pub galaxy_count: u32,
    /// Twinkle phase advance in radians per second (default: 0.02).
    pub twinkle_speed: f32,
    /// Probability of spawning a comet on any update (default: 0.003).
    pub comet_chance: f32,
    /// Parallax offset per unit of pointer displacement, scaled by depth (default: 0.002).
    pub parallax_strength: f32,
    /// Upper bound of star size in logical units (default: 2.5).
    pub max_star_size: f32,
    /// Fraction of the remaining distance the pointer eases per update (default: 0.08).
    pub pointer_smoothing: f32,
    /// Backing store resolution relative to logical size x DPR (default: 1.0).
    pub render_scale: f32,
    /// Quiet period before a burst of resize notifications is applied (default: 250).
    pub resize_debounce_ms: f64,
    /// RNG seed. `None` lets the host choose.
    pub seed: Option<u64>,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            base_stars: 220,
            galaxy_count: 3,
            twinkle_speed: 0.02,
            comet_chance: 0.003,
            parallax_strength: 0.002,
            max_star_size: 2.5,
            pointer_smoothing: 0.08,
            render_scale: 1.0,
            resize_debounce_ms: 250.0,
            seed: None,
        }
    }
}

impl StarfieldConfig {
    /// Parse a (possibly partial) JSON config.
    pub fn from_json(json: &str) -> StarfieldResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Defaults tuned for a quality tier.
    pub fn for_tier(tier: QualityTier) -> Self {
        match tier {
            QualityTier::High => Self::default(),
            QualityTier::Reduced => Self {
                render_scale: 0.5,
                resize_debounce_ms: 500.0,
                ..Self::default()
            },
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn seed_or_default(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Pull out-of-range values back into range.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.comet_chance = finite_or(self.comet_chance, defaults.comet_chance).clamp(0.0, 1.0);
        self.pointer_smoothing =
            finite_or(self.pointer_smoothing, defaults.pointer_smoothing).clamp(0.0, 1.0);
        self.twinkle_speed = finite_or(self.twinkle_speed, defaults.twinkle_speed);
        self.parallax_strength = finite_or(self.parallax_strength, defaults.parallax_strength);
        self.max_star_size = finite_or(self.max_star_size, defaults.max_star_size).max(0.5);
        if !(self.render_scale.is_finite() && self.render_scale > 0.0) {
            self.render_scale = defaults.render_scale;
        }
        if !(self.resize_debounce_ms.is_finite() && self.resize_debounce_ms >= 0.0) {
            self.resize_debounce_ms = defaults.resize_debounce_ms;
        }
        self
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::StarfieldError;

    #[test]
    fn defaults_match_reference_tuning() {
        let config = StarfieldConfig::default();
        assert_eq!(config.base_stars, 220);
        assert_eq!(config.galaxy_count, 3);
        assert_eq!(config.comet_chance, 0.003);
        assert_eq!(config.parallax_strength, 0.002);
        assert_eq!(config.seed_or_default(), DEFAULT_SEED);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = StarfieldConfig::from_json(r#"{"base_stars": 120, "seed": 7}"#).unwrap();
        assert_eq!(config.base_stars, 120);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.galaxy_count, 3);
        assert_eq!(config.twinkle_speed, 0.02);
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = StarfieldConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, StarfieldError::Config(_)));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config =
            StarfieldConfig::from_json(r#"{"comet_chance": 4.0, "render_scale": -1.0, "pointer_smoothing": 2.0}"#)
                .unwrap();
        assert_eq!(config.comet_chance, 1.0);
        assert_eq!(config.render_scale, 1.0);
        assert_eq!(config.pointer_smoothing, 1.0);
    }

    #[test]
    fn reduced_tier_halves_resolution() {
        let config = StarfieldConfig::for_tier(QualityTier::Reduced);
        assert_eq!(config.render_scale, 0.5);
        assert_eq!(config.resize_debounce_ms, 500.0);
        assert_eq!(config.base_stars, 220);
        assert_eq!(StarfieldConfig::for_tier(QualityTier::High), StarfieldConfig::default());
    }
}
