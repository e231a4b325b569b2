use crate::api::config::StarfieldConfig;
use crate::components::{Comet, Galaxy, Star};
use crate::core::bounds::{SceneBounds, REFERENCE_HEIGHT, REFERENCE_WIDTH};
use crate::core::rng::Rng;

/// Smallest fraction of `base_stars` any viewport gets.
pub const MIN_STAR_FRACTION: f32 = 0.5;

/// Star count for a viewport: proportional to area relative to 1920x1080,
/// never below half the base count.
pub fn star_count(width: f32, height: f32, base_stars: u32) -> usize {
    let area = width * height;
    let scale = if area.is_finite() && area > 0.0 {
        area / (REFERENCE_WIDTH * REFERENCE_HEIGHT)
    } else {
        0.0
    };
    (base_stars as f32 * scale.max(MIN_STAR_FRACTION)).round() as usize
}

/// Every entity in the scene. Rebuilt wholesale on resize.
#[derive(Debug, Clone, Default)]
pub struct Population {
    pub stars: Vec<Star>,
    pub galaxies: Vec<Galaxy>,
    pub comets: Vec<Comet>,
}

impl Population {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Generate stars and galaxies for `bounds`. No comets.
    pub fn generate(bounds: &SceneBounds, config: &StarfieldConfig, rng: &mut Rng) -> Self {
        let count = star_count(bounds.width, bounds.height, config.base_stars);
        let stars = (0..count).map(|_| Star::random(rng, bounds, config)).collect();
        let galaxies = (0..config.galaxy_count)
            .map(|_| Galaxy::random(rng, bounds))
            .collect();
        Self {
            stars,
            galaxies,
            comets: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty() && self.galaxies.is_empty() && self.comets.is_empty()
    }
}
