//! Per-frame simulation step.
//!
//! Free functions over the population, so the engine can lend out each
//! collection separately from the pointer and RNG.

use glam::Vec2;

use crate::components::{Comet, Galaxy, Star};
use crate::core::bounds::SceneBounds;
use crate::core::rng::Rng;

/// Twinkle, drift, parallax and wrap every star.
/// `parallax` is the pointer offset from center already scaled by the global strength.
pub fn update_stars(stars: &mut [Star], parallax: Vec2, bounds: &SceneBounds, dt: f32) {
    for star in stars.iter_mut() {
        star.tick(dt, parallax, bounds);
    }
}

pub fn update_galaxies(galaxies: &mut [Galaxy], bounds: &SceneBounds, dt: f32) {
    for galaxy in galaxies.iter_mut() {
        galaxy.tick(dt, bounds);
    }
}

/// Advance comets and drop the ones that left or faded.
/// Returns how many were removed.
pub fn update_comets(comets: &mut Vec<Comet>, bounds: &SceneBounds, dt: f32) -> usize {
    let before = comets.len();
    comets.retain_mut(|c| c.tick(dt, bounds));
    before - comets.len()
}

/// Roll for a new comet. Independent of how many are already flying.
pub fn maybe_spawn_comet(
    comets: &mut Vec<Comet>,
    chance: f32,
    rng: &mut Rng,
    bounds: &SceneBounds,
) -> bool {
    if !rng.chance(chance) {
        return false;
    }
    let comet = Comet::spawn(rng, bounds);
    log::debug!(
        "comet spawned at ({:.0}, {:.0}) speed {:.0}",
        comet.position.x,
        comet.position.y,
        comet.velocity.length()
    );
    comets.push(comet);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collections_are_a_no_op() {
        let bounds = SceneBounds::default();
        let mut comets = Vec::new();
        update_stars(&mut [], Vec2::ZERO, &bounds, 0.016);
        update_galaxies(&mut [], &bounds, 0.016);
        assert_eq!(update_comets(&mut comets, &bounds, 0.016), 0);
    }

    #[test]
    fn removal_does_not_skip_neighbours() {
        let bounds = SceneBounds::new(800.0, 600.0, 1.0);
        let mut comets: Vec<Comet> = (0..6)
            .map(|i| Comet::new(Vec2::new(400.0, i as f32 * 10.0), Vec2::ZERO, 270.0, 100.0))
            .collect();
        // Adjacent dead comets at indices 1, 2 and the last one
        for i in [1, 2, 5] {
            comets[i].alpha = 0.01;
        }
        let removed = update_comets(&mut comets, &bounds, 0.016);
        assert_eq!(removed, 3);
        let ys: Vec<f32> = comets.iter().map(|c| c.position.y).collect();
        assert_eq!(ys, vec![0.0, 30.0, 40.0]);
    }

    #[test]
    fn spawn_respects_chance() {
        let bounds = SceneBounds::new(800.0, 600.0, 1.0);
        let mut rng = Rng::new(1);
        let mut comets = Vec::new();
        for _ in 0..100 {
            assert!(!maybe_spawn_comet(&mut comets, 0.0, &mut rng, &bounds));
        }
        assert!(comets.is_empty());
        assert!(maybe_spawn_comet(&mut comets, 1.0, &mut rng, &bounds));
        assert!(maybe_spawn_comet(&mut comets, 1.0, &mut rng, &bounds));
        assert_eq!(comets.len(), 2);
    }

    #[test]
    fn spawn_rate_is_roughly_the_chance() {
        let bounds = SceneBounds::new(800.0, 600.0, 1.0);
        let mut rng = Rng::new(1234);
        let mut comets = Vec::new();
        let mut spawned = 0;
        for _ in 0..100_000 {
            if maybe_spawn_comet(&mut comets, 0.003, &mut rng, &bounds) {
                spawned += 1;
            }
            comets.clear();
        }
        assert!((200..=400).contains(&spawned), "spawned {}", spawned);
    }
}
