// src/garden/generators/ground_cover.rs
use std::ops::RangeInclusive;

use bevy::prelude::*;
use rand::Rng;

use super::Generator;
use crate::garden::core::InstanceKind;
use crate::garden::palette;
use crate::garden::recipe::{Finish, Part, Primitive, Recipe};

/// Low moss patch: a squashed sphere barely above the ground.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct GroundCoverStyle {
    pub spread: f32,
    pub moss: Color,
}

impl GroundCoverStyle {
    pub const SPREAD: RangeInclusive<f32> = 0.5..=1.2;
}

impl Generator for GroundCoverStyle {
    const KIND: InstanceKind = InstanceKind::GroundCover;

    fn roll<R: Rng>(rng: &mut R) -> Self {
        Self {
            spread: rng.random_range(Self::SPREAD),
            moss: palette::pick(rng, &palette::MOSS),
        }
    }
}

impl Recipe for GroundCoverStyle {
    fn parts(&self) -> Vec<Part> {
        vec![Part::new(
            Primitive::Sphere { radii: Vec3::new(0.5 * self.spread, 0.06, 0.4 * self.spread) },
            Vec3::new(0.0, 0.02, 0.0),
            self.moss,
            Finish::Matte,
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn spread_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        for _ in 0..1_000 {
            let g = GroundCoverStyle::roll(&mut rng);
            assert!(GroundCoverStyle::SPREAD.contains(&g.spread));
            assert!(palette::MOSS.contains(&g.moss));
        }
    }
}
