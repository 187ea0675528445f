// src/garden/generators/flower.rs
use std::f32::consts::TAU;
use std::ops::RangeInclusive;

use bevy::prelude::*;
use rand::Rng;

use super::Generator;
use crate::garden::core::InstanceKind;
use crate::garden::palette::{self, POLLEN, STEM};
use crate::garden::recipe::{Finish, Part, Primitive, Recipe};

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct FlowerStyle {
    /// Stem height multiplier.
    pub height: f32,
    pub petals: Color,
}

impl FlowerStyle {
    pub const HEIGHT: RangeInclusive<f32> = 0.8..=1.3;
    pub const PETAL_COUNT: usize = 6;
    const STEM_LENGTH: f32 = 0.45;
}

impl Generator for FlowerStyle {
    const KIND: InstanceKind = InstanceKind::Flower;

    fn roll<R: Rng>(rng: &mut R) -> Self {
        Self {
            height: rng.random_range(Self::HEIGHT),
            petals: palette::pick(rng, &palette::PETALS),
        }
    }
}

impl Recipe for FlowerStyle {
    fn parts(&self) -> Vec<Part> {
        let top = Self::STEM_LENGTH * self.height;
        let mut parts = Vec::with_capacity(4 + Self::PETAL_COUNT);

        parts.push(Part::new(
            Primitive::Cylinder { radius: 0.02, height: top },
            Vec3::new(0.0, top * 0.5, 0.0),
            STEM,
            Finish::Satin,
        ));
        parts.push(Part::new(
            Primitive::sphere(0.06),
            Vec3::new(0.0, top, 0.0),
            POLLEN,
            Finish::Matte,
        ));

        // Petals: ellipsoids with the long axis pointing away from the centre.
        for k in 0..Self::PETAL_COUNT {
            let a = TAU * k as f32 / Self::PETAL_COUNT as f32;
            let out = Vec3::new(a.cos(), 0.0, a.sin());
            parts.push(
                Part::new(
                    Primitive::Sphere { radii: Vec3::new(0.09, 0.025, 0.05) },
                    Vec3::new(0.0, top, 0.0) + out * 0.09,
                    self.petals,
                    Finish::Satin,
                )
                .rotated(Quat::from_rotation_y(-a)),
            );
        }

        for side in [-1.0f32, 1.0] {
            parts.push(Part::new(
                Primitive::Sphere { radii: Vec3::new(0.08, 0.015, 0.035) },
                Vec3::new(side * 0.07, top * 0.4, 0.0),
                STEM,
                Finish::Satin,
            ));
        }
        parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn height_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        for _ in 0..1_000 {
            let f = FlowerStyle::roll(&mut rng);
            assert!(FlowerStyle::HEIGHT.contains(&f.height));
            assert!(palette::PETALS.contains(&f.petals));
        }
    }

    #[test]
    fn petals_ring_the_centre() {
        let f = FlowerStyle { height: 1.0, petals: palette::PETALS[2] };
        let parts = f.parts();
        assert_eq!(parts.len(), 2 + FlowerStyle::PETAL_COUNT + 2);

        let centre = parts[1].translation;
        let petals: Vec<_> = parts.iter().filter(|p| p.color == f.petals).collect();
        assert_eq!(petals.len(), FlowerStyle::PETAL_COUNT);
        for p in petals {
            assert!((p.translation.y - centre.y).abs() < 1e-6);
            assert!(((p.translation - centre).length() - 0.09).abs() < 1e-5);
        }
    }
}
