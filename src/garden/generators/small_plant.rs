// src/garden/generators/small_plant.rs
use std::f32::consts::TAU;
use std::ops::RangeInclusive;

use bevy::prelude::*;
use rand::Rng;

use super::Generator;
use crate::garden::core::InstanceKind;
use crate::garden::palette::{self, STEM};
use crate::garden::recipe::{Finish, Part, Primitive, Recipe};

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct SmallPlantStyle {
    pub scale: f32,
    pub leaves: Color,
}

impl SmallPlantStyle {
    pub const SCALE: RangeInclusive<f32> = 0.6..=1.1;
    pub const LEAF_COUNT: usize = 5;
    /// Outward tilt of each leaf from vertical (radians).
    const TILT: f32 = 0.45;
}

impl Generator for SmallPlantStyle {
    const KIND: InstanceKind = InstanceKind::SmallPlant;

    fn roll<R: Rng>(rng: &mut R) -> Self {
        Self {
            scale: rng.random_range(Self::SCALE),
            leaves: palette::pick(rng, &palette::FOLIAGE),
        }
    }
}

impl Recipe for SmallPlantStyle {
    fn parts(&self) -> Vec<Part> {
        let s = self.scale;
        let (leaf_r, leaf_h) = (0.05 * s, 0.35 * s);
        let mut parts = Vec::with_capacity(1 + Self::LEAF_COUNT);

        parts.push(Part::new(
            Primitive::Cylinder { radius: 0.03 * s, height: 0.08 * s },
            Vec3::new(0.0, 0.04 * s, 0.0),
            STEM,
            Finish::Satin,
        ));

        for k in 0..Self::LEAF_COUNT {
            let a = TAU * k as f32 / Self::LEAF_COUNT as f32;
            let out = Vec3::new(a.cos(), 0.0, a.sin());
            // Tilt the cone's +Y toward +X, then swing +X around to `out`.
            let rotation = Quat::from_rotation_y(-a) * Quat::from_rotation_z(-Self::TILT);
            let centre = out * (leaf_r + Self::TILT.sin() * leaf_h * 0.5)
                + Vec3::Y * (Self::TILT.cos() * leaf_h * 0.5);
            parts.push(
                Part::new(
                    Primitive::Cone { radius: leaf_r, height: leaf_h },
                    centre,
                    self.leaves,
                    Finish::Satin,
                )
                .rotated(rotation),
            );
        }
        parts
    }
}
