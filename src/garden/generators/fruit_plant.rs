// src/garden/generators/fruit_plant.rs
use std::f32::consts::TAU;
use std::ops::RangeInclusive;

use bevy::prelude::*;
use rand::Rng;

use super::Generator;
use crate::garden::core::InstanceKind;
use crate::garden::palette::{self, STEM};
use crate::garden::recipe::{Finish, Part, Primitive, Recipe};

/// A round bush with fruit hung around its crown.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct FruitPlantStyle {
    pub height: f32,
    pub fruit: Color,
}

impl FruitPlantStyle {
    pub const HEIGHT: RangeInclusive<f32> = 0.7..=1.3;
    pub const FRUIT_COUNT: usize = 5;
}

impl Generator for FruitPlantStyle {
    const KIND: InstanceKind = InstanceKind::FruitPlant;

    fn roll<R: Rng>(rng: &mut R) -> Self {
        Self {
            height: rng.random_range(Self::HEIGHT),
            fruit: palette::pick(rng, &palette::FRUIT),
        }
    }
}

impl Recipe for FruitPlantStyle {
    fn parts(&self) -> Vec<Part> {
        let h = self.height;
        let crown = 0.35 * h;
        let mut parts = Vec::with_capacity(2 + Self::FRUIT_COUNT);

        parts.push(Part::new(
            Primitive::Cylinder { radius: 0.04, height: 0.5 * h },
            Vec3::new(0.0, 0.25 * h, 0.0),
            STEM,
            Finish::Satin,
        ));
        parts.push(Part::new(
            Primitive::sphere(crown),
            Vec3::new(0.0, 0.6 * h, 0.0),
            palette::FOLIAGE[1],
            Finish::Satin,
        ));

        // Fruit sits just proud of the crown surface, alternating high/low.
        for k in 0..Self::FRUIT_COUNT {
            let a = TAU * k as f32 / Self::FRUIT_COUNT as f32;
            let lift = if k % 2 == 0 { 0.0 } else { 0.12 * h };
            parts.push(Part::new(
                Primitive::sphere(0.07),
                Vec3::new(a.cos() * crown * 0.9, 0.55 * h + lift, a.sin() * crown * 0.9),
                self.fruit,
                Finish::Glossy,
            ));
        }
        parts
    }
}
