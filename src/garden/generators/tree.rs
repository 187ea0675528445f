// src/garden/generators/tree.rs
use std::ops::RangeInclusive;

use bevy::prelude::*;
use rand::Rng;

use super::Generator;
use crate::garden::core::InstanceKind;
use crate::garden::palette::{self, BARK};
use crate::garden::recipe::{Finish, Part, Primitive, Recipe};

/// Conifer: one trunk under three stacked cones.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct TreeStyle {
    /// Uniform size multiplier.
    pub size: f32,
    pub foliage: Color,
}

impl TreeStyle {
    pub const SIZE: RangeInclusive<f32> = 0.8..=1.4;
    const TIERS: [(f32, f32); 3] = [(0.90, 1.30), (0.72, 1.85), (0.52, 2.40)]; // (radius, center y)
}

impl Generator for TreeStyle {
    const KIND: InstanceKind = InstanceKind::Tree;

    fn roll<R: Rng>(rng: &mut R) -> Self {
        Self {
            size: rng.random_range(Self::SIZE),
            foliage: palette::pick(rng, &palette::FOLIAGE),
        }
    }
}

impl Recipe for TreeStyle {
    fn parts(&self) -> Vec<Part> {
        let s = self.size;
        let mut parts = Vec::with_capacity(1 + Self::TIERS.len());
        parts.push(Part::new(
            Primitive::Cylinder { radius: 0.12 * s, height: 1.2 * s },
            Vec3::new(0.0, 0.6 * s, 0.0),
            BARK,
            Finish::Matte,
        ));
        for (radius, y) in Self::TIERS {
            parts.push(Part::new(
                Primitive::Cone { radius: radius * s, height: 1.0 * s },
                Vec3::new(0.0, y * s, 0.0),
                self.foliage,
                Finish::Satin,
            ));
        }
        parts
    }
}
