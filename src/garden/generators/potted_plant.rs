// src/garden/generators/potted_plant.rs
use std::f32::consts::{FRAC_PI_2, TAU};

use bevy::prelude::*;

use crate::garden::palette::{self, SOIL, STEM, TERRACOTTA};
use crate::garden::recipe::{Finish, Part, Primitive, Recipe};

/// Focal point at the origin. Not randomized.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct PottedPlant;

impl Recipe for PottedPlant {
    fn parts(&self) -> Vec<Part> {
        let mut parts = vec![
            Part::new(
                Primitive::Cylinder { radius: 0.45, height: 0.6 },
                Vec3::new(0.0, 0.3, 0.0),
                TERRACOTTA,
                Finish::Matte,
            ),
            Part::new(
                Primitive::Cylinder { radius: 0.5, height: 0.08 },
                Vec3::new(0.0, 0.62, 0.0),
                TERRACOTTA,
                Finish::Matte,
            ),
            Part::new(
                Primitive::Cylinder { radius: 0.42, height: 0.02 },
                Vec3::new(0.0, 0.665, 0.0),
                SOIL,
                Finish::Matte,
            ),
            Part::new(
                Primitive::Cylinder { radius: 0.04, height: 0.7 },
                Vec3::new(0.0, 1.0, 0.0),
                STEM,
                Finish::Satin,
            ),
        ];

        for k in 0..4 {
            let a = TAU * k as f32 / 4.0 + FRAC_PI_2 * 0.5;
            parts.push(
                Part::new(
                    Primitive::Sphere { radii: Vec3::new(0.22, 0.03, 0.09) },
                    Vec3::new(a.cos() * 0.2, 0.95, a.sin() * 0.2),
                    palette::FOLIAGE[0],
                    Finish::Satin,
                )
                .rotated(Quat::from_rotation_y(-a)),
            );
        }

        parts.push(Part::new(
            Primitive::sphere(0.14),
            Vec3::new(0.0, 1.4, 0.0),
            palette::PETALS[0],
            Finish::Satin,
        ));
        parts
    }
}
