// src/garden/palette.rs
//! Fixed colour palettes the generators pick from.

use bevy::prelude::*;
use rand::Rng;

pub const FOLIAGE: [Color; 4] = [
    Color::srgb(0.13, 0.42, 0.16),
    Color::srgb(0.18, 0.50, 0.20),
    Color::srgb(0.24, 0.56, 0.18),
    Color::srgb(0.10, 0.36, 0.22),
];

pub const PETALS: [Color; 6] = [
    Color::srgb(0.93, 0.35, 0.55), // pink
    Color::srgb(0.96, 0.84, 0.25), // yellow
    Color::srgb(0.58, 0.40, 0.86), // lavender
    Color::srgb(0.98, 0.98, 0.96), // white
    Color::srgb(0.95, 0.48, 0.20), // orange
    Color::srgb(0.86, 0.15, 0.20), // red
];

pub const FRUIT: [Color; 4] = [
    Color::srgb(0.85, 0.12, 0.10),
    Color::srgb(1.00, 0.55, 0.05),
    Color::srgb(0.98, 0.85, 0.15),
    Color::srgb(0.45, 0.12, 0.45),
];

pub const MOSS: [Color; 3] = [
    Color::srgb(0.28, 0.48, 0.18),
    Color::srgb(0.33, 0.55, 0.22),
    Color::srgb(0.22, 0.40, 0.15),
];

pub const BARK: Color = Color::srgb(0.40, 0.26, 0.13);
pub const STEM: Color = Color::srgb(0.22, 0.52, 0.20);
pub const POLLEN: Color = Color::srgb(0.98, 0.80, 0.20);
pub const TERRACOTTA: Color = Color::srgb(0.72, 0.36, 0.22);
pub const SOIL: Color = Color::srgb(0.25, 0.16, 0.10);

/// Uniform pick from a non-empty palette.
#[inline]
pub fn pick<R: Rng, const N: usize>(rng: &mut R, palette: &[Color; N]) -> Color {
    palette[rng.random_range(0..N)]
}
