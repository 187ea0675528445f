// src/garden/core.rs
//! Core types for seeded garden placement.
//! Keep this file dependency-light; placement, layout and generators build on it.

use bevy::prelude::*; // Vec3, Resource
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

// ---------- Seed & RNG streams ----------

/// Scene-wide seed; changing this reshuffles every placement and style.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GardenSeed(pub u64);

/// Index of a group inside the layout (stable for a given layout file).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupIndex(pub u32);

/// RNG driving a group's placement. Stable per (seed, group).
#[inline]
pub fn group_rng(seed: GardenSeed, group: GroupIndex) -> ChaCha8Rng {
    let mix = seed.0 ^ ((group.0 as u64) << 40) ^ 0xA5A5_5A5A_D3F0_1234u64;
    ChaCha8Rng::seed_from_u64(mix)
}

/// RNG driving one instance's style. Stable per (seed, group, instance).
#[inline]
pub fn instance_rng(seed: GardenSeed, group: GroupIndex, index: u32) -> ChaCha8Rng {
    let mix = seed.0
        ^ ((group.0 as u64) << 40)
        ^ ((index as u64) << 8)
        ^ 0x9E37_79B9_7F4A_7C15u64;
    ChaCha8Rng::seed_from_u64(mix)
}

// ---------- Kinds & policies ----------

/// What a placement will grow into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstanceKind {
    Tree,
    Flower,
    FruitPlant,
    SmallPlant,
    GroundCover,
}

impl InstanceKind {
    pub const fn label(self) -> &'static str {
        match self {
            InstanceKind::Tree => "tree",
            InstanceKind::Flower => "flower",
            InstanceKind::FruitPlant => "fruit plant",
            InstanceKind::SmallPlant => "small plant",
            InstanceKind::GroundCover => "ground cover",
        }
    }
}

/// How a group spreads its instances around the focal point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementPolicy {
    /// Even angular spacing, radius jittered inside the band.
    Ring,
    /// Angle and radius both uniform; unstructured scatter.
    Disc,
}

// ---------- Radius band ----------

/// Inclusive radial band around the origin, in meters.
/// Invariant: both ends finite, `0 <= min <= max`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBand", into = "RawBand")]
pub struct RadiusBand {
    min: f32,
    max: f32,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct RawBand {
    min: f32,
    max: f32,
}

impl TryFrom<RawBand> for RadiusBand {
    type Error = BandError;
    fn try_from(raw: RawBand) -> Result<Self, Self::Error> {
        RadiusBand::new(raw.min, raw.max)
    }
}

impl From<RadiusBand> for RawBand {
    fn from(band: RadiusBand) -> Self {
        RawBand { min: band.min, max: band.max }
    }
}

impl RadiusBand {
    pub fn new(min: f32, max: f32) -> Result<Self, BandError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(BandError::NonFinite { min, max });
        }
        if min < 0.0 {
            return Err(BandError::Negative { min });
        }
        if min > max {
            return Err(BandError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn min(&self) -> f32 { self.min }
    #[inline]
    pub fn max(&self) -> f32 { self.max }

    #[inline]
    pub fn contains(&self, r: f32) -> bool {
        r >= self.min && r <= self.max
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BandError {
    #[error("radius band must be finite (got {min}..{max})")]
    NonFinite { min: f32, max: f32 },
    #[error("radius band cannot start below zero (got min {min})")]
    Negative { min: f32 },
    #[error("radius band is inverted: min {min} > max {max}")]
    Inverted { min: f32, max: f32 },
}

// ---------- Placement output ----------

/// One placed instance. Built once at composition time, never mutated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementDescriptor {
    pub kind: InstanceKind,
    /// Sequential index inside the group; feeds the instance RNG.
    pub index: u32,
    /// Polar angle around +Y (radians, `[0, TAU)`).
    pub angle: f32,
    /// Distance from the focal point (meters).
    pub radius: f32,
    /// World position on the ground plane.
    pub position: Vec3,
    /// Yaw (radians) around +Y.
    pub rotation_y: f32,
}

impl PlacementDescriptor {
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position)
            .with_rotation(Quat::from_rotation_y(self.rotation_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn band_rejects_bad_ranges() {
        assert_eq!(
            RadiusBand::new(4.0, 2.0),
            Err(BandError::Inverted { min: 4.0, max: 2.0 })
        );
        assert_eq!(RadiusBand::new(-1.0, 2.0), Err(BandError::Negative { min: -1.0 }));
        assert!(matches!(
            RadiusBand::new(0.0, f32::INFINITY),
            Err(BandError::NonFinite { .. })
        ));
        assert!(RadiusBand::new(3.0, 3.0).is_ok());
    }

    #[test]
    fn band_deserialization_enforces_invariant() {
        let ok: RadiusBand = ron::from_str("(min: 2.5, max: 4.0)").unwrap();
        assert_eq!(ok.min(), 2.5);
        assert_eq!(ok.max(), 4.0);
        assert!(ron::from_str::<RadiusBand>("(min: 5.0, max: 4.0)").is_err());
    }

    #[test]
    fn instance_streams_are_reproducible_and_distinct() {
        let seed = GardenSeed(42);
        let a: u64 = instance_rng(seed, GroupIndex(1), 3).random();
        let b: u64 = instance_rng(seed, GroupIndex(1), 3).random();
        let c: u64 = instance_rng(seed, GroupIndex(1), 4).random();
        let d: u64 = instance_rng(seed, GroupIndex(2), 3).random();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }
}
