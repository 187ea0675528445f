// src/garden/placement.rs
//! Ring and disc placement around the focal point (deterministic per RNG state).

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

use super::core::{InstanceKind, PlacementDescriptor, PlacementPolicy, RadiusBand};

/// Dispatch on the policy a group was configured with.
pub fn place<R: Rng>(
    policy: PlacementPolicy,
    count: u32,
    band: RadiusBand,
    kind: InstanceKind,
    rng: &mut R,
) -> Vec<PlacementDescriptor> {
    match policy {
        PlacementPolicy::Ring => ring_placement(count, band, kind, rng),
        PlacementPolicy::Disc => disc_placement(count, band, kind, rng),
    }
}

/// Evenly spaced angles (`TAU * i / N`), radius uniform inside the band.
pub fn ring_placement<R: Rng>(
    count: u32,
    band: RadiusBand,
    kind: InstanceKind,
    rng: &mut R,
) -> Vec<PlacementDescriptor> {
    let mut out = Vec::with_capacity(count as usize);
    for i in 0..count {
        let angle = TAU * i as f32 / count as f32;
        let radius = rng.random_range(band.min()..=band.max());
        debug_assert!(band.contains(radius));
        out.push(make_descriptor(kind, i, angle, radius, rng));
    }
    out
}

/// Angle and radius drawn independently; overlaps are accepted.
pub fn disc_placement<R: Rng>(
    count: u32,
    band: RadiusBand,
    kind: InstanceKind,
    rng: &mut R,
) -> Vec<PlacementDescriptor> {
    let mut out = Vec::with_capacity(count as usize);
    for i in 0..count {
        let angle = rng.random_range(0.0..TAU);
        let radius = rng.random_range(band.min()..=band.max());
        debug_assert!(band.contains(radius));
        out.push(make_descriptor(kind, i, angle, radius, rng));
    }
    out
}

/// Common output builder: polar -> ground plane, random yaw.
#[inline]
fn make_descriptor<R: Rng>(
    kind: InstanceKind,
    index: u32,
    angle: f32,
    radius: f32,
    rng: &mut R,
) -> PlacementDescriptor {
    let rotation_y = rng.random_range(0.0..TAU);
    PlacementDescriptor {
        kind,
        index,
        angle,
        radius,
        position: Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin()),
        rotation_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn band(min: f32, max: f32) -> RadiusBand {
        RadiusBand::new(min, max).unwrap()
    }

    #[test]
    fn twenty_ring_flowers_are_evenly_spaced() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let out = ring_placement(20, band(2.5, 4.0), InstanceKind::Flower, &mut rng);

        assert_eq!(out.len(), 20);
        let step = TAU / 20.0;
        for (i, d) in out.iter().enumerate() {
            assert_eq!(d.index, i as u32);
            assert_eq!(d.kind, InstanceKind::Flower);
            assert!(d.radius >= 2.5 && d.radius <= 4.0, "radius {}", d.radius);
            assert!((d.angle - step * i as f32).abs() < 1e-5);
            let planar = Vec2::new(d.position.x, d.position.z).length();
            assert!((planar - d.radius).abs() < 1e-4);
            assert_eq!(d.position.y, 0.0);
        }
        for pair in out.windows(2) {
            assert!((pair[1].angle - pair[0].angle - step).abs() < 1e-5);
        }
    }

    #[test]
    fn counts_and_bands_hold_for_both_policies() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let b = band(1.5, 12.0);
        for n in [0u32, 1, 2, 7, 64] {
            for policy in [PlacementPolicy::Ring, PlacementPolicy::Disc] {
                let out = place(policy, n, b, InstanceKind::SmallPlant, &mut rng);
                assert_eq!(out.len(), n as usize);
                for d in &out {
                    assert!(b.contains(d.radius));
                    assert!(d.angle >= 0.0 && d.angle < TAU);
                    assert!(d.rotation_y >= 0.0 && d.rotation_y < TAU);
                }
            }
        }
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(ring_placement(0, band(0.0, 1.0), InstanceKind::Tree, &mut rng).is_empty());
        assert!(disc_placement(0, band(0.0, 1.0), InstanceKind::Tree, &mut rng).is_empty());
    }

    #[test]
    fn degenerate_band_pins_radius() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let out = disc_placement(16, band(5.0, 5.0), InstanceKind::GroundCover, &mut rng);
        assert!(out.iter().all(|d| d.radius == 5.0));
    }

    #[test]
    fn same_seed_same_layout() {
        let a = disc_placement(
            32,
            band(1.0, 9.0),
            InstanceKind::Flower,
            &mut ChaCha8Rng::seed_from_u64(2024),
        );
        let b = disc_placement(
            32,
            band(1.0, 9.0),
            InstanceKind::Flower,
            &mut ChaCha8Rng::seed_from_u64(2024),
        );
        assert_eq!(a, b);
    }
}
