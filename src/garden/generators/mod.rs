// src/garden/generators/mod.rs
//! Per-kind plant recipes. Each style is rolled once from an injected RNG and
//! then lives on the instance entity unchanged.

use bevy::prelude::*;
use rand::Rng;

use super::core::InstanceKind;
use super::recipe::Recipe;

mod flower;
mod fruit_plant;
mod ground_cover;
mod potted_plant;
mod small_plant;
mod tree;

pub use flower::FlowerStyle;
pub use fruit_plant::FruitPlantStyle;
pub use ground_cover::GroundCoverStyle;
pub use potted_plant::PottedPlant;
pub use small_plant::SmallPlantStyle;
pub use tree::TreeStyle;

/// A randomized plant recipe bound to one `InstanceKind`.
pub trait Generator: Recipe + Component + Copy + std::fmt::Debug {
    const KIND: InstanceKind;

    /// Draw the style parameters. Only ever called once per instance.
    fn roll<R: Rng>(rng: &mut R) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    // Shape discriminants only; dimensions and colours are allowed to vary.
    fn shapes<G: Generator>(style: &G) -> Vec<std::mem::Discriminant<crate::garden::recipe::Primitive>> {
        style.parts().iter().map(|p| std::mem::discriminant(&p.primitive)).collect()
    }

    fn structurally_identical<G: Generator + PartialEq>() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let a = G::roll(&mut rng);
        let b = G::roll(&mut rng);
        assert_ne!(a, b, "{:?} rolled twice should differ", G::KIND);
        assert_eq!(shapes(&a), shapes(&b));
    }

    #[test]
    fn every_kind_keeps_its_topology() {
        structurally_identical::<TreeStyle>();
        structurally_identical::<FlowerStyle>();
        structurally_identical::<FruitPlantStyle>();
        structurally_identical::<SmallPlantStyle>();
        structurally_identical::<GroundCoverStyle>();
    }

    #[test]
    fn kinds_are_bound_correctly() {
        assert_eq!(TreeStyle::KIND, InstanceKind::Tree);
        assert_eq!(FlowerStyle::KIND, InstanceKind::Flower);
        assert_eq!(FruitPlantStyle::KIND, InstanceKind::FruitPlant);
        assert_eq!(SmallPlantStyle::KIND, InstanceKind::SmallPlant);
        assert_eq!(GroundCoverStyle::KIND, InstanceKind::GroundCover);
    }
}
