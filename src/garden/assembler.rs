// src/garden/assembler.rs
//! Turns the active layout into entities: placement per group, one style roll
//! per instance, parts under each instance root.

use bevy::prelude::*;

use super::core::{group_rng, instance_rng, GardenSeed, GroupIndex, InstanceKind, PlacementDescriptor};
use super::generators::{
    FlowerStyle, FruitPlantStyle, Generator, GroundCoverStyle, PottedPlant, SmallPlantStyle, TreeStyle,
};
use super::layout::GardenLayout;
use super::placement::place;
use super::primitives::{spawn_parts, MaterialCache, PrimitiveMeshes};
use super::recipe::Recipe;

/// The layout the scene was (or is about to be) built from.
#[derive(Resource, Clone, Debug)]
pub struct ActiveLayout(pub GardenLayout);

/// Marker + identity on every generated plant root.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GardenInstance {
    pub kind: InstanceKind,
    pub group: GroupIndex,
    pub index: u32,
}

/// Render-side handles threaded through the spawn helpers.
struct PartSink<'a> {
    meshes: &'a PrimitiveMeshes,
    cache: &'a mut MaterialCache,
    materials: &'a mut Assets<StandardMaterial>,
}

/// Runs once, when `ActiveLayout` appears.
pub fn spawn_garden(
    mut commands: Commands,
    layout: Res<ActiveLayout>,
    seed: Res<GardenSeed>,
    meshes: Res<PrimitiveMeshes>,
    mut cache: ResMut<MaterialCache>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut sink = PartSink { meshes: &*meshes, cache: &mut *cache, materials: &mut *materials };
    let layout = &layout.0;

    if layout.focal_point {
        let root = commands
            .spawn((Name::new("potted plant"), PottedPlant, Transform::IDENTITY, Visibility::default()))
            .id();
        spawn_parts(&mut commands, root, &PottedPlant.parts(), sink.meshes, sink.cache, sink.materials);
    }

    let mut total = 0usize;
    for (gi, group) in layout.groups.iter().enumerate() {
        let gidx = GroupIndex(gi as u32);
        let mut rng = group_rng(*seed, gidx);
        let placements = place(group.policy, group.count, group.radius, group.kind, &mut rng);

        for d in &placements {
            let mut irng = instance_rng(*seed, gidx, d.index);
            match d.kind {
                InstanceKind::Tree => {
                    spawn_instance(&mut commands, &mut sink, gidx, d, TreeStyle::roll(&mut irng))
                }
                InstanceKind::Flower => {
                    spawn_instance(&mut commands, &mut sink, gidx, d, FlowerStyle::roll(&mut irng))
                }
                InstanceKind::FruitPlant => {
                    spawn_instance(&mut commands, &mut sink, gidx, d, FruitPlantStyle::roll(&mut irng))
                }
                InstanceKind::SmallPlant => {
                    spawn_instance(&mut commands, &mut sink, gidx, d, SmallPlantStyle::roll(&mut irng))
                }
                InstanceKind::GroundCover => {
                    spawn_instance(&mut commands, &mut sink, gidx, d, GroundCoverStyle::roll(&mut irng))
                }
            }
        }

        let farthest = placements.iter().map(|d| d.radius).fold(0.0f32, f32::max);
        debug!(
            "garden: group '{}' ({:?} {}) placed {} within {:.1}..{:.1}m, farthest {:.2}m",
            group.name,
            group.policy,
            group.kind.label(),
            placements.len(),
            group.radius.min(),
            group.radius.max(),
            farthest
        );
        total += placements.len();
    }

    info!(
        "garden: spawned {} instances in {} groups (seed={}, {} materials)",
        total,
        layout.groups.len(),
        seed.0,
        sink.cache.len()
    );
}

/// Spawn one plant root carrying its style, then its parts.
/// The style component is written here and nowhere else.
fn spawn_instance<G: Generator>(
    commands: &mut Commands,
    sink: &mut PartSink,
    group: GroupIndex,
    d: &PlacementDescriptor,
    style: G,
) {
    let root = commands
        .spawn((
            Name::new(format!("{} #{}", G::KIND.label(), d.index)),
            GardenInstance { kind: G::KIND, group, index: d.index },
            style,
            d.transform(),
            Visibility::default(),
        ))
        .id();
    spawn_parts(commands, root, &style.parts(), sink.meshes, sink.cache, sink.materials);
}
