//! Garden plugin wiring (glue).
//! - Layout asset/loader
//! - GardenSeed from settings or layout
//! - One-shot scene assembly once the layout resolves
//!
//! `draw_reference_grid` lives here too but is scheduled by the app, since it
//! needs the gizmo plugin.

use std::f32::consts::FRAC_PI_2;

use bevy::asset::LoadState;
use bevy::prelude::*;
use rand::Rng;

use super::assembler::{spawn_garden, ActiveLayout};
use super::core::GardenSeed;
use super::layout::{GardenLayout, GardenLayoutAssetPlugin};
use super::primitives::{init_primitive_meshes, MaterialCache};

/// Where the layout lives, and an optional seed that beats the layout's own.
#[derive(Resource, Clone)]
pub struct GardenSettings {
    pub layout_path: String,
    pub seed_override: Option<u64>,
}
impl Default for GardenSettings {
    fn default() -> Self {
        Self {
            layout_path: "garden/layout.garden.ron".to_string(),
            seed_override: None,
        }
    }
}

/// Handle to the loading GardenLayout asset.
#[derive(Resource, Default)]
pub struct GardenLayoutHandle(pub Handle<GardenLayout>);

pub struct GardenPlugin;
impl Plugin for GardenPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(GardenLayoutAssetPlugin)
            .init_resource::<GardenSettings>()
            .init_resource::<GardenLayoutHandle>()
            .init_resource::<MaterialCache>()
            .add_systems(Startup, (load_layout, init_primitive_meshes))
            .add_systems(Update, resolve_layout.run_if(not(resource_exists::<ActiveLayout>)))
            .add_systems(
                Update,
                spawn_garden
                    .after(resolve_layout)
                    .run_if(resource_added::<ActiveLayout>),
            );
    }
}

/// Startup: request loading the layout, store handle.
fn load_layout(
    mut handle_res: ResMut<GardenLayoutHandle>,
    settings: Res<GardenSettings>,
    assets: Res<AssetServer>,
) {
    if handle_res.0.is_strong() { return; }
    handle_res.0 = assets.load(settings.layout_path.as_str());
    info!("Garden: loading layout from '{}'", settings.layout_path);
}

/// Update: adopt the loaded layout, or the built-in one if loading failed.
fn resolve_layout(
    mut commands: Commands,
    handle_res: Res<GardenLayoutHandle>,
    layouts: Res<Assets<GardenLayout>>,
    assets: Res<AssetServer>,
    settings: Res<GardenSettings>,
) {
    let layout = if let Some(layout) = layouts.get(&handle_res.0) {
        info!("Garden: layout loaded ({} groups, {} instances)", layout.groups.len(), layout.total_instances());
        layout.clone()
    } else if let LoadState::Failed(err) = assets.load_state(handle_res.0.id()) {
        warn!("Garden: layout '{}' failed to load ({err}); using built-in layout", settings.layout_path);
        GardenLayout::default()
    } else {
        return;
    };

    let seed = resolve_seed(settings.seed_override, layout.seed, || rand::rng().random());
    info!("Garden: world seed={}", seed.0);
    commands.insert_resource(seed);
    commands.insert_resource(ActiveLayout(layout));
}

/// Settings override, then layout, then a fresh draw.
pub fn resolve_seed(
    seed_override: Option<u64>,
    layout_seed: Option<u64>,
    fresh: impl FnOnce() -> u64,
) -> GardenSeed {
    GardenSeed(seed_override.or(layout_seed).unwrap_or_else(fresh))
}

/// Ground-plane grid centred on the focal point.
pub fn draw_reference_grid(mut gizmos: Gizmos, layout: Res<ActiveLayout>) {
    let grid = layout.0.grid;
    gizmos.grid(
        Isometry3d::from_rotation(Quat::from_rotation_x(FRAC_PI_2)),
        UVec2::splat(grid.cells),
        Vec2::splat(grid.spacing),
        Color::srgba(0.8, 0.8, 0.8, 0.35),
    );
}
