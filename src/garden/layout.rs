// src/garden/layout.rs
//! Data-driven garden layout + loader.

use bevy::asset::{io::Reader, AssetLoader, LoadContext};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::core::{InstanceKind, PlacementPolicy, RadiusBand};

// ---------- Public plugin to register asset+loader ----------

pub struct GardenLayoutAssetPlugin;

impl Plugin for GardenLayoutAssetPlugin {
    fn build(&self, app: &mut App) {
        app.init_asset::<GardenLayout>()
            .register_asset_loader(GardenLayoutLoader);
    }
}

// ---------- Layout definition (data form) ----------

/// One batch of same-kind instances sharing a placement policy.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GroupDef {
    /// Human-readable name (unique within a layout; used in logs).
    pub name: String,
    pub kind: InstanceKind,
    pub policy: PlacementPolicy,
    pub count: u32,
    pub radius: RadiusBand,
}

/// Ground reference grid drawn with gizmos.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GridDef {
    /// Cells per side.
    #[serde(default = "default_grid_cells")]
    pub cells: u32,
    /// Cell edge length (meters).
    #[serde(default = "default_grid_spacing")]
    pub spacing: f32,
}

impl Default for GridDef {
    fn default() -> Self {
        Self { cells: default_grid_cells(), spacing: default_grid_spacing() }
    }
}

fn default_grid_cells() -> u32 {
    30
}
fn default_grid_spacing() -> f32 {
    1.0
}

#[derive(Asset, TypePath, Clone, Debug, Serialize, Deserialize)]
pub struct GardenLayout {
    /// Fixed seed; `None` draws a fresh one each launch.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Spawn the potted plant at the origin.
    #[serde(default = "default_focal_point")]
    pub focal_point: bool,
    #[serde(default)]
    pub grid: GridDef,
    pub groups: Vec<GroupDef>,
}

fn default_focal_point() -> bool {
    true
}

/// Upper bound on instances across all groups of one layout.
pub const MAX_INSTANCES: u64 = 100_000;

impl GardenLayout {
    /// Group names must be unique and the instance total bounded; bands are
    /// already checked on construction.
    pub fn validate(&self) -> Result<(), GardenLayoutLoadError> {
        let mut seen = HashSet::with_capacity(self.groups.len());
        for group in &self.groups {
            if !seen.insert(group.name.as_str()) {
                return Err(GardenLayoutLoadError::DuplicateGroup(group.name.clone()));
            }
        }
        if !(self.grid.spacing.is_finite() && self.grid.spacing > 0.0) {
            return Err(GardenLayoutLoadError::GridSpacing(self.grid.spacing));
        }
        let total = self.total_instances();
        if total > MAX_INSTANCES {
            return Err(GardenLayoutLoadError::TooManyInstances { total, max: MAX_INSTANCES });
        }
        Ok(())
    }

    /// Sum of every group's count.
    pub fn total_instances(&self) -> u64 {
        self.groups.iter().map(|g| u64::from(g.count)).sum()
    }
}

impl Default for GardenLayout {
    /// Three structured rings of flowers/fruit/trees, plus scattered fill.
    fn default() -> Self {
        let group = |name: &str, kind, policy, count, min, max| GroupDef {
            name: name.to_string(),
            kind,
            policy,
            count,
            radius: RadiusBand::new(min, max).expect("built-in bands are valid"),
        };
        Self {
            seed: None,
            focal_point: true,
            grid: GridDef::default(),
            groups: vec![
                group("inner flower ring", InstanceKind::Flower, PlacementPolicy::Ring, 20, 2.5, 4.0),
                group("outer flower ring", InstanceKind::Flower, PlacementPolicy::Ring, 28, 4.5, 6.0),
                group("fruit ring", InstanceKind::FruitPlant, PlacementPolicy::Ring, 8, 6.5, 8.0),
                group("tree ring", InstanceKind::Tree, PlacementPolicy::Ring, 12, 9.0, 12.0),
                group("scattered flowers", InstanceKind::Flower, PlacementPolicy::Disc, 24, 1.5, 12.0),
                group("scattered plants", InstanceKind::SmallPlant, PlacementPolicy::Disc, 30, 1.5, 12.0),
                group("ground cover", InstanceKind::GroundCover, PlacementPolicy::Disc, 60, 1.2, 14.0),
            ],
        }
    }
}

// ---------- Asset loader for `.garden.ron` ----------

#[derive(Default)]
pub struct GardenLayoutLoader;

impl AssetLoader for GardenLayoutLoader {
    type Asset = GardenLayout;
    type Settings = ();
    type Error = GardenLayoutLoadError;

    fn extensions(&self) -> &[&str] {
        &["garden.ron"]
    }

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        parse_layout(&bytes)
    }
}

/// Parse + validate. Split out of the loader so it can run without an asset server.
pub fn parse_layout(bytes: &[u8]) -> Result<GardenLayout, GardenLayoutLoadError> {
    let layout: GardenLayout =
        ron::de::from_bytes(bytes).map_err(|e| GardenLayoutLoadError::Ron(e.to_string()))?;
    layout.validate()?;
    Ok(layout)
}

// ---------- Loader errors ----------

#[derive(thiserror::Error, Debug)]
pub enum GardenLayoutLoadError {
    #[error("I/O while reading layout: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(String),
    #[error("Duplicate group name '{0}'")]
    DuplicateGroup(String),
    #[error("Grid spacing must be positive and finite (got {0})")]
    GridSpacing(f32),
    #[error("Layout asks for {total} instances (max {max})")]
    TooManyInstances { total: u64, max: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_is_valid() {
        let layout = GardenLayout::default();
        layout.validate().unwrap();
        assert_eq!(layout.groups.len(), 7);
        assert_eq!(layout.total_instances(), 20 + 28 + 8 + 12 + 24 + 30 + 60);
    }

    #[test]
    fn shipped_layout_parses() {
        let bytes = include_bytes!("../../assets/garden/layout.garden.ron");
        let layout = parse_layout(bytes).unwrap();
        let inner = &layout.groups[0];
        assert_eq!(inner.kind, InstanceKind::Flower);
        assert_eq!(inner.policy, PlacementPolicy::Ring);
        assert_eq!(inner.count, 20);
        assert_eq!((inner.radius.min(), inner.radius.max()), (2.5, 4.0));
        assert_eq!(layout.seed, None);
        assert_eq!(layout.groups.len(), 7);
    }

    #[test]
    fn inverted_band_fails_to_parse() {
        let src = r#"(
            groups: [
                (name: "bad", kind: Tree, policy: Ring, count: 3, radius: (min: 9.0, max: 2.0)),
            ],
        )"#;
        assert!(matches!(parse_layout(src.as_bytes()), Err(GardenLayoutLoadError::Ron(_))));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let src = r#"(
            groups: [
                (name: "a", kind: Tree, policy: Ring, count: 1, radius: (min: 1.0, max: 2.0)),
                (name: "a", kind: Flower, policy: Disc, count: 1, radius: (min: 1.0, max: 2.0)),
            ],
        )"#;
        assert!(matches!(
            parse_layout(src.as_bytes()),
            Err(GardenLayoutLoadError::DuplicateGroup(name)) if name == "a"
        ));
    }

    #[test]
    fn oversized_counts_are_rejected() {
        let src = r#"(
            groups: [
                (name: "a", kind: Flower, policy: Disc, count: 4000000000, radius: (min: 1.0, max: 2.0)),
                (name: "b", kind: Flower, policy: Disc, count: 4000000000, radius: (min: 1.0, max: 2.0)),
            ],
        )"#;
        assert!(matches!(
            parse_layout(src.as_bytes()),
            Err(GardenLayoutLoadError::TooManyInstances { total: 8_000_000_000, max: MAX_INSTANCES })
        ));

        let single = r#"(
            groups: [
                (name: "a", kind: Tree, policy: Ring, count: 100001, radius: (min: 1.0, max: 2.0)),
            ],
        )"#;
        assert!(matches!(
            parse_layout(single.as_bytes()),
            Err(GardenLayoutLoadError::TooManyInstances { total: 100_001, .. })
        ));
    }

    #[test]
    fn omitted_fields_take_defaults() {
        let src = r#"(groups: [])"#;
        let layout = parse_layout(src.as_bytes()).unwrap();
        assert_eq!(layout.seed, None);
        assert!(layout.focal_point);
        assert_eq!(layout.grid.cells, 30);
        assert_eq!(layout.total_instances(), 0);
    }
}
