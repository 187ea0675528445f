// src/garden/primitives.rs

use bevy::prelude::*;
use std::collections::HashMap;

use super::recipe::{Finish, Part, Primitive};

/// Shared unit meshes; every part scales one of these.
#[derive(Resource, Clone)]
pub struct PrimitiveMeshes {
    pub cylinder: Handle<Mesh>,
    pub cone: Handle<Mesh>,
    pub sphere: Handle<Mesh>,
}

impl PrimitiveMeshes {
    pub fn new(meshes: &mut Assets<Mesh>) -> Self {
        Self {
            cylinder: meshes.add(Cylinder::new(1.0, 1.0)),
            cone: meshes.add(Cone { radius: 1.0, height: 1.0 }),
            sphere: meshes.add(Sphere::new(1.0)),
        }
    }

    #[inline]
    pub fn for_primitive(&self, primitive: &Primitive) -> Handle<Mesh> {
        match primitive {
            Primitive::Cylinder { .. } => self.cylinder.clone(),
            Primitive::Cone { .. } => self.cone.clone(),
            Primitive::Sphere { .. } => self.sphere.clone(),
        }
    }
}

/// Startup: build the unit meshes once.
pub fn init_primitive_meshes(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    commands.insert_resource(PrimitiveMeshes::new(&mut meshes));
}

/// One material per (colour, finish) pair; palettes are small so this stays tiny.
#[derive(Resource, Default)]
pub struct MaterialCache {
    by_key: HashMap<([u8; 4], Finish), Handle<StandardMaterial>>,
}

impl MaterialCache {
    pub fn get_or_add(
        &mut self,
        color: Color,
        finish: Finish,
        materials: &mut Assets<StandardMaterial>,
    ) -> Handle<StandardMaterial> {
        let c = color.to_srgba();
        let rgba = [c.red, c.green, c.blue, c.alpha].map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8);
        let key = (rgba, finish);
        self.by_key
            .entry(key)
            .or_insert_with(|| {
                materials.add(StandardMaterial {
                    base_color: color,
                    perceptual_roughness: finish.roughness(),
                    metallic: 0.0,
                    ..default()
                })
            })
            .clone()
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }
}

/// Spawn `parts` as children of `root`.
pub fn spawn_parts(
    commands: &mut Commands,
    root: Entity,
    parts: &[Part],
    meshes: &PrimitiveMeshes,
    cache: &mut MaterialCache,
    materials: &mut Assets<StandardMaterial>,
) {
    let children: Vec<Entity> = parts
        .iter()
        .map(|part| {
            commands
                .spawn((
                    Mesh3d(meshes.for_primitive(&part.primitive)),
                    MeshMaterial3d(cache.get_or_add(part.color, part.finish, materials)),
                    part.transform(),
                ))
                .id()
        })
        .collect();
    commands.entity(root).add_children(&children);
}
