// src/garden/recipe.rs
//! Primitive parts that generators assemble into a plant.
//! Recipes are plain data so they can be inspected without a renderer.

use bevy::prelude::*;

/// Shape of one part. Dimensions are baked into the part transform's scale,
/// since the render side shares unit meshes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Cylinder { radius: f32, height: f32 },
    Cone { radius: f32, height: f32 },
    /// Ellipsoid: a unit sphere stretched per axis.
    Sphere { radii: Vec3 },
}

impl Primitive {
    pub const fn sphere(r: f32) -> Self {
        Primitive::Sphere { radii: Vec3::splat(r) }
    }

    /// Scale that turns the shared unit mesh into this shape.
    pub fn unit_scale(&self) -> Vec3 {
        match *self {
            Primitive::Cylinder { radius, height } => Vec3::new(radius, height, radius),
            Primitive::Cone { radius, height } => Vec3::new(radius, height, radius),
            Primitive::Sphere { radii } => radii,
        }
    }
}

/// Static surface parameters. No textures, no animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Finish {
    /// Bark, soil, clay.
    Matte,
    /// Leaves and petals.
    Satin,
    /// Fruit skins.
    Glossy,
}

impl Finish {
    pub const fn roughness(self) -> f32 {
        match self {
            Finish::Matte => 0.95,
            Finish::Satin => 0.65,
            Finish::Glossy => 0.3,
        }
    }
}

/// One piece of a plant, positioned relative to the plant's root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Part {
    pub primitive: Primitive,
    pub translation: Vec3,
    pub rotation: Quat,
    pub color: Color,
    pub finish: Finish,
}

impl Part {
    pub fn new(primitive: Primitive, translation: Vec3, color: Color, finish: Finish) -> Self {
        Self { primitive, translation, rotation: Quat::IDENTITY, color, finish }
    }

    pub fn rotated(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Local transform with the primitive's dimensions folded into scale.
    pub fn transform(&self) -> Transform {
        Transform {
            translation: self.translation,
            rotation: self.rotation,
            scale: self.primitive.unit_scale(),
        }
    }
}

/// Anything that can be expanded into parts. Implemented by every style.
pub trait Recipe {
    fn parts(&self) -> Vec<Part>;
}
