pub mod assembler;
pub mod core;
pub mod generators;
pub mod layout;
pub mod palette;
pub mod placement;
pub mod plugin;
pub mod primitives;
pub mod recipe;

pub use plugin::GardenPlugin;
