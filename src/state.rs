use bevy::prelude::*;

/// Mirrors the external XR runtime. Only `xr::sync_xr_mode` moves this.
#[derive(States, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XrMode {
    /// Normal navigation with orbit controls.
    #[default]
    Inactive,
    Vr,
    Ar,
}
