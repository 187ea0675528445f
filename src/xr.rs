// src/xr.rs
//! Seam to the external XR runtime. The runtime owns the session lifecycle;
//! this module forwards user requests to it and mirrors its state into `XrMode`.

use std::fmt;

use bevy::prelude::*;

use crate::state::XrMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum XrSessionKind {
    Vr,
    Ar,
}

impl XrSessionKind {
    pub const fn mode(self) -> XrMode {
        match self {
            XrSessionKind::Vr => XrMode::Vr,
            XrSessionKind::Ar => XrMode::Ar,
        }
    }
}

impl fmt::Display for XrSessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            XrSessionKind::Vr => "VR",
            XrSessionKind::Ar => "AR",
        })
    }
}

impl From<Option<XrSessionKind>> for XrMode {
    fn from(active: Option<XrSessionKind>) -> Self {
        active.map_or(XrMode::Inactive, XrSessionKind::mode)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum XrError {
    #[error("{0} sessions are not supported on this device")]
    Unsupported(XrSessionKind),
    #[error("cannot start {requested}: a {active} session is already running")]
    AlreadyActive { requested: XrSessionKind, active: XrSessionKind },
}

/// Whatever actually drives the headset. Session state lives behind this trait.
pub trait XrRuntime: Send + Sync + 'static {
    fn supports(&self, kind: XrSessionKind) -> bool;
    fn request_session(&mut self, kind: XrSessionKind) -> Result<(), XrError>;
    fn end_session(&mut self);
    fn active_session(&self) -> Option<XrSessionKind>;
}

/// Desktop default: no headset, every request is declined.
#[derive(Default)]
pub struct UnavailableXrRuntime;

impl XrRuntime for UnavailableXrRuntime {
    fn supports(&self, _kind: XrSessionKind) -> bool { false }
    fn request_session(&mut self, kind: XrSessionKind) -> Result<(), XrError> {
        Err(XrError::Unsupported(kind))
    }
    fn end_session(&mut self) {}
    fn active_session(&self) -> Option<XrSessionKind> { None }
}

/// Accepts sessions immediately. Handy for previewing the XR flow on a desktop.
pub struct SimulatedXrRuntime {
    vr: bool,
    ar: bool,
    active: Option<XrSessionKind>,
}

impl SimulatedXrRuntime {
    pub fn new(vr: bool, ar: bool) -> Self {
        Self { vr, ar, active: None }
    }
}

impl XrRuntime for SimulatedXrRuntime {
    fn supports(&self, kind: XrSessionKind) -> bool {
        match kind {
            XrSessionKind::Vr => self.vr,
            XrSessionKind::Ar => self.ar,
        }
    }

    fn request_session(&mut self, kind: XrSessionKind) -> Result<(), XrError> {
        if !self.supports(kind) {
            return Err(XrError::Unsupported(kind));
        }
        if let Some(active) = self.active {
            return Err(XrError::AlreadyActive { requested: kind, active });
        }
        self.active = Some(kind);
        Ok(())
    }

    fn end_session(&mut self) {
        self.active = None;
    }

    fn active_session(&self) -> Option<XrSessionKind> {
        self.active
    }
}

#[derive(Resource)]
pub struct XrRuntimeHandle(pub Box<dyn XrRuntime>);

#[derive(Resource, Clone)]
pub struct XrSettings {
    /// Use `SimulatedXrRuntime` (VR + AR) instead of reporting no support.
    pub simulate: bool,
    /// Show the exit affordance next to the session buttons.
    pub exit_button: bool,
}
impl Default for XrSettings {
    fn default() -> Self {
        Self { simulate: false, exit_button: true }
    }
}

impl XrSettings {
    /// Settings for the binary: the `simulate-xr` cargo feature turns on the
    /// simulated runtime.
    pub fn from_features() -> Self {
        Self { simulate: cfg!(feature = "simulate-xr"), ..default() }
    }
}

/// A session button was pressed: start that session, or end it if it is the one running.
#[derive(Event, Clone, Copy, Debug)]
pub struct XrSessionToggle(pub XrSessionKind);

/// The exit affordance was clicked.
#[derive(Event, Clone, Copy, Debug, Default)]
pub struct ExitRequested;

pub struct XrPlugin;
impl Plugin for XrPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<XrSettings>()
            .init_state::<XrMode>()
            .add_event::<XrSessionToggle>()
            .add_event::<ExitRequested>()
            .add_systems(PreStartup, install_xr_runtime)
            .add_systems(
                Update,
                (handle_session_toggles, forward_exit_requests, sync_xr_mode).chain(),
            );
    }
}

fn install_xr_runtime(mut commands: Commands, settings: Res<XrSettings>) {
    let runtime: Box<dyn XrRuntime> = if settings.simulate {
        info!("XR: using simulated runtime");
        Box::new(SimulatedXrRuntime::new(true, true))
    } else {
        info!("XR: no runtime available; session buttons disabled");
        Box::new(UnavailableXrRuntime)
    };
    commands.insert_resource(XrRuntimeHandle(runtime));
}

pub fn handle_session_toggles(
    mut evr: EventReader<XrSessionToggle>,
    mut runtime: ResMut<XrRuntimeHandle>,
) {
    for XrSessionToggle(kind) in evr.read().copied() {
        if runtime.0.active_session() == Some(kind) {
            runtime.0.end_session();
            info!("XR: ended {kind} session");
            continue;
        }
        match runtime.0.request_session(kind) {
            Ok(()) => info!("XR: {kind} session started"),
            Err(e) => warn!("XR: {e}"),
        }
    }
}

/// End the running session if there is one; otherwise close the app.
pub fn forward_exit_requests(
    mut evr: EventReader<ExitRequested>,
    mut runtime: ResMut<XrRuntimeHandle>,
    mut exit: EventWriter<AppExit>,
) {
    if evr.read().count() == 0 {
        return;
    }
    if let Some(kind) = runtime.0.active_session() {
        runtime.0.end_session();
        info!("XR: exit requested, ended {kind} session");
    } else {
        info!("Exit requested");
        exit.write(AppExit::Success);
    }
}

pub fn sync_xr_mode(
    runtime: Res<XrRuntimeHandle>,
    state: Res<State<XrMode>>,
    mut next_state: ResMut<NextState<XrMode>>,
) {
    let mode = XrMode::from(runtime.0.active_session());
    if *state.get() != mode {
        debug!("XR: mode {:?} -> {:?}", state.get(), mode);
        next_state.set(mode);
    }
}
