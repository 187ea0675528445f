use bevy::prelude::*;

mod garden;
mod input;
mod setup;
mod state;
mod ui;
mod xr;

use garden::assembler::ActiveLayout;
use garden::plugin::draw_reference_grid;
use garden::GardenPlugin;
use input::camera_controller;
use state::XrMode;
use ui::{exit_button_interaction, refresh_xr_button_labels, spawn_xr_buttons, xr_button_interaction};
use xr::{XrPlugin, XrSettings};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Garden".into(),
                // Fill the page when built for the web
                fit_canvas_to_parent: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.62, 0.80, 0.95)))
        // `--features simulate-xr` previews the session flow without a headset
        .insert_resource(XrSettings::from_features())
        // domain plugins
        .add_plugins(XrPlugin)     // runtime seam + XrMode mirror
        .add_plugins(GardenPlugin) // layout -> plants
        // ground grid drawn with gizmos once a layout is active
        .add_systems(Update, draw_reference_grid.run_if(resource_exists::<ActiveLayout>))
        // camera, lights
        .add_systems(Startup, setup::setup)
        // XR affordances
        .add_systems(Startup, spawn_xr_buttons)
        .add_systems(Update, (xr_button_interaction, exit_button_interaction))
        .add_systems(Update, refresh_xr_button_labels.run_if(state_changed::<XrMode>))
        // orbit controls belong to the runtime while a session is up
        .add_systems(Update, camera_controller.run_if(in_state(XrMode::Inactive)))
        .run();
}
