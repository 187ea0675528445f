use bevy::prelude::*;
use crate::input::CameraOrbit;

#[derive(Component)]
pub struct MainCamera;

pub fn setup(
    mut commands: Commands,
) {
    // 1) Lights: fixed intensities, no animation
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });

    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 15.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        Name::new("Fill"),
        PointLight {
            intensity: 400_000.0,
            range: 30.0,
            color: Color::srgb(1.0, 0.95, 0.85),
            ..default()
        },
        Transform::from_xyz(-6.0, 6.0, -6.0),
    ));

    // Spot on the potted plant
    commands.spawn((
        Name::new("Spot"),
        SpotLight {
            intensity: 600_000.0,
            range: 20.0,
            inner_angle: 0.25,
            outer_angle: 0.45,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(0.0, 8.0, 3.0).looking_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
    ));

    // 2) Camera
    let orbit = CameraOrbit {
        focus: Vec3::new(0.0, 1.0, 0.0),
        radius: 16.0,
        yaw: std::f32::consts::FRAC_PI_4,
        pitch: 0.45,
    };
    commands.spawn((
        Camera3d::default(),
        orbit.transform(),
        MainCamera,
        orbit,
    ));
}
