use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::setup::MainCamera;

pub const ROTATE_SPEED: f32 = 0.005; // radians per pixel
pub const PAN_SPEED: f32 = 0.0015; // fraction of radius per pixel
pub const MIN_RADIUS: f32 = 2.0;
pub const MAX_RADIUS: f32 = 60.0;
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.05;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct CameraOrbit {
    pub focus: Vec3,
    pub radius: f32,
    pub yaw: f32,
    /// Elevation above the ground plane (radians).
    pub pitch: f32,
}

impl CameraOrbit {
    pub fn orbit(&mut self, delta: Vec2) {
        self.yaw += delta.x * ROTATE_SPEED;
        self.pitch = (self.pitch + delta.y * ROTATE_SPEED).clamp(0.05, PITCH_LIMIT);
    }

    /// Slide the focus in the camera's screen plane.
    pub fn pan(&mut self, delta: Vec2, right: Vec3, up: Vec3) {
        let scale = self.radius * PAN_SPEED;
        self.focus += (-right * delta.x + up * delta.y) * scale;
    }

    pub fn zoom(&mut self, amount: f32) {
        self.radius = (self.radius - amount).clamp(MIN_RADIUS, MAX_RADIUS);
    }

    pub fn eye(&self) -> Vec3 {
        let xz_radius = self.radius * self.pitch.cos();
        self.focus
            + Vec3::new(
                xz_radius * self.yaw.cos(),
                self.radius * self.pitch.sin(),
                xz_radius * self.yaw.sin(),
            )
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.focus, Vec3::Y)
    }
}

/// Drag to orbit, right-drag to pan, scroll to zoom. Only runs outside XR.
/// Motion while a UI button is pressed belongs to the button.
pub fn camera_controller(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut motion_evr: EventReader<MouseMotion>,
    mut scroll_evr: EventReader<MouseWheel>,
    interactions: Query<&Interaction>,
    mut query: Query<(&mut Transform, &mut CameraOrbit), With<MainCamera>>,
) {
    let Ok((mut tf, mut orbit)) = query.single_mut() else { return; };

    let drag: Vec2 = motion_evr.read().map(|ev| ev.delta).sum();
    let on_button = interactions.iter().any(|i| *i == Interaction::Pressed);
    if !on_button {
        if mouse_buttons.pressed(MouseButton::Left) {
            orbit.orbit(drag);
        } else if mouse_buttons.pressed(MouseButton::Right) {
            let (right, up) = (tf.right().as_vec3(), tf.up().as_vec3());
            orbit.pan(drag, right, up);
        }
    }

    for ev in scroll_evr.read() {
        let amount = match ev.unit {
            MouseScrollUnit::Line => ev.y * 1.0,
            MouseScrollUnit::Pixel => ev.y * 0.02,
        };
        orbit.zoom(amount);
    }

    *tf = orbit.transform();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<ButtonInput<MouseButton>>()
            .add_event::<MouseMotion>()
            .add_event::<MouseWheel>()
            .add_systems(Update, camera_controller);
        app.world_mut().spawn((MainCamera, orbit(), Transform::default()));
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app
    }

    fn camera_orbit(app: &mut App) -> CameraOrbit {
        let mut q = app.world_mut().query::<&CameraOrbit>();
        *q.single(app.world()).unwrap()
    }

    #[test]
    fn left_drag_orbits() {
        let mut app = controller_app();
        app.world_mut().send_event(MouseMotion { delta: Vec2::new(40.0, 0.0) });
        app.update();
        assert!((camera_orbit(&mut app).yaw - 40.0 * ROTATE_SPEED).abs() < 1e-6);
    }

    #[test]
    fn pressing_a_button_does_not_orbit() {
        let mut app = controller_app();
        let button = app.world_mut().spawn(Interaction::Pressed).id();
        app.world_mut().send_event(MouseMotion { delta: Vec2::new(40.0, 0.0) });
        app.update();
        assert_eq!(camera_orbit(&mut app), orbit());

        // released: the next drag orbits again
        app.world_mut().entity_mut(button).insert(Interaction::None);
        app.world_mut().send_event(MouseMotion { delta: Vec2::new(40.0, 0.0) });
        app.update();
        assert_ne!(camera_orbit(&mut app).yaw, 0.0);
    }

    fn orbit() -> CameraOrbit {
        CameraOrbit { focus: Vec3::ZERO, radius: 10.0, yaw: 0.0, pitch: 0.5 }
    }

    #[test]
    fn eye_sits_on_the_sphere() {
        let mut o = orbit();
        o.orbit(Vec2::new(120.0, -40.0));
        assert!((o.eye().distance(o.focus) - o.radius).abs() < 1e-4);
    }

    #[test]
    fn pitch_never_flips_or_goes_underground() {
        let mut o = orbit();
        o.orbit(Vec2::new(0.0, 1e6));
        assert!(o.pitch < std::f32::consts::FRAC_PI_2);
        o.orbit(Vec2::new(0.0, -1e6));
        assert!(o.eye().y > 0.0);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut o = orbit();
        o.zoom(1_000.0);
        assert_eq!(o.radius, MIN_RADIUS);
        o.zoom(-1_000.0);
        assert_eq!(o.radius, MAX_RADIUS);
    }

    #[test]
    fn pan_moves_focus_and_eye_together() {
        let mut o = orbit();
        let before = o.eye() - o.focus;
        o.pan(Vec2::new(50.0, 0.0), Vec3::X, Vec3::Y);
        assert!(o.focus.x < 0.0);
        assert!(((o.eye() - o.focus) - before).length() < 1e-5);
    }
}
