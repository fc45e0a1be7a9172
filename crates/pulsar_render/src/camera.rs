use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;
use bevy::render::camera::Viewport;
use bevy::window::PrimaryWindow;

use super::plugin::ViewSettings;

/// Orbit camera around the center of mass.
/// Drag with the left mouse button to rotate, scroll to zoom. Motion is damped:
/// input moves the targets and the camera eases toward them.
#[derive(Component, Debug, Clone)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub radius: f32,
    pub azimuth: f32,
    pub elevation: f32,
    pub target_radius: f32,
    pub target_azimuth: f32,
    pub target_elevation: f32,
    /// Radians per pixel of mouse motion
    pub sensitivity: f32,
    /// Easing rate (1/s)
    pub damping: f32,
    /// Radius the camera returns to on reset
    pub home_radius: f32,
}

impl OrbitCamera {
    pub fn new(radius: f32) -> Self {
        Self {
            focus: Vec3::ZERO,
            radius,
            azimuth: 0.0,
            elevation: 0.0,
            target_radius: radius,
            target_azimuth: 0.0,
            target_elevation: 0.0,
            sensitivity: 0.005,
            damping: 8.0,
            home_radius: radius,
        }
    }

    pub fn position(&self) -> Vec3 {
        orbit_position(self.focus, self.radius, self.azimuth, self.elevation)
    }

    /// Ease current values toward the targets over `dt` seconds
    pub fn ease(&mut self, dt: f32) {
        let k = 1.0 - (-self.damping * dt).exp();
        self.radius += (self.target_radius - self.radius) * k;
        self.azimuth += (self.target_azimuth - self.azimuth) * k;
        self.elevation += (self.target_elevation - self.elevation) * k;
    }
}

const MIN_RADIUS: f32 = 3.0;
const MAX_RADIUS: f32 = 200.0;
const MAX_ELEVATION: f32 = 1.5;

/// Camera position on a sphere around `focus`.
/// azimuth = elevation = 0 puts the camera on +z looking down -z.
pub fn orbit_position(focus: Vec3, radius: f32, azimuth: f32, elevation: f32) -> Vec3 {
    let (sin_az, cos_az) = azimuth.sin_cos();
    let (sin_el, cos_el) = elevation.sin_cos();
    focus + radius * Vec3::new(cos_el * sin_az, sin_el, cos_el * cos_az)
}

/// Spawn the 3D camera looking at the center of mass
pub fn spawn_camera(mut commands: Commands, settings: Res<ViewSettings>) {
    let config = &settings.0;
    let orbit = OrbitCamera::new(config.camera_distance);
    let pos = orbit.position();

    info!("Camera spawned at ({:.0}, {:.0}, {:.0})", pos.x, pos.y, pos.z);

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: config.camera_fov_deg.to_radians(),
            near: config.camera_near,
            far: config.camera_far,
            ..default()
        }),
        Transform::from_translation(pos).looking_at(orbit.focus, Vec3::Y),
        orbit,
    ));

    // The 3D camera only covers the area left of the panel, so the UI gets
    // its own full-window camera drawn on top
    commands.spawn((
        Camera2d,
        Camera {
            order: 1,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        IsDefaultUiCamera,
    ));
}

/// Mouse orbit + zoom with damping
pub fn orbit_camera_system(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut query: Query<(&mut Transform, &mut OrbitCamera)>,
) {
    let Ok((mut transform, mut cam)) = query.get_single_mut() else {
        return;
    };

    if mouse_button.pressed(MouseButton::Left) {
        let delta = mouse_motion.delta;
        cam.target_azimuth -= delta.x * cam.sensitivity;
        cam.target_elevation = (cam.target_elevation + delta.y * cam.sensitivity)
            .clamp(-MAX_ELEVATION, MAX_ELEVATION);
    }

    let scroll = mouse_scroll.delta.y;
    if scroll != 0.0 {
        cam.target_radius = (cam.target_radius * (1.0 - scroll * 0.1)).clamp(MIN_RADIUS, MAX_RADIUS);
    }

    // [C] back to the starting view
    if keyboard.just_pressed(KeyCode::KeyC) {
        cam.target_radius = cam.home_radius;
        cam.target_azimuth = 0.0;
        cam.target_elevation = 0.0;
    }

    cam.ease(time.delta_secs());
    transform.translation = cam.position();
    transform.look_at(cam.focus, Vec3::Y);
}

/// Keep the 3D view out from under the parameter panel on the right
pub fn fit_viewport_system(
    settings: Res<ViewSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cameras: Query<&mut Camera, With<OrbitCamera>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(size) = scene_viewport_size(
        window.physical_width(),
        window.physical_height(),
        settings.0.panel_width * window.scale_factor(),
    ) else {
        return;
    };

    for mut camera in cameras.iter_mut() {
        let current = camera.viewport.as_ref().map(|v| v.physical_size);
        if current != Some(size) {
            camera.viewport = Some(Viewport {
                physical_position: UVec2::ZERO,
                physical_size: size,
                ..default()
            });
        }
    }
}

/// Physical size of the 3D viewport once the panel is carved off.
/// `None` when the window is too small to show anything.
pub fn scene_viewport_size(width: u32, height: u32, panel_px: f32) -> Option<UVec2> {
    let scene_width = width.saturating_sub(panel_px.max(0.0).round() as u32);
    (scene_width > 0 && height > 0).then(|| UVec2::new(scene_width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_position_on_z_axis() {
        let cam = OrbitCamera::new(20.0);
        assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 0.0, 20.0), 1e-5));
    }

    #[test]
    fn test_orbit_keeps_distance() {
        for (az, el) in [(0.3, 0.2), (2.0, -1.0), (-1.2, 1.4)] {
            let p = orbit_position(Vec3::ZERO, 15.0, az, el);
            assert!((p.length() - 15.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_ease_converges() {
        let mut cam = OrbitCamera::new(20.0);
        cam.target_radius = 40.0;
        cam.target_azimuth = 1.0;
        for _ in 0..300 {
            cam.ease(1.0 / 60.0);
        }
        assert!((cam.radius - 40.0).abs() < 1e-3);
        assert!((cam.azimuth - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_viewport_excludes_panel() {
        assert_eq!(scene_viewport_size(1600, 900, 300.0), Some(UVec2::new(1300, 900)));
        assert_eq!(scene_viewport_size(200, 900, 300.0), None);
        assert_eq!(scene_viewport_size(1600, 0, 300.0), None);
    }
}
