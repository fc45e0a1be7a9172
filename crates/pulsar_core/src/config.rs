use serde::{Deserialize, Serialize};

/// Viewer configuration (window, camera, background)
///
/// Physical parameters are not part of this; they live in
/// [`crate::SimulationParameters`] and are edited at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    /// Width reserved on the right for the parameter panel (px)
    pub panel_width: f32,
    /// Initial camera distance from the center of mass
    pub camera_distance: f32,
    /// Vertical field of view in degrees
    pub camera_fov_deg: f32,
    pub camera_near: f32,
    pub camera_far: f32,
    /// Seed for the procedural starfield
    pub star_seed: u64,
    /// Number of background stars
    pub star_count: u32,
    /// Radius of the background shell the stars are placed on
    pub star_shell_radius: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            window_title: "Binary Pulsar".into(),
            window_width: 1600.0,
            window_height: 900.0,
            panel_width: 300.0,
            camera_distance: 20.0,
            camera_fov_deg: 75.0,
            camera_near: 0.1,
            camera_far: 1000.0,
            star_seed: 42,
            star_count: 1500,
            star_shell_radius: 500.0,
        }
    }
}
