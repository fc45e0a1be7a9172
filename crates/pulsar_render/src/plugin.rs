use bevy::prelude::*;
use pulsar_core::ViewConfig;
use pulsar_sim::pipeline::SimulationSet;

use super::camera;
use super::scene;
use super::starfield;
use super::ui;

/// Viewer configuration as a Bevy resource
#[derive(Resource, Debug, Clone, Default)]
pub struct ViewSettings(pub ViewConfig);

/// Render plugin: scene, camera, background and parameter panel.
/// Expects `SimulationPlugin` to be registered as well.
pub struct PulsarRenderPlugin;

impl Plugin for PulsarRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewSettings>()
            .init_resource::<ui::PanelState>()
            .add_systems(
                Startup,
                (
                    camera::spawn_camera,
                    scene::spawn_binary,
                    starfield::spawn_starfield,
                    ui::spawn_panel,
                ),
            )
            .add_systems(Update, ui::parameter_input_system.before(SimulationSet))
            .add_systems(
                Update,
                (
                    scene::sync_frame_transforms,
                    ui::collect_rejections,
                    ui::update_panel.after(ui::collect_rejections),
                    camera::orbit_camera_system,
                    camera::fit_viewport_system,
                )
                    .after(SimulationSet),
            );
    }
}
