use bevy::prelude::*;
use pulsar_core::ViewConfig;
use pulsar_render::plugin::{PulsarRenderPlugin, ViewSettings};
use pulsar_sim::pipeline::SimulationPlugin;

fn main() {
    let config = ViewConfig::default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: config.window_title.clone(),
                resolution: (config.window_width, config.window_height).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.0, 0.0, 0.02)))
        .insert_resource(ViewSettings(config))
        .add_plugins(SimulationPlugin)
        .add_plugins(PulsarRenderPlugin)
        .run();
}
