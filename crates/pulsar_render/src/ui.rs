use bevy::prelude::*;
use pulsar_core::{ParameterName, SetParameter};
use pulsar_physics::orbit;
use pulsar_sim::pipeline::{CurrentFrame, ParameterEdit, ParameterRejected};
use pulsar_sim::{BinarySystem, FrameTransforms};
use std::f64::consts::TAU;

use super::plugin::ViewSettings;

/// Marker for the parameter panel text
#[derive(Component)]
pub struct ParameterPanel;

/// Panel selection and feedback
#[derive(Resource, Default)]
pub struct PanelState {
    /// Index into `ParameterName::ALL`
    pub selected: usize,
    /// Last refused edit, shown until the next edit
    pub last_error: Option<String>,
}

impl PanelState {
    pub fn selected_name(&self) -> ParameterName {
        ParameterName::ALL[self.selected % ParameterName::ALL.len()]
    }
}

/// Spawn the parameter panel on the right edge of the window
pub fn spawn_panel(mut commands: Commands, settings: Res<ViewSettings>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                right: Val::Px(0.0),
                width: Val::Px(settings.0.panel_width),
                height: Val::Percent(100.0),
                padding: UiRect::all(Val::Px(12.0)),
                ..default()
            },
            BackgroundColor(Color::srgb(0.05, 0.05, 0.1)),
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new("Binary Pulsar"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgba(0.6, 1.0, 1.0, 0.9)),
                ParameterPanel,
            ));
        });
}

/// Value after moving `multiple` steps in direction `dir` (±1).
/// Snaps to the base step grid so repeated presses do not accumulate float noise.
pub fn stepped_value(current: f64, step: f64, multiple: f64, dir: f64) -> f64 {
    ((current + dir * step * multiple) / step).round() * step
}

/// Keyboard editing: [Up/Down] select, [Left/Right] adjust, [Shift] x10, [R] reset
pub fn parameter_input_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    system: Res<BinarySystem>,
    mut panel: ResMut<PanelState>,
    mut edits: EventWriter<ParameterEdit>,
) {
    let count = ParameterName::ALL.len();
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        panel.selected = (panel.selected + 1) % count;
    }
    if keyboard.just_pressed(KeyCode::ArrowUp) {
        panel.selected = (panel.selected + count - 1) % count;
    }

    let dir = if keyboard.just_pressed(KeyCode::ArrowRight) {
        1.0
    } else if keyboard.just_pressed(KeyCode::ArrowLeft) {
        -1.0
    } else {
        0.0
    };

    if dir != 0.0 {
        let name = panel.selected_name();
        let boost = if keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight) {
            10.0
        } else {
            1.0
        };
        let value = stepped_value(system.params().get(name), name.step(), boost, dir);
        edits.send(ParameterEdit::Set(SetParameter::new(name, value)));
        panel.last_error = None;
    }

    if keyboard.just_pressed(KeyCode::KeyR) {
        edits.send(ParameterEdit::ResetAll);
        panel.last_error = None;
    }
}

/// Surface refused edits in the panel
pub fn collect_rejections(mut rejected: EventReader<ParameterRejected>, mut panel: ResMut<PanelState>) {
    if let Some(ParameterRejected(e)) = rejected.read().last() {
        panel.last_error = Some(e.to_string());
    }
}

/// Build the panel text
pub fn format_panel(system: &BinarySystem, frame: Option<&FrameTransforms>, panel: &PanelState) -> String {
    let p = system.params();
    let mut lines = vec!["BINARY PULSAR".to_string(), String::new()];

    for (i, name) in ParameterName::ALL.iter().enumerate() {
        let cursor = if i == panel.selected % ParameterName::ALL.len() { ">" } else { " " };
        lines.push(format!(
            "{} {:<20} {:>7.2} {}",
            cursor,
            name.label(),
            p.get(*name),
            name.unit()
        ));
    }

    lines.push(String::new());
    lines.push(format!("Total mass:   {:.2} M☉", p.total_mass()));
    lines.push(format!("Pulsar orbit: {:.3}", p.pulsar_orbit_radius()));
    lines.push(format!("Comp. orbit:  {:.3}", p.companion_orbit_radius()));
    match orbit::orbital_period(p.total_mass()) {
        Ok(period) => lines.push(format!("Period:       {:.2} s", period)),
        Err(_) => lines.push("Period:       undefined".to_string()),
    }

    if let Some(f) = frame {
        lines.push(format!(
            "Phase:        {:.1}°",
            f.orbital_phase.rem_euclid(TAU).to_degrees()
        ));
        lines.push(format!("Rotations:    {:.1}", f.spin_angle / TAU));
        lines.push(format!("Sim time:     {:.1} s", f.sim_time));
    }

    if let Some(err) = &panel.last_error {
        lines.push(String::new());
        lines.push(format!("! {err}"));
    }

    lines.push(String::new());
    lines.push("[Up/Down] Select  [Left/Right] Adjust".to_string());
    lines.push("[Shift] x10  [R] Reset  [C] Camera".to_string());
    lines.push("[LMB+Drag] Orbit  [Scroll] Zoom".to_string());

    lines.join("\n")
}

/// Refresh the panel on edits, otherwise every 10th frame
pub fn update_panel(
    system: Res<BinarySystem>,
    frame: Res<CurrentFrame>,
    panel: Res<PanelState>,
    mut throttle: Local<u32>,
    mut query: Query<&mut Text, With<ParameterPanel>>,
) {
    *throttle = throttle.wrapping_add(1);
    if *throttle % 10 != 0 && !panel.is_changed() {
        return;
    }
    if let Ok(mut text) = query.get_single_mut() {
        **text = format_panel(&system, frame.transforms.as_ref(), &panel);
    }
}
