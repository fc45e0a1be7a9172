use bevy::prelude::*;
use pulsar_core::{ParameterError, SetParameter};
use pulsar_physics::orbit;

use super::frame::FrameTransforms;
use super::system::BinarySystem;

/// Bevy plugin for the simulation pipeline
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BinarySystem>()
            .init_resource::<CurrentFrame>()
            .add_event::<ParameterEdit>()
            .add_event::<ParameterRejected>()
            .add_systems(Startup, log_initial_state)
            .add_systems(
                Update,
                (apply_parameter_edits, simulation_tick)
                    .chain()
                    .in_set(SimulationSet),
            );
    }
}

/// Systems that edit parameters and advance the binary. Rendering runs after.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimulationSet;

/// Edit request coming from the UI
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum ParameterEdit {
    Set(SetParameter),
    ResetAll,
}

/// Sent back when an edit was refused
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ParameterRejected(pub ParameterError);

/// Latest frame produced by the simulation tick
#[derive(Resource, Debug, Default)]
pub struct CurrentFrame {
    pub transforms: Option<FrameTransforms>,
    /// Set while the evaluator is failing, so the error is logged once
    pub failing: bool,
}

impl CurrentFrame {
    /// Store the outcome of one tick. A failure keeps the last good frame.
    /// Returns the error only on the first failure of a streak.
    pub fn record(
        &mut self,
        result: Result<FrameTransforms, ParameterError>,
    ) -> Option<ParameterError> {
        match result {
            Ok(transforms) => {
                self.transforms = Some(transforms);
                self.failing = false;
                None
            }
            Err(e) => {
                let first = !self.failing;
                self.failing = true;
                first.then_some(e)
            }
        }
    }
}

fn log_initial_state(system: Res<BinarySystem>) {
    let p = system.params();
    let period = orbit::orbital_period(p.total_mass()).unwrap_or(f64::NAN);
    info!(
        "Binary: pulsar {:.2} M☉ at r={:.3}, companion {:.2} M☉ at r={:.3}, period {:.2}s",
        p.pulsar_mass(),
        p.pulsar_orbit_radius(),
        p.companion_mass(),
        p.companion_orbit_radius(),
        period
    );
}

/// Commit queued edits in arrival order; the last write before the tick wins
fn apply_parameter_edits(
    mut edits: EventReader<ParameterEdit>,
    mut rejected: EventWriter<ParameterRejected>,
    mut system: ResMut<BinarySystem>,
) {
    for edit in edits.read() {
        match *edit {
            ParameterEdit::Set(cmd) => match system.apply(cmd) {
                Ok(()) => {
                    if cmd.name.affects_radii() {
                        let p = system.params();
                        info!(
                            "Radii updated: pulsar {:.3}, companion {:.3}",
                            p.pulsar_orbit_radius(),
                            p.companion_orbit_radius()
                        );
                    }
                }
                Err(e) => {
                    warn!("Rejected edit: {e}");
                    rejected.send(ParameterRejected(e));
                }
            },
            ParameterEdit::ResetAll => {
                system.reset_parameters();
                info!("Parameters reset to defaults");
            }
        }
    }
}

/// Main simulation tick: evaluates the binary for this frame
fn simulation_tick(
    mut system: ResMut<BinarySystem>,
    mut frame: ResMut<CurrentFrame>,
    time: Res<Time>,
) {
    let result = system.tick(time.delta_secs_f64(), time.elapsed_secs_f64());
    if let Some(e) = frame.record(result) {
        error!("Frame evaluation failed: {e}");
    }
}
