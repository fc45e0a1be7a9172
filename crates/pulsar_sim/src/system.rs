use bevy::prelude::*;
use pulsar_core::{ParameterError, ParameterName, ParameterStore, SetParameter, SimulationParameters};
use pulsar_physics::beam::BeamGeometry;
use pulsar_physics::orbit;
use pulsar_physics::spin::SpinAccumulator;

use super::frame::FrameTransforms;

/// The running binary: live parameters plus the little state that is not a
/// pure function of them. Tracked as a Bevy Resource.
#[derive(Resource, Debug, Clone)]
pub struct BinarySystem {
    store: ParameterStore,
    /// Integrated pulsar rotation (real time, not time-speed scaled)
    spin: SpinAccumulator,
    /// Cached beam geometry, refreshed only on beam parameter edits
    beams: BeamGeometry,
    /// Number of successful ticks
    pub frame_count: u64,
}

impl Default for BinarySystem {
    fn default() -> Self {
        Self::new(ParameterStore::new())
    }
}

impl BinarySystem {
    pub fn new(store: ParameterStore) -> Self {
        let beams = BeamGeometry::from_params(store.params());
        Self {
            store,
            spin: SpinAccumulator::default(),
            beams,
            frame_count: 0,
        }
    }

    pub fn params(&self) -> &SimulationParameters {
        self.store.params()
    }

    pub fn spin_angle(&self) -> f64 {
        self.spin.angle()
    }

    pub fn beam_geometry(&self) -> &BeamGeometry {
        &self.beams
    }

    /// Apply one edit. On error nothing changes.
    pub fn apply(&mut self, cmd: SetParameter) -> Result<(), ParameterError> {
        self.store.apply(cmd)?;
        if cmd.name.affects_beams() {
            self.beams = BeamGeometry::from_params(self.store.params());
        }
        Ok(())
    }

    pub fn set(&mut self, name: ParameterName, value: f64) -> Result<(), ParameterError> {
        self.apply(SetParameter::new(name, value))
    }

    /// Restore default parameters. The spin angle is kept so the pulsar
    /// does not snap back.
    pub fn reset_parameters(&mut self) {
        self.store.reset();
        self.beams = BeamGeometry::from_params(self.store.params());
    }

    /// Evaluate a frame at simulated time `t` using the current spin angle.
    /// Does not advance any state.
    pub fn evaluate(&self, t: f64) -> Result<FrameTransforms, ParameterError> {
        let state = orbit::evaluate(t, self.store.params())?;
        Ok(FrameTransforms::compose(&state, self.spin.angle(), &self.beams, t))
    }

    /// Advance one rendered frame.
    ///
    /// `delta` and `elapsed` are real clock seconds. Orbital time is
    /// `elapsed * time_speed`; the spin integrates the unscaled `delta`.
    /// If the orbit cannot be evaluated the spin is left untouched.
    pub fn tick(&mut self, delta: f64, elapsed: f64) -> Result<FrameTransforms, ParameterError> {
        let params = self.store.params();
        let t = elapsed * params.time_speed();
        let state = orbit::evaluate(t, params)?;
        self.spin.advance(params.pulsar_spin_frequency(), delta);
        self.frame_count = self.frame_count.wrapping_add(1);
        Ok(FrameTransforms::compose(&state, self.spin.angle(), &self.beams, t))
    }
}
