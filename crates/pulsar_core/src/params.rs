use serde::Serialize;

use crate::constants::*;
use crate::error::ParameterError;
use crate::types::{ParameterName, SetParameter};

/// Physical parameters of the binary plus the quantities derived from them.
///
/// Fields are private so the derived radii can never drift from the masses;
/// all writes go through [`ParameterStore`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationParameters {
    /// Solar masses
    pulsar_mass: f64,
    /// Solar masses
    companion_mass: f64,
    /// Degrees, 90 = edge-on
    orbital_inclination: f64,
    /// Rotations per second (real time)
    pulsar_spin_frequency: f64,
    /// Half-opening angle of each emission cone, degrees
    beam_cone_angle: f64,
    /// Tilt of the beam axis relative to the spin axis, degrees
    beam_inclination: f64,
    /// Multiplier applied to the clock for orbital motion
    time_speed: f64,

    total_mass: f64,
    pulsar_orbit_radius: f64,
    companion_orbit_radius: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        let mut params = Self {
            pulsar_mass: DEFAULT_PULSAR_MASS,
            companion_mass: DEFAULT_COMPANION_MASS,
            orbital_inclination: DEFAULT_ORBITAL_INCLINATION,
            pulsar_spin_frequency: DEFAULT_SPIN_FREQUENCY,
            beam_cone_angle: DEFAULT_BEAM_CONE_ANGLE,
            beam_inclination: DEFAULT_BEAM_INCLINATION,
            time_speed: DEFAULT_TIME_SPEED,
            total_mass: 0.0,
            pulsar_orbit_radius: 0.0,
            companion_orbit_radius: 0.0,
        };
        params.update_radii();
        params
    }
}

impl SimulationParameters {
    pub fn pulsar_mass(&self) -> f64 {
        self.pulsar_mass
    }

    pub fn companion_mass(&self) -> f64 {
        self.companion_mass
    }

    pub fn orbital_inclination(&self) -> f64 {
        self.orbital_inclination
    }

    pub fn pulsar_spin_frequency(&self) -> f64 {
        self.pulsar_spin_frequency
    }

    pub fn beam_cone_angle(&self) -> f64 {
        self.beam_cone_angle
    }

    pub fn beam_inclination(&self) -> f64 {
        self.beam_inclination
    }

    pub fn time_speed(&self) -> f64 {
        self.time_speed
    }

    pub fn total_mass(&self) -> f64 {
        self.total_mass
    }

    /// Distance of the pulsar from the center of mass
    pub fn pulsar_orbit_radius(&self) -> f64 {
        self.pulsar_orbit_radius
    }

    /// Distance of the companion from the center of mass
    pub fn companion_orbit_radius(&self) -> f64 {
        self.companion_orbit_radius
    }

    /// Read a parameter by name
    pub fn get(&self, name: ParameterName) -> f64 {
        match name {
            ParameterName::PulsarMass => self.pulsar_mass,
            ParameterName::CompanionMass => self.companion_mass,
            ParameterName::OrbitalInclination => self.orbital_inclination,
            ParameterName::PulsarSpinFrequency => self.pulsar_spin_frequency,
            ParameterName::BeamConeAngle => self.beam_cone_angle,
            ParameterName::BeamInclination => self.beam_inclination,
            ParameterName::TimeSpeed => self.time_speed,
        }
    }

    fn slot_mut(&mut self, name: ParameterName) -> &mut f64 {
        match name {
            ParameterName::PulsarMass => &mut self.pulsar_mass,
            ParameterName::CompanionMass => &mut self.companion_mass,
            ParameterName::OrbitalInclination => &mut self.orbital_inclination,
            ParameterName::PulsarSpinFrequency => &mut self.pulsar_spin_frequency,
            ParameterName::BeamConeAngle => &mut self.beam_cone_angle,
            ParameterName::BeamInclination => &mut self.beam_inclination,
            ParameterName::TimeSpeed => &mut self.time_speed,
        }
    }

    fn update_radii(&mut self) {
        let (pulsar, companion) = orbit_radii(self.pulsar_mass, self.companion_mass);
        self.total_mass = self.pulsar_mass + self.companion_mass;
        self.pulsar_orbit_radius = pulsar;
        self.companion_orbit_radius = companion;
    }
}

/// Split the fixed separation between the two bodies so the center of mass
/// stays at the origin: `r_p * m_p == r_c * m_c` and `r_p + r_c == SEPARATION`.
/// Returns `(pulsar_radius, companion_radius)`.
pub fn orbit_radii(pulsar_mass: f64, companion_mass: f64) -> (f64, f64) {
    let total = pulsar_mass + companion_mass;
    (
        SEPARATION * (companion_mass / total),
        SEPARATION * (pulsar_mass / total),
    )
}

/// Owner of the live parameter set.
///
/// Edits are validated before they are committed. A rejected edit leaves
/// every stored value, derived ones included, exactly as it was.
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    params: SimulationParameters,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn get(&self, name: ParameterName) -> f64 {
        self.params.get(name)
    }

    /// Read a parameter by its external key
    pub fn get_by_key(&self, key: &str) -> Result<f64, ParameterError> {
        Ok(self.get(key.parse()?))
    }

    /// Validate and store `value`. Mass edits recompute the orbital radii.
    pub fn set(&mut self, name: ParameterName, value: f64) -> Result<(), ParameterError> {
        name.validate(value)?;
        if name.affects_radii() {
            let other = match name {
                ParameterName::PulsarMass => self.params.companion_mass,
                _ => self.params.pulsar_mass,
            };
            if !(value + other).is_finite() {
                return Err(ParameterError::InvalidParameterValue {
                    name,
                    value,
                    reason: "total mass must be finite",
                });
            }
        }
        *self.params.slot_mut(name) = value;
        if name.affects_radii() {
            self.params.update_radii();
        }
        Ok(())
    }

    /// Same as [`set`](Self::set) but resolves an external key first
    pub fn set_by_key(&mut self, key: &str, value: f64) -> Result<(), ParameterError> {
        self.set(key.parse()?, value)
    }

    pub fn apply(&mut self, cmd: SetParameter) -> Result<(), ParameterError> {
        self.set(cmd.name, cmd.value)
    }

    /// Restore every parameter to its default
    pub fn reset(&mut self) {
        self.params = SimulationParameters::default();
    }
}
