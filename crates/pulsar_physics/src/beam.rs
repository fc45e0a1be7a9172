use pulsar_core::SimulationParameters;
use std::f64::consts::PI;

/// Beam-pair geometry derived from the beam parameters.
///
/// Only rebuilt when the cone angle or beam inclination changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamGeometry {
    /// Transverse (x/z) scale of each cone: tan(cone angle)
    pub radial_scale: f64,
    /// Rotation of the beam pair about the pulsar's local z axis, radians
    pub tilt: f64,
}

impl BeamGeometry {
    pub fn from_params(params: &SimulationParameters) -> Self {
        Self {
            radial_scale: radial_scale(params.beam_cone_angle()),
            tilt: params.beam_inclination().to_radians(),
        }
    }

    /// Local roll of each beam inside the pair: the second one points the other way
    pub fn beam_rolls() -> [f64; 2] {
        [0.0, PI]
    }
}

/// Transverse scale of a cone whose half-opening angle is `cone_angle_deg`
pub fn radial_scale(cone_angle_deg: f64) -> f64 {
    cone_angle_deg.to_radians().tan()
}

/// Unit emission axis of beam `index` (0 or 1) in the pulsar's spin frame
/// (before the spin rotation is applied).
pub fn beam_axis(geometry: &BeamGeometry, index: usize) -> [f64; 3] {
    let roll = geometry.tilt + BeamGeometry::beam_rolls()[index % 2];
    // Rotating +y about z by `roll`
    [-roll.sin(), roll.cos(), 0.0]
}
