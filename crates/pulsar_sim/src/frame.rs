use bevy::prelude::*;
use pulsar_physics::beam::BeamGeometry;
use pulsar_physics::orbit::OrbitalState;
use std::f64::consts::TAU;

/// Everything the renderer needs for one frame.
///
/// `pulsar` and `companion` are world transforms. The beam pair is parented
/// to the pulsar, so `beam_pair` is local to the pulsar and `beams` are local
/// to the pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransforms {
    pub pulsar: Transform,
    pub companion: Transform,
    pub beam_pair: Transform,
    pub beams: [Transform; 2],
    /// Simulated (time-speed scaled) seconds this frame was evaluated at
    pub sim_time: f64,
    /// Orbital phase in radians, unwrapped
    pub orbital_phase: f64,
    /// Accumulated spin angle in radians, unwrapped
    pub spin_angle: f64,
}

impl FrameTransforms {
    pub fn compose(orbit: &OrbitalState, spin_angle: f64, beams: &BeamGeometry, sim_time: f64) -> Self {
        // Wrap before narrowing so long sessions keep f32 precision
        let spin = spin_angle.rem_euclid(TAU) as f32;
        let scale = Vec3::new(beams.radial_scale as f32, 1.0, beams.radial_scale as f32);
        let [roll_a, roll_b] = BeamGeometry::beam_rolls();

        Self {
            pulsar: Transform::from_translation(to_vec3(orbit.pulsar_position))
                .with_rotation(Quat::from_rotation_y(spin)),
            companion: Transform::from_translation(to_vec3(orbit.companion_position)),
            beam_pair: Transform::from_rotation(Quat::from_rotation_z(beams.tilt as f32)),
            beams: [
                Transform::from_rotation(Quat::from_rotation_z(roll_a as f32)).with_scale(scale),
                Transform::from_rotation(Quat::from_rotation_z(roll_b as f32)).with_scale(scale),
            ],
            sim_time,
            orbital_phase: orbit.angle,
            spin_angle,
        }
    }

    /// World transform of beam `index`, resolved through the pulsar and the pair
    pub fn beam_world(&self, index: usize) -> Transform {
        self.pulsar
            .mul_transform(self.beam_pair)
            .mul_transform(self.beams[index % 2])
    }

    /// World-space emission direction of beam `index` (the cone's +y axis)
    pub fn beam_direction(&self, index: usize) -> Vec3 {
        self.beam_world(index).rotation * Vec3::Y
    }
}

fn to_vec3(p: [f64; 3]) -> Vec3 {
    Vec3::new(p[0] as f32, p[1] as f32, p[2] as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulsar_core::SimulationParameters;
    use pulsar_physics::orbit;

    fn frame_at(t: f64, spin: f64) -> FrameTransforms {
        let params = SimulationParameters::default();
        let state = orbit::evaluate(t, &params).unwrap();
        FrameTransforms::compose(&state, spin, &BeamGeometry::from_params(&params), t)
    }

    #[test]
    fn test_beams_inherit_pulsar_position() {
        let f = frame_at(17.0, 1.3);
        for i in 0..2 {
            assert!(f.beam_world(i).translation.abs_diff_eq(f.pulsar.translation, 1e-5));
        }
    }

    #[test]
    fn test_beam_directions_opposite() {
        for spin in [0.0, 0.7, 2.0, 5.5] {
            let f = frame_at(3.0, spin);
            let sum = f.beam_direction(0) + f.beam_direction(1);
            assert!(sum.length() < 1e-5, "spin={spin} sum={sum}");
        }
    }

    #[test]
    fn test_beam_scale() {
        let f = frame_at(0.0, 0.0);
        let s = 20f32.to_radians().tan();
        for beam in f.beams {
            assert!(beam.scale.abs_diff_eq(Vec3::new(s, 1.0, s), 1e-6));
        }
    }

    #[test]
    fn test_spin_rotates_about_y() {
        let f = frame_at(0.0, std::f64::consts::FRAC_PI_2);
        let x = f.pulsar.rotation * Vec3::X;
        assert!(x.abs_diff_eq(Vec3::NEG_Z, 1e-6), "x axis -> {x}");
        // Spin axis itself is untouched
        assert!((f.pulsar.rotation * Vec3::Y).abs_diff_eq(Vec3::Y, 1e-6));
    }

    #[test]
    fn test_beam_tilt_about_spin_frame_z() {
        let f = frame_at(0.0, 0.0);
        let dir = f.beam_direction(0);
        let tilt = std::f32::consts::FRAC_PI_4;
        assert!(dir.abs_diff_eq(Vec3::new(-tilt.sin(), tilt.cos(), 0.0), 1e-6));
    }
}
