use pulsar_core::constants::SEPARATION;
use pulsar_core::{ParameterError, SimulationParameters};
use std::f64::consts::TAU;

/// Orbital period for the visualization-scale binary.
/// Kepler's third law with G = 1 and a = SEPARATION: P = 2π √(a³ / M)
pub fn orbital_period(total_mass: f64) -> Result<f64, ParameterError> {
    if !total_mass.is_finite() || total_mass <= 0.0 {
        return Err(ParameterError::InvalidParameters(format!(
            "total mass must be positive to define an orbital period (got {total_mass})"
        )));
    }
    Ok(TAU * (SEPARATION.powi(3) / total_mass).sqrt())
}

/// Orbital phase angle (radians) after `t` simulated seconds.
/// Not wrapped, so it grows without bound with `t`.
pub fn orbital_phase(t: f64, total_mass: f64) -> Result<f64, ParameterError> {
    Ok(t / orbital_period(total_mass)? * TAU)
}

/// Positions of both bodies at a given phase.
///
/// The bodies sit on opposite sides of the origin. The inclination tilts the
/// out-of-plane component between the y and z axes: at 0° the orbit lies in
/// the x/z plane, at 90° in the x/y plane (edge-on to a camera on +z).
pub fn body_positions(
    angle: f64,
    pulsar_radius: f64,
    companion_radius: f64,
    inclination_deg: f64,
) -> ([f64; 3], [f64; 3]) {
    let inc = inclination_deg.to_radians();
    let (sin_a, cos_a) = angle.sin_cos();
    let (sin_i, cos_i) = inc.sin_cos();

    let pulsar = [
        -pulsar_radius * cos_a,
        -pulsar_radius * sin_a * sin_i,
        pulsar_radius * sin_a * cos_i,
    ];
    let companion = [
        companion_radius * cos_a,
        companion_radius * sin_a * sin_i,
        -companion_radius * sin_a * cos_i,
    ];
    (pulsar, companion)
}

/// Orbital part of one frame: phase plus both positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalState {
    /// Radians
    pub angle: f64,
    pub pulsar_position: [f64; 3],
    pub companion_position: [f64; 3],
}

/// Evaluate the orbit at simulated time `t`. Pure: no hidden state.
pub fn evaluate(t: f64, params: &SimulationParameters) -> Result<OrbitalState, ParameterError> {
    let angle = orbital_phase(t, params.total_mass())?;
    let (pulsar_position, companion_position) = body_positions(
        angle,
        params.pulsar_orbit_radius(),
        params.companion_orbit_radius(),
        params.orbital_inclination(),
    );
    Ok(OrbitalState {
        angle,
        pulsar_position,
        companion_position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulsar_core::{ParameterName, ParameterStore};

    const EPS: f64 = 1e-9;

    fn close(a: [f64; 3], b: [f64; 3], eps: f64) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < eps)
    }

    #[test]
    fn test_period_rejects_non_positive_mass() {
        assert!(orbital_period(0.0).is_err());
        assert!(orbital_period(-1.0).is_err());
        assert!(orbital_period(f64::NAN).is_err());
        assert!(matches!(
            orbital_phase(1.0, 0.0),
            Err(ParameterError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_period_value() {
        // 2π √(1000 / 2.2) ≈ 133.96
        let p = orbital_period(2.2).unwrap();
        assert!((p - TAU * (1000.0f64 / 2.2).sqrt()).abs() < EPS);
        assert!((p - 133.96).abs() < 0.01, "period = {p}");
        // Heavier binaries orbit faster
        assert!(orbital_period(4.0).unwrap() < p);
    }

    #[test]
    fn test_initial_positions_ignore_inclination() {
        let mut store = ParameterStore::new();
        for inc in [0.0, 30.0, 90.0, 180.0] {
            store.set(ParameterName::OrbitalInclination, inc).unwrap();
            let p = store.params();
            let state = evaluate(0.0, p).unwrap();
            assert_eq!(state.angle, 0.0);
            assert!(close(state.pulsar_position, [-p.pulsar_orbit_radius(), 0.0, 0.0], EPS));
            assert!(close(state.companion_position, [p.companion_orbit_radius(), 0.0, 0.0], EPS));
        }
    }

    #[test]
    fn test_bodies_opposite_through_origin() {
        let params = SimulationParameters::default();
        for t in [0.0, 3.7, 20.0, 55.5, 1000.0] {
            let s = evaluate(t, &params).unwrap();
            // Center of mass stays at the origin
            for axis in 0..3 {
                let com = params.pulsar_mass() * s.pulsar_position[axis]
                    + params.companion_mass() * s.companion_position[axis];
                assert!(com.abs() < 1e-9, "t={t} axis={axis} com={com}");
            }
            let dist: f64 = (0..3)
                .map(|i| (s.pulsar_position[i] - s.companion_position[i]).powi(2))
                .sum::<f64>()
                .sqrt();
            assert!((dist - SEPARATION).abs() < 1e-9, "t={t} dist={dist}");
        }
    }

    #[test]
    fn test_periodicity() {
        let params = SimulationParameters::default();
        let period = orbital_period(params.total_mass()).unwrap();
        for t in [0.0, 1.25, 42.0, 97.3] {
            let a = evaluate(t, &params).unwrap();
            let b = evaluate(t + period, &params).unwrap();
            assert!(close(a.pulsar_position, b.pulsar_position, 1e-9));
            assert!(close(a.companion_position, b.companion_position, 1e-9));
        }
    }

    #[test]
    fn test_face_on_orbit_is_flat() {
        let mut store = ParameterStore::new();
        store.set(ParameterName::OrbitalInclination, 0.0).unwrap();
        let params = store.params();
        let quarter = orbital_period(params.total_mass()).unwrap() / 4.0;
        for t in [quarter * 0.5, quarter, quarter * 3.0] {
            let s = evaluate(t, params).unwrap();
            assert!(s.pulsar_position[1].abs() < EPS);
            assert!(s.companion_position[1].abs() < EPS);
        }
        // A quarter orbit in, all displacement is along z
        let s = evaluate(quarter, params).unwrap();
        assert!((s.pulsar_position[2] - params.pulsar_orbit_radius()).abs() < 1e-9);
    }

    #[test]
    fn test_edge_on_orbit_maximizes_out_of_plane() {
        let mut store = ParameterStore::new();
        let quarter = orbital_period(store.params().total_mass()).unwrap() / 4.0;

        store.set(ParameterName::OrbitalInclination, 90.0).unwrap();
        let edge = evaluate(quarter, store.params()).unwrap();
        assert!(edge.pulsar_position[2].abs() < EPS);
        assert!((edge.pulsar_position[1].abs() - store.params().pulsar_orbit_radius()).abs() < 1e-9);

        for inc in [10.0, 45.0, 75.0] {
            store.set(ParameterName::OrbitalInclination, inc).unwrap();
            let s = evaluate(quarter, store.params()).unwrap();
            assert!(s.pulsar_position[1].abs() < edge.pulsar_position[1].abs());
        }
    }

    #[test]
    fn test_evaluate_idempotent() {
        let params = SimulationParameters::default();
        assert_eq!(evaluate(12.5, &params), evaluate(12.5, &params));
    }
}
