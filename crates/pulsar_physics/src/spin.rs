use std::f64::consts::TAU;

/// Spin angle advance (radians) for `dt` seconds at `frequency` rotations per second
pub fn spin_increment(frequency: f64, dt: f64) -> f64 {
    frequency * dt * TAU
}

/// Accumulated rotation of the pulsar about its spin axis.
///
/// This is the only path-dependent quantity in the simulation. It integrates
/// real frame time, so it is unaffected by the orbital time multiplier.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpinAccumulator {
    angle: f64,
}

impl SpinAccumulator {
    /// Radians since start, never wrapped
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Advance by one frame. Negative or non-finite deltas are dropped.
    pub fn advance(&mut self, frequency: f64, dt: f64) -> f64 {
        if dt.is_finite() && dt > 0.0 {
            self.angle += spin_increment(frequency, dt);
        }
        self.angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_second_is_one_turn_per_hertz() {
        let mut spin = SpinAccumulator::default();
        for _ in 0..60 {
            spin.advance(1.0, 1.0 / 60.0);
        }
        assert!((spin.angle() - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_monotonic() {
        let mut spin = SpinAccumulator::default();
        let mut last = spin.angle();
        for i in 0..100 {
            let a = spin.advance(2.5, 0.016 + i as f64 * 1e-4);
            assert!(a > last);
            last = a;
        }
    }

    #[test]
    fn test_bad_delta_ignored() {
        let mut spin = SpinAccumulator::default();
        spin.advance(1.0, 0.5);
        let a = spin.angle();
        spin.advance(1.0, -0.5);
        spin.advance(1.0, f64::NAN);
        assert_eq!(spin.angle(), a);
    }

    #[test]
    fn test_zero_frequency_holds_still() {
        let mut spin = SpinAccumulator::default();
        spin.advance(0.0, 10.0);
        assert_eq!(spin.angle(), 0.0);
    }
}
