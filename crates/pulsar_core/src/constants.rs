// Visualization-scale units.
// The binary is drawn with a fixed separation between the two bodies, so
// distances are scene units rather than AU, and the orbital period comes out
// in "simulated seconds" instead of days. Masses are still in solar masses.

/// Semi-major axis of the relative orbit (constant separation of the pair)
pub const SEPARATION: f64 = 10.0;

// Default parameter values (binary with a 1.4 M☉ neutron star)
pub const DEFAULT_PULSAR_MASS: f64 = 1.4;
pub const DEFAULT_COMPANION_MASS: f64 = 0.8;
pub const DEFAULT_ORBITAL_INCLINATION: f64 = 90.0;
pub const DEFAULT_SPIN_FREQUENCY: f64 = 1.0;
pub const DEFAULT_BEAM_CONE_ANGLE: f64 = 20.0;
pub const DEFAULT_BEAM_INCLINATION: f64 = 45.0;
pub const DEFAULT_TIME_SPEED: f64 = 1.0;

/// Radius of the pulsar sphere in scene units
pub const PULSAR_BODY_RADIUS: f32 = 1.5;

/// Radius of the companion sphere in scene units
pub const COMPANION_BODY_RADIUS: f32 = 1.0;

/// Length of each emission cone, measured from the pulsar center
pub const BEAM_LENGTH: f32 = 10.0;

/// Radius of the unscaled cone mesh at its wide end.
/// The per-beam transverse scale (tan of the cone angle) is applied on top.
pub const BEAM_BASE_RADIUS: f32 = 0.5;
