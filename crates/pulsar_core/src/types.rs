use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParameterError;

/// The user-editable simulation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterName {
    PulsarMass,
    CompanionMass,
    OrbitalInclination,
    PulsarSpinFrequency,
    BeamConeAngle,
    BeamInclination,
    TimeSpeed,
}

impl ParameterName {
    /// Every recognized parameter, in panel order
    pub const ALL: [ParameterName; 7] = [
        Self::PulsarMass,
        Self::CompanionMass,
        Self::OrbitalInclination,
        Self::PulsarSpinFrequency,
        Self::BeamConeAngle,
        Self::BeamInclination,
        Self::TimeSpeed,
    ];

    /// External key used by input collaborators
    pub fn key(&self) -> &'static str {
        match self {
            Self::PulsarMass => "pulsarMass",
            Self::CompanionMass => "companionMass",
            Self::OrbitalInclination => "orbitalInclination",
            Self::PulsarSpinFrequency => "pulsarSpinFrequency",
            Self::BeamConeAngle => "beamConeAngle",
            Self::BeamInclination => "beamInclination",
            Self::TimeSpeed => "timeSpeed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PulsarMass => "Pulsar Mass",
            Self::CompanionMass => "Companion Mass",
            Self::OrbitalInclination => "Orbital Inclination",
            Self::PulsarSpinFrequency => "Spin Frequency",
            Self::BeamConeAngle => "Beam Cone Angle",
            Self::BeamInclination => "Beam Inclination",
            Self::TimeSpeed => "Time Speed",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::PulsarMass | Self::CompanionMass => "M☉",
            Self::OrbitalInclination | Self::BeamConeAngle | Self::BeamInclination => "°",
            Self::PulsarSpinFrequency => "Hz",
            Self::TimeSpeed => "x",
        }
    }

    /// Keyboard increment for the parameter panel
    pub fn step(&self) -> f64 {
        match self {
            Self::PulsarMass | Self::CompanionMass => 0.1,
            Self::OrbitalInclination | Self::BeamInclination => 5.0,
            Self::BeamConeAngle => 1.0,
            Self::PulsarSpinFrequency => 0.1,
            Self::TimeSpeed => 0.1,
        }
    }

    pub fn domain(&self) -> Domain {
        match self {
            Self::PulsarMass | Self::CompanionMass => Domain::Positive,
            Self::PulsarSpinFrequency | Self::TimeSpeed => Domain::NonNegative,
            Self::OrbitalInclination | Self::BeamInclination => Domain::Closed(0.0, 180.0),
            Self::BeamConeAngle => Domain::Open(0.0, 90.0),
        }
    }

    /// Check that `value` is finite and inside this parameter's domain
    pub fn validate(&self, value: f64) -> Result<(), ParameterError> {
        let reason = if !value.is_finite() {
            Some("value must be finite")
        } else {
            self.domain().violation(value)
        };
        match reason {
            Some(reason) => Err(ParameterError::InvalidParameterValue {
                name: *self,
                value,
                reason,
            }),
            None => Ok(()),
        }
    }

    /// Whether changing this parameter invalidates the derived orbital radii
    pub fn affects_radii(&self) -> bool {
        matches!(self, Self::PulsarMass | Self::CompanionMass)
    }

    /// Whether changing this parameter invalidates the beam geometry
    pub fn affects_beams(&self) -> bool {
        matches!(self, Self::BeamConeAngle | Self::BeamInclination)
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ParameterName {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.key() == s)
            .ok_or_else(|| ParameterError::UnknownParameter(s.to_string()))
    }
}

/// Accepted range for a parameter value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Domain {
    /// value > 0
    Positive,
    /// value >= 0
    NonNegative,
    /// lo <= value <= hi
    Closed(f64, f64),
    /// lo < value < hi
    Open(f64, f64),
}

impl Domain {
    fn violation(&self, value: f64) -> Option<&'static str> {
        match *self {
            Self::Positive if value <= 0.0 => Some("value must be positive"),
            Self::NonNegative if value < 0.0 => Some("value must not be negative"),
            Self::Closed(lo, hi) if value < lo || value > hi => Some("value out of range"),
            Self::Open(lo, hi) if value <= lo || value >= hi => Some("value out of range"),
            _ => None,
        }
    }
}

/// A single parameter edit, validated before it is committed to the store
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetParameter {
    pub name: ParameterName,
    pub value: f64,
}

impl SetParameter {
    pub fn new(name: ParameterName, value: f64) -> Self {
        Self { name, value }
    }

    /// Build a command from an external `(key, value)` pair
    pub fn from_key(key: &str, value: f64) -> Result<Self, ParameterError> {
        Ok(Self::new(key.parse()?, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for name in ParameterName::ALL {
            assert_eq!(name.key().parse::<ParameterName>(), Ok(name));
        }
    }

    #[test]
    fn test_unknown_key() {
        let err = "warpFactor".parse::<ParameterName>().unwrap_err();
        assert_eq!(err, ParameterError::UnknownParameter("warpFactor".into()));
        assert!(SetParameter::from_key("warpFactor", 5.0).is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        for name in ParameterName::ALL {
            assert!(name.validate(f64::NAN).is_err(), "{name} accepted NaN");
            assert!(name.validate(f64::INFINITY).is_err(), "{name} accepted inf");
        }
    }

    #[test]
    fn test_validate_domains() {
        assert!(ParameterName::PulsarMass.validate(-1.0).is_err());
        assert!(ParameterName::PulsarMass.validate(0.0).is_err());
        assert!(ParameterName::PulsarMass.validate(0.01).is_ok());

        assert!(ParameterName::TimeSpeed.validate(0.0).is_ok());
        assert!(ParameterName::TimeSpeed.validate(-0.1).is_err());

        assert!(ParameterName::OrbitalInclination.validate(0.0).is_ok());
        assert!(ParameterName::OrbitalInclination.validate(180.0).is_ok());
        assert!(ParameterName::OrbitalInclination.validate(180.5).is_err());

        // Cone angle is open at both ends: tan() blows up at 90°
        assert!(ParameterName::BeamConeAngle.validate(0.0).is_err());
        assert!(ParameterName::BeamConeAngle.validate(90.0).is_err());
        assert!(ParameterName::BeamConeAngle.validate(89.0).is_ok());
    }

    #[test]
    fn test_error_message_names_parameter() {
        let err = ParameterName::CompanionMass.validate(-2.0).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("companionMass"), "{msg}");
        assert!(msg.contains("positive"), "{msg}");
    }
}
