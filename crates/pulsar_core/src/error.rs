use crate::types::ParameterName;

/// Errors raised when editing or evaluating the simulation parameters.
///
/// All of them are precondition failures. The offending update is rejected
/// and the last valid state is kept.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    #[error("unknown parameter `{0}`")]
    UnknownParameter(String),

    #[error("invalid value {value} for `{name}`: {reason}")]
    InvalidParameterValue {
        name: ParameterName,
        value: f64,
        reason: &'static str,
    },

    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}
