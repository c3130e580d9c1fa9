use std::fmt;

/// Errors raised while building or evaluating a scenario model.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A scalar input failed validation, either against the mathematical
    /// domain of its distribution family or against its slider bounds.
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// Two variate arrays that must be combined element-wise have
    /// different lengths.
    ShapeMismatch { left: usize, right: usize },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidParameter {
                name,
                value,
                reason,
            } => {
                write!(f, "invalid parameter {name}={value}: {reason}")
            }
            ModelError::ShapeMismatch { left, right } => {
                write!(f, "variate array length mismatch: {left} vs {right}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
