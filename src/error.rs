//! Error types for field configuration and point access.

use core::fmt;

/// Errors returned when configuring a field or addressing its points.
///
/// Stepping the simulation never fails; bad per-tick input is treated as
/// "no effect".
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Stiffness must lie in (0, 0.25); larger values diverge under explicit Euler.
    InvalidStiffness,
    /// Damping must lie in (0, 1).
    InvalidDamping,
    /// A radius, speed, width, age or force limit must be positive and finite.
    NonPositiveParameter { name: &'static str },
    /// A strength must be non-negative and finite.
    NegativeStrength { name: &'static str },
    /// Point index is out of bounds.
    PointOutOfBounds { index: usize, count: usize },
    /// Pinned points cannot be moved.
    PointPinned { index: usize },
    /// A position or velocity contained NaN or infinity.
    NonFiniteValue,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidStiffness => write!(f, "stiffness must be in (0, 0.25)"),
            FieldError::InvalidDamping => write!(f, "damping must be in (0, 1)"),
            FieldError::NonPositiveParameter { name } => {
                write!(f, "{} must be positive and finite", name)
            }
            FieldError::NegativeStrength { name } => {
                write!(f, "{} must be non-negative and finite", name)
            }
            FieldError::PointOutOfBounds { index, count } => {
                write!(f, "point index {} out of bounds (count: {})", index, count)
            }
            FieldError::PointPinned { index } => write!(f, "point {} is pinned", index),
            FieldError::NonFiniteValue => write!(f, "value must be finite"),
        }
    }
}
