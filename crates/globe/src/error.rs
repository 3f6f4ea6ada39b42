//! Error types for ellipsoid construction and coordinate transforms.

use std::fmt;

/// Result type for globe operations.
pub type Result<T> = std::result::Result<T, Error>;

/// One of the three principal axes of an ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
            Axis::Z => f.write_str("z"),
        }
    }
}

/// Errors that can occur when building an ellipsoid or transforming a point.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A radius was negative (or NaN) at construction time.
    InvalidRadius {
        /// The first axis with an invalid radius.
        axis: Axis,
        /// The rejected value.
        value: f64,
    },
    /// Newton-Raphson surface scaling did not reach tolerance.
    ConvergenceFailure {
        /// Number of iterations performed.
        iterations: usize,
        /// Residual of the implicit surface equation after the last iteration.
        residual: f64,
    },
    /// A transform produced a non-finite value, typically from a zero radius
    /// or a point at the centre of the ellipsoid.
    NumericDegeneracy {
        /// The operation that degenerated.
        operation: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRadius { axis, value } => {
                write!(f, "invalid {axis} radius {value}: radii must be >= 0")
            }
            Error::ConvergenceFailure {
                iterations,
                residual,
            } => {
                write!(
                    f,
                    "surface scaling did not converge after {iterations} iterations (residual {residual:e})"
                )
            }
            Error::NumericDegeneracy { operation } => {
                write!(f, "{operation} produced a non-finite result")
            }
        }
    }
}

impl std::error::Error for Error {}
