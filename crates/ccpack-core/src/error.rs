//! Error types for quadray and Cartesian coordinate handling.
//!
//! One rule: validation happens at the boundary. Once a [`Quadray`]
//! has been built through a validating path, every operation on it is
//! total and infallible.
//!
//! [`Quadray`]: crate::Quadray

use std::error::Error;
use std::fmt;

/// Errors from validating quadray construction and Cartesian conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CoordError {
    /// A component passed to a validating constructor or conversion was
    /// NaN or infinite. Canonicalization is undefined over such values,
    /// so they are rejected before one can exist.
    NonFinite {
        /// Name of the offending component (`"a"`–`"d"` for quadray
        /// input, `"x"`–`"z"` for Cartesian input).
        axis: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { axis, value } => {
                write!(f, "non-finite coordinate component {axis} = {value}")
            }
        }
    }
}

impl Error for CoordError {}
