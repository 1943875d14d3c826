//! Error types for lattice index conversion.
//!
//! Indices are plain `i32` triples; once one exists every store
//! operation over it is total. Errors arise only at the float-to-integer
//! conversion boundary, where a quadray or Cartesian value is mapped
//! onto the lattice.

use std::error::Error;
use std::fmt;

use ccpack_core::CoordError;

/// Errors from quadray/Cartesian to lattice-index conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LatticeError {
    /// A floored or rounded lattice axis fell outside the supported
    /// range ([`AXIS_MIN`]..=[`AXIS_MAX`]), or the axis value was not
    /// finite to begin with.
    ///
    /// [`AXIS_MIN`]: crate::LatticeIndex::AXIS_MIN
    /// [`AXIS_MAX`]: crate::LatticeIndex::AXIS_MAX
    IndexOutOfRange {
        /// Which lattice axis overflowed (`"i"`, `"j"`, or `"k"`).
        axis: &'static str,
        /// The unrounded axis value.
        value: f64,
    },
    /// The Cartesian input to a snap was rejected by quadray conversion.
    NonFiniteCartesian {
        /// The underlying coordinate error.
        reason: CoordError,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { axis, value } => {
                write!(f, "lattice axis {axis} = {value} outside supported index range")
            }
            Self::NonFiniteCartesian { reason } => {
                write!(f, "cartesian input rejected: {reason}")
            }
        }
    }
}

impl Error for LatticeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NonFiniteCartesian { reason } => Some(reason),
            _ => None,
        }
    }
}

impl From<CoordError> for LatticeError {
    fn from(reason: CoordError) -> Self {
        Self::NonFiniteCartesian { reason }
    }
}
