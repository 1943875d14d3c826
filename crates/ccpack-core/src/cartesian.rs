//! Three-axis Cartesian vector, the interchange frame for quadrays.
//!
//! Conversions between [`Quadray`](crate::Quadray) and ordinary XYZ space
//! go through this type, and geometric distance is defined by its
//! Euclidean length. Plain value data: it carries whatever components it
//! was given, and validation (finiteness) happens where a `Cartesian`
//! crosses into quadray space.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A 3-component Cartesian vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cartesian {
    /// Component along the x axis.
    pub x: f64,
    /// Component along the y axis.
    pub y: f64,
    /// Component along the z axis.
    pub z: f64,
}

impl Cartesian {
    /// The zero vector.
    pub const ZERO: Cartesian = Cartesian {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Build a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Squared Euclidean length.
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Dot product with `other`.
    pub fn dot(&self, other: &Cartesian) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Cartesian) -> f64 {
        (*self - *other).length()
    }

    /// True when all three components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Componentwise equality within `epsilon`.
    pub fn approx_eq(&self, other: &Cartesian, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }
}

impl Add for Cartesian {
    type Output = Cartesian;

    fn add(self, rhs: Cartesian) -> Cartesian {
        Cartesian::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Cartesian {
    type Output = Cartesian;

    fn sub(self, rhs: Cartesian) -> Cartesian {
        Cartesian::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Cartesian {
    type Output = Cartesian;

    fn mul(self, rhs: f64) -> Cartesian {
        Cartesian::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Cartesian {
    type Output = Cartesian;

    fn neg(self) -> Cartesian {
        Cartesian::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Cartesian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
