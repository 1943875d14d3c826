//! Quadray coordinates: four-component tetrahedral addressing.
//!
//! A quadray locates a point by its projections onto the four rays from
//! the center of a regular tetrahedron to its vertices. Adding the same
//! constant to all four components does not move the point, so every
//! point has a family of representations; the canonical representative
//! is the one whose minimum component is zero.
//!
//! Scale conventions follow the IVM (see [`crate::ivm`]): unit-radius
//! balls, touching centers at Cartesian distance 2, and the fixed √2
//! factor relating raw components to Cartesian units.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::CoordError;
use crate::ivm::ROOT2;
use crate::Cartesian;

/// A four-component tetrahedral coordinate.
///
/// Immutable value type: arithmetic and conversions return new
/// instances, each reduced to canonical form (minimum component zero).
/// Equality via `==` compares canonical forms exactly, which is reliable
/// for integer-valued components; float-valued workflows should use
/// [`Quadray::approx_eq`].
///
/// # Examples
///
/// ```
/// use ccpack_core::Quadray;
///
/// // A CCP neighbour step: one ball diameter away from the origin.
/// let q = Quadray::new(2.0, 1.0, 1.0, 0.0)?;
/// assert!((q.magnitude() - 2.0).abs() < 1e-12);
///
/// // Representations differing by a uniform shift are the same point.
/// let shifted = Quadray::new(3.0, 2.0, 2.0, 1.0)?;
/// assert_eq!(q, shifted);
/// # Ok::<(), ccpack_core::CoordError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Quadray {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Quadray {
    /// The origin of the tetrahedral frame.
    pub const ORIGIN: Quadray = Quadray::from_components(0.0, 0.0, 0.0, 0.0);

    /// Unit ray toward the first tetrahedron vertex.
    pub const A: Quadray = Quadray::from_components(1.0, 0.0, 0.0, 0.0);

    /// Unit ray toward the second tetrahedron vertex.
    pub const B: Quadray = Quadray::from_components(0.0, 1.0, 0.0, 0.0);

    /// Unit ray toward the third tetrahedron vertex.
    pub const C: Quadray = Quadray::from_components(0.0, 0.0, 1.0, 0.0);

    /// Unit ray toward the fourth tetrahedron vertex.
    pub const D: Quadray = Quadray::from_components(0.0, 0.0, 0.0, 1.0);

    // ── Construction ─────────────────────────────────────────────────

    /// Build a quadray, validating that every component is finite.
    ///
    /// The stored components are kept as given; call
    /// [`Quadray::canonical`] for the zero-minimum representative.
    ///
    /// # Errors
    ///
    /// [`CoordError::NonFinite`] if any component is NaN or infinite.
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Result<Self, CoordError> {
        for (axis, value) in [("a", a), ("b", b), ("c", c), ("d", d)] {
            if !value.is_finite() {
                return Err(CoordError::NonFinite { axis, value });
            }
        }
        Ok(Self { a, b, c, d })
    }

    /// Build a quadray from raw components without validation.
    ///
    /// For compile-time constants and other known-finite values; use
    /// [`Quadray::new`] when the components come from untrusted input.
    pub const fn from_components(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Convert a Cartesian vector into the canonical quadray for the
    /// same point.
    ///
    /// The positive part of each Cartesian axis feeds two of the four
    /// components and the negative part the other two, inverting
    /// [`Quadray::to_cartesian`]; the result is canonicalized.
    ///
    /// # Errors
    ///
    /// [`CoordError::NonFinite`] if any input component is NaN or
    /// infinite.
    pub fn from_cartesian(v: &Cartesian) -> Result<Self, CoordError> {
        for (axis, value) in [("x", v.x), ("y", v.y), ("z", v.z)] {
            if !value.is_finite() {
                return Err(CoordError::NonFinite { axis, value });
            }
        }
        let xp = v.x.max(0.0);
        let xn = (-v.x).max(0.0);
        let yp = v.y.max(0.0);
        let yn = (-v.y).max(0.0);
        let zp = v.z.max(0.0);
        let zn = (-v.z).max(0.0);
        Ok(Self {
            a: (xp + yp + zp) / ROOT2,
            b: (xn + yn + zp) / ROOT2,
            c: (xn + yp + zn) / ROOT2,
            d: (xp + yn + zn) / ROOT2,
        }
        .canonical())
    }

    // ── Components ───────────────────────────────────────────────────

    /// Component along ray A.
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// Component along ray B.
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// Component along ray C.
    pub const fn c(&self) -> f64 {
        self.c
    }

    /// Component along ray D.
    pub const fn d(&self) -> f64 {
        self.d
    }

    /// All four components in `[a, b, c, d]` order.
    pub const fn components(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    // ── Canonical form ───────────────────────────────────────────────

    /// The canonical representative: subtract the minimum component
    /// from all four, leaving at least one zero.
    ///
    /// Ties produce more than one zero; that is still canonical.
    pub fn canonical(&self) -> Self {
        let m = self.a.min(self.b).min(self.c).min(self.d);
        Self {
            a: self.a - m,
            b: self.b - m,
            c: self.c - m,
            d: self.d - m,
        }
    }

    /// True when the minimum component is exactly zero.
    pub fn is_canonical(&self) -> bool {
        self.a.min(self.b).min(self.c).min(self.d) == 0.0
    }

    // ── Arithmetic ───────────────────────────────────────────────────

    /// Componentwise sum, canonicalized.
    pub fn add(&self, other: &Quadray) -> Self {
        Self {
            a: self.a + other.a,
            b: self.b + other.b,
            c: self.c + other.c,
            d: self.d + other.d,
        }
        .canonical()
    }

    /// Componentwise difference, canonicalized.
    pub fn sub(&self, other: &Quadray) -> Self {
        Self {
            a: self.a - other.a,
            b: self.b - other.b,
            c: self.c - other.c,
            d: self.d - other.d,
        }
        .canonical()
    }

    /// Componentwise multiply by a scalar, canonicalized.
    ///
    /// The factor may be negative or fractional; canonical reduction
    /// applies either way.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            a: self.a * factor,
            b: self.b * factor,
            c: self.c * factor,
            d: self.d * factor,
        }
        .canonical()
    }

    // ── Cartesian conversion ─────────────────────────────────────────

    /// The Cartesian image of this quadray.
    ///
    /// `x = (a − b − c + d)/√2`, `y = (a − b + c − d)/√2`,
    /// `z = (a + b − c − d)/√2`. Representations of the same point all
    /// map to the same vector: the sign pattern cancels any uniform
    /// shift.
    pub fn to_cartesian(&self) -> Cartesian {
        Cartesian::new(
            (self.a - self.b - self.c + self.d) / ROOT2,
            (self.a - self.b + self.c - self.d) / ROOT2,
            (self.a + self.b - self.c - self.d) / ROOT2,
        )
    }

    // ── Metric ───────────────────────────────────────────────────────

    /// Euclidean length of the Cartesian image.
    ///
    /// Computed directly from components via the representative-
    /// invariant form `|q|² = (4·Σaᵢ² − (Σaᵢ)²) / 2`, which agrees with
    /// [`Quadray::to_cartesian`] followed by [`Cartesian::length`].
    pub fn magnitude(&self) -> f64 {
        let sum = self.a + self.b + self.c + self.d;
        let sum_sq =
            self.a * self.a + self.b * self.b + self.c * self.c + self.d * self.d;
        ((4.0 * sum_sq - sum * sum) / 2.0).max(0.0).sqrt()
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Quadray) -> f64 {
        self.sub(other).magnitude()
    }

    /// Angle between the two position vectors, in degrees.
    ///
    /// Returns 0 if either vector is zero. The angle between distinct
    /// unit rays ([`Quadray::A`]–[`Quadray::D`]) is the tetrahedral
    /// central angle, ≈ 109.4712°.
    pub fn angle_between(&self, other: &Quadray) -> f64 {
        let u = self.to_cartesian();
        let v = other.to_cartesian();
        let lengths = u.length() * v.length();
        if lengths == 0.0 {
            return 0.0;
        }
        let cos = (u.dot(&v) / lengths).clamp(-1.0, 1.0);
        cos.acos().to_degrees()
    }

    // ── Equality ─────────────────────────────────────────────────────

    /// Canonical-form componentwise equality within `epsilon`.
    pub fn approx_eq(&self, other: &Quadray, epsilon: f64) -> bool {
        let u = self.canonical();
        let v = other.canonical();
        (u.a - v.a).abs() <= epsilon
            && (u.b - v.b).abs() <= epsilon
            && (u.c - v.c).abs() <= epsilon
            && (u.d - v.d).abs() <= epsilon
    }
}

impl PartialEq for Quadray {
    /// Exact componentwise equality of canonical forms.
    fn eq(&self, other: &Self) -> bool {
        let u = self.canonical();
        let v = other.canonical();
        u.a == v.a && u.b == v.b && u.c == v.c && u.d == v.d
    }
}

impl Add for Quadray {
    type Output = Quadray;

    fn add(self, rhs: Quadray) -> Quadray {
        Quadray::add(&self, &rhs)
    }
}

impl Sub for Quadray {
    type Output = Quadray;

    fn sub(self, rhs: Quadray) -> Quadray {
        Quadray::sub(&self, &rhs)
    }
}

impl Mul<f64> for Quadray {
    type Output = Quadray;

    fn mul(self, rhs: f64) -> Quadray {
        self.scale(rhs)
    }
}

impl Neg for Quadray {
    type Output = Quadray;

    fn neg(self) -> Quadray {
        self.scale(-1.0)
    }
}

impl fmt::Display for Quadray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.a, self.b, self.c, self.d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    // ── Canonical form ────────────────────────────────────────────

    #[test]
    fn canonical_subtracts_the_minimum() {
        let q = Quadray::from_components(3.0, 1.0, 2.0, 1.0).canonical();
        assert_eq!(q.components(), [2.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn canonical_of_uniform_components_is_origin() {
        let q = Quadray::from_components(5.0, 5.0, 5.0, 5.0).canonical();
        assert_eq!(q.components(), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn canonical_handles_negative_minimum() {
        let q = Quadray::from_components(0.0, -2.0, 1.0, -1.0).canonical();
        assert_eq!(q.components(), [2.0, 0.0, 3.0, 1.0]);
        assert!(q.is_canonical());
    }

    #[test]
    fn canonical_is_idempotent() {
        let q = Quadray::from_components(4.0, 1.5, 3.0, 2.0);
        assert_eq!(q.canonical().canonical(), q.canonical());
    }

    // ── Equality ──────────────────────────────────────────────────

    #[test]
    fn shifted_representations_are_equal() {
        let q = Quadray::from_components(1.0, 2.0, 0.0, 1.0);
        let shifted = Quadray::from_components(4.0, 5.0, 3.0, 4.0);
        assert_eq!(q, shifted);
    }

    #[test]
    fn distinct_points_are_unequal() {
        assert_ne!(Quadray::A, Quadray::B);
        assert_ne!(Quadray::A, Quadray::ORIGIN);
    }

    #[test]
    fn approx_eq_tolerates_small_drift() {
        let q = Quadray::from_components(1.0, 2.0, 0.0, 1.0);
        let drifted = Quadray::from_components(1.0 + 1e-10, 2.0, 0.0, 1.0);
        assert!(q.approx_eq(&drifted, 1e-6));
        assert!(!q.approx_eq(&drifted, 1e-12));
    }

    // ── Validation ────────────────────────────────────────────────

    #[test]
    fn new_rejects_non_finite_components() {
        for (idx, axis) in ["a", "b", "c", "d"].iter().enumerate() {
            let mut parts = [0.0; 4];
            parts[idx] = f64::NAN;
            let err = Quadray::new(parts[0], parts[1], parts[2], parts[3]);
            match err {
                Err(CoordError::NonFinite { axis: got, .. }) => assert_eq!(&got, axis),
                other => panic!("expected NonFinite for {axis}, got {other:?}"),
            }
        }
        assert!(Quadray::new(1.0, 2.0, f64::INFINITY, 0.0).is_err());
        assert!(Quadray::new(1.0, 2.0, 3.0, 4.0).is_ok());
    }

    #[test]
    fn from_cartesian_rejects_non_finite_input() {
        let bad = Cartesian::new(0.0, f64::NEG_INFINITY, 0.0);
        match Quadray::from_cartesian(&bad) {
            Err(CoordError::NonFinite { axis, .. }) => assert_eq!(axis, "y"),
            other => panic!("expected NonFinite, got {other:?}"),
        }
    }

    // ── Conversion ────────────────────────────────────────────────

    #[test]
    fn unit_rays_map_to_symmetric_vertices() {
        let inv = 1.0 / ROOT2;
        assert!(Quadray::A
            .to_cartesian()
            .approx_eq(&Cartesian::new(inv, inv, inv), EPS));
        assert!(Quadray::B
            .to_cartesian()
            .approx_eq(&Cartesian::new(-inv, -inv, inv), EPS));
        assert!(Quadray::C
            .to_cartesian()
            .approx_eq(&Cartesian::new(-inv, inv, -inv), EPS));
        assert!(Quadray::D
            .to_cartesian()
            .approx_eq(&Cartesian::new(inv, -inv, -inv), EPS));
    }

    #[test]
    fn unit_rays_share_one_length() {
        let expected = (1.5_f64).sqrt();
        for ray in [Quadray::A, Quadray::B, Quadray::C, Quadray::D] {
            assert!((ray.magnitude() - expected).abs() < EPS);
        }
    }

    #[test]
    fn cartesian_axes_round_trip() {
        for v in [
            Cartesian::new(1.0, 0.0, 0.0),
            Cartesian::new(0.0, 1.0, 0.0),
            Cartesian::new(0.0, 0.0, 1.0),
            Cartesian::new(-1.0, 0.0, 0.0),
            Cartesian::new(1.0, -2.0, 3.0),
        ] {
            let q = Quadray::from_cartesian(&v).unwrap();
            assert!(q.to_cartesian().approx_eq(&v, EPS), "round trip of {v}");
        }
    }

    #[test]
    fn from_cartesian_returns_canonical_form() {
        let q = Quadray::from_cartesian(&Cartesian::new(0.3, -1.7, 2.2)).unwrap();
        assert!(q.is_canonical());
    }

    // ── Arithmetic ────────────────────────────────────────────────

    #[test]
    fn add_matches_cartesian_sum() {
        let u = Quadray::from_components(2.0, 1.0, 1.0, 0.0);
        let v = Quadray::from_components(1.0, 2.0, 0.0, 1.0);
        let sum = (u + v).to_cartesian();
        let expected = u.to_cartesian() + v.to_cartesian();
        assert!(sum.approx_eq(&expected, EPS));
    }

    #[test]
    fn scale_by_negative_one_negates_the_image() {
        let q = Quadray::from_components(2.0, 1.0, 1.0, 0.0);
        let neg = -q;
        assert_eq!(neg.components(), [0.0, 1.0, 1.0, 2.0]);
        assert!(neg.to_cartesian().approx_eq(&-q.to_cartesian(), EPS));
    }

    #[test]
    fn arithmetic_results_are_canonical() {
        let u = Quadray::from_components(2.0, 1.0, 1.0, 0.0);
        let v = Quadray::from_components(1.0, 1.0, 1.0, 1.0);
        assert!((u + v).is_canonical());
        assert!((u - v).is_canonical());
        assert!((u * 2.5).is_canonical());
        assert!((u * -0.5).is_canonical());
    }

    // ── Metric ────────────────────────────────────────────────────

    #[test]
    fn neighbour_step_has_ball_diameter_length() {
        // (2,1,1,0) is a CCP neighbour displacement: two unit-radius
        // balls touching, centers 2 apart.
        let step = Quadray::from_components(2.0, 1.0, 1.0, 0.0);
        assert!((step.magnitude() - 2.0).abs() < EPS);
        assert!((Quadray::ORIGIN.distance_to(&step) - 2.0).abs() < EPS);
    }

    #[test]
    fn distance_between_adjacent_lattice_sites() {
        let u = Quadray::from_components(2.0, 1.0, 1.0, 0.0);
        let v = Quadray::from_components(2.0, 1.0, 0.0, 1.0);
        assert!((u.distance_to(&v) - 2.0).abs() < EPS);
        assert_eq!(u.distance_to(&u), 0.0);
    }

    #[test]
    fn tetrahedral_central_angle() {
        let angle = Quadray::A.angle_between(&Quadray::B);
        assert!((angle - 109.471_220_634_490_69).abs() < 1e-9);
    }

    #[test]
    fn angle_with_zero_vector_is_zero() {
        assert_eq!(Quadray::ORIGIN.angle_between(&Quadray::A), 0.0);
    }

    #[test]
    fn display_shows_raw_components() {
        let q = Quadray::from_components(1.0, 2.5, 0.0, 1.0);
        assert_eq!(q.to_string(), "(1, 2.5, 0, 1)");
    }

    // ── Properties ────────────────────────────────────────────────

    fn finite_component() -> impl Strategy<Value = f64> {
        -50.0..50.0_f64
    }

    fn any_quadray() -> impl Strategy<Value = Quadray> {
        (
            finite_component(),
            finite_component(),
            finite_component(),
            finite_component(),
        )
            .prop_map(|(a, b, c, d)| Quadray::from_components(a, b, c, d))
    }

    proptest! {
        #[test]
        fn canonical_has_zero_minimum(q in any_quadray()) {
            let c = q.canonical();
            let [a, b, cc, d] = c.components();
            let min = a.min(b).min(cc).min(d);
            prop_assert_eq!(min, 0.0);
            prop_assert!(a >= 0.0 && b >= 0.0 && cc >= 0.0 && d >= 0.0);
        }

        #[test]
        fn cartesian_round_trip(q in any_quadray()) {
            let back = Quadray::from_cartesian(&q.to_cartesian()).unwrap();
            prop_assert!(back.approx_eq(&q, 1e-9));
        }

        #[test]
        fn vector_round_trip(
            x in finite_component(),
            y in finite_component(),
            z in finite_component(),
        ) {
            let v = Cartesian::new(x, y, z);
            let back = Quadray::from_cartesian(&v).unwrap().to_cartesian();
            prop_assert!(back.approx_eq(&v, 1e-9));
        }

        #[test]
        fn uniform_shift_does_not_move_the_point(
            q in any_quadray(),
            t in -20.0..20.0_f64,
        ) {
            let [a, b, c, d] = q.components();
            let shifted = Quadray::from_components(a + t, b + t, c + t, d + t);
            prop_assert!(q.approx_eq(&shifted, 1e-9));
            prop_assert!(q.to_cartesian().approx_eq(&shifted.to_cartesian(), 1e-9));
        }

        #[test]
        fn canonicalization_commutes_with_add(u in any_quadray(), v in any_quadray()) {
            let direct = u.add(v);
            let pre_reduced = u.canonical().add(v.canonical());
            prop_assert!(direct.approx_eq(&pre_reduced, 1e-9));
        }

        #[test]
        fn scale_matches_cartesian_scaling(q in any_quadray(), s in -8.0..8.0_f64) {
            let scaled = q.scale(s).to_cartesian();
            let expected = q.to_cartesian() * s;
            prop_assert!(scaled.approx_eq(&expected, 1e-6));
        }

        #[test]
        fn magnitude_agrees_with_cartesian_length(q in any_quadray()) {
            let direct = q.magnitude();
            let via_cartesian = q.to_cartesian().length();
            prop_assert!((direct - via_cartesian).abs() < 1e-9);
        }
    }
}
