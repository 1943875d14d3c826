//! CCP lattice indexing: the integer frame over quadray space.
//!
//! Every ball center in a CCP aggregate sits on the lattice generated by
//! three of the twelve coordination steps. [`LatticeIndex`] addresses
//! those sites with an integer triple `(i, j, k)`; this module carries
//! the fixed offset table of all twelve directions, the linear transform
//! between canonical quadrays and indices, and the nearest-site snap for
//! drifted floating-point input.
//!
//! # Index frame
//!
//! The i/j/k axes follow the three neighbour steps [`STEP_I`],
//! [`STEP_J`], [`STEP_K`] and form an oblique frame: each step spans one
//! ball diameter (Cartesian length 2), and the axes meet at 60°/90°
//! rather than at right angles. Flooring or rounding the real-valued
//! frame is a per-axis operation in lattice space, not Euclidean space.
//!
//! # Transform
//!
//! For a canonical quadray `(a, b, c, d)`:
//!
//! ```text
//! k = ((b − d) − (a − c)) / 2
//! i = ((b − c) − k) / 2
//! j = ((a − d) − k) / 2
//! ```
//!
//! floored per axis. The inverse rebuilds the canonical quadray as
//! `STEP_I·i + STEP_J·j + STEP_K·k`; round-trip is exact for
//! lattice-aligned input because every intermediate stays integer-valued
//! in `f64`.

use ccpack_core::{Cartesian, Quadray};
use smallvec::SmallVec;

use crate::error::LatticeError;

/// All 12 CCP neighbour offsets in index space.
///
/// Index-aligned with [`NEIGHBOUR_STEPS`]: entry n is the (Δi, Δj, Δk)
/// image of that quadray displacement. Entries come in ± pairs, so the
/// neighbourhood is symmetric.
pub const CCP_OFFSETS: [(i32, i32, i32); 12] = [
    (1, 0, 0),   // +i
    (-1, 0, 0),  // -i
    (0, 1, 0),   // +j
    (0, -1, 0),  // -j
    (0, 0, 1),   // +k
    (0, 0, -1),  // -k
    (-1, 0, 1),  // k-i
    (1, 0, -1),  // i-k
    (0, -1, 1),  // k-j
    (0, 1, -1),  // j-k
    (1, 1, -1),  // i+j-k
    (-1, -1, 1), // k-i-j
];

/// Unit lattice step along the i axis, as a quadray displacement.
pub const STEP_I: Quadray = Quadray::from_components(1.0, 2.0, 0.0, 1.0);

/// Unit lattice step along the j axis.
pub const STEP_J: Quadray = Quadray::from_components(2.0, 1.0, 1.0, 0.0);

/// Unit lattice step along the k axis.
pub const STEP_K: Quadray = Quadray::from_components(1.0, 2.0, 1.0, 0.0);

/// The 12 CCP neighbour displacements in quadray space, index-aligned
/// with [`CCP_OFFSETS`].
///
/// These are exactly the twelve canonical permutations of (2, 1, 1, 0);
/// each has Cartesian length 2, one ball diameter.
pub const NEIGHBOUR_STEPS: [Quadray; 12] = [
    Quadray::from_components(1.0, 2.0, 0.0, 1.0), // +i
    Quadray::from_components(1.0, 0.0, 2.0, 1.0), // -i
    Quadray::from_components(2.0, 1.0, 1.0, 0.0), // +j
    Quadray::from_components(0.0, 1.0, 1.0, 2.0), // -j
    Quadray::from_components(1.0, 2.0, 1.0, 0.0), // +k
    Quadray::from_components(1.0, 0.0, 1.0, 2.0), // -k
    Quadray::from_components(1.0, 1.0, 2.0, 0.0), // k-i
    Quadray::from_components(1.0, 1.0, 0.0, 2.0), // i-k
    Quadray::from_components(0.0, 2.0, 1.0, 1.0), // k-j
    Quadray::from_components(2.0, 0.0, 1.0, 1.0), // j-k
    Quadray::from_components(2.0, 1.0, 0.0, 1.0), // i+j-k
    Quadray::from_components(0.0, 1.0, 2.0, 1.0), // k-i-j
];

/// An integer CCP lattice site along the three packing axes.
///
/// Plain value data: fields are public and construction is total.
/// Conversions from quadray or Cartesian space enforce the
/// [`AXIS_MIN`](Self::AXIS_MIN)..=[`AXIS_MAX`](Self::AXIS_MAX) bound;
/// hand-built indices are expected to respect it too, so that ±1
/// neighbour arithmetic never overflows.
///
/// # Examples
///
/// ```
/// use ccpack_lattice::{LatticeIndex, STEP_J};
///
/// let site = LatticeIndex::new(0, 1, 0);
/// assert_eq!(site.to_quadray(), STEP_J);
/// assert_eq!(LatticeIndex::from_quadray(&STEP_J)?, site);
/// assert_eq!(site.neighbours().len(), 12);
/// # Ok::<(), ccpack_lattice::LatticeError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LatticeIndex {
    /// Position along the i axis.
    pub i: i32,
    /// Position along the j axis.
    pub j: i32,
    /// Position along the k axis.
    pub k: i32,
}

impl LatticeIndex {
    /// Smallest supported axis value: one step inside `i32::MIN`, so
    /// neighbour offsets stay representable for any stored index.
    pub const AXIS_MIN: i32 = i32::MIN + 1;

    /// Largest supported axis value: one step inside `i32::MAX`, so
    /// neighbour offsets and half-open run ends (k + 1) stay
    /// representable.
    pub const AXIS_MAX: i32 = i32::MAX - 1;

    /// The lattice origin.
    pub const ORIGIN: LatticeIndex = LatticeIndex::new(0, 0, 0);

    /// Build an index from axis positions.
    pub const fn new(i: i32, j: i32, k: i32) -> Self {
        Self { i, j, k }
    }

    /// The index displaced by `(di, dj, dk)`.
    pub const fn offset(&self, di: i32, dj: i32, dk: i32) -> Self {
        Self::new(self.i + di, self.j + dj, self.k + dk)
    }

    /// The 12 neighbouring sites, in [`CCP_OFFSETS`] order.
    pub fn neighbours(&self) -> SmallVec<[LatticeIndex; 12]> {
        let mut result = SmallVec::new();
        for (di, dj, dk) in CCP_OFFSETS {
            result.push(self.offset(di, dj, dk));
        }
        result
    }

    /// Map a quadray onto the lattice, flooring each axis.
    ///
    /// Exact for lattice-aligned input; off-lattice input floors down in
    /// the oblique frame. Callers with accumulated floating drift should
    /// snap via [`nearest_lattice_point`] first.
    ///
    /// # Errors
    ///
    /// [`LatticeError::IndexOutOfRange`] when a floored axis leaves the
    /// supported range (or an intermediate overflowed to non-finite).
    pub fn from_quadray(q: &Quadray) -> Result<Self, LatticeError> {
        let (i, j, k) = lattice_axes(q);
        Ok(Self::new(
            check_axis("i", i, i.floor())?,
            check_axis("j", j, j.floor())?,
            check_axis("k", k, k.floor())?,
        ))
    }

    /// The canonical quadray for this lattice site.
    ///
    /// Rebuilt from the basis steps as `STEP_I·i + STEP_J·j + STEP_K·k`;
    /// the result is canonical because every arithmetic step reduces.
    pub fn to_quadray(&self) -> Quadray {
        STEP_I
            .scale(self.i as f64)
            .add(&STEP_J.scale(self.j as f64))
            .add(&STEP_K.scale(self.k as f64))
    }

    /// The Cartesian position of this lattice site.
    pub fn to_cartesian(&self) -> Cartesian {
        self.to_quadray().to_cartesian()
    }
}

impl From<(i32, i32, i32)> for LatticeIndex {
    fn from((i, j, k): (i32, i32, i32)) -> Self {
        Self::new(i, j, k)
    }
}

impl From<LatticeIndex> for (i32, i32, i32) {
    fn from(idx: LatticeIndex) -> Self {
        (idx.i, idx.j, idx.k)
    }
}

impl std::fmt::Display for LatticeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.i, self.j, self.k)
    }
}

/// Snap a Cartesian position to the nearest CCP lattice site.
///
/// Converts to the real-valued lattice frame, rounds each axis, and
/// rebuilds the canonical quadray for the rounded site. Rounding is
/// per-axis in the oblique frame; for input within a small drift of an
/// exact site (the intended use) this recovers that site.
///
/// # Errors
///
/// [`LatticeError::NonFiniteCartesian`] for NaN/infinite input;
/// [`LatticeError::IndexOutOfRange`] when a rounded axis leaves the
/// supported range.
pub fn nearest_lattice_point(v: &Cartesian) -> Result<Quadray, LatticeError> {
    let q = Quadray::from_cartesian(v)?;
    let (i, j, k) = lattice_axes(&q);
    let idx = LatticeIndex::new(
        check_axis("i", i, i.round())?,
        check_axis("j", j, j.round())?,
        check_axis("k", k, k.round())?,
    );
    Ok(idx.to_quadray())
}

/// True when `q` sits exactly on a CCP lattice site.
///
/// Verified by round-trip: the floored index must rebuild the same
/// point (within 1e-9 canonical drift). Unit rays like
/// [`Quadray::A`](ccpack_core::Quadray::A) are tetrahedron vertices, not
/// lattice sites, and report false.
pub fn is_lattice_point(q: &Quadray) -> bool {
    match LatticeIndex::from_quadray(q) {
        Ok(idx) => idx.to_quadray().approx_eq(q, 1e-9),
        Err(_) => false,
    }
}

// ── Private helpers ──────────────────────────────────────────────

/// Real-valued lattice axes of a quadray, before flooring/rounding.
///
/// All three functionals cancel a uniform component shift, so any
/// representative yields the same axes.
fn lattice_axes(q: &Quadray) -> (f64, f64, f64) {
    let [a, b, c, d] = q.canonical().components();
    let k = ((b - d) - (a - c)) / 2.0;
    let i = ((b - c) - k) / 2.0;
    let j = ((a - d) - k) / 2.0;
    (i, j, k)
}

/// Bounds-check a snapped axis value and narrow it to `i32`.
fn check_axis(axis: &'static str, raw: f64, snapped: f64) -> Result<i32, LatticeError> {
    let min = LatticeIndex::AXIS_MIN as f64;
    let max = LatticeIndex::AXIS_MAX as f64;
    // Written so NaN fails the test and lands in the error arm.
    if snapped >= min && snapped <= max {
        Ok(snapped as i32)
    } else {
        Err(LatticeError::IndexOutOfRange { axis, value: raw })
    }
}
