//! Ccpack: quadray-addressed storage and surface extraction for CCP
//! sphere packings.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the ccpack sub-crates. For most users, adding `ccpack` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use ccpack::prelude::*;
//!
//! // Place one ball via its quadray position, then grow a strand of
//! // three along the k axis.
//! let mut store = BallStore::new();
//! store.insert_ball(&Quadray::ORIGIN)?;
//! store.insert(LatticeIndex::new(0, 0, 1));
//! store.insert(LatticeIndex::new(0, 0, 2));
//!
//! assert_eq!(store.len(), 3);
//! assert_eq!(store.run_count(), 1); // contiguous cells share a run
//!
//! // Every ball in a 3-ball strand is exposed.
//! let surface: Vec<LatticeIndex> = store.surface().collect();
//! assert_eq!(surface.len(), 3);
//!
//! // Lattice neighbours sit one ball diameter apart.
//! let a = LatticeIndex::new(0, 0, 0).to_cartesian();
//! let b = LatticeIndex::new(0, 0, 1).to_cartesian();
//! assert!((a.distance_to(&b) - 2.0).abs() < 1e-9);
//! # Ok::<(), ccpack::lattice::LatticeError>(())
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`coords`] | `ccpack-core` | `Quadray`, `Cartesian`, IVM constants, coordinate errors |
//! | [`lattice`] | `ccpack-lattice` | `LatticeIndex`, the 12 coordination directions, snapping |
//! | [`store`] | `ccpack-store` | `BallStore`, surface traversal, integrity, snapshots |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Quadray and Cartesian coordinate types (`ccpack-core`).
///
/// Most users only need [`coords::Quadray`] and [`coords::Cartesian`],
/// both also available in the [`prelude`]. The [`coords::ivm`] module
/// carries the synergetics scale constants.
pub use ccpack_core as coords;

/// Integer lattice indexing (`ccpack-lattice`).
///
/// [`lattice::LatticeIndex`] addresses CCP sites;
/// [`lattice::CCP_OFFSETS`] and [`lattice::NEIGHBOUR_STEPS`] list the
/// 12 coordination directions; [`lattice::nearest_lattice_point`]
/// snaps drifted Cartesian input back onto the lattice.
pub use ccpack_lattice as lattice;

/// Occupancy storage and surface extraction (`ccpack-store`).
///
/// [`store::BallStore`] is the main entry point; [`store::snapshot`]
/// holds the versioned binary codec.
pub use ccpack_store as store;

/// Common imports for typical ccpack usage.
///
/// ```rust
/// use ccpack::prelude::*;
/// ```
///
/// This imports the most frequently used types: the coordinate types,
/// lattice indexing, and the ball store with its iterators.
pub mod prelude {
    // Coordinates
    pub use ccpack_core::{Cartesian, CoordError, Quadray};

    // Lattice
    pub use ccpack_lattice::{nearest_lattice_point, LatticeError, LatticeIndex};

    // Storage
    pub use ccpack_store::{BallStore, StoreStats, SurfaceIter};
}
