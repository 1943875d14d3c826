//! CCP lattice indexing for quadray coordinates.
//!
//! This crate maps between [`Quadray`](ccpack_core::Quadray) positions
//! and integer [`LatticeIndex`] triples addressing sites of the
//! closest-packed lattice, and carries the fixed table of the 12
//! coordination directions every interior ball touches.
//!
//! # Surface
//!
//! - [`LatticeIndex`]: integer (i, j, k) site with `neighbours()` and
//!   exact quadray round-trip
//! - [`CCP_OFFSETS`] / [`NEIGHBOUR_STEPS`]: the 12 coordination
//!   directions in index space and quadray space, index-aligned
//! - [`nearest_lattice_point`]: snap drifted Cartesian input to a site
//! - [`is_lattice_point`]: exact lattice membership test

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod index;

pub use error::LatticeError;
pub use index::{
    is_lattice_point, nearest_lattice_point, LatticeIndex, CCP_OFFSETS, NEIGHBOUR_STEPS, STEP_I,
    STEP_J, STEP_K,
};
