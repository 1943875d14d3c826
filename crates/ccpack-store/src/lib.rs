//! Run-length compressed occupancy storage for CCP ball packings.
//!
//! [`BallStore`] keeps occupied lattice cells column-wise: all cells
//! sharing `(i, j)` compress into sorted half-open runs along `k`, so
//! solid aggregates cost memory by footprint rather than volume. On
//! top of the cell operations the crate provides the lazy surface walk
//! ([`BallStore::surface`]), a from-scratch integrity check
//! ([`BallStore::self_check`]), and a versioned binary snapshot codec
//! ([`snapshot`]).
//!
//! Quadray positions flow in through [`BallStore::insert_ball`] and
//! friends, which convert at the lattice boundary and report
//! conversion failures as
//! [`LatticeError`](ccpack_lattice::LatticeError).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod column;
pub mod error;
pub mod run;
pub mod snapshot;
pub mod store;
pub mod surface;

pub use column::{Column, ColumnKey};
pub use error::{IntegrityError, SnapshotError};
pub use run::Run;
pub use store::{BallStore, StoreStats};
pub use surface::SurfaceIter;
