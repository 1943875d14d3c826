//! Core coordinate types for CCP sphere packing.
//!
//! This crate defines [`Quadray`], the four-component tetrahedral
//! coordinate through which all packing positions are expressed, along
//! with the [`Cartesian`] interchange vector and the IVM scale constants.
//!
//! # Conventions
//!
//! - Balls have radius 1; touching neighbours sit at Cartesian distance 2
//! - Quadray representations are reduced to canonical (zero-minimum) form
//!   by every operation that produces one
//! - Non-finite components are rejected at validating boundaries with
//!   [`CoordError`]; past those boundaries, operations are total

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cartesian;
pub mod error;
pub mod ivm;
pub mod quadray;

pub use cartesian::Cartesian;
pub use error::CoordError;
pub use quadray::Quadray;
