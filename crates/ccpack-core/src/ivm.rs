//! Constants of the isotropic vector matrix (IVM), the lattice of
//! CCP ball centers.
//!
//! The IVM sets the scale conventions used throughout the workspace:
//! balls have radius 1 and diameter 2, touching neighbours sit at
//! Cartesian distance 2, and a unit quadray step spans `1/√2` of a
//! Cartesian unit per raw component (see
//! [`Quadray::to_cartesian`](crate::Quadray::to_cartesian)).

/// Spatial scale factor between raw quadray components and Cartesian
/// units: √2.
pub const ROOT2: f64 = std::f64::consts::SQRT_2;

/// Volume conversion factor between XYZ cube units and IVM
/// tetravolumes: √(9/8).
///
/// A regular tetrahedron with edge 2 (four mutually touching balls) has
/// tetravolume 1 and XYZ volume `1/S3`.
pub const S3: f64 = 1.060_660_171_779_821_2;

/// Coordination number of CCP: every interior ball touches exactly 12
/// neighbours.
pub const KISSING_NUMBER: usize = 12;

/// Fraction of space filled by close-packed unit balls: π/√18.
pub const PACKING_DENSITY: f64 = 0.740_480_489_693_061_2;

/// Convert a volume in XYZ cube units to IVM tetravolumes.
pub fn xyz_to_ivm_volume(xyz: f64) -> f64 {
    xyz * S3
}

/// Convert a volume in IVM tetravolumes to XYZ cube units.
pub fn ivm_to_xyz_volume(ivm: f64) -> f64 {
    ivm / S3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s3_squares_to_nine_eighths() {
        assert!((S3 * S3 - 9.0 / 8.0).abs() < 1e-15);
    }

    #[test]
    fn packing_density_matches_closed_form() {
        let expected = std::f64::consts::PI / 18.0_f64.sqrt();
        assert!((PACKING_DENSITY - expected).abs() < 1e-15);
    }

    #[test]
    fn volume_conversion_round_trips() {
        let xyz = 3.75;
        let back = ivm_to_xyz_volume(xyz_to_ivm_volume(xyz));
        assert!((back - xyz).abs() < 1e-12);
    }

    #[test]
    fn unit_edge_tetrahedron_identity() {
        // Edge-2 regular tetrahedron: XYZ volume (edge³)/(6√2) maps to
        // exactly one tetravolume.
        let edge: f64 = 2.0;
        let xyz = edge.powi(3) / (6.0 * ROOT2);
        assert!((xyz_to_ivm_volume(xyz) - 1.0).abs() < 1e-12);
    }
}
