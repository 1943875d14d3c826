//! Benchmark profiles and utilities for the ccpack workspace.
//!
//! Provides pre-built [`BallStore`] fill profiles shared by the criterion
//! benches:
//!
//! - [`solid_box`]: dense block, best case for run-length compression
//! - [`solid_ball`]: round aggregate with a curved surface shell
//! - [`scatter`]: seeded sparse scatter, worst case for run merging

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ccpack_lattice::LatticeIndex;
use ccpack_store::BallStore;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Fill a solid block of `n` sites per axis starting at the origin.
///
/// Produces `n^3` cells across `n^2` columns with exactly one run each.
pub fn solid_box(n: i32) -> BallStore {
    let mut store = BallStore::new();
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                store.insert(LatticeIndex::new(i, j, k));
            }
        }
    }
    store
}

/// Fill every site whose center lies within `shells` ball diameters of
/// the origin.
///
/// At roughly 0.18 sites per unit volume this gives ~1.3K cells for
/// `shells = 6` and ~3K for `shells = 8`.
pub fn solid_ball(shells: i32) -> BallStore {
    let origin = LatticeIndex::new(0, 0, 0).to_cartesian();
    let radius = 2.0 * f64::from(shells);
    // The oblique frame keeps |index| below 1.23 * shells inside the
    // ball, so a cube scan of twice that is always wide enough.
    let reach = 2 * shells;

    let mut store = BallStore::new();
    for i in -reach..=reach {
        for j in -reach..=reach {
            for k in -reach..=reach {
                let idx = LatticeIndex::new(i, j, k);
                if idx.to_cartesian().distance_to(&origin) <= radius {
                    store.insert(idx);
                }
            }
        }
    }
    store
}

/// Scatter exactly `count` occupied sites across `[-span, span)` per axis.
///
/// Sites are drawn from a ChaCha8 stream, so a given `(count, span, seed)`
/// triple always produces the same store. Panics if the domain holds fewer
/// than `count` sites.
pub fn scatter(count: u64, span: i32, seed: u64) -> BallStore {
    let side = u64::from(span.unsigned_abs()) * 2;
    assert!(
        count <= side * side * side,
        "cannot place {count} sites in a {side}^3 domain"
    );

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut store = BallStore::new();
    while store.len() < count {
        let i = rng.random_range(-span..span);
        let j = rng.random_range(-span..span);
        let k = rng.random_range(-span..span);
        store.insert(LatticeIndex::new(i, j, k));
    }
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_box_is_fully_merged() {
        let store = solid_box(4);
        assert_eq!(store.len(), 64);
        assert_eq!(store.column_count(), 16);
        assert_eq!(store.run_count(), 16);
        store.self_check().unwrap();
    }

    #[test]
    fn solid_ball_contains_the_kissing_shell() {
        let store = solid_ball(1);
        let origin = LatticeIndex::new(0, 0, 0);
        assert!(store.contains(origin));
        for n in origin.neighbours() {
            assert!(store.contains(n), "missing coordination neighbour {n:?}");
        }
        store.self_check().unwrap();
    }

    #[test]
    fn solid_ball_stays_inside_its_radius() {
        let shells = 3;
        let store = solid_ball(shells);
        let origin = LatticeIndex::new(0, 0, 0).to_cartesian();
        let radius = 2.0 * f64::from(shells);

        for idx in store.cells() {
            let d = idx.to_cartesian().distance_to(&origin);
            assert!(d <= radius + 1e-9, "site {idx:?} at distance {d}");
        }
    }

    #[test]
    fn scatter_is_deterministic() {
        let a = scatter(500, 16, 42);
        let b = scatter(500, 16, 42);
        assert_eq!(a, b);
        assert_eq!(a.len(), 500);
        a.self_check().unwrap();
    }

    #[test]
    fn scatter_seeds_diverge() {
        let a = scatter(200, 16, 1);
        let b = scatter(200, 16, 2);
        assert_ne!(a, b);
    }
}
