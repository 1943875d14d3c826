//! Lazy traversal of surface cells.

use ccpack_lattice::LatticeIndex;

use crate::store::BallStore;

/// Iterator over occupied cells with at least one vacant neighbour.
///
/// Returned by [`BallStore::surface`]. Holds a shared borrow of the
/// store, so mutation while an iterator is live is rejected at compile
/// time; a fresh call re-walks current state.
///
/// Every occupied cell is visited and classified against the 12
/// coordination directions, so a full drain costs one run lookup per
/// neighbour per cell. Only the yielded set is small for compact
/// aggregates (the shell of an N-wide solid grows as N² while its
/// volume grows as N³). Yield order follows column order then
/// ascending `k` and is not part of the API contract.
#[derive(Debug)]
pub struct SurfaceIter<'a> {
    store: &'a BallStore,
    /// Column currently being walked, as a map position.
    column: usize,
    /// Run currently being walked within that column.
    run: usize,
    /// Next cell to classify; `None` until the current run is entered.
    next_k: Option<i32>,
}

impl<'a> SurfaceIter<'a> {
    pub(crate) fn new(store: &'a BallStore) -> Self {
        Self {
            store,
            column: 0,
            run: 0,
            next_k: None,
        }
    }
}

impl Iterator for SurfaceIter<'_> {
    type Item = LatticeIndex;

    fn next(&mut self) -> Option<LatticeIndex> {
        loop {
            let (key, column) = self.store.column_at(self.column)?;
            let Some(run) = column.runs().get(self.run) else {
                self.column += 1;
                self.run = 0;
                self.next_k = None;
                continue;
            };
            let k = match self.next_k {
                Some(k) if k < run.end() => k,
                Some(_) => {
                    self.run += 1;
                    self.next_k = None;
                    continue;
                }
                None => run.start(),
            };
            self.next_k = Some(k + 1);

            let cell = LatticeIndex::new(key.i, key.j, k);
            if self.store.has_vacant_neighbour(cell) {
                return Some(cell);
            }
        }
    }
}
