//! The occupancy store: run-length compressed ball positions.

use ccpack_core::{Cartesian, Quadray};
use ccpack_lattice::{LatticeError, LatticeIndex, CCP_OFFSETS};
use indexmap::IndexMap;

use crate::column::{Column, ColumnKey};
use crate::error::IntegrityError;
use crate::run::Run;
use crate::surface::SurfaceIter;

/// Flat counter snapshot of a store's shape.
///
/// Returned by value from [`BallStore::stats`]; callers decide how to
/// log or assert on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Occupied cells.
    pub cells: u64,
    /// Non-empty columns.
    pub columns: usize,
    /// Runs across all columns.
    pub runs: usize,
    /// Run count of the most fragmented column.
    pub max_runs_per_column: usize,
}

/// Sparse occupancy store for balls on the CCP lattice.
///
/// Cells are addressed by [`LatticeIndex`] and stored column-wise: all
/// cells sharing `(i, j)` compress into sorted half-open [`Run`]s along
/// `k`, so solid aggregates cost memory proportional to their column
/// footprint rather than their volume. Quadray positions enter through
/// the `_ball` methods, which convert at the lattice boundary and
/// report conversion failures as [`LatticeError`].
///
/// Mutations are total: re-inserting an occupied cell or removing a
/// vacant one is a no-op signalled by a `false` return, never an error.
///
/// # Examples
///
/// ```
/// use ccpack_lattice::LatticeIndex;
/// use ccpack_store::BallStore;
///
/// let mut store = BallStore::new();
/// assert!(store.insert(LatticeIndex::new(0, 0, 0)));
/// assert!(store.insert(LatticeIndex::new(0, 0, 1)));
/// assert!(!store.insert(LatticeIndex::new(0, 0, 1)));
///
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.run_count(), 1);
/// assert_eq!(store.surface().count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BallStore {
    /// Non-empty columns keyed by `(i, j)`, in insertion order.
    columns: IndexMap<ColumnKey, Column>,
    /// Occupied cell count, tracked across every mutation.
    cells: u64,
}

impl BallStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Cell operations ──────────────────────────────────────────

    /// Whether `idx` is occupied.
    pub fn contains(&self, idx: LatticeIndex) -> bool {
        match self.columns.get(&ColumnKey::new(idx.i, idx.j)) {
            Some(column) => column.contains(idx.k),
            None => false,
        }
    }

    /// Occupy `idx`. Returns false when the cell already was.
    pub fn insert(&mut self, idx: LatticeIndex) -> bool {
        let key = ColumnKey::new(idx.i, idx.j);
        let inserted = self.columns.entry(key).or_default().insert(idx.k);
        if inserted {
            self.cells += 1;
        }
        inserted
    }

    /// Vacate `idx`. Returns false when the cell already was.
    ///
    /// A column losing its last run is dropped from the map.
    pub fn remove(&mut self, idx: LatticeIndex) -> bool {
        let key = ColumnKey::new(idx.i, idx.j);
        let Some(column) = self.columns.get_mut(&key) else {
            return false;
        };
        let removed = column.remove(idx.k);
        let emptied = column.is_empty();
        if removed {
            self.cells -= 1;
            if emptied {
                self.columns.swap_remove(&key);
            }
        }
        removed
    }

    // ── Size and shape ───────────────────────────────────────────

    /// Occupied cell count.
    ///
    /// `u64` rather than `usize`: runs compress, so a store can address
    /// more cells than it holds bytes.
    pub fn len(&self) -> u64 {
        self.cells
    }

    /// Whether no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells == 0
    }

    /// Number of non-empty columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Total number of runs across all columns.
    pub fn run_count(&self) -> usize {
        self.columns.values().map(Column::run_count).sum()
    }

    /// Drop every ball.
    pub fn clear(&mut self) {
        self.columns.clear();
        self.cells = 0;
    }

    /// Counter snapshot of the current shape.
    pub fn stats(&self) -> StoreStats {
        let mut runs = 0;
        let mut max_runs = 0;
        for column in self.columns.values() {
            runs += column.run_count();
            max_runs = max_runs.max(column.run_count());
        }
        StoreStats {
            cells: self.cells,
            columns: self.columns.len(),
            runs,
            max_runs_per_column: max_runs,
        }
    }

    // ── Iteration ────────────────────────────────────────────────

    /// The non-empty columns, keyed. Order is not part of the API.
    pub fn columns(&self) -> impl Iterator<Item = (ColumnKey, &Column)> + '_ {
        self.columns.iter().map(|(&key, column)| (key, column))
    }

    /// Every occupied cell, following [`Self::columns`] order then
    /// ascending `k`.
    pub fn cells(&self) -> impl Iterator<Item = LatticeIndex> + '_ {
        self.columns.iter().flat_map(|(&key, column)| {
            column
                .cells()
                .map(move |k| LatticeIndex::new(key.i, key.j, k))
        })
    }

    // ── Surface ──────────────────────────────────────────────────

    /// Whether `idx` is occupied with at least one vacant neighbour.
    pub fn is_surface(&self, idx: LatticeIndex) -> bool {
        self.contains(idx) && self.has_vacant_neighbour(idx)
    }

    /// Lazy traversal of all surface cells.
    ///
    /// Visits every occupied cell and yields the ones with a vacant
    /// neighbour; see [`SurfaceIter`] for cost and ordering notes.
    pub fn surface(&self) -> SurfaceIter<'_> {
        SurfaceIter::new(self)
    }

    /// Draw-ready Cartesian centers of all surface cells.
    pub fn surface_positions(&self) -> impl Iterator<Item = Cartesian> + '_ {
        self.surface().map(|idx| idx.to_cartesian())
    }

    // ── Quadray boundary ─────────────────────────────────────────

    /// Occupy the lattice cell under `q`.
    ///
    /// # Errors
    ///
    /// [`LatticeError::IndexOutOfRange`] when `q` floors outside the
    /// supported axis range.
    pub fn insert_ball(&mut self, q: &Quadray) -> Result<bool, LatticeError> {
        Ok(self.insert(LatticeIndex::from_quadray(q)?))
    }

    /// Vacate the lattice cell under `q`.
    ///
    /// # Errors
    ///
    /// [`LatticeError::IndexOutOfRange`] when `q` floors outside the
    /// supported axis range.
    pub fn remove_ball(&mut self, q: &Quadray) -> Result<bool, LatticeError> {
        Ok(self.remove(LatticeIndex::from_quadray(q)?))
    }

    /// Whether the lattice cell under `q` is occupied.
    ///
    /// # Errors
    ///
    /// [`LatticeError::IndexOutOfRange`] when `q` floors outside the
    /// supported axis range.
    pub fn contains_ball(&self, q: &Quadray) -> Result<bool, LatticeError> {
        Ok(self.contains(LatticeIndex::from_quadray(q)?))
    }

    // ── Integrity ────────────────────────────────────────────────

    /// Verify every storage invariant from scratch.
    ///
    /// Mutations uphold the invariants incrementally and
    /// `debug_assert` them; this is the release-build sweep for tests,
    /// decoders, and long-lived callers. A violation means a storage
    /// bug, not caller misuse.
    ///
    /// # Errors
    ///
    /// The first [`IntegrityError`] found, scanning columns in map
    /// order and runs in list order.
    pub fn self_check(&self) -> Result<(), IntegrityError> {
        let mut total: u64 = 0;
        for (&key, column) in &self.columns {
            if column.is_empty() {
                return Err(IntegrityError::EmptyColumn { column: key });
            }
            for run in column.runs() {
                if run.start() >= run.end() {
                    return Err(IntegrityError::EmptyRun {
                        column: key,
                        start: run.start(),
                        end: run.end(),
                    });
                }
            }
            for pair in column.runs().windows(2) {
                if pair[0].end() >= pair[1].start() {
                    return Err(IntegrityError::RunOrderViolation {
                        column: key,
                        prev_end: pair[0].end(),
                        next_start: pair[1].start(),
                    });
                }
            }
            total += column.cell_count();
        }
        if total != self.cells {
            return Err(IntegrityError::CellCountMismatch {
                tracked: self.cells,
                actual: total,
            });
        }
        Ok(())
    }

    // ── Crate-internal access ────────────────────────────────────

    /// Column by map position, for the surface walker.
    pub(crate) fn column_at(&self, position: usize) -> Option<(ColumnKey, &Column)> {
        match self.columns.get_index(position) {
            Some((&key, column)) => Some((key, column)),
            None => None,
        }
    }

    /// Whether any of the 12 neighbours of `idx` is vacant.
    pub(crate) fn has_vacant_neighbour(&self, idx: LatticeIndex) -> bool {
        CCP_OFFSETS
            .iter()
            .any(|&(di, dj, dk)| !self.contains(idx.offset(di, dj, dk)))
    }

    /// Install a pre-validated run at the tail of `key`'s column.
    ///
    /// Snapshot decoding only; the decoder has already checked run
    /// ordering and non-emptiness.
    pub(crate) fn push_run(&mut self, key: ColumnKey, run: Run) {
        self.columns.entry(key).or_default().push_run(run);
        self.cells += run.cell_count();
    }
}
