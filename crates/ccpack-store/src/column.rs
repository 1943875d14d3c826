//! Columns: ordered run lists sharing one `(i, j)` key.
//!
//! A column owns every occupied cell whose lattice index shares its
//! `i` and `j` axes, compressed as half-open runs along `k`. Mutation
//! keeps three invariants:
//!
//! 1. runs are sorted ascending by start,
//! 2. consecutive runs are separated by at least one vacant cell
//!    (touching runs are merged),
//! 3. every run is non-empty.
//!
//! Insert and remove locate the affected position with one binary
//! search, then patch at most two runs around it.

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

use crate::run::Run;

/// Key of the column holding all cells at lattice axes `(i, j)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnKey {
    /// Position along the i axis.
    pub i: i32,
    /// Position along the j axis.
    pub j: i32,
}

impl ColumnKey {
    /// Build a key from axis positions.
    pub const fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

/// The ordered run list for one column.
///
/// Solid aggregates hold exactly one run per column, so the list stays
/// inline up to four runs before spilling to the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Column {
    runs: SmallVec<[Run; 4]>,
}

impl Column {
    /// The runs, sorted ascending and maximally merged.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Number of runs.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Number of occupied cells across all runs.
    pub fn cell_count(&self) -> u64 {
        self.runs.iter().map(Run::cell_count).sum()
    }

    /// Whether the column has no occupied cells.
    ///
    /// Only a transient state: the store drops a column that loses its
    /// last run.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Whether cell `k` is occupied.
    pub fn contains(&self, k: i32) -> bool {
        self.find_run(k).is_ok()
    }

    /// The occupied cells in ascending order.
    pub fn cells(&self) -> impl Iterator<Item = i32> + '_ {
        self.runs.iter().flat_map(|run| run.cells())
    }

    /// Mark cell `k` occupied. Returns false when it already was.
    pub(crate) fn insert(&mut self, k: i32) -> bool {
        let splice = match self.find_run(k) {
            Ok(_) => return false,
            Err(splice) => splice,
        };

        let touch_left = splice > 0 && self.runs[splice - 1].end() == k;
        let touch_right = splice < self.runs.len() && self.runs[splice].start() == k + 1;

        match (touch_left, touch_right) {
            // The new cell bridges two runs into one.
            (true, true) => {
                let merged = Run::new(self.runs[splice - 1].start(), self.runs[splice].end());
                self.runs[splice - 1] = merged;
                self.runs.remove(splice);
            }
            (true, false) => {
                self.runs[splice - 1] = Run::new(self.runs[splice - 1].start(), k + 1);
            }
            (false, true) => {
                self.runs[splice] = Run::new(k, self.runs[splice].end());
            }
            (false, false) => {
                self.runs.insert(splice, Run::new(k, k + 1));
            }
        }
        self.debug_check();
        true
    }

    /// Mark cell `k` vacant. Returns false when it already was.
    pub(crate) fn remove(&mut self, k: i32) -> bool {
        let hit = match self.find_run(k) {
            Ok(hit) => hit,
            Err(_) => return false,
        };
        let run = self.runs[hit];

        if run.start() == k && run.end() == k + 1 {
            self.runs.remove(hit);
        } else if run.start() == k {
            self.runs[hit] = Run::new(k + 1, run.end());
        } else if run.end() == k + 1 {
            self.runs[hit] = Run::new(run.start(), k);
        } else {
            // Interior removal splits the run around the vacated cell.
            self.runs[hit] = Run::new(run.start(), k);
            self.runs.insert(hit + 1, Run::new(k + 1, run.end()));
        }
        self.debug_check();
        true
    }

    /// Append a run past the current last run.
    ///
    /// The caller guarantees ordering; used by the snapshot decoder
    /// after it has validated the incoming run list.
    pub(crate) fn push_run(&mut self, run: Run) {
        debug_assert!(
            match self.runs.last() {
                Some(last) => last.end() < run.start(),
                None => true,
            },
            "pushed run {run} out of order"
        );
        self.runs.push(run);
    }

    /// Locate the run containing `k`: `Ok(position)` on a hit,
    /// `Err(splice point)` otherwise.
    fn find_run(&self, k: i32) -> Result<usize, usize> {
        self.runs.binary_search_by(|run| {
            if run.end() <= k {
                Ordering::Less
            } else if run.start() > k {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
    }

    /// Invariant sweep after a mutation (debug builds only).
    fn debug_check(&self) {
        debug_assert!(
            self.runs
                .windows(2)
                .all(|pair| pair[0].end() < pair[1].start()),
            "column invariants violated: {:?}",
            self.runs
        );
    }
}
