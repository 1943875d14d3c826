//! Half-open occupancy runs along a column.

use std::fmt;
use std::ops::Range;

/// A maximal stretch of occupied cells `start..end` along one column's
/// `k` axis.
///
/// Half-open and never empty: `start` is the first occupied cell, `end`
/// is one past the last, and `start < end` always holds. The owning
/// [`Column`](crate::Column) keeps its runs sorted and separated by at
/// least one vacant cell; `Run` itself only guarantees non-emptiness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Run {
    start: i32,
    end: i32,
}

impl Run {
    /// Build a run covering `start..end`. Callers guarantee `start < end`.
    pub(crate) fn new(start: i32, end: i32) -> Self {
        debug_assert!(start < end, "empty run {start}..{end}");
        Self { start, end }
    }

    /// First occupied cell.
    pub fn start(&self) -> i32 {
        self.start
    }

    /// One past the last occupied cell.
    pub fn end(&self) -> i32 {
        self.end
    }

    /// Number of cells covered. Always at least one.
    pub fn cell_count(&self) -> u64 {
        (i64::from(self.end) - i64::from(self.start)) as u64
    }

    /// Whether `k` lies inside the run.
    pub fn contains(&self, k: i32) -> bool {
        self.start <= k && k < self.end
    }

    /// The covered cells in ascending order.
    pub fn cells(&self) -> Range<i32> {
        self.start..self.end
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_respects_half_open_bounds() {
        let run = Run::new(2, 5);
        assert!(!run.contains(1));
        assert!(run.contains(2));
        assert!(run.contains(4));
        assert!(!run.contains(5));
    }

    #[test]
    fn cell_count_handles_negative_and_wide_ranges() {
        assert_eq!(Run::new(0, 1).cell_count(), 1);
        assert_eq!(Run::new(-3, 4).cell_count(), 7);
        let wide = Run::new(i32::MIN + 1, i32::MAX - 1);
        assert_eq!(wide.cell_count(), u64::from(u32::MAX) - 2);
    }

    #[test]
    fn cells_iterate_in_ascending_order() {
        let cells: Vec<i32> = Run::new(-1, 2).cells().collect();
        assert_eq!(cells, vec![-1, 0, 1]);
    }

    #[test]
    fn display_uses_half_open_notation() {
        assert_eq!(Run::new(0, 3).to_string(), "[0, 3)");
    }
}
