//! Versioned binary snapshots of a store.
//!
//! Layout, all integers little-endian:
//!
//! ```text
//! magic  b"CCPK"
//! u8     format version
//! u32    column count
//! per column, sorted by (i, j):
//!   i32  i
//!   i32  j
//!   u32  run count
//!   per run, ascending:
//!     i32  start
//!     i32  end
//! ```
//!
//! Columns are sorted before encoding, so equal stores produce equal
//! bytes regardless of their mutation history. Decoding validates
//! magic, version, column order, run order, run non-emptiness, and
//! the supported axis range, then rebuilds the tracked cell count; a
//! malformed stream never produces a store.

use std::io::{Read, Write};

use ccpack_lattice::LatticeIndex;

use crate::column::ColumnKey;
use crate::error::SnapshotError;
use crate::run::Run;
use crate::store::BallStore;

/// Magic bytes opening every snapshot.
pub const MAGIC: [u8; 4] = *b"CCPK";

/// Current snapshot format version.
///
/// Version history:
/// - 1: initial format.
pub const FORMAT_VERSION: u8 = 1;

// ── Primitives ──────────────────────────────────────────────────

fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), SnapshotError> {
    w.write_all(&[v])?;
    Ok(())
}

fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), SnapshotError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

fn write_i32_le(w: &mut dyn Write, v: i32) -> Result<(), SnapshotError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

fn read_u8(r: &mut dyn Read) -> Result<u8, SnapshotError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

fn read_u32_le(r: &mut dyn Read) -> Result<u32, SnapshotError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_i32_le(r: &mut dyn Read) -> Result<i32, SnapshotError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

// ── Encode ──────────────────────────────────────────────────────

/// Encode `store` to `w` in canonical column order.
///
/// # Errors
///
/// [`SnapshotError::Io`] when the writer fails.
pub fn write_snapshot(store: &BallStore, w: &mut dyn Write) -> Result<(), SnapshotError> {
    w.write_all(&MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;

    let mut columns: Vec<_> = store.columns().collect();
    columns.sort_unstable_by_key(|entry| entry.0);

    write_u32_le(w, columns.len() as u32)?;
    for (key, column) in columns {
        write_i32_le(w, key.i)?;
        write_i32_le(w, key.j)?;
        write_u32_le(w, column.run_count() as u32)?;
        for run in column.runs() {
            write_i32_le(w, run.start())?;
            write_i32_le(w, run.end())?;
        }
    }
    Ok(())
}

// ── Decode ──────────────────────────────────────────────────────

fn axis_in_range(v: i32) -> bool {
    (LatticeIndex::AXIS_MIN..=LatticeIndex::AXIS_MAX).contains(&v)
}

/// Decode a snapshot from `r`.
///
/// # Errors
///
/// [`SnapshotError::InvalidMagic`] and
/// [`SnapshotError::UnsupportedVersion`] for a bad header;
/// [`SnapshotError::Malformed`] when column or run ordering is broken,
/// a run is empty, or an axis value falls outside the supported
/// lattice range; [`SnapshotError::Io`] on truncation or reader
/// failure.
pub fn read_snapshot(r: &mut dyn Read) -> Result<BallStore, SnapshotError> {
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(SnapshotError::InvalidMagic);
    }
    let version = read_u8(r)?;
    if version != FORMAT_VERSION {
        return Err(SnapshotError::UnsupportedVersion { found: version });
    }

    let column_count = read_u32_le(r)?;
    let mut store = BallStore::new();
    let mut prev_key: Option<ColumnKey> = None;

    for _ in 0..column_count {
        let key = ColumnKey::new(read_i32_le(r)?, read_i32_le(r)?);
        if !axis_in_range(key.i) || !axis_in_range(key.j) {
            return Err(SnapshotError::Malformed {
                detail: format!("column {key} outside the supported axis range"),
            });
        }
        if let Some(prev) = prev_key {
            if prev >= key {
                return Err(SnapshotError::Malformed {
                    detail: format!("column {key} out of order after {prev}"),
                });
            }
        }
        prev_key = Some(key);

        let run_count = read_u32_le(r)?;
        if run_count == 0 {
            return Err(SnapshotError::Malformed {
                detail: format!("column {key} has no runs"),
            });
        }

        let mut prev_end: Option<i32> = None;
        for _ in 0..run_count {
            let start = read_i32_le(r)?;
            let end = read_i32_le(r)?;
            if start >= end {
                return Err(SnapshotError::Malformed {
                    detail: format!("column {key}: empty run {start}..{end}"),
                });
            }
            // start < end caps the last cell at i32::MAX - 1, so only
            // the low side needs a range check.
            if start < LatticeIndex::AXIS_MIN {
                return Err(SnapshotError::Malformed {
                    detail: format!("column {key}: run start {start} below the axis minimum"),
                });
            }
            if let Some(prev_end) = prev_end {
                if prev_end >= start {
                    return Err(SnapshotError::Malformed {
                        detail: format!(
                            "column {key}: run {start}..{end} overlaps or touches its predecessor"
                        ),
                    });
                }
            }
            prev_end = Some(end);
            store.push_run(key, Run::new(start, end));
        }
    }

    debug_assert!(store.self_check().is_ok());
    Ok(store)
}

#[cfg(test)]
mod tests {
    use ccpack_lattice::LatticeIndex;

    use super::*;

    fn store_with(cells: &[(i32, i32, i32)]) -> BallStore {
        let mut store = BallStore::new();
        for &(i, j, k) in cells {
            assert!(store.insert(LatticeIndex::new(i, j, k)));
        }
        store
    }

    /// Header plus one column with the given runs, laid out by hand.
    fn column_payload(i: i32, j: i32, runs: &[(i32, i32)]) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&MAGIC);
        buf.push(FORMAT_VERSION);
        buf.extend_from_slice(&1u32.to_le_bytes());
        buf.extend_from_slice(&i.to_le_bytes());
        buf.extend_from_slice(&j.to_le_bytes());
        buf.extend_from_slice(&(runs.len() as u32).to_le_bytes());
        for &(start, end) in runs {
            buf.extend_from_slice(&start.to_le_bytes());
            buf.extend_from_slice(&end.to_le_bytes());
        }
        buf
    }

    #[test]
    fn round_trip_preserves_content() {
        let store = store_with(&[
            (0, 0, 0),
            (0, 0, 1),
            (0, 0, 5),
            (-2, 3, -1),
            (-2, 3, 0),
            (7, -7, 100),
        ]);

        let mut buf = Vec::new();
        write_snapshot(&store, &mut buf).unwrap();
        let decoded = read_snapshot(&mut buf.as_slice()).unwrap();

        assert_eq!(decoded, store);
        assert_eq!(decoded.len(), store.len());
        assert!(decoded.self_check().is_ok());
    }

    #[test]
    fn empty_store_round_trips() {
        let mut buf = Vec::new();
        write_snapshot(&BallStore::new(), &mut buf).unwrap();
        assert_eq!(buf.len(), 4 + 1 + 4);
        let decoded = read_snapshot(&mut buf.as_slice()).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn encoding_is_canonical_across_histories() {
        let forward = store_with(&[(0, 0, 0), (1, 0, 0), (2, 0, 0)]);
        let mut backward = store_with(&[(2, 0, 0), (1, 0, 0), (0, 0, 0)]);
        // Perturb the map's internal order as well.
        backward.insert(LatticeIndex::new(5, 5, 5));
        backward.remove(LatticeIndex::new(5, 5, 5));

        let mut a = Vec::new();
        write_snapshot(&forward, &mut a).unwrap();
        let mut b = Vec::new();
        write_snapshot(&backward, &mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn bad_magic_rejected() {
        let data = b"XCPK\x01\x00\x00\x00\x00";
        assert!(matches!(
            read_snapshot(&mut data.as_slice()),
            Err(SnapshotError::InvalidMagic)
        ));
    }

    #[test]
    fn unsupported_version_rejected() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&MAGIC);
        buf.push(99);
        buf.extend_from_slice(&0u32.to_le_bytes());
        assert!(matches!(
            read_snapshot(&mut buf.as_slice()),
            Err(SnapshotError::UnsupportedVersion { found: 99 })
        ));
    }

    #[test]
    fn truncated_stream_is_an_io_error() {
        let mut buf = Vec::new();
        write_snapshot(&store_with(&[(0, 0, 0)]), &mut buf).unwrap();
        buf.truncate(buf.len() - 2);
        assert!(matches!(
            read_snapshot(&mut buf.as_slice()),
            Err(SnapshotError::Io(_))
        ));
    }

    #[test]
    fn runless_column_rejected() {
        let buf = column_payload(0, 0, &[]);
        assert!(matches!(
            read_snapshot(&mut buf.as_slice()),
            Err(SnapshotError::Malformed { .. })
        ));
    }

    #[test]
    fn empty_run_rejected() {
        let buf = column_payload(0, 0, &[(3, 3)]);
        assert!(matches!(
            read_snapshot(&mut buf.as_slice()),
            Err(SnapshotError::Malformed { .. })
        ));
    }

    #[test]
    fn unmerged_runs_rejected() {
        let buf = column_payload(0, 0, &[(0, 2), (2, 4)]);
        assert!(matches!(
            read_snapshot(&mut buf.as_slice()),
            Err(SnapshotError::Malformed { .. })
        ));
    }

    #[test]
    fn run_start_below_axis_minimum_rejected() {
        let buf = column_payload(0, 0, &[(i32::MIN, i32::MIN + 1)]);
        assert!(matches!(
            read_snapshot(&mut buf.as_slice()),
            Err(SnapshotError::Malformed { .. })
        ));
    }

    #[test]
    fn out_of_range_column_key_rejected() {
        for (i, j) in [(i32::MIN, 0), (0, i32::MIN), (i32::MAX, 0), (0, i32::MAX)] {
            let buf = column_payload(i, j, &[(0, 1)]);
            assert!(
                matches!(
                    read_snapshot(&mut buf.as_slice()),
                    Err(SnapshotError::Malformed { .. })
                ),
                "key ({i}, {j}) was admitted"
            );
        }
    }

    #[test]
    fn out_of_order_columns_rejected() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&MAGIC);
        buf.push(FORMAT_VERSION);
        buf.extend_from_slice(&2u32.to_le_bytes());
        for (i, j) in [(1, 0), (0, 0)] {
            buf.extend_from_slice(&i32::to_le_bytes(i));
            buf.extend_from_slice(&i32::to_le_bytes(j));
            buf.extend_from_slice(&1u32.to_le_bytes());
            buf.extend_from_slice(&0i32.to_le_bytes());
            buf.extend_from_slice(&1i32.to_le_bytes());
        }
        assert!(matches!(
            read_snapshot(&mut buf.as_slice()),
            Err(SnapshotError::Malformed { .. })
        ));
    }

    #[test]
    fn duplicate_column_rejected() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&MAGIC);
        buf.push(FORMAT_VERSION);
        buf.extend_from_slice(&2u32.to_le_bytes());
        for _ in 0..2 {
            buf.extend_from_slice(&0i32.to_le_bytes());
            buf.extend_from_slice(&0i32.to_le_bytes());
            buf.extend_from_slice(&1u32.to_le_bytes());
            buf.extend_from_slice(&0i32.to_le_bytes());
            buf.extend_from_slice(&1i32.to_le_bytes());
        }
        assert!(matches!(
            read_snapshot(&mut buf.as_slice()),
            Err(SnapshotError::Malformed { .. })
        ));
    }

    #[test]
    fn decoded_runs_keep_their_bounds() {
        let buf = column_payload(-4, 9, &[(-10, -5), (0, 3)]);
        let store = read_snapshot(&mut buf.as_slice()).unwrap();
        assert_eq!(store.len(), 8);
        assert!(store.contains(LatticeIndex::new(-4, 9, -7)));
        assert!(!store.contains(LatticeIndex::new(-4, 9, -5)));
        assert!(store.contains(LatticeIndex::new(-4, 9, 2)));
        assert!(store.self_check().is_ok());
    }

    #[test]
    fn axis_extremes_decode_and_scan() {
        let min = LatticeIndex::AXIS_MIN;
        let max = LatticeIndex::AXIS_MAX;
        let buf = column_payload(min, max, &[(min, min + 1), (max, i32::MAX)]);
        let store = read_snapshot(&mut buf.as_slice()).unwrap();

        assert_eq!(store.len(), 2);
        assert!(store.contains(LatticeIndex::new(min, max, min)));
        assert!(store.contains(LatticeIndex::new(min, max, max)));
        // The vacancy scan from the extreme cells stays within i32.
        assert_eq!(store.surface().count(), 2);
    }
}
