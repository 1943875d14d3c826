//! Error types for store integrity and the snapshot codec.

use std::fmt;
use std::io;

use crate::column::ColumnKey;

/// Storage invariant violations reported by
/// [`BallStore::self_check`](crate::BallStore::self_check).
///
/// Any of these indicates a storage bug, never caller misuse: the
/// mutation API keeps the invariants by construction and the snapshot
/// decoder rejects payloads that would break them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityError {
    /// A column with zero runs is present in the map.
    EmptyColumn {
        /// The offending column.
        column: ColumnKey,
    },
    /// A run covers no cells.
    EmptyRun {
        /// The offending column.
        column: ColumnKey,
        /// Claimed first cell.
        start: i32,
        /// Claimed end bound.
        end: i32,
    },
    /// Consecutive runs overlap, touch, or sit out of order.
    RunOrderViolation {
        /// The offending column.
        column: ColumnKey,
        /// End bound of the earlier run.
        prev_end: i32,
        /// Start of the later run.
        next_start: i32,
    },
    /// The incrementally tracked cell count disagrees with the runs.
    CellCountMismatch {
        /// Count carried across mutations.
        tracked: u64,
        /// Count recomputed from run lengths.
        actual: u64,
    },
}

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyColumn { column } => {
                write!(f, "column {column} is stored with no runs")
            }
            Self::EmptyRun { column, start, end } => {
                write!(f, "column {column} holds empty run {start}..{end}")
            }
            Self::RunOrderViolation {
                column,
                prev_end,
                next_start,
            } => {
                write!(
                    f,
                    "column {column}: run ending at {prev_end} not strictly \
                     before run starting at {next_start}"
                )
            }
            Self::CellCountMismatch { tracked, actual } => {
                write!(
                    f,
                    "tracked cell count {tracked} disagrees with stored runs ({actual})"
                )
            }
        }
    }
}

impl std::error::Error for IntegrityError {}

/// Errors from encoding or decoding a store snapshot.
#[derive(Debug)]
pub enum SnapshotError {
    /// An I/O error occurred during read or write.
    ///
    /// Truncated streams surface here as `UnexpectedEof`.
    Io(io::Error),
    /// The stream does not start with the expected `b"CCPK"` magic bytes.
    InvalidMagic,
    /// The format version is not supported by this build.
    UnsupportedVersion {
        /// The version found in the stream.
        found: u8,
    },
    /// The payload violates the documented layout or the storage
    /// invariants.
    Malformed {
        /// Human-readable description of what went wrong.
        detail: String,
    },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidMagic => write!(f, "invalid magic bytes (expected b\"CCPK\")"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported snapshot version {found}")
            }
            Self::Malformed { detail } => write!(f, "malformed snapshot: {detail}"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SnapshotError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
