//! Error types for texttable.

use std::fmt;

/// Result type alias for texttable operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for rendering operations.
///
/// All variants are shape/argument errors detected before any output is
/// produced: when [`Table::render`](crate::Table::render) fails, the sink
/// has not been called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Zero columns requested.
    ZeroColumns,
    /// The table has no entries.
    Empty,
    /// Entry count is not evenly divisible by the requested column count.
    ShapeMismatch { entries: usize, columns: usize },
    /// Left-shift offset exceeds the maximum.
    ShiftOutOfRange { pos_x: usize, max: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroColumns => write!(f, "column count must be at least 1"),
            Self::Empty => write!(f, "table has no entries"),
            Self::ShapeMismatch { entries, columns } => {
                write!(f, "{entries} entries cannot fill rows of {columns} columns")
            }
            Self::ShiftOutOfRange { pos_x, max } => {
                write!(f, "left shift {pos_x} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for Error {}
