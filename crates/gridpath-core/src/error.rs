//! Error type for grid construction and coordinate lookups.

use std::fmt;

use crate::geom::Coord;

/// Errors arising from grid construction or out-of-range access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to build a grid with zero cells.
    EmptyGrid,
    /// The requested side length does not fit a [`Coord`] component.
    DimensionTooLarge { size: usize, max: usize },
    /// A coordinate lies outside `[0, size)` on either axis.
    OutOfBounds { coord: Coord, size: usize },
    /// Parsed text is not square: `row` has `len` cells but there are `rows` rows.
    NotSquare { rows: usize, row: usize, len: usize },
    /// Parsed text contains a character other than `.` or `#`.
    InvalidChar { ch: char, coord: Coord },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { size, max } => {
                write!(f, "grid size {size} exceeds maximum {max}")
            }
            Self::OutOfBounds { coord, size } => {
                write!(f, "coordinate {coord} out of bounds for {size}x{size} grid")
            }
            Self::NotSquare { rows, row, len } => {
                write!(
                    f,
                    "grid text is not square: row {row} has {len} cells, expected {rows}"
                )
            }
            Self::InvalidChar { ch, coord } => {
                write!(f, "invalid grid character \u{201c}{ch}\u{201d} at {coord}")
            }
        }
    }
}

impl std::error::Error for GridError {}
