//! Error types for grid construction and grid queries.

use forage_core::Position;
use std::fmt;

/// Errors arising from grid construction, combination, or slicing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a grid with zero cells.
    EmptySpace,
    /// A dimension exceeds the maximum representable coordinate.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The largest permitted size.
        max: u32,
    },
    /// Row-major input had rows of differing length.
    RaggedRows {
        /// Index of the first offending row.
        row: usize,
        /// Its length.
        len: usize,
        /// Length of row 0.
        expected: usize,
    },
    /// Two grids that must share a shape do not.
    ShapeMismatch {
        /// `(rows, cols)` of the left operand.
        left: (u32, u32),
        /// `(rows, cols)` of the right operand.
        right: (u32, u32),
    },
    /// A requested window does not fit inside the source grid.
    WindowOutOfBounds {
        /// Requested top-left corner.
        corner: Position,
        /// Requested side length.
        side: u32,
        /// `(rows, cols)` of the source grid.
        bounds: (u32, u32),
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
            Self::RaggedRows { row, len, expected } => {
                write!(f, "row {row} has {len} cells, expected {expected}")
            }
            Self::ShapeMismatch { left, right } => write!(
                f,
                "shape mismatch: {}x{} vs {}x{}",
                left.0, left.1, right.0, right.1
            ),
            Self::WindowOutOfBounds {
                corner,
                side,
                bounds,
            } => write!(
                f,
                "{side}x{side} window at {corner} does not fit in {}x{} grid",
                bounds.0, bounds.1
            ),
        }
    }
}

impl std::error::Error for SpaceError {}
