//! Grid positions.

use smallvec::{smallvec, SmallVec};
use std::fmt;

/// A `(row, col)` cell coordinate. Rows increase downward.
///
/// Positions are signed so that a candidate one step past the border can
/// be represented and then rejected; valid positions always satisfy
/// `0 <= row < rows` and `0 <= col < cols` for the grid they live on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index.
    pub row: i32,
    /// Column index.
    pub col: i32,
}

impl Position {
    /// Construct a position from a row and a column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The position shifted by `(dr, dc)`. No bounds checking.
    pub fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Manhattan (L1) distance to `other`.
    pub fn manhattan(self, other: Position) -> u32 {
        (self.row - other.row).unsigned_abs() + (self.col - other.col).unsigned_abs()
    }

    /// The four orthogonal neighbours in up, down, left, right order.
    ///
    /// Candidates outside a grid are included; callers filter against
    /// their own bounds.
    pub fn neighbours(self) -> SmallVec<[Position; 4]> {
        smallvec![
            self.offset(-1, 0),
            self.offset(1, 0),
            self.offset(0, -1),
            self.offset(0, 1),
        ]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}
