//! Rectangular grid bounds.

use crate::error::SpaceError;
use forage_core::Position;

/// The `(rows, cols)` extent of a map.
///
/// Each cell has coordinate `(row, col)` where `0 <= row < rows` and
/// `0 <= col < cols`. Ranks are row-major: `rank = row * cols + col`.
///
/// # Examples
///
/// ```
/// use forage_space::GridShape;
/// use forage_core::Position;
///
/// let shape = GridShape::new(3, 4).unwrap();
/// assert_eq!(shape.cell_count(), 12);
/// assert!(shape.contains(Position::new(2, 3)));
/// assert!(!shape.contains(Position::new(3, 0)));
/// assert_eq!(shape.rank(Position::new(1, 2)), Some(6));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridShape {
    rows: u32,
    cols: u32,
}

impl GridShape {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a shape with `rows * cols` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(rows: u32, cols: u32) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if rows > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { rows, cols })
    }

    /// An `n x n` shape.
    pub fn square(n: u32) -> Result<Self, SpaceError> {
        Self::new(n, n)
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether `pos` lies within `[0, rows) x [0, cols)`.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.col >= 0 && pos.row < self.rows as i32 && pos.col < self.cols as i32
    }

    /// Row-major rank of `pos`, or `None` when out of bounds.
    pub fn rank(&self, pos: Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some(pos.row as usize * self.cols as usize + pos.col as usize)
    }

    /// Inverse of [`rank`](Self::rank).
    pub fn position(&self, rank: usize) -> Option<Position> {
        if rank >= self.cell_count() {
            return None;
        }
        let cols = self.cols as usize;
        Some(Position::new((rank / cols) as i32, (rank % cols) as i32))
    }

    /// This shape grown by `width` cells on every side.
    pub fn padded(&self, width: u32) -> Result<Self, SpaceError> {
        let grow = |name: &'static str, len: u32| {
            width
                .checked_mul(2)
                .and_then(|w| len.checked_add(w))
                .ok_or(SpaceError::DimensionTooLarge {
                    name,
                    value: u32::MAX,
                    max: Self::MAX_DIM,
                })
        };
        Self::new(grow("rows", self.rows)?, grow("cols", self.cols)?)
    }

    /// Row-major iterator over every in-bounds position.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows as i32).flat_map(move |r| (0..self.cols as i32).map(move |c| Position::new(r, c)))
    }
}
