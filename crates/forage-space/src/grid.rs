//! Dense row-major integer grids.

use crate::error::SpaceError;
use crate::shape::GridShape;
use forage_core::Position;
use std::fmt;

/// A `(rows, cols)` array of integer cells stored row-major.
///
/// Occupancy grids hold 0 for empty cells and an entity's level otherwise.
/// Padded grids additionally use a sentinel (see
/// [`PAD_SENTINEL`](crate::PAD_SENTINEL)) for cells beyond the map.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    shape: GridShape,
    cells: Vec<i32>,
}

impl Grid {
    /// An all-zero grid.
    pub fn zeros(shape: GridShape) -> Self {
        Self::filled(shape, 0)
    }

    /// A grid with every cell set to `value`.
    pub fn filled(shape: GridShape, value: i32) -> Self {
        Self {
            shape,
            cells: vec![value; shape.cell_count()],
        }
    }

    /// Build a grid from nested rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use forage_space::Grid;
    /// use forage_core::Position;
    ///
    /// let g = Grid::from_rows(vec![vec![0, 1], vec![2, 3]]).unwrap();
    /// assert_eq!(g.get(Position::new(1, 0)), Some(2));
    /// ```
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, SpaceError> {
        let expected = rows.first().map_or(0, Vec::len);
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(SpaceError::RaggedRows {
                row,
                len: r.len(),
                expected,
            });
        }
        let shape = GridShape::new(
            u32::try_from(rows.len()).map_err(|_| SpaceError::DimensionTooLarge {
                name: "rows",
                value: u32::MAX,
                max: GridShape::MAX_DIM,
            })?,
            u32::try_from(expected).map_err(|_| SpaceError::DimensionTooLarge {
                name: "cols",
                value: u32::MAX,
                max: GridShape::MAX_DIM,
            })?,
        )?;
        Ok(Self {
            shape,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// The grid's extent.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Cell value at `pos`, or `None` when out of bounds.
    pub fn get(&self, pos: Position) -> Option<i32> {
        self.shape.rank(pos).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `pos`. Returns `false` (and does nothing)
    /// when out of bounds.
    pub fn set(&mut self, pos: Position, value: i32) -> bool {
        match self.shape.rank(pos) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Add `value` to the cell at `pos`. Returns `false` (and does nothing)
    /// when out of bounds.
    pub fn add(&mut self, pos: Position, value: i32) -> bool {
        match self.shape.rank(pos) {
            Some(i) => {
                self.cells[i] += value;
                true
            }
            None => false,
        }
    }

    /// Elementwise sum of two grids of the same shape.
    pub fn checked_add(&self, other: &Grid) -> Result<Grid, SpaceError> {
        if self.shape != other.shape {
            return Err(SpaceError::ShapeMismatch {
                left: (self.shape.rows(), self.shape.cols()),
                right: (other.shape.rows(), other.shape.cols()),
            });
        }
        Ok(Grid {
            shape: self.shape,
            cells: self
                .cells
                .iter()
                .zip(&other.cells)
                .map(|(a, b)| a + b)
                .collect(),
        })
    }

    /// Copy of this grid surrounded by `width` cells of `fill` on every side.
    pub fn padded(&self, width: u32, fill: i32) -> Result<Grid, SpaceError> {
        let shape = self.shape.padded(width)?;
        let mut out = Grid::filled(shape, fill);
        let w = width as i32;
        for (p, &v) in self.shape.positions().zip(&self.cells) {
            out.set(p.offset(w, w), v);
        }
        Ok(out)
    }

    /// The `side x side` sub-grid whose top-left cell is `corner`.
    ///
    /// Unlike the padded-read convention of [`window`](crate::window), no
    /// clamping happens here: a window that does not fit is an error.
    pub fn slice(&self, corner: Position, side: u32) -> Result<Grid, SpaceError> {
        let out_of_bounds = || SpaceError::WindowOutOfBounds {
            corner,
            side,
            bounds: (self.shape.rows(), self.shape.cols()),
        };
        let shape = GridShape::new(side, side).map_err(|_| out_of_bounds())?;
        if !self.shape.contains(corner) {
            return Err(out_of_bounds());
        }
        let reach = side as i32 - 1;
        let far = corner
            .row
            .checked_add(reach)
            .zip(corner.col.checked_add(reach))
            .map(|(row, col)| Position::new(row, col));
        if !far.is_some_and(|p| self.shape.contains(p)) {
            return Err(out_of_bounds());
        }
        let cols = self.shape.cols() as usize;
        let mut cells = Vec::with_capacity(shape.cell_count());
        for r in 0..side as usize {
            let start = (corner.row as usize + r) * cols + corner.col as usize;
            cells.extend_from_slice(&self.cells[start..start + side as usize]);
        }
        Ok(Grid { shape, cells })
    }

    /// Row-major cell values.
    pub fn as_slice(&self) -> &[i32] {
        &self.cells
    }

    /// Iterator over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        self.cells.chunks(self.shape.cols() as usize)
    }

    /// Nested-row copy, mostly for assertions.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.rows().map(<[i32]>::to_vec).collect()
    }

    /// Sum of all cells.
    pub fn total(&self) -> i64 {
        self.cells.iter().map(|&v| i64::from(v)).sum()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{} [", self.shape.rows(), self.shape.cols())?;
        for row in self.rows() {
            writeln!(f, "  {row:?}")?;
        }
        write!(f, "]")
    }
}
