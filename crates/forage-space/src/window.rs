//! Agent-centred square windows read from padded grids.
//!
//! A view of radius `fov` around `pos` is the `(2 * fov + 1)`-sided square
//! whose centre is `pos`. Callers pad the source grid by `fov` cells on
//! every side first; in padded coordinates the window's top-left corner is
//! then `pos - fov + fov = pos`, so no clamping is ever needed.

use crate::error::SpaceError;
use crate::grid::Grid;
use forage_core::Position;

/// Fill value for cells beyond the map in padded grids.
pub const PAD_SENTINEL: i32 = -1;

/// Top-left corner, in padded-grid coordinates, of the window centred on
/// `position` (given in unpadded coordinates).
///
/// Valid only when the grid was padded by at least `field_of_view` on
/// every side. Performs no clamping.
pub fn window_offset(position: Position, _field_of_view: u32) -> Position {
    // Window starts fov cells before the centre; padding shifts the origin
    // back by the same fov, so the two cancel.
    position
}

/// Side length of a window of radius `field_of_view`.
///
/// Saturates at `u32::MAX`; such a window never fits any grid, so
/// [`extract_view`] reports it as out of bounds.
pub fn window_side(field_of_view: u32) -> u32 {
    field_of_view
        .checked_mul(2)
        .and_then(|d| d.checked_add(1))
        .unwrap_or(u32::MAX)
}

/// Read the window of radius `field_of_view` centred on `position` out of
/// `padded`, which must already be padded by `field_of_view`.
///
/// # Examples
///
/// ```
/// use forage_core::Position;
/// use forage_space::{extract_view, Grid, PAD_SENTINEL};
///
/// let grid = Grid::from_rows(vec![vec![0, 1], vec![2, 3]]).unwrap();
/// let padded = grid.padded(1, PAD_SENTINEL).unwrap();
/// let view = extract_view(&padded, Position::new(0, 0), 1).unwrap();
/// assert_eq!(view.to_rows(), vec![vec![-1, -1, -1], vec![-1, 0, 1], vec![-1, 2, 3]]);
/// ```
pub fn extract_view(
    padded: &Grid,
    position: Position,
    field_of_view: u32,
) -> Result<Grid, SpaceError> {
    padded.slice(
        window_offset(position, field_of_view),
        window_side(field_of_view),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::GridShape;
    use proptest::prelude::*;

    fn arange_3x3() -> Grid {
        Grid::from_rows(vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8]]).unwrap()
    }

    #[test]
    fn offset_is_identity() {
        let pos = Position::new(1, 1);
        assert_eq!(window_offset(pos, 1), pos);
        assert_eq!(window_offset(pos, 5), pos);
    }

    #[test]
    fn offset_ignores_huge_radius() {
        let pos = Position::new(0, 0);
        assert_eq!(window_offset(pos, 1 << 31), pos);
        assert_eq!(window_offset(Position::new(2, 7), u32::MAX), Position::new(2, 7));
    }

    #[test]
    fn side_saturates() {
        assert_eq!(window_side(0), 1);
        assert_eq!(window_side(3), 7);
        assert_eq!(window_side(1 << 31), u32::MAX);
        assert_eq!(window_side(u32::MAX), u32::MAX);
    }

    #[test]
    fn huge_radius_view_is_error() {
        let grid = arange_3x3();
        assert!(matches!(
            extract_view(&grid, Position::new(1, 1), 1 << 31),
            Err(SpaceError::WindowOutOfBounds { .. })
        ));
    }

    #[test]
    fn fov_one_recovers_whole_grid() {
        let grid = arange_3x3();
        let padded = grid.padded(1, PAD_SENTINEL).unwrap();
        let view = extract_view(&padded, Position::new(1, 1), 1).unwrap();
        assert_eq!(view, grid);
    }

    #[test]
    fn fov_two_rings_with_sentinel() {
        let padded = arange_3x3().padded(2, PAD_SENTINEL).unwrap();
        let view = extract_view(&padded, Position::new(1, 1), 2).unwrap();
        assert_eq!(
            view.to_rows(),
            vec![
                vec![-1, -1, -1, -1, -1],
                vec![-1, 0, 1, 2, -1],
                vec![-1, 3, 4, 5, -1],
                vec![-1, 6, 7, 8, -1],
                vec![-1, -1, -1, -1, -1],
            ]
        );
    }

    #[test]
    fn under_padded_source_is_error() {
        let padded = arange_3x3().padded(1, PAD_SENTINEL).unwrap();
        assert!(extract_view(&padded, Position::new(2, 2), 2).is_err());
    }

    #[test]
    fn fov_zero_is_single_cell() {
        let grid = arange_3x3();
        let view = extract_view(&grid, Position::new(2, 1), 0).unwrap();
        assert_eq!(view.to_rows(), vec![vec![7]]);
    }

    proptest! {
        #[test]
        fn centre_of_view_is_the_cell(
            rows in 1u32..8, cols in 1u32..8, fov in 0u32..4, r in 0i32..8, c in 0i32..8,
        ) {
            let shape = GridShape::new(rows, cols).unwrap();
            let pos = Position::new(r % rows as i32, c % cols as i32);
            let mut grid = Grid::zeros(shape);
            for p in shape.positions() {
                grid.set(p, shape.rank(p).unwrap() as i32);
            }
            let padded = grid.padded(fov, PAD_SENTINEL).unwrap();
            let view = extract_view(&padded, pos, fov).unwrap();
            prop_assert_eq!(view.shape().rows(), window_side(fov));
            let centre = Position::new(fov as i32, fov as i32);
            prop_assert_eq!(view.get(centre), grid.get(pos));
        }
    }
}
