//! Stamping entities onto occupancy grids.
//!
//! A single entity is placed with [`place_on_grid`]; a batch is rendered
//! with [`render`], which is the elementwise sum of one placement per
//! entity over an empty grid. Two entities sharing a cell therefore sum on
//! overlap. Validated states never overlap, so this only shows up when a
//! caller builds layouts by hand.

use crate::state::ForageState;
use forage_core::Entity;
use forage_space::{Grid, GridShape};

/// Copy of `grid` with the cell under `entity` set to its grid value.
///
/// Tombstoned entities (eaten food) write 0. Applying the same placement
/// twice yields the same grid as applying it once.
pub fn place_on_grid<E: Entity + ?Sized>(entity: &E, grid: &Grid) -> Grid {
    let mut out = grid.clone();
    out.set(entity.position(), entity.grid_value());
    out
}

/// One [`place_on_grid`] per entity, each against the same `grid`.
pub fn render_each<E: Entity>(entities: &[E], grid: &Grid) -> Vec<Grid> {
    entities.iter().map(|e| place_on_grid(e, grid)).collect()
}

/// Aggregate occupancy grid: the sum of per-entity placements on zeros.
///
/// Accumulates in place rather than materialising one grid per entity;
/// the result is identical to summing [`render_each`] over an empty grid.
pub fn render<E: Entity>(entities: &[E], shape: GridShape) -> Grid {
    let mut out = Grid::zeros(shape);
    for e in entities {
        out.add(e.position(), e.grid_value());
    }
    out
}

/// `(agent_grid, food_grid)` for a state.
pub fn occupancy(state: &ForageState) -> (Grid, Grid) {
    (
        render(state.agents(), state.shape()),
        render(state.foods(), state.shape()),
    )
}
