//! Orthogonal adjacency.
//!
//! Two cells are adjacent when they are exactly one step apart along
//! exactly one axis (Manhattan distance 1). Diagonal neighbours and a cell
//! paired with itself are not adjacent.

use crate::shape::GridShape;
use forage_core::{Entity, Position};
use smallvec::SmallVec;

/// Whether `a` and `b` occupy orthogonally adjacent cells.
///
/// # Examples
///
/// ```
/// use forage_core::Food;
/// use forage_space::is_adjacent;
///
/// let a = Food::new(1, (1, 1));
/// assert!(is_adjacent(&a, &Food::new(1, (1, 2))));
/// assert!(!is_adjacent(&a, &Food::new(1, (2, 2))));
/// assert!(!is_adjacent(&a, &a));
/// ```
pub fn is_adjacent<A: Entity + ?Sized, B: Entity + ?Sized>(a: &A, b: &B) -> bool {
    a.position().manhattan(b.position()) == 1
}

/// Batched [`is_adjacent`]: one flag per entity in `entities`, in order,
/// telling whether it is adjacent to `target`.
pub fn adjacency_mask<E: Entity, T: Entity + ?Sized>(entities: &[E], target: &T) -> Vec<bool> {
    entities.iter().map(|e| is_adjacent(e, target)).collect()
}

/// In-bounds orthogonal neighbours of `pos`, in up, down, left, right order.
pub fn adjacent_cells(pos: Position, shape: GridShape) -> SmallVec<[Position; 4]> {
    pos.neighbours()
        .into_iter()
        .filter(|&p| shape.contains(p))
        .collect()
}
