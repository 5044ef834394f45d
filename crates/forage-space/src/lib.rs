//! Spatial layer of the foraging kernel.
//!
//! - [`GridShape`]: validated `(rows, cols)` bounds with row-major ranks
//! - [`Grid`]: dense row-major integer storage, with padding and slicing
//! - [`adjacency`]: the orthogonal-neighbour predicate and its batched form
//! - [`window`]: top-left offsets and view extraction from padded grids

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adjacency;
pub mod error;
pub mod grid;
pub mod shape;
pub mod window;

pub use adjacency::{adjacency_mask, adjacent_cells, is_adjacent};
pub use error::SpaceError;
pub use grid::Grid;
pub use shape::GridShape;
pub use window::{extract_view, window_offset, window_side, PAD_SENTINEL};
