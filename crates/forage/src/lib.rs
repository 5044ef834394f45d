//! Forage: a level-based foraging kernel for multi-agent reinforcement learning.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the forage sub-crates. For most users, adding `forage` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use forage::prelude::*;
//!
//! let kernel = Kernel::new(KernelConfig { rows: 3, cols: 3, field_of_view: 1 }).unwrap();
//! let state = kernel
//!     .reset(
//!         vec![Agent::new(0, 1, (0, 0)), Agent::new(1, 2, (1, 2))],
//!         vec![Food::new(3, (1, 1))],
//!     )
//!     .unwrap();
//!
//! // Agent 0 steps down beside the food; agent 1 is already adjacent.
//! let out = kernel.step(&state, &[Action::Down, Action::Load]).unwrap();
//! assert_eq!(out.state.agents()[0].position, Position::new(1, 0));
//! assert_eq!(out.eaten, vec![false]);
//!
//! // Both load together: 1 + 2 reaches the food's level.
//! let out = kernel.step(&out.state, &[Action::Load, Action::Load]).unwrap();
//! assert_eq!(out.eaten, vec![true]);
//! assert_eq!(out.contributions[0], vec![1, 2]);
//!
//! let view = kernel.observe(&out.state, &out.state.agents()[0]).unwrap();
//! assert_eq!(view.agents.to_rows()[0], vec![-1, 0, 0]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `forage-core` | Positions, agents, food, actions, errors |
//! | [`space`] | `forage-space` | Grid shapes, grids, adjacency, windows |
//! | [`kernel`] | `forage-kernel` | Phases, state, configuration, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Entities, positions, actions and errors (`forage-core`).
pub use forage_core as types;

/// Grid storage and spatial queries (`forage-space`).
///
/// Provides [`space::GridShape`], [`space::Grid`], the adjacency predicate
/// [`space::is_adjacent`] and window extraction via [`space::extract_view`].
pub use forage_space as space;

/// Step phases and the configured entry point (`forage-kernel`).
///
/// [`kernel::transition`] runs one step; [`kernel::Kernel`] bundles it with
/// a validated [`kernel::KernelConfig`].
pub use forage_kernel as kernel;

/// Common imports for typical usage.
///
/// ```rust
/// use forage::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use forage_core::{Action, Agent, AgentId, Direction, Entity, Food, Level, Position};

    // Errors
    pub use forage_core::{ActionError, StateError, StepError};
    pub use forage_kernel::ConfigError;
    pub use forage_space::SpaceError;

    // Space
    pub use forage_space::{Grid, GridShape, PAD_SENTINEL};

    // Kernel
    pub use forage_kernel::{
        AgentView, ForageState, Kernel, KernelConfig, StepMetrics, StepOutcome,
    };
}
