//! State-transition kernel for level-based foraging.
//!
//! Every phase is a pure function over a read-only snapshot and returns
//! new state; nothing here mutates its input.
//!
//! # Phase order (each step)
//!
//! 1. [`render`] - stamp agents and unconsumed food onto occupancy grids
//! 2. [`move_all`] - every agent proposes a move against the pre-step snapshot
//! 3. [`resolve_collisions`] - agents sharing a proposed cell all revert
//! 4. [`eat_all`] - each food checks its loading neighbours' combined level
//!
//! [`transition`] runs phases 2 through 4 in that order; [`Kernel`] bundles a
//! validated [`KernelConfig`] with the step and observation entry points.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod collision;
pub mod config;
pub mod eating;
pub mod kernel;
pub mod metrics;
pub mod movement;
pub mod observation;
pub mod render;
pub mod state;
pub mod transition;

pub use collision::{resolve_collisions, resolve_collisions_counted};
pub use config::{ConfigError, KernelConfig};
pub use eating::{eat, eat_all, EatOutcome};
pub use kernel::Kernel;
pub use metrics::StepMetrics;
pub use movement::{move_agent, move_all};
pub use observation::{observe, observe_all, AgentView};
pub use render::{occupancy, place_on_grid, render, render_each};
pub use state::ForageState;
pub use transition::{transition, StepOutcome};
