//! Core types for the level-based foraging kernel.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! entities that every other crate in the workspace operates on: agents,
//! food items, grid positions, movement directions and decoded actions,
//! plus the error types raised at the kernel's fallible boundaries.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod entity;
pub mod error;
pub mod id;
pub mod position;

pub use action::{Action, Direction};
pub use entity::{Agent, Entity, Food, Level};
pub use error::{ActionError, StateError, StepError};
pub use id::AgentId;
pub use position::Position;
