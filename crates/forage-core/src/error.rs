//! Error types for the kernel's fallible boundaries.
//!
//! Kernel operations themselves are total; these errors come from decoding
//! actions, validating an initial state, and driving a step.

use std::error::Error;
use std::fmt;

use crate::id::AgentId;
use crate::position::Position;

/// Errors from decoding a discrete action code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionError {
    /// The code does not name any action.
    UnknownCode {
        /// The offending code.
        code: u8,
    },
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCode { code } => write!(f, "unknown action code {code}"),
        }
    }
}

impl Error for ActionError {}

/// Errors detected while validating an initial agent/food layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateError {
    /// An entity lies outside the grid.
    OutOfBounds {
        /// Which entity, e.g. `"agent 3"` or `"food 0"`.
        entity: String,
        /// The offending position.
        position: Position,
    },
    /// Two agents share an id.
    DuplicateAgentId {
        /// The repeated id.
        id: AgentId,
    },
    /// A level is zero or negative.
    NonPositiveLevel {
        /// Which entity.
        entity: String,
        /// The offending level.
        level: i32,
    },
    /// Two entities that must not overlap share a cell.
    Overlap {
        /// The shared cell.
        position: Position,
    },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { entity, position } => {
                write!(f, "{entity} at {position} is outside the grid")
            }
            Self::DuplicateAgentId { id } => write!(f, "agent id {id} is used twice"),
            Self::NonPositiveLevel { entity, level } => {
                write!(f, "{entity} has non-positive level {level}")
            }
            Self::Overlap { position } => write!(f, "cell {position} is occupied twice"),
        }
    }
}

impl Error for StateError {}

/// Errors from driving a single step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepError {
    /// One action is required per agent.
    ActionCountMismatch {
        /// Number of agents in the state.
        expected: usize,
        /// Number of actions supplied.
        got: usize,
    },
    /// The state lives on a map of a different size than the stepper.
    ShapeMismatch {
        /// `(rows, cols)` the stepper was configured with.
        expected: (u32, u32),
        /// `(rows, cols)` of the supplied state.
        got: (u32, u32),
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActionCountMismatch { expected, got } => {
                write!(f, "expected {expected} actions, got {got}")
            }
            Self::ShapeMismatch { expected, got } => write!(
                f,
                "state is {}x{}, expected {}x{}",
                got.0, got.1, expected.0, expected.1
            ),
        }
    }
}

impl Error for StepError {}
