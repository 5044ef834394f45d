//! Strongly-typed identifiers.

use std::fmt;

/// Identifies an agent within an episode.
///
/// Assigned at reset and never reused. The kernel uses the id, not the
/// slot index, to decide whether two agent records describe the same agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AgentId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
