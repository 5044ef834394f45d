//! Per-step counters.
//!
//! [`StepMetrics`] summarises what each phase did during one step, for
//! telemetry and for sanity checks in tests.

/// Counters collected during a single step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Agents whose action requested a move.
    pub moves_attempted: u32,
    /// Requested moves rejected by bounds or occupancy.
    pub moves_blocked: u32,
    /// Agents sent back to their start cell by collision arbitration.
    pub collisions_reverted: u32,
    /// Agents that signalled loading.
    pub loading_agents: u32,
    /// Food items consumed this step.
    pub foods_eaten: u32,
}

impl StepMetrics {
    /// Moves that were proposed and survived arbitration.
    pub fn moves_completed(&self) -> u32 {
        self.moves_attempted
            .saturating_sub(self.moves_blocked)
            .saturating_sub(self.collisions_reverted)
    }
}
