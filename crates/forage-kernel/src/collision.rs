//! Simultaneous-move arbitration.
//!
//! All agents propose independently, so two of them may pick the same
//! free cell. Every proposed cell is counted once in a single pass; each
//! agent whose cell was claimed more than once goes back to where it
//! started. There is no tie-break.

use forage_core::{Agent, Position};
use indexmap::IndexMap;

/// Final agent records after reverting every contested proposal.
///
/// `proposed[i]` and `original[i]` describe the same agent. The output has
/// one entry per proposal; a contested proposal with no matching original
/// record keeps its proposed cell.
pub fn resolve_collisions(proposed: &[Agent], original: &[Agent]) -> Vec<Agent> {
    resolve_collisions_counted(proposed, original).0
}

/// [`resolve_collisions`] plus the number of agents that were reverted.
pub fn resolve_collisions_counted(proposed: &[Agent], original: &[Agent]) -> (Vec<Agent>, usize) {
    let mut claims: IndexMap<Position, u32> = IndexMap::with_capacity(proposed.len());
    for agent in proposed {
        *claims.entry(agent.position).or_insert(0) += 1;
    }

    let mut reverted = 0;
    let resolved = proposed
        .iter()
        .enumerate()
        .map(|(i, next)| {
            let contested = claims.get(&next.position).copied().unwrap_or(0) > 1;
            match original.get(i) {
                Some(prev) if contested => {
                    reverted += 1;
                    next.with_position(prev.position)
                }
                _ => *next,
            }
        })
        .collect();
    (resolved, reverted)
}
