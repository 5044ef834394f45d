//! One full step: load flags, movement, arbitration, eating.

use crate::collision::resolve_collisions_counted;
use crate::eating::eat_all;
use crate::metrics::StepMetrics;
use crate::movement::move_all;
use crate::state::ForageState;
use forage_core::{Action, Agent, Level, StepError};

/// Everything a step produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// State after the step.
    pub state: ForageState,
    /// `eaten[f]` is true when food `f` was consumed during this step.
    pub eaten: Vec<bool>,
    /// `contributions[f][a]`: agent `a`'s level contribution to food `f`.
    pub contributions: Vec<Vec<Level>>,
    /// Phase counters.
    pub metrics: StepMetrics,
}

impl StepOutcome {
    /// Number of food items consumed this step.
    pub fn eaten_count(&self) -> usize {
        self.eaten.iter().filter(|&&e| e).count()
    }

    /// Whether every food item is now eaten.
    pub fn all_eaten(&self) -> bool {
        self.state.all_food_eaten()
    }
}

/// Advance `state` by one step. `actions[i]` is agent `i`'s action.
///
/// Phases run in a fixed order, each against the previous phase's output:
/// loading flags are set from the actions, every agent proposes a move
/// against the pre-step snapshot, contested cells are reverted, and then
/// each food item is offered to the post-movement agents. `state` itself
/// is not modified.
pub fn transition(state: &ForageState, actions: &[Action]) -> Result<StepOutcome, StepError> {
    let agents = state.agents();
    if actions.len() != agents.len() {
        return Err(StepError::ActionCountMismatch {
            expected: agents.len(),
            got: actions.len(),
        });
    }

    let mut metrics = StepMetrics::default();

    let flagged: Vec<Agent> = agents
        .iter()
        .zip(actions)
        .map(|(agent, action)| agent.with_loading(action.is_load()))
        .collect();
    metrics.loading_agents = count(flagged.iter().filter(|a| a.loading));

    let proposed = move_all(&flagged, actions, state.foods(), state.shape());
    metrics.moves_attempted = count(actions.iter().filter(|a| a.direction().is_some()));
    metrics.moves_blocked = count(
        proposed
            .iter()
            .zip(&flagged)
            .zip(actions)
            .filter(|((next, prev), action)| {
                action.direction().is_some() && next.position == prev.position
            }),
    );

    let (moved, reverted) = resolve_collisions_counted(&proposed, &flagged);
    metrics.collisions_reverted = u32::try_from(reverted).unwrap_or(u32::MAX);

    let outcomes = eat_all(&moved, state.foods());
    let mut foods = Vec::with_capacity(outcomes.len());
    let mut eaten = Vec::with_capacity(outcomes.len());
    let mut contributions = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        foods.push(outcome.food);
        eaten.push(outcome.became_eaten);
        contributions.push(outcome.contributions);
    }
    metrics.foods_eaten = count(eaten.iter().filter(|&&e| e));

    Ok(StepOutcome {
        state: ForageState::from_parts(state.shape(), moved, foods),
        eaten,
        contributions,
        metrics,
    })
}

fn count<I: Iterator>(iter: I) -> u32 {
    u32::try_from(iter.count()).unwrap_or(u32::MAX)
}
