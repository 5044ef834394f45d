//! Cooperative food consumption.

use forage_core::{Agent, Food, Level};
use forage_space::adjacency_mask;

/// Result of offering one food item to the agents around it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EatOutcome {
    /// The food after this step; `eaten` is set only if it was consumed now
    /// or already consumed before.
    pub food: Food,
    /// Whether the food was consumed by this call.
    pub became_eaten: bool,
    /// Per-agent level contribution, in input order: the agent's level if it
    /// was loading and adjacent, 0 otherwise. Filled in even when the
    /// combined level fell short, so callers can tell attempts from meals
    /// via `became_eaten`. All zeros for food that was already eaten.
    pub contributions: Vec<Level>,
}

/// Offer `food` to `agents`.
///
/// The food is consumed when at least one loading agent is adjacent and the
/// loading, adjacent agents' levels sum to at least the food's level.
/// Already-eaten food is returned unchanged with no contributions.
pub fn eat(agents: &[Agent], food: &Food) -> EatOutcome {
    if food.eaten {
        return EatOutcome {
            food: *food,
            became_eaten: false,
            contributions: vec![0; agents.len()],
        };
    }

    let adjacent = adjacency_mask(agents, food);
    let mut selected = 0usize;
    let mut total: i64 = 0;
    let contributions: Vec<Level> = agents
        .iter()
        .zip(&adjacent)
        .map(|(agent, &adj)| {
            if agent.loading && adj {
                selected += 1;
                total += i64::from(agent.level);
                agent.level
            } else {
                0
            }
        })
        .collect();

    let became_eaten = selected > 0 && total >= i64::from(food.level);
    EatOutcome {
        food: if became_eaten { food.consumed() } else { *food },
        became_eaten,
        contributions,
    }
}

/// One [`eat`] per food item, all against the same `agents`.
pub fn eat_all(agents: &[Agent], foods: &[Food]) -> Vec<EatOutcome> {
    foods.iter().map(|food| eat(agents, food)).collect()
}
