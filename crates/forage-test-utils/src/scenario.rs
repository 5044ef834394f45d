//! Deterministic random layouts for property and determinism tests.

use forage_core::{Agent, Food, Position};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A non-overlapping agent/food layout on a `rows x cols` map.
#[derive(Clone, Debug)]
pub struct Layout {
    pub rows: u32,
    pub cols: u32,
    pub agents: Vec<Agent>,
    pub foods: Vec<Food>,
}

/// Place up to `n_agents` agents and `n_foods` food items on distinct cells.
///
/// Levels are drawn from `1..=max_level`. When the map has fewer cells than
/// requested entities, agents are placed first and food gets what is left.
/// The same seed always yields the same layout.
pub fn random_layout(
    seed: u64,
    rows: u32,
    cols: u32,
    n_agents: usize,
    n_foods: usize,
    max_level: i32,
) -> Layout {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cells: Vec<Position> = (0..rows as i32)
        .flat_map(|r| (0..cols as i32).map(move |c| Position::new(r, c)))
        .collect();
    cells.shuffle(&mut rng);

    let max_level = max_level.max(1);
    let n_agents = n_agents.min(cells.len());
    let n_foods = n_foods.min(cells.len() - n_agents);

    let agents = cells[..n_agents]
        .iter()
        .enumerate()
        .map(|(i, &p)| Agent::new(i as u32, rng.random_range(1..=max_level), p))
        .collect::<Vec<_>>();
    let foods = cells[n_agents..n_agents + n_foods]
        .iter()
        .map(|&p| Food::new(rng.random_range(1..=max_level), p))
        .collect();

    Layout {
        rows,
        cols,
        agents,
        foods,
    }
}

/// A seeded permutation of `0..n`.
pub fn shuffled_order(seed: u64, n: usize) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(&mut rng);
    order
}
