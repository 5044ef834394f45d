//! Benchmark profiles for the foraging kernel.
//!
//! - [`reference_state`]: 32x32 map, 16 agents, 24 food items
//! - [`stress_state`]: 128x128 map, 256 agents, 512 food items
//! - [`init_positions`]: deterministic, collision-free cell placement
//! - [`action_schedule`]: deterministic per-tick actions

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::error::Error;
use std::fmt;

use forage_core::{Action, Agent, Food, Position, StateError};
use forage_kernel::ForageState;
use forage_space::{GridShape, SpaceError};

/// Failure to assemble a benchmark profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// The map shape was rejected.
    Space(SpaceError),
    /// The generated layout was rejected.
    State(StateError),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::State(e) => write!(f, "state: {e}"),
        }
    }
}

impl Error for ProfileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::State(e) => Some(e),
        }
    }
}

impl From<SpaceError> for ProfileError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<StateError> for ProfileError {
    fn from(e: StateError) -> Self {
        Self::State(e)
    }
}

/// Build the reference profile: 32x32 map with 16 agents and 24 food items.
pub fn reference_state(seed: u64) -> Result<ForageState, ProfileError> {
    profile(32, 16, 24, seed)
}

/// Build the stress profile: 128x128 map with 256 agents and 512 food items.
pub fn stress_state(seed: u64) -> Result<ForageState, ProfileError> {
    profile(128, 256, 512, seed)
}

fn profile(
    side: u32,
    n_agents: usize,
    n_foods: usize,
    seed: u64,
) -> Result<ForageState, ProfileError> {
    let shape = GridShape::square(side)?;
    let cells = init_positions(shape, n_agents + n_foods, seed);
    let (agent_cells, food_cells) = cells.split_at(n_agents.min(cells.len()));

    let agents = agent_cells
        .iter()
        .enumerate()
        .map(|(i, &p)| Agent::new(i as u32, 1 + (i % 3) as i32, p))
        .collect();
    let foods = food_cells
        .iter()
        .enumerate()
        .map(|(i, &p)| Food::new(1 + (i % 5) as i32, p))
        .collect();

    Ok(ForageState::new(shape, agents, foods)?)
}

/// Generate `n` distinct in-bounds positions from `seed`.
///
/// Uses a multiplicative hash per slot with linear probing on collision.
/// Returns fewer than `n` positions only when the map has fewer cells.
pub fn init_positions(shape: GridShape, n: usize, seed: u64) -> Vec<Position> {
    let cell_count = shape.cell_count();
    let n = n.min(cell_count);
    let mut occupied = vec![false; cell_count];
    let mut positions = Vec::with_capacity(n);

    for i in 0..n {
        let mut rank = (seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(i as u64 * 1442695040888963407)
            % cell_count as u64) as usize;
        while occupied[rank] {
            rank = (rank + 1) % cell_count;
        }
        occupied[rank] = true;
        positions.extend(shape.position(rank));
    }

    positions
}

/// Deterministic actions for `n_agents` at `tick`.
///
/// Every fourth agent loads, the rest cycle through the four directions.
pub fn action_schedule(n_agents: usize, tick: u64) -> Vec<Action> {
    const MOVES: [Action; 4] = [Action::Up, Action::Right, Action::Down, Action::Left];
    (0..n_agents)
        .map(|i| {
            if i % 4 == 0 {
                Action::Load
            } else {
                MOVES[(i + tick as usize) % MOVES.len()]
            }
        })
        .collect()
}
