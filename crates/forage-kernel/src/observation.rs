//! Agent-centred partial observations.
//!
//! Each view is three `(2 * fov + 1)`-sided channels read out of padded
//! whole-map grids with [`extract_view`]:
//!
//! - `agents`: agent levels, `-1` beyond the map
//! - `foods`: unconsumed food levels, `-1` beyond the map
//! - `access`: 1 where the observer could stand (in bounds, no other agent,
//!   no unconsumed food), 0 otherwise; the observer's own cell is 1

use crate::render::render;
use crate::state::ForageState;
use forage_core::{Agent, Position};
use forage_space::{extract_view, Grid, SpaceError, PAD_SENTINEL};

/// One agent's local view of the map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentView {
    /// Agent levels around the observer, itself included at the centre.
    pub agents: Grid,
    /// Unconsumed food levels around the observer.
    pub foods: Grid,
    /// Cells the observer could occupy.
    pub access: Grid,
}

/// Whole-map padded channels, built once and sliced per agent.
struct PaddedChannels {
    agents: Grid,
    foods: Grid,
    access: Grid,
    fov: u32,
}

impl PaddedChannels {
    fn build(state: &ForageState, fov: u32) -> Result<Self, SpaceError> {
        let shape = state.shape();
        let agents = render(state.agents(), shape);
        let foods = render(state.foods(), shape);

        let mut access = Grid::filled(shape, 1);
        let blocking = state
            .agents()
            .iter()
            .map(|a| a.position)
            .chain(state.foods().iter().filter(|f| !f.eaten).map(|f| f.position));
        for p in blocking {
            access.set(p, 0);
        }

        Ok(Self {
            agents: agents.padded(fov, PAD_SENTINEL)?,
            foods: foods.padded(fov, PAD_SENTINEL)?,
            access: access.padded(fov, 0)?,
            fov,
        })
    }

    fn view(&self, agent: &Agent) -> Result<AgentView, SpaceError> {
        let mut access = extract_view(&self.access, agent.position, self.fov)?;
        let centre = Position::new(self.fov as i32, self.fov as i32);
        access.set(centre, 1);
        Ok(AgentView {
            agents: extract_view(&self.agents, agent.position, self.fov)?,
            foods: extract_view(&self.foods, agent.position, self.fov)?,
            access,
        })
    }
}

/// The view of `agent` with radius `fov`.
pub fn observe(state: &ForageState, agent: &Agent, fov: u32) -> Result<AgentView, SpaceError> {
    PaddedChannels::build(state, fov)?.view(agent)
}

/// One view per agent, in slot order. Renders and pads the map once.
pub fn observe_all(state: &ForageState, fov: u32) -> Result<Vec<AgentView>, SpaceError> {
    let channels = PaddedChannels::build(state, fov)?;
    state.agents().iter().map(|a| channels.view(a)).collect()
}
