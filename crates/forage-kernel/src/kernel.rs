//! Configured entry point bundling map shape and observation radius.

use crate::config::{ConfigError, KernelConfig};
use crate::observation::{observe, observe_all, AgentView};
use crate::render::render;
use crate::state::ForageState;
use crate::transition::{transition, StepOutcome};
use forage_core::{Action, Agent, Food, StateError, StepError};
use forage_space::{Grid, GridShape, SpaceError};

/// A validated configuration plus the per-step operations that use it.
///
/// # Examples
///
/// ```
/// use forage_core::{Action, Agent, Food};
/// use forage_kernel::{Kernel, KernelConfig};
///
/// let kernel = Kernel::new(KernelConfig { rows: 3, cols: 3, field_of_view: 1 }).unwrap();
/// let state = kernel
///     .reset(
///         vec![Agent::new(0, 1, (0, 1)), Agent::new(1, 1, (1, 0))],
///         vec![Food::new(2, (1, 1))],
///     )
///     .unwrap();
/// let out = kernel.step(&state, &[Action::Load, Action::Load]).unwrap();
/// assert_eq!(out.eaten, vec![true]);
/// assert!(kernel.is_done(&out.state));
/// ```
#[derive(Clone, Debug)]
pub struct Kernel {
    config: KernelConfig,
    shape: GridShape,
}

impl Kernel {
    /// Validate `config` and build a kernel.
    pub fn new(config: KernelConfig) -> Result<Self, ConfigError> {
        let shape = config.validate()?;
        Ok(Self { config, shape })
    }

    /// The configuration this kernel was built from.
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Validated map shape.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Validate an initial layout against this kernel's shape.
    pub fn reset(&self, agents: Vec<Agent>, foods: Vec<Food>) -> Result<ForageState, StateError> {
        ForageState::new(self.shape, agents, foods)
    }

    /// Advance one step. See [`transition`].
    ///
    /// Fails with [`StepError::ShapeMismatch`] when `state` was built for a
    /// different map size.
    pub fn step(&self, state: &ForageState, actions: &[Action]) -> Result<StepOutcome, StepError> {
        let got = state.shape();
        if got != self.shape {
            return Err(StepError::ShapeMismatch {
                expected: dims(self.shape),
                got: dims(got),
            });
        }
        transition(state, actions)
    }

    /// The configured-radius view for one agent.
    pub fn observe(&self, state: &ForageState, agent: &Agent) -> Result<AgentView, SpaceError> {
        self.check_shape(state)?;
        observe(state, agent, self.config.field_of_view)
    }

    /// Views for every agent, in slot order.
    pub fn observe_all(&self, state: &ForageState) -> Result<Vec<AgentView>, SpaceError> {
        self.check_shape(state)?;
        observe_all(state, self.config.field_of_view)
    }

    fn check_shape(&self, state: &ForageState) -> Result<(), SpaceError> {
        if state.shape() == self.shape {
            Ok(())
        } else {
            Err(SpaceError::ShapeMismatch {
                left: dims(self.shape),
                right: dims(state.shape()),
            })
        }
    }

    // Rendering reads the state's own shape and cannot fail.

    /// Agent occupancy grid.
    pub fn render_agents(&self, state: &ForageState) -> Grid {
        render(state.agents(), state.shape())
    }

    /// Unconsumed-food occupancy grid.
    pub fn render_foods(&self, state: &ForageState) -> Grid {
        render(state.foods(), state.shape())
    }

    /// Whether the episode has nothing left to harvest.
    pub fn is_done(&self, state: &ForageState) -> bool {
        state.all_food_eaten()
    }
}

fn dims(shape: GridShape) -> (u32, u32) {
    (shape.rows(), shape.cols())
}

#[cfg(test)]
mod tests {
    use super::*;
    use forage_core::Position;
    use forage_test_utils::{agents, foods};

    fn kernel3() -> Kernel {
        Kernel::new(KernelConfig {
            rows: 3,
            cols: 3,
            field_of_view: 1,
        })
        .unwrap()
    }

    #[test]
    fn invalid_config_rejected() {
        let err = Kernel::new(KernelConfig {
            rows: 0,
            cols: 3,
            field_of_view: 1,
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::Space(SpaceError::EmptySpace));
    }

    #[test]
    fn reset_validates_against_shape() {
        let kernel = Kernel::new(KernelConfig {
            rows: 2,
            cols: 2,
            field_of_view: 1,
        })
        .unwrap();
        assert!(matches!(
            kernel.reset(agents(), vec![]),
            Err(StateError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn foreign_state_rejected() {
        let small = kernel3();
        let large = Kernel::new(KernelConfig {
            rows: 4,
            cols: 5,
            field_of_view: 1,
        })
        .unwrap();
        let state = large.reset(agents(), foods()).unwrap();

        assert_eq!(
            small.step(&state, &[Action::Noop; 4]).unwrap_err(),
            StepError::ShapeMismatch {
                expected: (3, 3),
                got: (4, 5)
            }
        );
        let mismatch = SpaceError::ShapeMismatch {
            left: (3, 3),
            right: (4, 5),
        };
        assert_eq!(small.observe(&state, &state.agents()[0]).unwrap_err(), mismatch);
        assert_eq!(small.observe_all(&state).unwrap_err(), mismatch);
        assert!(large.step(&state, &[Action::Noop; 4]).is_ok());
    }

    #[test]
    fn renders_fixture() {
        let kernel = kernel3();
        let state = kernel.reset(agents(), foods()).unwrap();
        assert_eq!(
            kernel.render_agents(&state).to_rows(),
            vec![vec![1, 2, 0], vec![2, 0, 1], vec![0, 0, 0]]
        );
        assert_eq!(
            kernel.render_foods(&state).to_rows(),
            vec![vec![0, 0, 0], vec![0, 4, 0], vec![3, 0, 0]]
        );
    }

    #[test]
    fn episode_runs_to_completion() {
        let kernel = kernel3();
        let state = kernel.reset(agents(), foods()).unwrap();
        assert!(!kernel.is_done(&state));

        // Eat the centre food with agents 1, 2 and 3.
        let out = kernel
            .step(&state, &[Action::Noop, Action::Load, Action::Load, Action::Load])
            .unwrap();
        assert_eq!(out.eaten, vec![true, false]);

        // Agent 3 walks down to (2, 2), then left to (2, 1) beside food 1.
        let out = kernel
            .step(&out.state, &[Action::Noop, Action::Noop, Action::Noop, Action::Down])
            .unwrap();
        let out = kernel
            .step(&out.state, &[Action::Noop, Action::Noop, Action::Noop, Action::Left])
            .unwrap();
        assert_eq!(out.state.agents()[3].position, Position::new(2, 1));

        // Agents 2 (level 2) and 3 (level 1) load on food 1 (level 3).
        let out = kernel
            .step(&out.state, &[Action::Noop, Action::Noop, Action::Load, Action::Load])
            .unwrap();
        assert_eq!(out.eaten, vec![false, true]);
        assert_eq!(out.contributions[1], vec![0, 0, 2, 1]);
        assert!(kernel.is_done(&out.state));
    }

    #[test]
    fn observe_uses_configured_radius() {
        let kernel = kernel3();
        let state = kernel.reset(agents(), foods()).unwrap();
        let views = kernel.observe_all(&state).unwrap();
        assert_eq!(views.len(), 4);
        assert!(views.iter().all(|v| v.agents.shape().rows() == 3));
        assert_eq!(kernel.observe(&state, &state.agents()[2]).unwrap(), views[2]);
    }
}
