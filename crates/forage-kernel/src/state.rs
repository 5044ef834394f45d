//! Validated agent/food snapshot.

use forage_core::{Agent, Entity, Food, Position, StateError};
use forage_space::GridShape;
use indexmap::IndexSet;

/// The full simulation state between steps.
///
/// Agent and food collections keep a fixed length for the whole episode:
/// consumed food is tombstoned, never removed. Validation happens once in
/// [`ForageState::new`]; the kernel phases themselves trust their input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForageState {
    shape: GridShape,
    agents: Vec<Agent>,
    foods: Vec<Food>,
}

impl ForageState {
    /// Validate and wrap an initial layout.
    ///
    /// # Errors
    ///
    /// - [`StateError::OutOfBounds`] if any entity lies outside `shape`
    /// - [`StateError::NonPositiveLevel`] if any level is `<= 0`
    /// - [`StateError::DuplicateAgentId`] if two agents share an id
    /// - [`StateError::Overlap`] if two agents, two unconsumed foods, or an
    ///   agent and an unconsumed food share a cell
    pub fn new(shape: GridShape, agents: Vec<Agent>, foods: Vec<Food>) -> Result<Self, StateError> {
        let mut ids = IndexSet::with_capacity(agents.len());
        for (i, agent) in agents.iter().enumerate() {
            check_entity(shape, agent, || format!("agent {i}"))?;
            if !ids.insert(agent.id) {
                return Err(StateError::DuplicateAgentId { id: agent.id });
            }
        }
        for (i, food) in foods.iter().enumerate() {
            check_entity(shape, food, || format!("food {i}"))?;
        }

        let mut occupied: IndexSet<Position> = IndexSet::new();
        let blocking = agents
            .iter()
            .map(|a| a.position)
            .chain(foods.iter().filter(|f| !f.eaten).map(|f| f.position));
        for position in blocking {
            if !occupied.insert(position) {
                return Err(StateError::Overlap { position });
            }
        }

        Ok(Self::from_parts(shape, agents, foods))
    }

    /// Wrap phase output without re-validating.
    pub(crate) fn from_parts(shape: GridShape, agents: Vec<Agent>, foods: Vec<Food>) -> Self {
        Self {
            shape,
            agents,
            foods,
        }
    }

    /// Grid extent the state lives on.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Agents in slot order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Food items in slot order, eaten ones included.
    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    /// Number of food items not yet eaten.
    pub fn remaining_food(&self) -> usize {
        self.foods.iter().filter(|f| !f.eaten).count()
    }

    /// Whether every food item has been eaten.
    pub fn all_food_eaten(&self) -> bool {
        self.foods.iter().all(|f| f.eaten)
    }

    /// Consume the state, returning `(agents, foods)`.
    pub fn into_parts(self) -> (Vec<Agent>, Vec<Food>) {
        (self.agents, self.foods)
    }
}

fn check_entity<E: Entity>(
    shape: GridShape,
    entity: &E,
    name: impl Fn() -> String,
) -> Result<(), StateError> {
    if !shape.contains(entity.position()) {
        return Err(StateError::OutOfBounds {
            entity: name(),
            position: entity.position(),
        });
    }
    if entity.level() <= 0 {
        return Err(StateError::NonPositiveLevel {
            entity: name(),
            level: entity.level(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use forage_core::AgentId;

    fn shape() -> GridShape {
        GridShape::square(3).unwrap()
    }

    #[test]
    fn valid_layout_accepted() {
        let state = ForageState::new(
            shape(),
            vec![Agent::new(0, 1, (0, 0)), Agent::new(1, 2, (0, 1))],
            vec![Food::new(3, (1, 1))],
        )
        .unwrap();
        assert_eq!(state.agents().len(), 2);
        assert_eq!(state.remaining_food(), 1);
        assert!(!state.all_food_eaten());
    }

    #[test]
    fn out_of_bounds_agent_rejected() {
        let err = ForageState::new(shape(), vec![Agent::new(0, 1, (3, 0))], vec![]).unwrap_err();
        assert_eq!(
            err,
            StateError::OutOfBounds {
                entity: "agent 0".into(),
                position: Position::new(3, 0),
            }
        );
    }

    #[test]
    fn zero_level_food_rejected() {
        let err = ForageState::new(shape(), vec![], vec![Food::new(0, (1, 1))]).unwrap_err();
        assert!(matches!(err, StateError::NonPositiveLevel { level: 0, .. }));
    }

    #[test]
    fn duplicate_id_rejected() {
        let err = ForageState::new(
            shape(),
            vec![Agent::new(4, 1, (0, 0)), Agent::new(4, 1, (2, 2))],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, StateError::DuplicateAgentId { id: AgentId(4) });
    }

    #[test]
    fn agent_on_food_rejected() {
        let err = ForageState::new(
            shape(),
            vec![Agent::new(0, 1, (1, 1))],
            vec![Food::new(2, (1, 1))],
        )
        .unwrap_err();
        assert_eq!(
            err,
            StateError::Overlap {
                position: Position::new(1, 1)
            }
        );
    }

    #[test]
    fn agent_on_eaten_food_allowed() {
        let state = ForageState::new(
            shape(),
            vec![Agent::new(0, 1, (1, 1))],
            vec![Food::new(2, (1, 1)).consumed()],
        )
        .unwrap();
        assert!(state.all_food_eaten());
    }
}
