//! Per-agent move proposals.
//!
//! Each agent's candidate cell is checked against the pre-step snapshot
//! only: bounds, unconsumed food, and the *current* cells of other agents.
//! Two agents stepping into the same empty cell both pass here; the
//! [`collision`](crate::collision) phase settles that afterwards.

use forage_core::{Action, Agent, Direction, Food, Position};
use forage_space::GridShape;

/// The cell `agent` ends up in after trying to step in `direction`.
///
/// Returns the candidate cell when it is inside `shape`, holds no
/// unconsumed food, and is not the current cell of any other agent
/// (compared by id). Otherwise returns the agent's current position.
pub fn move_agent(
    agent: &Agent,
    direction: Direction,
    foods: &[Food],
    agents: &[Agent],
    shape: GridShape,
) -> Position {
    let (dr, dc) = direction.offset_2d();
    let candidate = agent.position.offset(dr, dc);

    let in_bounds = shape.contains(candidate);
    let food_blocked = foods.iter().any(|f| !f.eaten && f.position == candidate);
    let agent_blocked = agents
        .iter()
        .any(|other| other.id != agent.id && other.position == candidate);

    if in_bounds && !food_blocked && !agent_blocked {
        candidate
    } else {
        agent.position
    }
}

/// Proposals for every agent, each computed against the same `agents`
/// snapshot. Non-moving actions keep the current position.
///
/// `actions[i]` belongs to `agents[i]`. The output always has one entry per
/// agent: agents without an action stay put, and surplus actions are ignored.
pub fn move_all(agents: &[Agent], actions: &[Action], foods: &[Food], shape: GridShape) -> Vec<Agent> {
    agents
        .iter()
        .enumerate()
        .map(|(i, agent)| match actions.get(i).and_then(|a| a.direction()) {
            Some(direction) => {
                agent.with_position(move_agent(agent, direction, foods, agents, shape))
            }
            None => *agent,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use forage_test_utils::{agents, foods};
    use proptest::prelude::*;

    fn shape3() -> GridShape {
        GridShape::square(3).unwrap()
    }

    #[test]
    fn move_into_free_cell() {
        let a = agents();
        let pos = move_agent(&a[1], Direction::Right, &foods(), &a, shape3());
        assert_eq!(pos, Position::new(0, 2));
    }

    #[test]
    fn other_agent_blocks() {
        let a = agents();
        let pos = move_agent(&a[1], Direction::Left, &foods(), &a, shape3());
        assert_eq!(pos, a[1].position);
    }

    #[test]
    fn food_blocks() {
        let a = agents();
        let pos = move_agent(&a[1], Direction::Down, &foods(), &a, shape3());
        assert_eq!(pos, a[1].position);
    }

    #[test]
    fn border_blocks() {
        let a = agents();
        let pos = move_agent(&a[1], Direction::Up, &foods(), &a, shape3());
        assert_eq!(pos, a[1].position);
    }

    #[test]
    fn eaten_food_does_not_block() {
        let a = agents();
        let f: Vec<Food> = foods().into_iter().map(Food::consumed).collect();
        let pos = move_agent(&a[1], Direction::Down, &f, &a, shape3());
        assert_eq!(pos, Position::new(1, 1));
    }

    #[test]
    fn own_cell_is_not_a_conflict() {
        // A lone agent in a corridor: its own record is in the snapshot.
        let solo = [Agent::new(0, 1, (0, 0))];
        let shape = GridShape::new(1, 3).unwrap();
        let pos = move_agent(&solo[0], Direction::Right, &[], &solo, shape);
        assert_eq!(pos, Position::new(0, 1));
    }

    #[test]
    fn move_all_uses_pre_step_snapshot() {
        // Agent 0 moves right into the cell agent 1 is vacating; it is still
        // blocked because agent 1 occupies it in the snapshot.
        let a = [Agent::new(0, 1, (0, 0)), Agent::new(1, 1, (0, 1))];
        let shape = GridShape::new(1, 3).unwrap();
        let out = move_all(&a, &[Action::Right, Action::Right], &[], shape);
        assert_eq!(out[0].position, Position::new(0, 0));
        assert_eq!(out[1].position, Position::new(0, 2));
    }

    #[test]
    fn move_all_keeps_agents_without_actions() {
        let a = [Agent::new(0, 1, (0, 0)), Agent::new(1, 1, (2, 2))];
        let out = move_all(&a, &[Action::Right], &[], shape3());
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].position, Position::new(0, 1));
        assert_eq!(out[1], a[1]);

        let out = move_all(&a, &[], &[], shape3());
        assert_eq!(out, a);
    }

    #[test]
    fn move_all_ignores_surplus_actions() {
        let a = [Agent::new(0, 1, (0, 0))];
        let out = move_all(&a, &[Action::Down, Action::Right, Action::Load], &[], shape3());
        assert_eq!(out, vec![a[0].with_position(Position::new(1, 0))]);
    }

    #[test]
    fn move_all_same_target_both_proposed() {
        let a = [Agent::new(0, 1, (0, 0)), Agent::new(1, 1, (0, 2))];
        let shape = GridShape::new(1, 3).unwrap();
        let out = move_all(&a, &[Action::Right, Action::Left], &[], shape);
        assert_eq!(out[0].position, Position::new(0, 1));
        assert_eq!(out[1].position, Position::new(0, 1));
    }

    #[test]
    fn load_and_noop_stay() {
        let a = agents();
        let out = move_all(
            &a,
            &[Action::Noop, Action::Load, Action::Noop, Action::Load],
            &foods(),
            shape3(),
        );
        assert_eq!(out, a);
    }

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        #[test]
        fn never_leaves_grid_or_enters_occupied(
            rows in 1u32..6,
            cols in 1u32..6,
            cells in proptest::collection::vec((0i32..6, 0i32..6), 1..6),
            direction in arb_direction(),
        ) {
            let shape = GridShape::new(rows, cols).unwrap();
            let mut seen = std::collections::BTreeSet::new();
            let positions: Vec<Position> = cells
                .into_iter()
                .map(|(r, c)| Position::new(r % rows as i32, c % cols as i32))
                .filter(|p| seen.insert(*p))
                .collect();
            // First cell hosts food, the rest host agents.
            let food = [Food::new(1, positions[0])];
            let agents: Vec<Agent> = positions[1..]
                .iter()
                .enumerate()
                .map(|(i, p)| Agent::new(i as u32, 1, *p))
                .collect();

            for agent in &agents {
                let pos = move_agent(agent, direction, &food, &agents, shape);
                prop_assert!(shape.contains(pos));
                prop_assert_ne!(pos, food[0].position);
                for other in agents.iter().filter(|o| o.id != agent.id) {
                    prop_assert_ne!(pos, other.position);
                }
            }
        }
    }
}
