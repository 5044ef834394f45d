//! Movement directions and the discrete per-agent action set.

use crate::error::ActionError;

/// Cardinal direction for agent movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Move one cell up (row - 1).
    Up,
    /// Move one cell down (row + 1).
    Down,
    /// Move one cell left (col - 1).
    Left,
    /// Move one cell right (col + 1).
    Right,
}

impl Direction {
    /// All four directions in action-code order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the (row_offset, col_offset) for this direction.
    pub fn offset_2d(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// A decoded discrete action for one agent for one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    /// Stay put, do not load.
    #[default]
    Noop = 0,
    /// Move up.
    Up = 1,
    /// Move down.
    Down = 2,
    /// Move left.
    Left = 3,
    /// Move right.
    Right = 4,
    /// Stay put and try to harvest adjacent food.
    Load = 5,
}

impl Action {
    /// Number of distinct actions.
    pub const COUNT: usize = 6;

    /// Movement requested by this action, if any.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Action::Up => Some(Direction::Up),
            Action::Down => Some(Direction::Down),
            Action::Left => Some(Direction::Left),
            Action::Right => Some(Direction::Right),
            Action::Noop | Action::Load => None,
        }
    }

    /// Whether the agent signals loading this step.
    pub fn is_load(self) -> bool {
        self == Action::Load
    }
}

impl From<Direction> for Action {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Up => Action::Up,
            Direction::Down => Action::Down,
            Direction::Left => Action::Left,
            Direction::Right => Action::Right,
        }
    }
}

impl TryFrom<u8> for Action {
    type Error = ActionError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Action::Noop),
            1 => Ok(Action::Up),
            2 => Ok(Action::Down),
            3 => Ok(Action::Left),
            4 => Ok(Action::Right),
            5 => Ok(Action::Load),
            _ => Err(ActionError::UnknownCode { code }),
        }
    }
}
