//! Agents, food items, and the [`Entity`] trait shared by both.

use crate::id::AgentId;
use crate::position::Position;

/// Foraging strength of an agent, or harvest threshold of a food item.
///
/// Signed so that levels share a cell type with padded grids, where `-1`
/// marks cells outside the map. Valid levels are strictly positive.
pub type Level = i32;

/// Anything that occupies a grid cell and can be stamped onto a grid.
pub trait Entity {
    /// Cell the entity occupies.
    fn position(&self) -> Position;

    /// The entity's level.
    fn level(&self) -> Level;

    /// Whether the entity still occupies its cell.
    ///
    /// Tombstoned entities keep their position but render as empty and
    /// never block movement.
    fn is_active(&self) -> bool {
        true
    }

    /// Value written into an occupancy grid: the level while active, 0 after.
    fn grid_value(&self) -> Level {
        if self.is_active() {
            self.level()
        } else {
            0
        }
    }
}

/// A mobile forager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Agent {
    /// Stable identity for the whole episode.
    pub id: AgentId,
    /// Foraging strength.
    pub level: Level,
    /// Current cell.
    pub position: Position,
    /// Whether the agent signals intent to harvest this step.
    pub loading: bool,
}

impl Agent {
    /// A non-loading agent with id `AgentId(id)`.
    pub fn new(id: u32, level: Level, position: impl Into<Position>) -> Self {
        Self {
            id: AgentId(id),
            level,
            position: position.into(),
            loading: false,
        }
    }

    /// Copy of this agent at `position`.
    pub fn with_position(self, position: Position) -> Self {
        Self { position, ..self }
    }

    /// Copy of this agent with the loading flag set to `loading`.
    pub fn with_loading(self, loading: bool) -> Self {
        Self { loading, ..self }
    }
}

impl Entity for Agent {
    fn position(&self) -> Position {
        self.position
    }

    fn level(&self) -> Level {
        self.level
    }
}

/// A harvestable item. Never moves; consumed at most once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Food {
    /// Minimum combined level of loading neighbours needed to consume it.
    pub level: Level,
    /// Fixed cell.
    pub position: Position,
    /// Tombstone flag. Only ever transitions false -> true.
    pub eaten: bool,
}

impl Food {
    /// An unconsumed food item.
    pub fn new(level: Level, position: impl Into<Position>) -> Self {
        Self {
            level,
            position: position.into(),
            eaten: false,
        }
    }

    /// Copy of this food marked as eaten.
    pub fn consumed(self) -> Self {
        Self {
            eaten: true,
            ..self
        }
    }
}

impl Entity for Food {
    fn position(&self) -> Position {
        self.position
    }

    fn level(&self) -> Level {
        self.level
    }

    fn is_active(&self) -> bool {
        !self.eaten
    }
}
