//! Kernel configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use forage_space::{GridShape, SpaceError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`KernelConfig::validate()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid dimensions are invalid.
    Space(SpaceError),
    /// The observation radius is larger than the map itself.
    FieldOfViewTooLarge {
        /// The configured radius.
        field_of_view: u32,
        /// The largest accepted radius, `max(rows, cols)`.
        max: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::FieldOfViewTooLarge { field_of_view, max } => {
                write!(f, "field_of_view {field_of_view} exceeds maximum {max}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── KernelConfig ───────────────────────────────────────────────────

/// Map size and observation radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KernelConfig {
    /// Number of rows. Default: 8.
    pub rows: u32,
    /// Number of columns. Default: 8.
    pub cols: u32,
    /// Observation radius in cells. Default: 1.
    pub field_of_view: u32,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 8,
            field_of_view: 1,
        }
    }
}

impl KernelConfig {
    /// Check structural invariants and return the validated shape.
    ///
    /// A radius of `max(rows, cols)` already shows the whole map from any
    /// cell; anything larger is rejected.
    pub fn validate(&self) -> Result<GridShape, ConfigError> {
        let shape = GridShape::new(self.rows, self.cols)?;
        let max = self.rows.max(self.cols);
        if self.field_of_view > max {
            return Err(ConfigError::FieldOfViewTooLarge {
                field_of_view: self.field_of_view,
                max,
            });
        }
        Ok(shape)
    }
}
