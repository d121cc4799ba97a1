//! Host-settable grid configuration.
//!
//! Values here are raw: a host may hand us zero cells per line or a
//! negative spacing mid-edit. The layout engine clamps them before use.

use crate::types::{Anchor, Direction, Padding};
#[cfg(feature = "serde")]
use crate::errors::ConfigError;

/// Grid configuration as set by the host.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct GridConfig {
    /// Cells in each row (vertical) or column (horizontal)
    pub cells_per_line: i32,
    /// Gap between cells and between lines
    pub spacing: f32,
    /// Cell width divided by cell height
    pub cell_aspect_ratio: f32,
    /// Growth direction
    pub direction: Direction,
    /// Placement of the last, incomplete line
    pub alignment: Anchor,
    /// Insets from the container edges
    pub padding: Padding,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cells_per_line: 3,
            spacing: 0.0,
            cell_aspect_ratio: 1.0,
            direction: Direction::default(),
            alignment: Anchor::default(),
            padding: Padding::default(),
        }
    }
}

impl GridConfig {
    /// Create a vertically growing grid.
    pub fn vertical(cells_per_line: i32) -> Self {
        Self {
            cells_per_line,
            direction: Direction::Vertical,
            ..Default::default()
        }
    }

    /// Create a horizontally growing grid.
    pub fn horizontal(cells_per_line: i32) -> Self {
        Self {
            cells_per_line,
            direction: Direction::Horizontal,
            ..Default::default()
        }
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_aspect_ratio(mut self, ratio: f32) -> Self {
        self.cell_aspect_ratio = ratio;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_alignment(mut self, alignment: Anchor) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Read a configuration from JSON. Missing fields take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}
