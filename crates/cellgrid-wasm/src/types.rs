//! Plain data shapes exchanged with JavaScript.

use cellgrid_layout::{Container, LayoutPass};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A 2D vector as `{ x, y }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2Js {
    pub x: f32,
    pub y: f32,
}

impl From<Vec2> for Vec2Js {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Vec2Js> for Vec2 {
    fn from(v: Vec2Js) -> Self {
        Vec2::new(v.x, v.y)
    }
}

/// Container geometry. Omitted fields take the free-floating defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerJs {
    pub parent_size: Vec2Js,
    pub anchor_min: Vec2Js,
    pub anchor_max: Vec2Js,
    pub anchored_position: Vec2Js,
    pub size_delta: Vec2Js,
    pub pivot: Vec2Js,
}

impl Default for ContainerJs {
    fn default() -> Self {
        Container::default().into()
    }
}

impl From<Container> for ContainerJs {
    fn from(c: Container) -> Self {
        Self {
            parent_size: c.parent_size.into(),
            anchor_min: c.anchor_min.into(),
            anchor_max: c.anchor_max.into(),
            anchored_position: c.anchored_position.into(),
            size_delta: c.size_delta.into(),
            pivot: c.pivot.into(),
        }
    }
}

impl ContainerJs {
    pub fn into_core(self) -> Container {
        Container {
            parent_size: self.parent_size.into(),
            anchor_min: self.anchor_min.into(),
            anchor_max: self.anchor_max.into(),
            anchored_position: self.anchored_position.into(),
            size_delta: self.size_delta.into(),
            pivot: self.pivot.into(),
        }
    }
}

/// A placed cell: pivot position and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellJs {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Result of a layout call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResultJs {
    pub cell_size: Vec2Js,
    pub lines_count: usize,
    pub required_size: f32,
    /// The container after the pass; hosts write this back.
    pub container: ContainerJs,
    pub container_size: Vec2Js,
    pub anchors_reset: bool,
    pub cells: Vec<CellJs>,
}

impl LayoutResultJs {
    pub fn from_pass(pass: &LayoutPass, container: &Container) -> Self {
        let layout = &pass.layout;
        let cells = layout
            .positions
            .iter()
            .map(|p| CellJs {
                x: p.x,
                y: p.y,
                width: layout.cell_size.x,
                height: layout.cell_size.y,
            })
            .collect();

        Self {
            cell_size: layout.cell_size.into(),
            lines_count: layout.lines_count,
            required_size: layout.required_size,
            container: (*container).into(),
            container_size: container.rect_size().into(),
            anchors_reset: pass.anchors_reset,
            cells,
        }
    }
}
