//! Geometry of the container and its cells.
//!
//! The container is an anchored rectangle inside its parent: its size is the
//! parent span between the two anchors plus a size delta. Cells are opaque
//! items the engine only reads a pivot from and writes a position and size to.

use cellgrid_core::{Axis, Direction};
use glam::Vec2;

/// Axis-aligned rectangle in the container's local frame (y up).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    /// Left edge
    pub x: f32,
    /// Bottom edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// Create bounds with position and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create bounds from the bottom-left corner and size.
    pub fn from_vecs(min: Vec2, size: Vec2) -> Self {
        Self::new(min.x, min.y, size.x, size.y)
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the top edge (y + height).
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Check whether two bounds share interior area.
    ///
    /// Touching edges do not count; `tolerance` absorbs float drift.
    pub fn overlaps(&self, other: &Bounds, tolerance: f32) -> bool {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.top().min(other.top());
        x2 - x1 > tolerance && y2 - y1 > tolerance
    }

    /// Check whether `other` lies entirely inside these bounds.
    pub fn encloses(&self, other: &Bounds, tolerance: f32) -> bool {
        other.x >= self.x - tolerance
            && other.y >= self.y - tolerance
            && other.right() <= self.right() + tolerance
            && other.top() <= self.top() + tolerance
    }
}

/// The rectangle the grid is laid out in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container {
    /// Size of the parent rectangle
    pub parent_size: Vec2,
    /// Lower-left anchor, normalized to the parent
    pub anchor_min: Vec2,
    /// Upper-right anchor, normalized to the parent
    pub anchor_max: Vec2,
    /// Pivot position relative to the anchors
    pub anchored_position: Vec2,
    /// Size beyond the span between the anchors
    pub size_delta: Vec2,
    /// Origin of the local frame, normalized to the container itself
    pub pivot: Vec2,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            parent_size: Vec2::ZERO,
            anchor_min: Vec2::splat(0.5),
            anchor_max: Vec2::splat(0.5),
            anchored_position: Vec2::ZERO,
            size_delta: Vec2::ZERO,
            pivot: Vec2::splat(0.5),
        }
    }
}

impl Container {
    /// A free-floating container of the given size, centered in a parent.
    pub fn sized(parent_size: Vec2, size: Vec2) -> Self {
        Self {
            parent_size,
            size_delta: size,
            ..Default::default()
        }
    }

    /// A container stretched over its whole parent.
    pub fn stretched(parent_size: Vec2) -> Self {
        Self {
            parent_size,
            anchor_min: Vec2::ZERO,
            anchor_max: Vec2::ONE,
            ..Default::default()
        }
    }

    /// A container pinned to the parent edge a grid of `direction` grows from.
    pub fn pinned(parent_size: Vec2, direction: Direction) -> Self {
        let mut container = Self {
            parent_size,
            ..Default::default()
        };
        container.pin_to_parent_edge(direction);
        container
    }

    pub fn with_pivot(mut self, pivot: Vec2) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn with_anchors(mut self, min: Vec2, max: Vec2) -> Self {
        self.anchor_min = min;
        self.anchor_max = max;
        self
    }

    /// Current size of the container rectangle.
    pub fn rect_size(&self) -> Vec2 {
        self.parent_size * (self.anchor_max - self.anchor_min) + self.size_delta
    }

    /// Offset of the lower-left corner from the lower-left anchor.
    pub fn offset_min(&self) -> Vec2 {
        self.anchored_position - self.size_delta * self.pivot
    }

    /// Offset of the upper-right corner from the upper-right anchor.
    pub fn offset_max(&self) -> Vec2 {
        self.anchored_position + self.size_delta * (Vec2::ONE - self.pivot)
    }

    /// Place the corners at fixed offsets from their anchors.
    pub fn set_offsets(&mut self, min: Vec2, max: Vec2) {
        self.size_delta = max - min;
        self.anchored_position = min + self.size_delta * self.pivot;
    }

    /// Overwrite the size delta along one axis only.
    pub fn set_size_along(&mut self, axis: Axis, value: f32) {
        self.size_delta = axis.replace(self.size_delta, value);
    }

    /// Anchor to the full parent edge a grid of `direction` grows from.
    ///
    /// Vertical grids span the top edge (width follows the parent, height is
    /// free); horizontal grids span the left edge. Both offsets are zeroed.
    pub fn pin_to_parent_edge(&mut self, direction: Direction) {
        match direction {
            Direction::Vertical => {
                self.anchor_min = Vec2::Y;
                self.anchor_max = Vec2::ONE;
            }
            Direction::Horizontal => {
                self.anchor_min = Vec2::ZERO;
                self.anchor_max = Vec2::Y;
            }
        }
        self.set_offsets(Vec2::ZERO, Vec2::ZERO);
    }

    /// The container rectangle in its own local frame.
    pub fn local_bounds(&self) -> Bounds {
        let size = self.rect_size();
        Bounds::from_vecs(-size * self.pivot, size)
    }
}

/// A child item the grid positions.
pub trait LayoutCell {
    /// Normalized anchor point of the cell's own rectangle.
    fn pivot(&self) -> Vec2;

    /// Position of the pivot in the container's local frame.
    fn set_local_position(&mut self, position: Vec2);

    fn set_size(&mut self, size: Vec2);
}

/// A plain cell record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub pivot: Vec2,
    pub local_position: Vec2,
    pub size: Vec2,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            pivot: Vec2::splat(0.5),
            local_position: Vec2::ZERO,
            size: Vec2::ZERO,
        }
    }
}

impl Cell {
    pub fn with_pivot(pivot: Vec2) -> Self {
        Self {
            pivot,
            ..Default::default()
        }
    }

    /// The cell rectangle in the container's local frame.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_vecs(self.local_position - self.size * self.pivot, self.size)
    }
}

impl LayoutCell for Cell {
    fn pivot(&self) -> Vec2 {
        self.pivot
    }

    fn set_local_position(&mut self, position: Vec2) {
        self.local_position = position;
    }

    fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }
}

/// Capabilities the hosting layout system exposes to the engine.
pub trait LayoutHost {
    /// Ask the host to run another layout pass.
    fn request_relayout(&mut self);
}

/// A host that ignores every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl LayoutHost for NoopHost {
    fn request_relayout(&mut self) {}
}
