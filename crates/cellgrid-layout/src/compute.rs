//! Grid placement.
//!
//! Both directions share one routine. A grid has a *fixed* axis, taken from
//! the container, and a *growth* axis, computed to fit. Lines run along the
//! fixed axis: a vertical grid has rows, a horizontal grid has columns.
//! Full lines are packed from the leading edge; only the last, incomplete
//! line is shifted by the alignment component of the fixed axis.

use cellgrid_core::{Direction, Padding};
use glam::Vec2;
use tracing::trace;

use crate::params::GridParams;

/// The container inputs a pass reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerGeometry {
    /// Width for vertical grids, height for horizontal grids
    pub fixed_axis_size: f32,
    /// Normalized origin of the container's local frame
    pub pivot: Vec2,
}

impl ContainerGeometry {
    pub fn new(fixed_axis_size: f32, pivot: Vec2) -> Self {
        Self { fixed_axis_size, pivot }
    }
}

/// Everything a single pass derives. Nothing here outlives the pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedLayout {
    pub cell_size: Vec2,
    pub lines_count: usize,
    /// Fixed-axis length shared by the cells of one line
    pub reference_size: f32,
    /// Container length along the growth axis
    pub required_size: f32,
    /// Fixed-axis shift applied to the last line
    pub last_line_offset: f32,
    /// Container size once grown
    pub container_size: Vec2,
    /// Pivot position of each cell in the container's local frame
    pub positions: Vec<Vec2>,
}

/// Number of lines needed for `cell_count` cells.
pub fn lines_count(cell_count: usize, cells_per_line: usize) -> usize {
    cell_count.div_ceil(cells_per_line.max(1))
}

/// Fixed-axis length left for the cells of one line once padding and
/// inter-cell spacing are removed. Never negative.
pub fn reference_size(params: &GridParams, fixed_axis_size: f32) -> f32 {
    let fixed_axis = params.direction.fixed_axis();
    let gaps = params.spacing * params.cells_per_line.saturating_sub(1) as f32;
    (fixed_axis_size - params.padding.along(fixed_axis) - gaps).max(0.0)
}

/// Size of every cell.
pub fn cell_size(params: &GridParams, reference_size: f32) -> Vec2 {
    let extent = reference_size / params.cells_per_line.max(1) as f32;
    match params.direction {
        Direction::Horizontal => Vec2::new(extent * params.cell_aspect_ratio, extent),
        Direction::Vertical => Vec2::new(extent, extent / params.cell_aspect_ratio),
    }
}

/// Container length along the growth axis that fits `lines_count` lines.
///
/// With no lines this is the padding alone.
pub fn required_size(params: &GridParams, cell_size: Vec2, lines_count: usize) -> f32 {
    let growth_axis = params.direction.growth_axis();
    lines_count as f32 * growth_axis.select(cell_size)
        + params.spacing * lines_count.saturating_sub(1) as f32
        + params.padding.along(growth_axis)
}

/// Fixed-axis shift of the last line.
///
/// The slots the last line is missing, together with their trailing
/// spacing, form an empty span; the alignment factor decides how much of it
/// goes before the line. A grid that divides evenly has no shift.
pub fn last_line_offset(params: &GridParams, reference_size: f32, cell_count: usize) -> f32 {
    let per_line = params.cells_per_line.max(1);
    let filled = cell_count % per_line;
    if filled == 0 {
        return 0.0;
    }
    let empty = (per_line - filled) as f32;
    let empty_space = reference_size * (empty / per_line as f32) + params.spacing * empty;
    let align = params.alignment.along(params.direction.fixed_axis());
    empty_space * align.factor()
}

/// Leading insets as `(growth, fixed)` distances from the top-left corner.
///
/// Rows of a vertical grid start at the *right* inset, not the left one.
/// With symmetric horizontal padding the two are the same.
pub fn leading_insets(direction: Direction, padding: &Padding) -> (f32, f32) {
    match direction {
        Direction::Horizontal => (padding.left, padding.top),
        Direction::Vertical => (padding.top, padding.right),
    }
}

/// Run a full layout pass.
///
/// `child_pivots` holds one pivot per cell, in placement order. The result
/// holds one position per pivot.
pub fn compute_layout(
    params: &GridParams,
    geometry: &ContainerGeometry,
    child_pivots: &[Vec2],
) -> ComputedLayout {
    let direction = params.direction;
    let growth_axis = direction.growth_axis();
    let fixed_axis = direction.fixed_axis();
    let count = child_pivots.len();
    let per_line = params.cells_per_line.max(1);

    let lines = lines_count(count, per_line);
    let reference = reference_size(params, geometry.fixed_axis_size);
    let cell = cell_size(params, reference);
    let required = required_size(params, cell, lines);
    let last_offset = last_line_offset(params, reference, count);

    let container_size = growth_axis.replace(
        fixed_axis.replace(Vec2::ZERO, geometry.fixed_axis_size),
        required,
    );

    trace!(
        ?direction,
        cells = count,
        lines,
        cell_width = cell.x,
        cell_height = cell.y,
        required,
        "computed grid"
    );

    // Top-left corner of the container in its own local frame (y up).
    let left = -container_size.x * geometry.pivot.x;
    let top = container_size.y * (1.0 - geometry.pivot.y);

    let line_stride = growth_axis.select(cell) + params.spacing;
    let slot_stride = fixed_axis.select(cell) + params.spacing;
    let (growth_start, fixed_start) = leading_insets(direction, &params.padding);

    let positions = child_pivots
        .iter()
        .enumerate()
        .map(|(index, &pivot)| {
            let line = index / per_line;
            let slot = index % per_line;

            let along_growth = growth_start + line as f32 * line_stride;
            let mut along_fixed = fixed_start + slot as f32 * slot_stride;
            if line + 1 == lines {
                along_fixed += last_offset;
            }

            let (from_left, from_top) = match direction {
                Direction::Horizontal => (along_growth, along_fixed),
                Direction::Vertical => (along_fixed, along_growth),
            };

            let corner = Vec2::new(left + from_left, top - from_top - cell.y);
            corner + cell * pivot
        })
        .collect();

    ComputedLayout {
        cell_size: cell,
        lines_count: lines,
        reference_size: reference,
        required_size: required,
        last_line_offset: last_offset,
        container_size,
        positions,
    }
}
