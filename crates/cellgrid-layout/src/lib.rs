//! Uniform grid layout for a fixed number of cells.
//!
//! Given a container whose width (vertical grids) or height (horizontal
//! grids) is fixed, this crate sizes every cell from the desired number of
//! cells per line, the spacing and the cell aspect ratio, grows the container
//! along the other axis to fit exactly, and positions each cell.
//!
//! # Architecture
//!
//! 1. **Normalization**: raw host values are clamped into range ([`GridParams`])
//! 2. **Computation**: a pure pass produces cell size, line count, required
//!    size and one position per cell ([`compute_layout`])
//! 3. **Engine**: [`GridLayoutEngine`] applies a pass to a [`Container`] and
//!    its cells, tracks direction changes and handles teardown
//!
//! # Example
//!
//! ```
//! use cellgrid_core::{Direction, GridConfig};
//! use cellgrid_layout::{Cell, Container, GridLayoutEngine};
//! use glam::Vec2;
//!
//! let mut engine = GridLayoutEngine::new(GridConfig::vertical(3));
//! let mut container = Container::pinned(Vec2::new(300.0, 600.0), Direction::Vertical);
//! let mut cells = vec![Cell::default(); 7];
//!
//! let pass = engine.compute_along_primary_axis(&mut container, &mut cells);
//! assert_eq!(pass.layout.lines_count, 3);
//! assert_eq!(container.rect_size(), Vec2::new(300.0, 300.0));
//! ```

mod compute;
mod container;
mod engine;
mod params;

pub use compute::{
    cell_size, compute_layout, last_line_offset, leading_insets, lines_count, reference_size,
    required_size, ComputedLayout, ContainerGeometry,
};
pub use container::{Bounds, Cell, Container, LayoutCell, LayoutHost, NoopHost};
pub use engine::{detect_direction_change, GridLayoutEngine, LayoutPass};
pub use params::{GridParams, MIN_CELL_ASPECT_RATIO};
