//! The grid layout engine a host drives.
//!
//! The engine owns the host configuration and the small amount of state that
//! must survive between passes: the direction of the previous pass and the
//! container axis it currently drives. Everything else is recomputed.

use cellgrid_core::{Axis, Direction, GridConfig};
use glam::Vec2;
use tracing::debug;

use crate::compute::{compute_layout, ComputedLayout, ContainerGeometry};
use crate::container::{Container, LayoutCell, LayoutHost};
use crate::params::GridParams;

/// Result of one engine pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPass {
    pub layout: ComputedLayout,
    /// Whether this pass re-pinned the container after a direction change
    pub anchors_reset: bool,
}

/// Re-pin `container` when `requested` differs from `previous`.
///
/// Updates `previous` and returns `true` on a change; does nothing otherwise.
pub fn detect_direction_change(
    previous: &mut Direction,
    requested: Direction,
    container: &mut Container,
) -> bool {
    if *previous == requested {
        return false;
    }
    debug!(from = %previous, to = %requested, "grid direction changed, re-pinning container");
    *previous = requested;
    container.pin_to_parent_edge(requested);
    true
}

/// Lays out a fixed number of cells in a uniform grid and grows the
/// container to fit.
#[derive(Debug, Clone)]
pub struct GridLayoutEngine {
    config: GridConfig,
    previous_direction: Direction,
    driven_axis: Option<Axis>,
}

impl Default for GridLayoutEngine {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl GridLayoutEngine {
    /// Create an engine. The previous direction starts at the default
    /// direction, so a horizontal grid re-pins its container on the first pass.
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            previous_direction: Direction::default(),
            driven_axis: None,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect on the next pass.
    pub fn set_config(&mut self, config: GridConfig) {
        self.config = config;
    }

    pub fn config_mut(&mut self) -> &mut GridConfig {
        &mut self.config
    }

    /// Direction used by the most recent pass.
    pub fn previous_direction(&self) -> Direction {
        self.previous_direction
    }

    /// The container axis whose size the engine currently controls.
    pub fn driven_axis(&self) -> Option<Axis> {
        self.driven_axis
    }

    /// Layout entry point for hosts that lay out the horizontal axis first.
    pub fn compute_along_primary_axis<C: LayoutCell>(
        &mut self,
        container: &mut Container,
        cells: &mut [C],
    ) -> LayoutPass {
        self.replace_cells(container, cells)
    }

    /// Layout entry point for the host's second axis. Runs the same full
    /// pass, so call order within one host pass does not matter.
    pub fn compute_along_secondary_axis<C: LayoutCell>(
        &mut self,
        container: &mut Container,
        cells: &mut [C],
    ) -> LayoutPass {
        self.replace_cells(container, cells)
    }

    /// Teardown: give the growth axis back to the host and ask it to lay
    /// out again so the cells return to their default placement.
    pub fn disable<H: LayoutHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(axis) = self.driven_axis.take() {
            debug!(?axis, "released driven container axis");
        }
        host.request_relayout();
    }

    fn replace_cells<C: LayoutCell>(&mut self, container: &mut Container, cells: &mut [C]) -> LayoutPass {
        let params = GridParams::normalize(&self.config);
        let anchors_reset =
            detect_direction_change(&mut self.previous_direction, params.direction, container);

        let fixed_axis = params.direction.fixed_axis();
        let growth_axis = params.direction.growth_axis();
        let geometry = ContainerGeometry::new(fixed_axis.select(container.rect_size()), container.pivot);
        let pivots: Vec<Vec2> = cells.iter().map(LayoutCell::pivot).collect();

        let layout = compute_layout(&params, &geometry, &pivots);

        self.driven_axis = Some(growth_axis);
        container.set_size_along(growth_axis, layout.required_size);

        for (cell, &position) in cells.iter_mut().zip(&layout.positions) {
            cell.set_local_position(position);
            cell.set_size(layout.cell_size);
        }

        LayoutPass { layout, anchors_reset }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Cell;
    use cellgrid_core::Anchor;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[derive(Default)]
    struct CountingHost {
        requests: usize,
    }

    impl LayoutHost for CountingHost {
        fn request_relayout(&mut self) {
            self.requests += 1;
        }
    }

    #[test]
    fn test_vertical_pass_grows_height() {
        init_tracing();
        let mut engine = GridLayoutEngine::new(GridConfig::vertical(3).with_spacing(10.0));
        let mut container = Container::pinned(Vec2::new(320.0, 800.0), Direction::Vertical);
        let mut cells = vec![Cell::default(); 5];

        let pass = engine.compute_along_primary_axis(&mut container, &mut cells);

        assert!(!pass.anchors_reset);
        assert_eq!(pass.layout.lines_count, 2);
        // (320 - 20) / 3 = 100 per cell, two rows plus one gap
        assert!((container.rect_size().y - 210.0).abs() < 0.001);
        assert!((container.rect_size().x - 320.0).abs() < 0.001);
        assert_eq!(engine.driven_axis(), Some(Axis::Y));
        for cell in &cells {
            assert!((cell.size - Vec2::new(100.0, 100.0)).length() < 0.001);
        }
    }

    #[test]
    fn test_horizontal_pass_grows_width_only() {
        let mut engine = GridLayoutEngine::new(GridConfig::horizontal(2));
        let mut container = Container::pinned(Vec2::new(500.0, 200.0), Direction::Horizontal);
        let mut cells = vec![Cell::default(); 3];

        let pass = engine.compute_along_secondary_axis(&mut container, &mut cells);

        assert_eq!(pass.layout.cell_size, Vec2::new(100.0, 100.0));
        assert_eq!(container.rect_size(), Vec2::new(200.0, 200.0));
        assert_eq!(container.size_delta.y, 0.0);
        assert_eq!(engine.driven_axis(), Some(Axis::X));
    }

    #[test]
    fn test_direction_change_repins_once() {
        let mut engine = GridLayoutEngine::new(GridConfig::vertical(3));
        let mut container = Container::pinned(Vec2::new(300.0, 300.0), Direction::Vertical);
        let mut cells = vec![Cell::default(); 4];

        let first = engine.compute_along_primary_axis(&mut container, &mut cells);
        assert!(!first.anchors_reset);
        assert_eq!(container.anchor_min, Vec2::Y);
        assert_eq!(container.anchor_max, Vec2::ONE);

        engine.config_mut().direction = Direction::Horizontal;
        let switched = engine.compute_along_primary_axis(&mut container, &mut cells);
        assert!(switched.anchors_reset);
        assert_eq!(engine.previous_direction(), Direction::Horizontal);
        assert_eq!(container.anchor_min, Vec2::ZERO);
        assert_eq!(container.anchor_max, Vec2::Y);

        let anchored = (container.anchor_min, container.anchor_max, container.anchored_position);
        let again = engine.compute_along_secondary_axis(&mut container, &mut cells);
        assert!(!again.anchors_reset);
        assert_eq!(
            (container.anchor_min, container.anchor_max, container.anchored_position),
            anchored
        );
    }

    #[test]
    fn test_fresh_horizontal_engine_repins_on_first_pass() {
        let mut engine = GridLayoutEngine::new(GridConfig::horizontal(3));
        let mut container = Container::stretched(Vec2::new(600.0, 300.0));
        let mut cells = vec![Cell::default(); 7];

        let pass = engine.compute_along_primary_axis(&mut container, &mut cells);

        assert!(pass.anchors_reset);
        assert_eq!(container.rect_size(), Vec2::new(300.0, 300.0));
    }

    #[test]
    fn test_detect_direction_change_is_idempotent() {
        let mut previous = Direction::Vertical;
        let mut container = Container::stretched(Vec2::new(100.0, 100.0));
        let before = container;

        assert!(!detect_direction_change(&mut previous, Direction::Vertical, &mut container));
        assert_eq!(container, before);

        assert!(detect_direction_change(&mut previous, Direction::Horizontal, &mut container));
        let after = container;
        assert!(!detect_direction_change(&mut previous, Direction::Horizontal, &mut container));
        assert_eq!(container, after);
    }

    #[test]
    fn test_passes_are_idempotent() {
        let config = GridConfig::vertical(4)
            .with_spacing(6.0)
            .with_aspect_ratio(1.25)
            .with_alignment(Anchor::LowerRight);
        let mut engine = GridLayoutEngine::new(config);
        let mut container = Container::pinned(Vec2::new(418.0, 900.0), Direction::Vertical)
            .with_pivot(Vec2::new(0.25, 0.75));
        let mut cells: Vec<Cell> = (0..11)
            .map(|i| Cell::with_pivot(Vec2::new(i as f32 / 10.0, 0.5)))
            .collect();

        let first = engine.compute_along_primary_axis(&mut container, &mut cells);
        let snapshot = (container, cells.clone());
        let second = engine.compute_along_secondary_axis(&mut container, &mut cells);

        assert_eq!(first, second);
        assert_eq!((container, cells), snapshot);
    }

    #[test]
    fn test_zero_cells_collapses_to_padding() {
        let config = GridConfig::vertical(3)
            .with_spacing(12.0)
            .with_padding(cellgrid_core::Padding::new(2.0, 2.0, 5.0, 9.0));
        let mut engine = GridLayoutEngine::new(config);
        let mut container = Container::pinned(Vec2::new(300.0, 300.0), Direction::Vertical);
        let mut cells: Vec<Cell> = Vec::new();

        let pass = engine.compute_along_primary_axis(&mut container, &mut cells);

        assert_eq!(pass.layout.lines_count, 0);
        assert!((container.rect_size().y - 14.0).abs() < 0.001);
    }

    #[test]
    fn test_invalid_config_still_lays_out() {
        let config = GridConfig::vertical(-5).with_spacing(-3.0).with_aspect_ratio(-1.0);
        let mut engine = GridLayoutEngine::new(config);
        let mut container = Container::pinned(Vec2::new(100.0, 100.0), Direction::Vertical);
        let mut cells = vec![Cell::default(); 2];

        let pass = engine.compute_along_primary_axis(&mut container, &mut cells);

        // One cell per line, aspect ratio 0.1: 100 wide, 1000 tall
        assert_eq!(pass.layout.lines_count, 2);
        assert!((pass.layout.cell_size - Vec2::new(100.0, 1000.0)).length() < 0.01);
    }

    #[test]
    fn test_disable_releases_axis_and_requests_relayout() {
        let mut engine = GridLayoutEngine::default();
        let mut host = CountingHost::default();
        let mut container = Container::pinned(Vec2::new(300.0, 300.0), Direction::Vertical);
        let mut cells = vec![Cell::default(); 3];

        engine.compute_along_primary_axis(&mut container, &mut cells);
        assert_eq!(engine.driven_axis(), Some(Axis::Y));

        engine.disable(&mut host);
        assert_eq!(engine.driven_axis(), None);
        assert_eq!(host.requests, 1);
    }

    #[test]
    fn test_disable_before_any_pass() {
        let mut engine = GridLayoutEngine::default();
        engine.disable(&mut crate::container::NoopHost);
        assert_eq!(engine.driven_axis(), None);
    }
}
