//! Clamping of raw host configuration into usable layout parameters.

use cellgrid_core::{Alignment, Direction, GridConfig, Padding};

/// Smallest cell aspect ratio the engine will lay out.
pub const MIN_CELL_ASPECT_RATIO: f32 = 0.1;

/// Layout parameters with every numeric input clamped into range.
///
/// The engine never operates on a [`GridConfig`] directly; each pass
/// normalizes first so an invalid value typed mid-edit still renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParams {
    /// At least 1
    pub cells_per_line: usize,
    /// At least 0
    pub spacing: f32,
    /// At least [`MIN_CELL_ASPECT_RATIO`]
    pub cell_aspect_ratio: f32,
    pub direction: Direction,
    pub alignment: Alignment,
    pub padding: Padding,
}

impl GridParams {
    /// Clamp a raw configuration. No upper bounds are enforced.
    pub fn normalize(config: &GridConfig) -> Self {
        // f32::max returns the other operand for NaN, so NaN clamps to the floor too.
        Self {
            cells_per_line: config.cells_per_line.max(1) as usize,
            spacing: config.spacing.max(0.0),
            cell_aspect_ratio: config.cell_aspect_ratio.max(MIN_CELL_ASPECT_RATIO),
            direction: config.direction,
            alignment: config.alignment.split(),
            padding: config.padding,
        }
    }
}

impl From<&GridConfig> for GridParams {
    fn from(config: &GridConfig) -> Self {
        Self::normalize(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellgrid_core::{Anchor, AxisAlign};

    #[test]
    fn test_valid_values_pass_through() {
        let config = GridConfig::horizontal(4).with_spacing(2.5).with_aspect_ratio(1.5);
        let params = GridParams::normalize(&config);
        assert_eq!(params.cells_per_line, 4);
        assert_eq!(params.spacing, 2.5);
        assert_eq!(params.cell_aspect_ratio, 1.5);
        assert_eq!(params.direction, Direction::Horizontal);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let config = GridConfig::vertical(-3).with_spacing(-10.0).with_aspect_ratio(0.0);
        let params = GridParams::normalize(&config);
        assert_eq!(params.cells_per_line, 1);
        assert_eq!(params.spacing, 0.0);
        assert!((params.cell_aspect_ratio - MIN_CELL_ASPECT_RATIO).abs() < f32::EPSILON);
    }

    #[test]
    fn test_zero_cells_per_line_clamps_to_one() {
        let params = GridParams::normalize(&GridConfig::vertical(0));
        assert_eq!(params.cells_per_line, 1);
    }

    #[test]
    fn test_nan_clamps_to_floor() {
        let config = GridConfig::default()
            .with_spacing(f32::NAN)
            .with_aspect_ratio(f32::NAN);
        let params = GridParams::normalize(&config);
        assert_eq!(params.spacing, 0.0);
        assert!((params.cell_aspect_ratio - MIN_CELL_ASPECT_RATIO).abs() < f32::EPSILON);
    }

    #[test]
    fn test_no_upper_bound() {
        let config = GridConfig::vertical(i32::MAX).with_aspect_ratio(1.0e6);
        let params = GridParams::normalize(&config);
        assert_eq!(params.cells_per_line, i32::MAX as usize);
        assert_eq!(params.cell_aspect_ratio, 1.0e6);
    }

    #[test]
    fn test_alignment_is_split() {
        let params = GridParams::normalize(&GridConfig::default().with_alignment(Anchor::LowerRight));
        assert_eq!(params.alignment.horizontal, AxisAlign::End);
        assert_eq!(params.alignment.vertical, AxisAlign::End);
    }
}
