//! Core value types shared by the layout engine and its hosts.

use std::fmt;
use std::str::FromStr;

use glam::Vec2;

use crate::errors::ConfigError;

/// One of the two axes of the container's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal (width)
    X,
    /// Vertical (height)
    Y,
}

impl Axis {
    /// The perpendicular axis.
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Pick this axis' component from a vector.
    pub fn select(self, v: Vec2) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }

    /// Overwrite this axis' component of a vector.
    pub fn replace(self, v: Vec2, value: f32) -> Vec2 {
        match self {
            Axis::X => Vec2::new(value, v.y),
            Axis::Y => Vec2::new(v.x, value),
        }
    }
}

/// Direction in which the grid grows.
///
/// The default is `Vertical`, the first variant, matching a freshly created
/// grid in the hosts this engine was written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Direction {
    /// Lines are rows; the container grows downward, width is fixed.
    #[default]
    Vertical,
    /// Lines are columns; the container grows rightward, height is fixed.
    Horizontal,
}

impl Direction {
    /// The axis the engine computes and overwrites.
    pub fn growth_axis(self) -> Axis {
        match self {
            Direction::Vertical => Axis::Y,
            Direction::Horizontal => Axis::X,
        }
    }

    /// The axis taken as input from the container.
    pub fn fixed_axis(self) -> Axis {
        self.growth_axis().other()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Vertical => "vertical",
            Direction::Horizontal => "horizontal",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "vertical" | "v" => Ok(Direction::Vertical),
            "horizontal" | "h" => Ok(Direction::Horizontal),
            _ => Err(ConfigError::UnknownDirection { name: s.to_string() }),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Direction> for String {
    fn from(value: Direction) -> Self {
        value.as_str().to_string()
    }
}

/// Placement along a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AxisAlign {
    /// Left or top
    Start,
    /// Centered
    #[default]
    Center,
    /// Right or bottom
    End,
}

impl AxisAlign {
    /// Fraction of the leftover space placed before the content.
    pub fn factor(self) -> f32 {
        match self {
            AxisAlign::Start => 0.0,
            AxisAlign::Center => 0.5,
            AxisAlign::End => 1.0,
        }
    }
}

/// Alignment split into its two independent axis components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    /// Left / center / right
    pub horizontal: AxisAlign,
    /// Top / middle / bottom
    pub vertical: AxisAlign,
}

impl Alignment {
    pub fn new(horizontal: AxisAlign, vertical: AxisAlign) -> Self {
        Self { horizontal, vertical }
    }

    /// The component that positions content along `axis`.
    pub fn along(self, axis: Axis) -> AxisAlign {
        match axis {
            Axis::X => self.horizontal,
            Axis::Y => self.vertical,
        }
    }
}

impl From<Anchor> for Alignment {
    fn from(anchor: Anchor) -> Self {
        anchor.split()
    }
}

/// The nine named anchor positions a host can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Anchor {
    UpperLeft,
    UpperCenter,
    UpperRight,
    MiddleLeft,
    #[default]
    MiddleCenter,
    MiddleRight,
    LowerLeft,
    LowerCenter,
    LowerRight,
}

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Anchor::UpperLeft,
        Anchor::UpperCenter,
        Anchor::UpperRight,
        Anchor::MiddleLeft,
        Anchor::MiddleCenter,
        Anchor::MiddleRight,
        Anchor::LowerLeft,
        Anchor::LowerCenter,
        Anchor::LowerRight,
    ];

    /// Split into independent horizontal and vertical components.
    pub fn split(self) -> Alignment {
        use AxisAlign::*;
        let (horizontal, vertical) = match self {
            Anchor::UpperLeft => (Start, Start),
            Anchor::UpperCenter => (Center, Start),
            Anchor::UpperRight => (End, Start),
            Anchor::MiddleLeft => (Start, Center),
            Anchor::MiddleCenter => (Center, Center),
            Anchor::MiddleRight => (End, Center),
            Anchor::LowerLeft => (Start, End),
            Anchor::LowerCenter => (Center, End),
            Anchor::LowerRight => (End, End),
        };
        Alignment { horizontal, vertical }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Anchor::UpperLeft => "UpperLeft",
            Anchor::UpperCenter => "UpperCenter",
            Anchor::UpperRight => "UpperRight",
            Anchor::MiddleLeft => "MiddleLeft",
            Anchor::MiddleCenter => "MiddleCenter",
            Anchor::MiddleRight => "MiddleRight",
            Anchor::LowerLeft => "LowerLeft",
            Anchor::LowerCenter => "LowerCenter",
            Anchor::LowerRight => "LowerRight",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Anchor {
    type Err = ConfigError;

    /// Accepts `UpperLeft`, `upper-left`, `upper_left` and the `top`/`bottom`
    /// spellings, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let anchor = match normalize_name(s).as_str() {
            "upperleft" | "topleft" => Anchor::UpperLeft,
            "uppercenter" | "topcenter" => Anchor::UpperCenter,
            "upperright" | "topright" => Anchor::UpperRight,
            "middleleft" => Anchor::MiddleLeft,
            "middlecenter" | "center" => Anchor::MiddleCenter,
            "middleright" => Anchor::MiddleRight,
            "lowerleft" | "bottomleft" => Anchor::LowerLeft,
            "lowercenter" | "bottomcenter" => Anchor::LowerCenter,
            "lowerright" | "bottomright" => Anchor::LowerRight,
            _ => return Err(ConfigError::UnknownAnchor { name: s.to_string() }),
        };
        Ok(anchor)
    }
}

impl TryFrom<String> for Anchor {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Anchor> for String {
    fn from(value: Anchor) -> Self {
        value.as_str().to_string()
    }
}

fn normalize_name(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Padding on all sides.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct Padding {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Padding {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Create uniform padding.
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Create symmetric padding.
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(horizontal, horizontal, vertical, vertical)
    }

    /// Total horizontal padding.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical padding.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Total padding along an axis.
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.horizontal(),
            Axis::Y => self.vertical(),
        }
    }
}
