use std::fmt;

use serde::Deserialize;

/// Axis along which a container lays out and slides its panes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Orientation::Horizontal)
    }

    /// Component of a `(dx, dy)` displacement along this axis.
    pub fn along(self, dx: f64, dy: f64) -> f64 {
        match self {
            Orientation::Horizontal => dx,
            Orientation::Vertical => dy,
        }
    }

    /// Component of a `(dx, dy)` displacement across this axis.
    pub fn across(self, dx: f64, dy: f64) -> f64 {
        match self {
            Orientation::Horizontal => dy,
            Orientation::Vertical => dx,
        }
    }
}

/// A translation in percent of the pane's own width (`x`) and height (`y`).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Translate {
    pub x: f64,
    pub y: f64,
}

impl Translate {
    pub const ZERO: Translate = Translate { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translation of `percent` along the given axis, zero across it.
    pub fn along(orientation: Orientation, percent: f64) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(percent, 0.0),
            Orientation::Vertical => Self::new(0.0, percent),
        }
    }

    /// The component of this translation along the given axis.
    pub fn offset(self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.x,
            Orientation::Vertical => self.y,
        }
    }

    /// Linear interpolation toward `to` at progress `t` (0.0 to 1.0).
    pub fn lerp(self, to: Translate, t: f64) -> Self {
        Self {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }
}

impl fmt::Display for Translate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate({}%, {}%)", self.x, self.y)
    }
}
