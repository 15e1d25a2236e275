//! Tunables for arrowhead and label placement.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ARROWHEAD_LENGTH: f64 = 10.0;
pub const DEFAULT_ARROWHEAD_WIDTH: f64 = DEFAULT_ARROWHEAD_LENGTH / 2.0;
/// Label center sits at 80% of the way from the source center to the arrow tip.
pub const DEFAULT_LABEL_POSITION: f64 = 0.8;

/// How the arrow tip is pulled back from the destination center onto its bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClipStrategy {
    /// Clip against the vertical and the horizontal extent separately and keep whichever
    /// candidate lands closer (Manhattan) to the destination center.
    #[default]
    AxisNearest,
    /// Exact intersection of the center-to-source ray with the bounding box.
    ExactRect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeometryConfig {
    /// Distance from the tip back to the wing ends, along the edge.
    pub arrowhead_length: f64,
    /// Sideways offset of each wing end from the edge line.
    pub arrowhead_width: f64,
    /// Interpolation factor between source center (0) and arrow tip (1) for the label center.
    pub label_position: f64,
    pub clip: ClipStrategy,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            arrowhead_length: DEFAULT_ARROWHEAD_LENGTH,
            arrowhead_width: DEFAULT_ARROWHEAD_WIDTH,
            label_position: DEFAULT_LABEL_POSITION,
            clip: ClipStrategy::default(),
        }
    }
}

impl GeometryConfig {
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("arrowheadLength", self.arrowhead_length),
            ("arrowheadWidth", self.arrowhead_width),
            ("labelPosition", self.label_position),
        ];
        for (option, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidOption { option, value });
            }
        }
        Ok(())
    }
}
