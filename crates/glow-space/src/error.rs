//! Error types for grid construction and combination.

use std::fmt;

/// Errors arising from grid construction or grid-to-grid operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// A grid axis has fewer than two nodes, so no cell spacing exists.
    AxisTooSmall {
        /// Axis name (`"nx"` or `"ny"`).
        axis: &'static str,
        /// The offending node count.
        extent: usize,
    },
    /// A physical extent is zero, negative, or not finite.
    NonPositiveExtent {
        /// Axis name (`"lx"` or `"ly"`).
        axis: &'static str,
        /// The offending extent.
        value: f64,
    },
    /// Two grids in a combining operation have different shapes.
    ShapeMismatch {
        /// Shape of the left operand.
        left: (usize, usize),
        /// Shape of the right operand.
        right: (usize, usize),
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AxisTooSmall { axis, extent } => {
                write!(f, "grid axis {axis} needs at least 2 nodes, got {extent}")
            }
            Self::NonPositiveExtent { axis, value } => {
                write!(f, "domain extent {axis} must be finite and positive, got {value}")
            }
            Self::ShapeMismatch { left, right } => {
                write!(
                    f,
                    "grid shape mismatch: {}x{} vs {}x{}",
                    left.0, left.1, right.0, right.1
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
