//! Query points and rectangular bounds.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, FieldError};

/// A query location in the charge plane, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate in meters.
    pub x: f64,
    /// Y coordinate in meters.
    pub y: f64,
}

impl Point {
    /// Returns the point as a coordinate pair.
    pub fn as_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

/// An axis-aligned sampling rectangle.
///
/// Valid bounds require `xmin < xmax` and `ymin < ymax`; anything else is
/// rejected as a degenerate rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Left edge in meters.
    pub xmin: f64,
    /// Right edge in meters.
    pub xmax: f64,
    /// Bottom edge in meters.
    pub ymin: f64,
    /// Top edge in meters.
    pub ymax: f64,
}

fn bounds_error(code: &str, message: impl Into<String>) -> FieldError {
    FieldError::Input(ErrorInfo::new(code, message))
}

impl Default for Bounds {
    /// The conventional ±2 m viewport used when a caller omits bounds.
    fn default() -> Self {
        Self {
            xmin: -2.0,
            xmax: 2.0,
            ymin: -2.0,
            ymax: 2.0,
        }
    }
}

impl Bounds {
    /// Checks the rectangle invariants, rejecting degenerate or
    /// non-finite edges.
    pub fn validate(&self) -> Result<(), FieldError> {
        let edges = [self.xmin, self.xmax, self.ymin, self.ymax];
        if edges.iter().any(|edge| !edge.is_finite()) {
            return Err(bounds_error(
                "non-finite-bounds",
                "bounds edges must be finite",
            ));
        }
        if self.xmin >= self.xmax || self.ymin >= self.ymax {
            return Err(FieldError::Input(
                ErrorInfo::new("degenerate-bounds", "bounds require xmin < xmax and ymin < ymax")
                    .with_context("xmin", self.xmin.to_string())
                    .with_context("xmax", self.xmax.to_string())
                    .with_context("ymin", self.ymin.to_string())
                    .with_context("ymax", self.ymax.to_string()),
            ));
        }
        Ok(())
    }

    /// Returns `true` when the coordinate lies inside the rectangle,
    /// edges included.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.xmin && x <= self.xmax && y >= self.ymin && y <= self.ymax
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_rectangles() {
        let bounds = Bounds {
            xmin: 2.0,
            xmax: -2.0,
            ymin: -2.0,
            ymax: 2.0,
        };
        let err = bounds.validate().unwrap_err();
        assert_eq!(err.info().code, "degenerate-bounds");
    }

    #[test]
    fn containment_includes_edges() {
        let bounds = Bounds {
            xmin: -2.0,
            xmax: 2.0,
            ymin: -2.0,
            ymax: 2.0,
        };
        assert!(bounds.contains(-2.0, 2.0));
        assert!(bounds.contains(0.0, 0.0));
        assert!(!bounds.contains(2.1, 0.0));
    }
}
