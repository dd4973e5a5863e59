//! Rectangular sampling lattices and their row/column bookkeeping.

use efield_core::errors::{ErrorInfo, FieldError};
use efield_core::Bounds;
use serde::{Deserialize, Serialize};

fn grid_error(code: &str, message: impl Into<String>) -> FieldError {
    FieldError::Input(ErrorInfo::new(code, message))
}

pub(crate) fn default_resolution() -> usize {
    50
}

/// Description of a rectangular sampling grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GridSpec {
    /// Sampling rectangle.
    #[serde(default)]
    pub bounds: Bounds,
    /// Samples per axis; the lattice holds `resolution²` points.
    #[serde(default = "default_resolution")]
    pub resolution: usize,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            resolution: default_resolution(),
        }
    }
}

/// A built lattice: coordinate matrices plus the flattened point list.
///
/// X varies along columns (xmin to xmax), Y varies along rows (ymin to
/// ymax), so row i, column j maps to the point `(xs[j], ys[i])`. The flat
/// point list is the row-major flattening of that mapping and is what the
/// evaluator consumes; [`Lattice::reshape`] restores evaluator output to
/// the matrix layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    resolution: usize,
    x: Vec<Vec<f64>>,
    y: Vec<Vec<f64>>,
    points: Vec<[f64; 2]>,
}

fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let span = stop - start;
    let last = (count - 1) as f64;
    (0..count)
        .map(|idx| start + span * idx as f64 / last)
        .collect()
}

impl Lattice {
    /// Builds the lattice for a grid description.
    ///
    /// Fails on degenerate bounds or a resolution below 2.
    pub fn build(spec: &GridSpec) -> Result<Lattice, FieldError> {
        spec.bounds.validate()?;
        if spec.resolution < 2 {
            return Err(FieldError::Input(
                ErrorInfo::new(
                    "invalid-resolution",
                    "grids require at least 2 samples per axis",
                )
                .with_context("resolution", spec.resolution.to_string()),
            ));
        }
        let xs = linspace(spec.bounds.xmin, spec.bounds.xmax, spec.resolution);
        let ys = linspace(spec.bounds.ymin, spec.bounds.ymax, spec.resolution);

        let mut x = Vec::with_capacity(spec.resolution);
        let mut y = Vec::with_capacity(spec.resolution);
        let mut points = Vec::with_capacity(spec.resolution * spec.resolution);
        for yv in &ys {
            x.push(xs.clone());
            y.push(vec![*yv; spec.resolution]);
            for xv in &xs {
                points.push([*xv, *yv]);
            }
        }
        Ok(Lattice {
            resolution: spec.resolution,
            x,
            y,
            points,
        })
    }

    /// Samples per axis.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// X coordinate matrix, varying along columns.
    pub fn x(&self) -> &[Vec<f64>] {
        &self.x
    }

    /// Y coordinate matrix, varying along rows.
    pub fn y(&self) -> &[Vec<f64>] {
        &self.y
    }

    /// Row-major flattened points, length `resolution²`.
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// Restores a flat evaluator output to the lattice's matrix layout.
    ///
    /// Fails when the flat length does not match `resolution²`.
    pub fn reshape(&self, flat: &[f64]) -> Result<Vec<Vec<f64>>, FieldError> {
        if flat.len() != self.points.len() {
            return Err(grid_error(
                "reshape-length",
                format!(
                    "expected {} values to reshape, got {}",
                    self.points.len(),
                    flat.len()
                ),
            ));
        }
        Ok(flat
            .chunks_exact(self.resolution)
            .map(|row| row.to_vec())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_column_mapping_follows_meshgrid() {
        let spec = GridSpec {
            bounds: Bounds {
                xmin: 0.0,
                xmax: 1.0,
                ymin: 10.0,
                ymax: 11.0,
            },
            resolution: 3,
        };
        let lattice = Lattice::build(&spec).expect("lattice");
        // Row i, column j holds (xs[j], ys[i]).
        assert_eq!(lattice.x()[0], vec![0.0, 0.5, 1.0]);
        assert_eq!(lattice.y()[1], vec![10.5, 10.5, 10.5]);
        assert_eq!(lattice.points()[0], [0.0, 10.0]);
        assert_eq!(lattice.points()[1], [0.5, 10.0]);
        assert_eq!(lattice.points()[3], [0.0, 10.5]);
        assert_eq!(lattice.points()[8], [1.0, 11.0]);
    }

    #[test]
    fn reshape_round_trips_flat_order() {
        let lattice = Lattice::build(&GridSpec {
            bounds: Bounds::default(),
            resolution: 2,
        })
        .expect("lattice");
        let reshaped = lattice.reshape(&[1.0, 2.0, 3.0, 4.0]).expect("reshape");
        assert_eq!(reshaped, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert!(lattice.reshape(&[1.0]).is_err());
    }

    #[test]
    fn rejects_undersized_grids() {
        let err = Lattice::build(&GridSpec {
            bounds: Bounds::default(),
            resolution: 1,
        })
        .unwrap_err();
        assert_eq!(err.info().code, "invalid-resolution");
    }
}
