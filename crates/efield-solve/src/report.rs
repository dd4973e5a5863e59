//! Boundary request/response payloads for grid and single-point queries.
//!
//! Field names on the wire (`X`, `Ex`, `E_magnitude`, ...) are fixed by the
//! upstream visualization contract; the transport that carries them is the
//! caller's concern.

use efield_core::errors::{ErrorInfo, FieldError};
use efield_core::{Bounds, Charge, ChargeSet, Point};
use serde::{Deserialize, Serialize};

use crate::field::{evaluate_field, evaluate_potential, field_at, potential_at};
use crate::grid::{GridSpec, Lattice};

fn request_error(code: &str, message: impl Into<String>) -> FieldError {
    FieldError::Input(ErrorInfo::new(code, message))
}

fn default_grid_softening() -> f64 {
    1e-3
}

fn default_point_softening() -> f64 {
    1e-6
}

/// Normalizes a request's charge list, rejecting empty lists.
///
/// A zero-charge field is mathematically valid but useless to visualize, so
/// the boundary layer refuses it before any evaluation starts. The raw
/// evaluators accept empty sets and return zeros.
pub fn require_charges(charges: &[Charge]) -> Result<ChargeSet, FieldError> {
    if charges.is_empty() {
        return Err(FieldError::Input(
            ErrorInfo::new("empty-charges", "no charges provided")
                .with_hint("supply at least one charge"),
        ));
    }
    ChargeSet::from_charges(charges)
}

/// Rejects negative or non-finite softening values.
pub fn validate_softening(softening: f64) -> Result<(), FieldError> {
    if !softening.is_finite() || softening < 0.0 {
        return Err(request_error(
            "invalid-softening",
            format!("softening must be a non-negative finite value, got {softening}"),
        ));
    }
    Ok(())
}

/// Request payload for a rectangular grid evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridRequest {
    /// Charges producing the field; must be non-empty.
    pub charges: Vec<Charge>,
    /// Sampling rectangle.
    #[serde(default)]
    pub bounds: Bounds,
    /// Samples per axis, at least 2.
    #[serde(default = "crate::grid::default_resolution")]
    pub resolution: usize,
    /// Softening length in meters, added in quadrature to distances.
    #[serde(default = "default_grid_softening")]
    pub softening: f64,
}

/// Response payload for a grid evaluation.
///
/// All matrices are `resolution × resolution` in the lattice's row/column
/// mapping; the input charges are echoed back for marker rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridResponse {
    /// X coordinate matrix.
    #[serde(rename = "X")]
    pub x: Vec<Vec<f64>>,
    /// Y coordinate matrix.
    #[serde(rename = "Y")]
    pub y: Vec<Vec<f64>>,
    /// Field x-component matrix, N/C.
    #[serde(rename = "Ex")]
    pub ex: Vec<Vec<f64>>,
    /// Field y-component matrix, N/C.
    #[serde(rename = "Ey")]
    pub ey: Vec<Vec<f64>>,
    /// Potential matrix, Volts.
    #[serde(rename = "V")]
    pub v: Vec<Vec<f64>>,
    /// Echo of the input charges.
    pub charges: Vec<Charge>,
}

/// Evaluates field and potential over a sampling grid.
pub fn evaluate_grid(request: &GridRequest) -> Result<GridResponse, FieldError> {
    let set = require_charges(&request.charges)?;
    validate_softening(request.softening)?;
    let lattice = Lattice::build(&GridSpec {
        bounds: request.bounds,
        resolution: request.resolution,
    })?;

    let field = evaluate_field(lattice.points(), &set, request.softening);
    let potential = evaluate_potential(lattice.points(), &set, request.softening);

    let ex_flat: Vec<f64> = field.iter().map(|e| e[0]).collect();
    let ey_flat: Vec<f64> = field.iter().map(|e| e[1]).collect();
    Ok(GridResponse {
        x: lattice.x().to_vec(),
        y: lattice.y().to_vec(),
        ex: lattice.reshape(&ex_flat)?,
        ey: lattice.reshape(&ey_flat)?,
        v: lattice.reshape(&potential)?,
        charges: request.charges.clone(),
    })
}

/// Request payload for a single-point evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PointRequest {
    /// Charges producing the field; must be non-empty.
    pub charges: Vec<Charge>,
    /// Query location.
    pub point: Point,
    /// Softening length in meters.
    #[serde(default = "default_point_softening")]
    pub softening: f64,
}

/// A field vector sample, N/C per component.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FieldVector {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

/// Response payload for a single-point evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PointResponse {
    /// Echo of the query location.
    pub point: Point,
    /// Field vector at the point.
    #[serde(rename = "E")]
    pub e: FieldVector,
    /// Euclidean norm of the field vector.
    #[serde(rename = "E_magnitude")]
    pub e_magnitude: f64,
    /// Potential at the point, Volts.
    #[serde(rename = "V")]
    pub v: f64,
}

/// Evaluates field and potential at one coordinate.
pub fn evaluate_point(request: &PointRequest) -> Result<PointResponse, FieldError> {
    let set = require_charges(&request.charges)?;
    validate_softening(request.softening)?;
    if !request.point.x.is_finite() || !request.point.y.is_finite() {
        return Err(request_error(
            "non-finite-point",
            "query point coordinates must be finite",
        ));
    }

    let coords = request.point.as_array();
    let e = field_at(coords, &set, request.softening);
    let v = potential_at(coords, &set, request.softening);
    Ok(PointResponse {
        point: request.point,
        e: FieldVector { x: e[0], y: e[1] },
        e_magnitude: e[0].hypot(e[1]),
        v,
    })
}
