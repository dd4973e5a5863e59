//! Request/response payloads for field line tracing.

use efield_core::errors::FieldError;
use efield_core::{Bounds, Charge};
use efield_solve::require_charges;
use serde::{Deserialize, Serialize};

use crate::trace::{trace_lines, FieldLine, TraceOpts};

/// Request payload for a tracing run.
///
/// The bounds double as the integration's stopping rectangle and default
/// to the same viewport as grid evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TraceRequest {
    /// Charges producing the field; must be non-empty.
    pub charges: Vec<Charge>,
    /// Stopping rectangle for the integration.
    #[serde(default)]
    pub bounds: Bounds,
    /// Tracing parameters.
    #[serde(default)]
    pub trace: TraceOpts,
}

/// Response payload: the traced polylines plus the echoed charges.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TraceReport {
    /// Traced polylines, in charge then seed order.
    pub lines: Vec<FieldLine>,
    /// Echo of the input charges.
    pub charges: Vec<Charge>,
}

/// Traces field lines for a request.
pub fn trace_report(request: &TraceRequest) -> Result<TraceReport, FieldError> {
    let set = require_charges(&request.charges)?;
    let lines = trace_lines(&set, &request.bounds, &request.trace)?;
    Ok(TraceReport {
        lines,
        charges: request.charges.clone(),
    })
}
