#![deny(missing_docs)]
#![doc = "Field and potential evaluation over point batches and sampling grids."]

pub mod field;
pub mod grid;
pub mod report;
pub mod serde;

pub use field::{evaluate_field, evaluate_potential, field_at, potential_at};
pub use grid::{GridSpec, Lattice};
pub use report::{
    evaluate_grid, evaluate_point, require_charges, validate_softening, FieldVector, GridRequest,
    GridResponse, PointRequest, PointResponse,
};
pub use serde::{from_json_slice, to_canonical_json_bytes, to_canonical_json_string};
