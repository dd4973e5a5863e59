#![deny(missing_docs)]
#![doc = "Core data model and error types shared across the efield crates."]

pub mod charges;
pub mod errors;
pub mod geom;

pub use charges::{Charge, ChargeSet};
pub use errors::{ErrorInfo, FieldError};
pub use geom::{Bounds, Point};

/// Coulomb's constant in N·m²/C².
///
/// All field values are expressed in N/C (equivalently V/m) and all
/// potentials in Volts; charge is in Coulombs and length in meters. The
/// unit convention is fixed and never tagged on the values themselves.
pub const COULOMB_K: f64 = 8.987_551_792_3e9;
