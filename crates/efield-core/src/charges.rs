//! Point charge descriptors and their normalized numeric form.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, FieldError};

fn charge_error(code: &str, message: impl Into<String>, idx: usize) -> FieldError {
    FieldError::Input(ErrorInfo::new(code, message).with_context("charge_index", idx.to_string()))
}

/// A single point charge in the 2D plane.
///
/// `q` is in Coulombs, `x` and `y` in meters. Charges are immutable once
/// handed to an evaluation call. Coincident charges are valid; their
/// contributions simply superpose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    /// Charge magnitude in Coulombs (sign carries polarity).
    pub q: f64,
    /// X coordinate of the charge in meters.
    pub x: f64,
    /// Y coordinate of the charge in meters.
    pub y: f64,
}

/// A charge sequence normalized into parallel numeric arrays.
///
/// Magnitudes and positions are kept in input order. Order never affects
/// the accumulated result beyond floating point summation order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeSet {
    magnitudes: Vec<f64>,
    positions: Vec<[f64; 2]>,
}

impl ChargeSet {
    /// Normalizes a charge sequence, rejecting non-finite components.
    ///
    /// Empty sequences are accepted here: the evaluator treats them as a
    /// trivially zero field. Rejecting empty sets for being useless to
    /// visualize is the request layer's concern.
    pub fn from_charges(charges: &[Charge]) -> Result<ChargeSet, FieldError> {
        let mut magnitudes = Vec::with_capacity(charges.len());
        let mut positions = Vec::with_capacity(charges.len());
        for (idx, charge) in charges.iter().enumerate() {
            if !charge.q.is_finite() || !charge.x.is_finite() || !charge.y.is_finite() {
                return Err(charge_error(
                    "non-finite-charge",
                    format!("charge {idx} contains a non-finite component"),
                    idx,
                ));
            }
            magnitudes.push(charge.q);
            positions.push([charge.x, charge.y]);
        }
        Ok(ChargeSet {
            magnitudes,
            positions,
        })
    }

    /// Number of charges in the set.
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    /// Returns `true` when the set holds no charges.
    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Charge magnitudes in input order, length M.
    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitudes
    }

    /// Charge positions in input order, shape M×2.
    pub fn positions(&self) -> &[[f64; 2]] {
        &self.positions
    }

    /// Iterates over `(magnitude, position)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, [f64; 2])> + '_ {
        self.magnitudes
            .iter()
            .copied()
            .zip(self.positions.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_in_input_order() {
        let charges = [
            Charge {
                q: 1e-9,
                x: -1.0,
                y: 0.0,
            },
            Charge {
                q: -1e-9,
                x: 1.0,
                y: 0.0,
            },
        ];
        let set = ChargeSet::from_charges(&charges).expect("charge set");
        assert_eq!(set.len(), 2);
        assert_eq!(set.magnitudes(), &[1e-9, -1e-9]);
        assert_eq!(set.positions(), &[[-1.0, 0.0], [1.0, 0.0]]);
    }

    #[test]
    fn empty_sets_are_accepted() {
        let set = ChargeSet::from_charges(&[]).expect("empty set");
        assert!(set.is_empty());
    }

    #[test]
    fn rejects_non_finite_components() {
        let charges = [Charge {
            q: f64::NAN,
            x: 0.0,
            y: 0.0,
        }];
        let err = ChargeSet::from_charges(&charges).unwrap_err();
        assert_eq!(err.info().code, "non-finite-charge");
        assert_eq!(
            err.info().context.get("charge_index").map(String::as_str),
            Some("0")
        );
    }
}
