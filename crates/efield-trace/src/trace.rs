//! Fixed-step field line integration.
//!
//! Lines are seeded on a small circle around each charge and integrated
//! both along and against the field. Each step evaluates the field at the
//! current position, normalizes it to unit length and advances by the step
//! size, so tracing runs at constant speed regardless of how the field
//! magnitude varies near the charges. A line stops when it leaves the
//! bounds rectangle, approaches any charge in the set (which lets lines
//! flow into opposite-sign sinks), hits an exactly zero field, or exhausts
//! the step budget.

use std::f64::consts::TAU;

use efield_core::errors::{ErrorInfo, FieldError};
use efield_core::{Bounds, ChargeSet};
use efield_solve::field_at;
use serde::{Deserialize, Serialize};

fn opts_error(code: &str, message: impl Into<String>) -> FieldError {
    FieldError::Trace(ErrorInfo::new(code, message))
}

fn default_lines_per_charge() -> usize {
    12
}

fn default_step_size() -> f64 {
    0.05
}

fn default_max_steps() -> usize {
    1000
}

fn default_softening() -> f64 {
    1e-6
}

fn default_seed_radius_scale() -> f64 {
    1.5
}

fn default_seed_radius_floor() -> f64 {
    0.05
}

fn default_sink_radius_scale() -> f64 {
    0.8
}

/// Tracing parameters.
///
/// The seed radius (`max(step_size * seed_radius_scale,
/// seed_radius_floor)`) and the sink proximity radius (`step_size *
/// sink_radius_scale`) are empirically chosen; they are exposed as
/// configurable defaults rather than fixed constants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TraceOpts {
    /// Seeds placed around each charge.
    #[serde(default = "default_lines_per_charge")]
    pub lines_per_charge: usize,
    /// Advance per integration step, in meters.
    #[serde(default = "default_step_size")]
    pub step_size: f64,
    /// Step budget per direction; reaching it truncates the line without
    /// error.
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
    /// Softening length used for field evaluation along the line.
    #[serde(default = "default_softening")]
    pub softening: f64,
    /// Seed circle radius as a multiple of the step size.
    #[serde(default = "default_seed_radius_scale")]
    pub seed_radius_scale: f64,
    /// Lower limit on the seed circle radius, in meters.
    #[serde(default = "default_seed_radius_floor")]
    pub seed_radius_floor: f64,
    /// Charge proximity cutoff as a multiple of the step size.
    #[serde(default = "default_sink_radius_scale")]
    pub sink_radius_scale: f64,
}

impl Default for TraceOpts {
    fn default() -> Self {
        Self {
            lines_per_charge: default_lines_per_charge(),
            step_size: default_step_size(),
            max_steps: default_max_steps(),
            softening: default_softening(),
            seed_radius_scale: default_seed_radius_scale(),
            seed_radius_floor: default_seed_radius_floor(),
            sink_radius_scale: default_sink_radius_scale(),
        }
    }
}

impl TraceOpts {
    /// Checks every parameter, rejecting values the integrator cannot run
    /// with.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.lines_per_charge == 0 {
            return Err(opts_error(
                "invalid-lines-per-charge",
                "at least one line per charge is required",
            ));
        }
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(opts_error(
                "invalid-step-size",
                format!("step size must be positive and finite, got {}", self.step_size),
            ));
        }
        if self.max_steps == 0 {
            return Err(opts_error(
                "invalid-max-steps",
                "the step budget must be positive",
            ));
        }
        if !self.softening.is_finite() || self.softening < 0.0 {
            return Err(opts_error(
                "invalid-softening",
                format!(
                    "softening must be a non-negative finite value, got {}",
                    self.softening
                ),
            ));
        }
        if !self.seed_radius_scale.is_finite() || self.seed_radius_scale <= 0.0 {
            return Err(opts_error(
                "invalid-seed-radius-scale",
                "the seed radius scale must be positive",
            ));
        }
        if !self.seed_radius_floor.is_finite() || self.seed_radius_floor < 0.0 {
            return Err(opts_error(
                "invalid-seed-radius-floor",
                "the seed radius floor must be non-negative",
            ));
        }
        if !self.sink_radius_scale.is_finite() || self.sink_radius_scale <= 0.0 {
            return Err(opts_error(
                "invalid-sink-radius-scale",
                "the sink proximity scale must be positive",
            ));
        }
        Ok(())
    }

    fn seed_radius(&self) -> f64 {
        (self.step_size * self.seed_radius_scale).max(self.seed_radius_floor)
    }

    fn sink_radius(&self) -> f64 {
        self.step_size * self.sink_radius_scale
    }
}

/// A traced polyline, tagged with its originating charge for rendering.
///
/// The tag drives color and orientation in the caller's presentation
/// layer; it is not part of the numeric contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldLine {
    /// Index of the originating charge in the input sequence.
    pub charge: usize,
    /// Sign of the originating charge: 1 or -1.
    pub sign: i8,
    /// Polyline vertices, seed first.
    pub points: Vec<[f64; 2]>,
}

fn near_any_charge(pos: [f64; 2], charges: &ChargeSet, radius: f64) -> bool {
    charges.positions().iter().any(|p| {
        let dx = pos[0] - p[0];
        let dy = pos[1] - p[1];
        dx * dx + dy * dy < radius * radius
    })
}

fn integrate(
    seed: [f64; 2],
    direction: f64,
    charges: &ChargeSet,
    bounds: &Bounds,
    opts: &TraceOpts,
) -> Vec<[f64; 2]> {
    let sink_radius = opts.sink_radius();
    let mut points = vec![seed];
    let mut pos = seed;
    for _ in 0..opts.max_steps {
        let e = field_at(pos, charges, opts.softening);
        let magnitude = e[0].hypot(e[1]);
        if magnitude == 0.0 {
            break;
        }
        pos = [
            pos[0] + opts.step_size * direction * e[0] / magnitude,
            pos[1] + opts.step_size * direction * e[1] / magnitude,
        ];
        points.push(pos);
        if !bounds.contains(pos[0], pos[1]) {
            break;
        }
        if near_any_charge(pos, charges, sink_radius) {
            break;
        }
    }
    points
}

/// Traces field lines for a charge configuration.
///
/// Seeds `lines_per_charge` starting points evenly on a circle around each
/// charge and integrates each one forward and backward. The two directions
/// produce independent polylines; they are never concatenated. Polylines
/// with fewer than three vertices are dropped. An empty charge set yields
/// an empty line list.
pub fn trace_lines(
    charges: &ChargeSet,
    bounds: &Bounds,
    opts: &TraceOpts,
) -> Result<Vec<FieldLine>, FieldError> {
    bounds.validate()?;
    opts.validate()?;

    let seed_radius = opts.seed_radius();
    let mut lines = Vec::new();
    for (idx, (q, position)) in charges.iter().enumerate() {
        let sign: i8 = if q < 0.0 { -1 } else { 1 };
        for n in 0..opts.lines_per_charge {
            let angle = TAU * n as f64 / opts.lines_per_charge as f64;
            let seed = [
                position[0] + seed_radius * angle.cos(),
                position[1] + seed_radius * angle.sin(),
            ];
            for direction in [1.0, -1.0] {
                let points = integrate(seed, direction, charges, bounds, opts);
                if points.len() > 2 {
                    lines.push(FieldLine {
                        charge: idx,
                        sign,
                        points,
                    });
                }
            }
        }
    }
    Ok(lines)
}
