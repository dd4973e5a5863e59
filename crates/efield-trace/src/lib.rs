#![deny(missing_docs)]
#![doc = "Field line tracing: seeded, fixed-step integration of flux lines."]

pub mod report;
pub mod trace;

pub use report::{trace_report, TraceReport, TraceRequest};
pub use trace::{trace_lines, FieldLine, TraceOpts};
