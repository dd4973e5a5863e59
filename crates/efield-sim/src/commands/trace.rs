use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use efield_trace::{trace_report, TraceRequest};
use log::info;

use super::{read_request, write_response};

#[derive(Args, Debug)]
pub struct TraceArgs {
    /// JSON trace request.
    #[arg(long = "in")]
    pub input: PathBuf,
    /// Output path for the JSON response.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &TraceArgs) -> Result<(), Box<dyn Error>> {
    let request: TraceRequest = read_request(&args.input)?;
    info!(
        "tracing {} charges, {} seeds per charge",
        request.charges.len(),
        request.trace.lines_per_charge
    );
    let report = trace_report(&request).map_err(|err| Box::new(err) as Box<dyn Error>)?;
    info!("emitted {} polylines", report.lines.len());
    write_response(&args.out, &report)?;
    Ok(())
}
