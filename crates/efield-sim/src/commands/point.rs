use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use efield_solve::{evaluate_point, PointRequest};
use log::info;

use super::{read_request, write_response};

#[derive(Args, Debug)]
pub struct PointArgs {
    /// JSON point evaluation request.
    #[arg(long = "in")]
    pub input: PathBuf,
    /// Output path for the JSON response.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &PointArgs) -> Result<(), Box<dyn Error>> {
    let request: PointRequest = read_request(&args.input)?;
    info!(
        "point evaluation at ({}, {}) against {} charges",
        request.point.x,
        request.point.y,
        request.charges.len()
    );
    let response = evaluate_point(&request).map_err(|err| Box::new(err) as Box<dyn Error>)?;
    write_response(&args.out, &response)?;
    Ok(())
}
