use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use efield_solve::{evaluate_grid, GridRequest};
use log::info;

use super::{read_request, write_response};

#[derive(Args, Debug)]
pub struct GridArgs {
    /// JSON grid evaluation request.
    #[arg(long = "in")]
    pub input: PathBuf,
    /// Output path for the JSON response.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &GridArgs) -> Result<(), Box<dyn Error>> {
    let request: GridRequest = read_request(&args.input)?;
    info!(
        "grid evaluation: {} charges, resolution {}",
        request.charges.len(),
        request.resolution
    );
    let response = evaluate_grid(&request).map_err(|err| Box::new(err) as Box<dyn Error>)?;
    write_response(&args.out, &response)?;
    Ok(())
}
