use std::error::Error;

use clap::Args;
use efield_solve::to_canonical_json_string;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit extended metadata as JSON.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: String,
    package: String,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let info = VersionInfo {
        version: env!("CARGO_PKG_VERSION").into(),
        package: env!("CARGO_PKG_NAME").into(),
    };
    let json = to_canonical_json_string(&info).map_err(|err| Box::new(err) as Box<dyn Error>)?;
    println!("{json}");
    Ok(())
}
