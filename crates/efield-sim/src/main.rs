use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{grid, point, trace, version};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "efield-sim", about = "Electrostatic field evaluation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate field and potential over a sampling grid.
    Grid(grid::GridArgs),
    /// Evaluate field and potential at a single point.
    Point(point::PointArgs),
    /// Trace field lines through a charge configuration.
    Trace(trace::TraceArgs),
    /// Print version information.
    Version(version::VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Grid(args) => grid::run(&args),
        Command::Point(args) => point::run(&args),
        Command::Trace(args) => trace::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
