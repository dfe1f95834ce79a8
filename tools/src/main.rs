use anyhow::Result;
use clap::Parser;

use soundmap_tools::generate::{generate, GenerateArgs};
use soundmap_tools::inspect::{inspect, InspectArgs};
use soundmap_tools::logging::init_logging;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
enum Cli {
    Generate(GenerateArgs),
    Inspect(InspectArgs),
}

fn main() -> Result<()> {
    init_logging();

    match Cli::parse_from(wild::args()) {
        Cli::Generate(args) => generate(&args),
        Cli::Inspect(args) => inspect(&args),
    }
}
