//! The `generate` subcommand

use anyhow::{Context, Result};
use clap::Args;
use soundmap::{record::Record, scan::scan};
use std::{
    io::{self, BufWriter, Write},
    path::PathBuf,
};
use tracing::info;

/// The asset tree that gets scanned when no path is given
pub const DEFAULT_BASE: &str = "assets/sounds/foxdot";

/// Arguments for the `generate` subcommand
#[derive(Args)]
#[clap(
    author,
    version,
    about = "Print [[sound]] config for every sample in an asset tree",
    long_about = "Generate walks an asset tree and prints a [[sound]] TOML table for every sample it recognizes.\n\nSamples live in _/<word>/ (symbol keys, e.g. _/hash/ for #), <key>/lower/ or <key>/upper/. Everything else is skipped.\n\nRedirect the output to append it to a config file."
)]
pub struct GenerateArgs {
    /// The root of the asset tree
    #[clap(default_value = DEFAULT_BASE)]
    base: PathBuf,
}

/// Print [[sound]] config for every sample in an asset tree
pub fn generate(args: &GenerateArgs) -> Result<()> {
    let records = scan(&args.base)
        .with_context(|| format!("Could not scan {}", args.base.display()))?;

    info!("Found {} samples in {}", records.len(), args.base.display());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_records(&records, &mut out).context("Could not write to stdout")?;
    out.flush().context("Could not write to stdout")?;

    Ok(())
}

fn write_records(records: &[Record], out: &mut impl Write) -> io::Result<()> {
    for record in records {
        write!(out, "{record}")?;
    }

    Ok(())
}
