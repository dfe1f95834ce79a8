//! The `inspect` subcommand

use anyhow::{Context, Error, Result};
use clap::Args;
use soundmap::bank::{Sound, SoundBank};
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

/// Arguments for the `inspect` subcommand
#[derive(Args)]
#[clap(
    author,
    version,
    about = "List the keys and samples in a sound config file",
    long_about = None
)]
pub struct InspectArgs {
    /// The path to the config file to inspect
    path: PathBuf,

    /// Only show the samples mapped to this key
    key: Option<String>,

    /// Only show the sample at this position for the key
    #[clap(short, long, requires = "key")]
    seq: Option<usize>,
}

/// List the keys and samples in a sound config file
pub fn inspect(args: &InspectArgs) -> Result<()> {
    let bank = SoundBank::from_path(&args.path)
        .with_context(|| format!("Could not load {}", args.path.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.key {
        None => print_summary(&bank, &mut out),
        Some(key) => print_key(&bank, key, args.seq, &mut out),
    }
}

fn print_summary(bank: &SoundBank, out: &mut impl Write) -> Result<()> {
    let keys = bank.keys();
    writeln!(out, "{} sounds, {} keys", bank.len(), keys.len())?;

    for key in keys {
        writeln!(out, "{key:<8} | {}", bank.sounds(key).len())?;
    }

    Ok(())
}

fn print_key(bank: &SoundBank, key: &str, seq: Option<usize>, out: &mut impl Write) -> Result<()> {
    match seq {
        Some(seq) => {
            let sound = bank
                .get(key, seq)
                .ok_or_else(|| Error::msg(format!("No sound {seq} for key \"{key}\"")))?;
            print_sound(seq, sound, out)?;
        }
        None => {
            let sounds = bank.sounds(key);
            if sounds.is_empty() {
                return Err(Error::msg(format!("No sounds for key \"{key}\"")));
            }

            for (index, sound) in sounds.iter().enumerate() {
                print_sound(index, sound, out)?;
            }
        }
    }

    Ok(())
}

fn print_sound(index: usize, sound: &Sound, out: &mut impl Write) -> Result<()> {
    write!(out, "{index:>3} | {}", sound.path)?;

    if !Path::new(&sound.path).exists() {
        write!(out, " (missing)")?;
    }

    if !sound.description.is_empty() {
        write!(out, " - {}", sound.description)?;
    }

    writeln!(out)?;
    Ok(())
}
