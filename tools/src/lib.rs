//! # Soundmap Tools
//!
//! A live-coding sample player triggers sounds by keyboard key. Which sample belongs to which
//! key is configured through `[[sound]]` tables in a TOML file. Writing those by hand for a few
//! hundred samples gets old quickly, so this crate provides a command-line utility that
//! generates them from a folder structure, and lets you inspect the result.
//!
//! ## Generate
//!
//! ```console
//! soundmap-generate 0.1.0
//! Print [[sound]] config for every sample in an asset tree
//!
//! USAGE:
//!     soundmap generate [BASE]
//!
//! ARGS:
//!     <BASE>    The root of the asset tree [default: assets/sounds/foxdot]
//!
//! OPTIONS:
//!     -h, --help       Print help information
//!     -V, --version    Print version information
//! ```
//!
//! Samples are picked up from three kinds of folders:
//!
//! | Folder          | Key                                      |
//! |-----------------|------------------------------------------|
//! | `_/hash/**`     | `#` (any word from the translation table) |
//! | `kick/lower/`   | `kick`                                   |
//! | `kick/upper/`   | `KICK`                                   |
//!
//! ### Example
//!
//! ```console
//! $ soundmap generate samples >> sounds.toml
//! $ head -n 5 sounds.toml
//! [[sound]]
//! key = "-"
//! seq = 0
//! path = "samples/_/hyphen/0_hihat.wav"
//!
//! ```
//!
//! ## Inspect
//!
//! ```console
//! soundmap-inspect 0.1.0
//! List the keys and samples in a sound config file
//!
//! USAGE:
//!     soundmap inspect [OPTIONS] <PATH> [KEY]
//!
//! ARGS:
//!     <PATH>    The path to the config file to inspect
//!     <KEY>     Only show the samples mapped to this key
//!
//! OPTIONS:
//!     -h, --help         Print help information
//!     -s, --seq <SEQ>    Only show the sample at this position for the key
//!     -V, --version      Print version information
//! ```
//!
//! ### Example
//!
//! ```console
//! $ soundmap inspect sounds.toml
//! 3 sounds, 2 keys
//! -        | 2
//! KICK     | 1
//! $ soundmap inspect sounds.toml -- -
//!   0 | samples/_/hyphen/0_hihat.wav
//!   1 | samples/_/hyphen/1_hihat.wav (missing)
//! ```
//!
//! Logging goes to stderr and is controlled through `RUST_LOG`, e.g. `RUST_LOG=debug` shows
//! which folders were matched or skipped.

pub mod generate;
pub mod inspect;
pub mod logging;
