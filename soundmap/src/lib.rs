//! Map a tree of sound samples to keyboard keys
//!
//! Sample folders follow one of three conventions:
//!
//! - `_/<word>/**` for symbol keys, where the word is spelled out (`_/hash/` for `#`, see [`table`])
//! - `<key>/lower/` for the lowercase key
//! - `<key>/upper/` for the uppercase key
//!
//! [`scan`](scan::scan) walks such a tree and produces a [`Record`](record::Record) per file, which
//! renders as a `[[sound]]` TOML table. [`SoundBank`](bank::SoundBank) reads those tables back in.

pub mod bank;
pub mod record;
pub mod rule;
pub mod scan;
pub mod table;
