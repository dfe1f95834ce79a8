//! A single `[[sound]]` block of generated configuration

use std::{fmt, path::PathBuf};

/// One sound file, mapped to a key and its position amongst the other files for that key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub seq: usize,
    pub path: PathBuf,
}

impl fmt::Display for Record {
    /// Render as a TOML `[[sound]]` table followed by an empty line
    ///
    /// The key and path are written between quotes as-is. Nothing gets escaped, which is why the
    /// translation table stores the backslash symbol pre-escaped.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "[[sound]]")?;
        writeln!(f, "key = \"{}\"", self.key)?;
        writeln!(f, "seq = {}", self.seq)?;
        writeln!(f, "path = \"{}\"", self.path.display())?;
        writeln!(f)
    }
}
