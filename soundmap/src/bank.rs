//! Loading generated `[[sound]]` configuration back in

use crate::record::Record;
use serde::Deserialize;
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;

/// A sound file mapped to a key, as read from a configuration file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Sound {
    pub key: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub seq: usize,

    pub path: String,
}

impl From<Record> for Sound {
    fn from(record: Record) -> Self {
        Self {
            key: record.key,
            description: String::new(),
            seq: record.seq,
            path: record.path.to_string_lossy().into_owned(),
        }
    }
}

/// All sounds from a configuration file, grouped by key
///
/// Within a key, sounds keep the order in which they appear in the file. Lookups by position go
/// through that order, not through the `seq` field each sound declares.
#[derive(Debug, Clone, Default)]
pub struct SoundBank {
    sounds: HashMap<String, Vec<Sound>>,
}

#[derive(Deserialize)]
struct Document {
    #[serde(default)]
    sound: Vec<Sound>,
}

impl SoundBank {
    /// Read and parse a sound bank from a file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| BankError::Read {
            path: path.to_owned(),
            source,
        })?;

        source.parse()
    }

    /// Add a sound to the end of its key's list
    pub fn push(&mut self, sound: Sound) {
        self.sounds.entry(sound.key.clone()).or_default().push(sound);
    }

    /// The sound at position `seq` for a key
    pub fn get(&self, key: &str, seq: usize) -> Option<&Sound> {
        self.sounds.get(key)?.get(seq)
    }

    /// All sounds for a key, or an empty slice for unknown keys
    pub fn sounds(&self, key: &str) -> &[Sound] {
        self.sounds.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every key that has at least one sound, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self.sounds.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// The total number of sounds in the bank
    pub fn len(&self) -> usize {
        self.sounds.values().map(Vec::len).sum()
    }

    /// Does the bank hold _any_ sounds?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromStr for SoundBank {
    type Err = BankError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let document: Document = toml::from_str(source)?;
        Ok(document.sound.into_iter().collect())
    }
}

impl FromIterator<Sound> for SoundBank {
    fn from_iter<I: IntoIterator<Item = Sound>>(iter: I) -> Self {
        let mut bank = Self::default();
        for sound in iter {
            bank.push(sound);
        }

        bank
    }
}

/// Errors that can result from loading a [`SoundBank`]
#[derive(Debug, Error)]
pub enum BankError {
    /// The file could not be read
    #[error("Could not read {}", .path.display())]
    Read {
        path: PathBuf,

        #[source]
        source: std::io::Error,
    },

    /// The contents are not a valid sound configuration
    #[error("Could not parse the sound configuration")]
    Parse(#[from] toml::de::Error),
}
