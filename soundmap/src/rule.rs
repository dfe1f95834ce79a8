//! Deciding which key (if any) the files in a folder belong to

use crate::table;
use std::path::{Component, Path};

/// The folder name under which spelled-out symbol folders live (`_/hash/`, `_/tilde/`, ...)
pub const SENTINEL: &str = "_";

/// The sub-folder holding the samples for the lowercase version of a key
pub const LOWER: &str = "lower";

/// The sub-folder holding the samples for the uppercase version of a key
pub const UPPER: &str = "upper";

/// Which folder convention a key was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `_/<word>/**`, where the word is found in the translation table
    Special,

    /// `<word>/lower`
    Lower,

    /// `<word>/upper`
    Upper,
}

/// A key derived from a folder path, along with the rule that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub rule: Rule,
    pub key: String,
}

/// Classify a folder by its path segments, relative to the base of the asset tree
///
/// The rules are tried in order and the first match wins. Folders that don't match any
/// convention return `None`.
pub fn classify<S: AsRef<str>>(segments: &[S]) -> Option<Classification> {
    let first = segments.first()?.as_ref();
    let second = segments.get(1)?.as_ref();

    if first == SENTINEL {
        if let Some(symbol) = table::translate(second) {
            return Some(Classification {
                rule: Rule::Special,
                key: symbol.to_owned(),
            });
        }
    }

    if segments.len() != 2 {
        return None;
    }

    match second {
        LOWER => Some(Classification {
            rule: Rule::Lower,
            key: first.to_owned(),
        }),
        UPPER => Some(Classification {
            rule: Rule::Upper,
            key: first.to_uppercase(),
        }),
        _ => None,
    }
}

/// Split a relative path into its normal segments
///
/// Segments that aren't valid UTF-8 are converted lossily. `.` components are dropped, so the
/// base directory itself produces no segments at all.
pub fn segments(relative: &Path) -> Vec<String> {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}
