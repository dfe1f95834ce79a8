//! Walking an asset tree and turning its files into [`Record`]s

use crate::{
    record::Record,
    rule::{classify, segments, Rule},
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// Walk an asset tree and collect the records for every file in a recognized folder
///
/// Folders are visited in file name order, so the output is stable between runs. Any failure to
/// read the tree (including a missing base) aborts the whole scan.
pub fn scan(base: impl AsRef<Path>) -> Result<Vec<Record>, ScanError> {
    let mut records = Vec::new();
    for directory in Scanner::new(base) {
        records.extend(directory?.records);
    }

    Ok(records)
}

/// The records produced by a single recognized folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRecords {
    /// The folder path, relative to the base of the tree
    pub relative: PathBuf,

    /// The convention the folder matched
    pub rule: Rule,

    /// One record per file, with `seq` numbered from 0 in file name order
    pub records: Vec<Record>,
}

/// An iterator over the recognized folders of an asset tree
///
/// Folders that don't match any naming convention are skipped.
pub struct Scanner {
    base: PathBuf,
    walk: walkdir::IntoIter,
}

impl Scanner {
    /// Start scanning from a base folder
    ///
    /// Nothing touches the filesystem until the first call to [`Iterator::next`].
    pub fn new(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref().to_owned();
        let walk = WalkDir::new(&base).sort_by_file_name().into_iter();

        Self { base, walk }
    }

    /// The folder this scanner started from
    pub fn base(&self) -> &Path {
        &self.base
    }

    fn directory(&self, path: &Path) -> Result<Option<DirectoryRecords>, ScanError> {
        let relative = match path.strip_prefix(&self.base) {
            Ok(relative) => relative,
            Err(_) => return Ok(None),
        };

        let Some(classification) = classify(&segments(relative)) else {
            debug!("Skipping {}", relative.display());
            return Ok(None);
        };

        // The outer walk interleaves files with sub-folder contents, so list this folder on its
        // own to number its files in name order
        let mut records = Vec::new();
        for entry in WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|error| ScanError::from_walkdir(error, path))?;
            // Symlinks aren't followed by the walk, but a link to a folder is still a folder
            if entry.file_type().is_dir() || entry.path().is_dir() {
                continue;
            }

            records.push(Record {
                key: classification.key.clone(),
                seq: records.len(),
                path: self.base.join(relative).join(entry.file_name()),
            });
        }

        debug!(
            "{} => {:?} key \"{}\" ({} files)",
            relative.display(),
            classification.rule,
            classification.key,
            records.len()
        );

        Ok(Some(DirectoryRecords {
            relative: relative.to_owned(),
            rule: classification.rule,
            records,
        }))
    }
}

impl Iterator for Scanner {
    type Item = Result<DirectoryRecords, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walk.next()? {
                Ok(entry) => entry,
                Err(error) => return Some(Err(ScanError::from_walkdir(error, &self.base))),
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            match self.directory(entry.path()) {
                Ok(Some(directory)) => return Some(Ok(directory)),
                Ok(None) => continue,
                Err(error) => return Some(Err(error)),
            }
        }
    }
}

/// Errors that can result from scanning an asset tree
#[derive(Debug, Error)]
pub enum ScanError {
    /// A folder (or the base itself) could not be read
    #[error("Could not read {}", .path.display())]
    Walk {
        path: PathBuf,

        #[source]
        source: walkdir::Error,
    },
}

impl ScanError {
    fn from_walkdir(source: walkdir::Error, fallback: &Path) -> Self {
        let path = source.path().unwrap_or(fallback).to_owned();
        Self::Walk { path, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn tree(files: &[&str]) -> Result<TempDir> {
        let dir = tempdir()?;
        for file in files {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap())?;
            fs::write(&path, b"RIFF")?;
        }

        Ok(dir)
    }

    fn record(key: &str, seq: usize, path: PathBuf) -> Record {
        Record {
            key: key.to_owned(),
            seq,
            path,
        }
    }

    #[test]
    fn special_group() -> Result<()> {
        let dir = tree(&["_/hyphen/b.wav", "_/hyphen/a.wav"])?;
        let base = dir.path();

        assert_eq!(
            scan(base)?,
            [
                record("-", 0, base.join("_/hyphen/a.wav")),
                record("-", 1, base.join("_/hyphen/b.wav")),
            ]
        );

        Ok(())
    }

    #[test]
    fn lower_and_upper() -> Result<()> {
        let dir = tree(&["kick/lower/1.wav", "snare/upper/1.wav"])?;
        let base = dir.path();

        assert_eq!(
            scan(base)?,
            [
                record("kick", 0, base.join("kick/lower/1.wav")),
                record("SNARE", 0, base.join("snare/upper/1.wav")),
            ]
        );

        Ok(())
    }

    #[test]
    fn unmatched_folders_are_skipped() -> Result<()> {
        let dir = tree(&[
            "misc/other/1.wav",
            "loose.wav",
            "_/loose.wav",
            "_/unknown/1.wav",
            "kick/lower/nested/1.wav",
        ])?;

        assert!(scan(dir.path())?.is_empty());
        Ok(())
    }

    #[test]
    fn seq_restarts_per_folder() -> Result<()> {
        let dir = tree(&[
            "a/lower/3.wav",
            "a/lower/1.wav",
            "a/lower/2.wav",
            "a/upper/x.wav",
            "_/hash/1.wav",
            "_/hash/deeper/1.wav",
            "_/hash/deeper/2.wav",
        ])?;

        let scanner = Scanner::new(dir.path());
        assert_eq!(scanner.base(), dir.path());

        let directories = scanner.collect::<Result<Vec<_>, _>>()?;
        let summary: Vec<_> = directories
            .iter()
            .map(|directory| {
                (
                    directory.relative.clone(),
                    directory.rule,
                    directory
                        .records
                        .iter()
                        .map(|record| record.seq)
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        assert_eq!(
            summary,
            [
                (PathBuf::from("_/hash"), Rule::Special, vec![0]),
                (PathBuf::from("_/hash/deeper"), Rule::Special, vec![0, 1]),
                (PathBuf::from("a/lower"), Rule::Lower, vec![0, 1, 2]),
                (PathBuf::from("a/upper"), Rule::Upper, vec![0]),
            ]
        );

        let lower = &directories[2].records;
        assert!(lower[0].path.ends_with("1.wav"));
        assert!(lower[2].path.ends_with("3.wav"));

        Ok(())
    }

    #[test]
    fn subfolders_are_not_records() -> Result<()> {
        let dir = tree(&["_/tilde/a.wav", "_/tilde/sub/b.wav"])?;
        let records = scan(dir.path())?;

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|record| record.key == "~"));
        assert!(records.iter().all(|record| record.seq == 0));

        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_folders_are_not_records() -> Result<()> {
        let dir = tree(&["kick/lower/1.wav", "elsewhere/2.wav"])?;
        let base = dir.path();
        std::os::unix::fs::symlink("../../elsewhere", base.join("kick/lower/linked"))?;
        std::os::unix::fs::symlink("1.wav", base.join("kick/lower/linked.wav"))?;

        assert_eq!(
            scan(base)?,
            [
                record("kick", 0, base.join("kick/lower/1.wav")),
                record("kick", 1, base.join("kick/lower/linked.wav")),
            ]
        );

        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_folder() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let dir = tree(&["kick/lower/1.wav"])?;
        let locked = dir.path().join("kick/lower");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

        // Permissions don't apply to root, so there is nothing to test
        let readable = fs::read_dir(&locked).is_ok();
        let result = if readable { None } else { Some(scan(dir.path())) };
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;

        match result {
            None => {}
            Some(Err(ScanError::Walk { path, .. })) => assert_eq!(path, locked),
            Some(other) => panic!("expected a walk error, got {other:?}"),
        }

        Ok(())
    }

    #[test]
    fn missing_base() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("nope");

        match scan(&base) {
            Err(ScanError::Walk { path, .. }) => assert_eq!(path, base),
            other => panic!("expected a walk error, got {other:?}"),
        }
    }
}
