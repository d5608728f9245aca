//! File-level patch application.
//!
//! Reads the target as UTF-8 text, runs the rewrite engine, and writes the
//! result back atomically (tempfile in the same directory + fsync + rename).
//! A read failure aborts before anything touches disk; a write failure leaves
//! the original file intact because the rename never happens.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::rewrite::{rewrite, RuleOutcome};
use crate::rules::{Rule, RULES, TARGET_FILE};

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to replace {path}: {source}")]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Summary of one patch run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "PatchReport should be checked for what was replaced"]
pub struct PatchReport {
    /// The file that was rewritten.
    pub file: PathBuf,
    /// Per-rule occurrence counts, in application order.
    pub outcomes: Vec<RuleOutcome>,
}

impl PatchReport {
    /// True if any rule replaced at least one occurrence.
    pub fn changed(&self) -> bool {
        self.outcomes.iter().any(|o| o.occurrences > 0)
    }
}

/// Apply `rules` to the file at `path` and write the result back.
///
/// A rule whose pattern never occurs is a silent no-op: the file is still
/// rewritten (with identical content) and the call still succeeds.
pub fn patch_file(path: impl AsRef<Path>, rules: &[Rule]) -> Result<PatchReport, PatchError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let result = rewrite(&content, rules);

    atomic_write(path, result.text.as_bytes())?;

    // Rename can carry the tempfile's timestamp; bump mtime so downstream
    // build tools see the file as modified.
    let now = filetime::FileTime::now();
    filetime::set_file_mtime(path, now).map_err(|source| PatchError::Persist {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(PatchReport {
        file: path.to_path_buf(),
        outcomes: result.outcomes,
    })
}

/// Apply the compiled-in rule table to the compiled-in target.
pub fn run() -> Result<PatchReport, PatchError> {
    patch_file(TARGET_FILE, RULES)
}

/// Atomic file write: tempfile + fsync + rename.
///
/// The tempfile lives in the target's directory so the rename stays on one
/// filesystem. Either the full write succeeds or the original is untouched.
fn atomic_write(path: &Path, content: &[u8]) -> Result<(), PatchError> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    let parent = parent.unwrap_or_else(|| Path::new("."));

    let mut temp = tempfile::NamedTempFile::new_in(parent).map_err(|source| PatchError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    temp.write_all(content).map_err(|source| PatchError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    temp.as_file()
        .sync_all()
        .map_err(|source| PatchError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    temp.persist(path).map_err(|e| PatchError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    Ok(())
}
