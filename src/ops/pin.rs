//! Implementation of a pinning run over a workflow directory.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use walkdir::WalkDir;

use crate::ops::process::{process_file, Output};
use crate::resolver::Resolver;
use crate::util::fs::is_yaml;

/// Options for a pinning run.
#[derive(Debug, Clone, Default)]
pub struct PinOptions {
    /// Dry run - report what would change without writing
    pub dry_run: bool,
}

/// A file that could not be processed.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: anyhow::Error,
}

/// Summary of a pinning run.
#[derive(Debug, Default)]
pub struct PinReport {
    /// Number of workflow files looked at
    pub scanned: usize,

    /// Files that were (or, in a dry run, would be) rewritten
    pub changed: Vec<PathBuf>,

    /// Files that failed, with the reason
    pub failed: Vec<FileFailure>,
}

impl PinReport {
    /// True when no file failed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Pin every `.yml`/`.yaml` file under `dir`.
///
/// Files are visited in path order. A failing file is recorded and the walk
/// moves on; only a missing `dir` fails the run outright.
pub fn pin_workflows(dir: &Path, resolver: &mut Resolver, opts: &PinOptions) -> Result<PinReport> {
    if !dir.is_dir() {
        bail!("workflow directory not found: {}", dir.display());
    }

    let output = if opts.dry_run {
        Output::Discard
    } else {
        Output::InPlace
    };

    let mut report = PinReport::default();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().map_or_else(|| dir.to_path_buf(), Path::to_path_buf);
                tracing::warn!(file = %path.display(), error = %err, "could not read directory entry");
                report.failed.push(FileFailure {
                    path,
                    error: err.into(),
                });
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() || !is_yaml(path) {
            continue;
        }

        report.scanned += 1;
        match process_file(path, output, resolver) {
            Ok(true) => {
                if opts.dry_run {
                    tracing::info!(file = %path.display(), "would update");
                } else {
                    tracing::info!(file = %path.display(), "updated");
                }
                report.changed.push(path.to_path_buf());
            }
            Ok(false) => tracing::debug!(file = %path.display(), "unchanged"),
            Err(error) => {
                tracing::warn!(file = %path.display(), error = %format!("{:#}", error), "could not process");
                report.failed.push(FileFailure {
                    path: path.to_path_buf(),
                    error,
                });
            }
        }
    }

    tracing::info!(
        dir = %dir.display(),
        total = report.scanned,
        changed = report.changed.len(),
        failed = report.failed.len(),
        "done"
    );

    Ok(report)
}
