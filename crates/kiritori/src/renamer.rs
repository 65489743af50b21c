//! # Rename Driver
//!
//! Applies the title normalizer to a list of paths and renames each file in
//! place. Every path is handled on its own: a missing file, a name
//! collision or an I/O error is reported and the batch continues.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use kiritori_core::TitleNormalizer;
use tracing::{debug, info, warn};

use crate::error::RenameError;

/// What happened to one path.
#[derive(Debug)]
pub enum RenameOutcome {
    /// The file was renamed.
    Renamed { from: PathBuf, to: PathBuf },
    /// Dry run: the file would have been renamed.
    Planned { from: PathBuf, to: PathBuf },
    /// The normalized path equals the original.
    Unchanged { path: PathBuf },
    /// The path was skipped or failed.
    Failed(RenameError),
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// One status line per item.
impl fmt::Display for RenameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Renamed { from, to } => {
                write!(f, "Renaming: {} -> {}", file_name(from), file_name(to))
            }
            Self::Planned { from, to } => {
                write!(f, "Would rename: {} -> {}", file_name(from), file_name(to))
            }
            Self::Unchanged { path } => write!(f, "No change: {}", file_name(path)),
            Self::Failed(err) => write!(f, "{err}"),
        }
    }
}

/// Batch totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenameReport {
    pub renamed: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RenameReport {
    fn record(&mut self, outcome: &RenameOutcome) {
        match outcome {
            RenameOutcome::Renamed { .. } | RenameOutcome::Planned { .. } => self.renamed += 1,
            RenameOutcome::Unchanged { .. } => self.unchanged += 1,
            RenameOutcome::Failed(err) if err.is_skip() => self.skipped += 1,
            RenameOutcome::Failed(_) => self.failed += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.renamed + self.unchanged + self.skipped + self.failed
    }
}

impl fmt::Display for RenameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} renamed, {} unchanged, {} skipped, {} failed",
            self.renamed, self.unchanged, self.skipped, self.failed
        )
    }
}

/// `true` when `a` and `b` name the same file on disk, as on a
/// case-insensitive filesystem where the target differs only by case.
#[cfg(unix)]
fn is_same_file(a: &Path, b: &Path) -> io::Result<bool> {
    use std::os::unix::fs::MetadataExt;

    let (a, b) = (fs::metadata(a)?, fs::metadata(b)?);
    Ok(a.dev() == b.dev() && a.ino() == b.ino())
}

#[cfg(not(unix))]
fn is_same_file(a: &Path, b: &Path) -> io::Result<bool> {
    Ok(fs::canonicalize(a)? == fs::canonicalize(b)?)
}

/// Renames files to their normalized names.
pub struct Renamer<'a> {
    normalizer: &'a TitleNormalizer,
    dry_run: bool,
}

impl<'a> Renamer<'a> {
    pub fn new(normalizer: &'a TitleNormalizer) -> Self {
        Self {
            normalizer,
            dry_run: false,
        }
    }

    /// Report what would happen without touching the filesystem.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Target path for `path`: same directory, normalized file name.
    ///
    /// Paths without a file name are reported as not found. Names that are
    /// not valid UTF-8 are refused rather than renamed to a lossy copy.
    pub fn target_for(&self, path: &Path) -> Result<PathBuf, RenameError> {
        let Some(name) = path.file_name() else {
            return Err(RenameError::NotFound {
                path: path.to_path_buf(),
            });
        };
        let Some(name) = name.to_str() else {
            return Err(RenameError::Io {
                path: path.to_path_buf(),
                source: io::Error::new(
                    io::ErrorKind::InvalidData,
                    "file name is not valid UTF-8",
                ),
            });
        };

        let normalized = self.normalizer.normalize(name);
        Ok(match path.parent() {
            Some(dir) => dir.join(normalized.as_str()),
            None => PathBuf::from(normalized.as_str()),
        })
    }

    /// Processes one path.
    pub fn rename_one(&self, path: &Path) -> RenameOutcome {
        let target = match self.target_for(path) {
            Ok(target) => target,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "cannot derive target name");
                return RenameOutcome::Failed(err);
            }
        };

        if target == path {
            debug!(path = %path.display(), "already normalized");
            return RenameOutcome::Unchanged {
                path: path.to_path_buf(),
            };
        }

        if target.exists() && !is_same_file(path, &target).unwrap_or(false) {
            warn!(from = %path.display(), to = %target.display(), "target exists");
            return RenameOutcome::Failed(RenameError::TargetExists { target });
        }

        if !path.exists() {
            warn!(path = %path.display(), "file not found");
            return RenameOutcome::Failed(RenameError::NotFound {
                path: path.to_path_buf(),
            });
        }

        if self.dry_run {
            return RenameOutcome::Planned {
                from: path.to_path_buf(),
                to: target,
            };
        }

        match fs::rename(path, &target) {
            Ok(()) => {
                info!(from = %path.display(), to = %target.display(), "renamed");
                RenameOutcome::Renamed {
                    from: path.to_path_buf(),
                    to: target,
                }
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "file vanished before rename");
                RenameOutcome::Failed(RenameError::NotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(source) => {
                warn!(path = %path.display(), error = %source, "rename failed");
                RenameOutcome::Failed(RenameError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    /// Processes `paths` in order, handing each outcome to `on_outcome`.
    pub fn run<F>(&self, paths: &[PathBuf], mut on_outcome: F) -> RenameReport
    where
        F: FnMut(&RenameOutcome),
    {
        let mut report = RenameReport::default();
        for path in paths {
            let outcome = self.rename_one(path);
            report.record(&outcome);
            on_outcome(&outcome);
        }
        report
    }
}
