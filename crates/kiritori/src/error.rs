use std::path::PathBuf;

use thiserror::Error;

/// Per-item failures of the rename driver.
///
/// None of these stop a batch; they are reported and the driver moves on.
#[derive(Debug, Error)]
pub enum RenameError {
    /// The source path does not exist.
    #[error("File not found: {}. Skipping.", path.display())]
    NotFound { path: PathBuf },

    /// A different file already occupies the target name.
    #[error("Target exists, skipping to avoid overwrite: {}", target.display())]
    TargetExists { target: PathBuf },

    /// Any other filesystem failure.
    #[error("Error processing {}: {source}. Skipping.", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RenameError {
    /// `true` for the expected skip cases, `false` for unexpected I/O errors.
    #[must_use]
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::TargetExists { .. })
    }
}
