use thiserror::Error;

/// Errors that can occur while building the Kiritori normalizer.
///
/// Normalizing a filename never fails; the only failure point is compiling
/// the static pattern set when a [`TitleNormalizer`](crate::TitleNormalizer)
/// is constructed.
#[derive(Debug, Error)]
pub enum KiritoriError {
    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),
}

/// Result type alias for Kiritori operations.
pub type Result<T> = std::result::Result<T, KiritoriError>;
