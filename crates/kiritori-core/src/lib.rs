//! # Kiritori Core
//!
//! Heuristic normalizer for TV episode filenames. Turns scene-style release
//! names into the canonical `"Show Title - S##E##.ext"` form.
//!
//! ## Quick Start
//!
//! ```rust
//! use kiritori_core::TitleNormalizer;
//!
//! let normalizer = TitleNormalizer::new().unwrap();
//! let name = normalizer.normalize("The.Show.Name.S02E05.1080p.WEB-DL.x264-GROUP.mkv");
//!
//! assert_eq!(name.as_str(), "The Show Name - S02E05.mkv");
//! assert!(name.is_canonical());
//! ```
pub mod error;
pub mod parser;
pub mod types;

// Re-export primary API
pub use error::{KiritoriError, Result};
pub use parser::{Cascade, MarkerMatcher, TitleNormalizer};
pub use types::{EpisodeMarker, MatchRule, NameForm, NormalizedName, ParseResult, RawName};

/// Convenience function to normalize a single filename.
///
/// Compiles a fresh [`TitleNormalizer`]; reuse one instance when
/// normalizing many names.
pub fn normalize(filename: &str) -> Result<String> {
    let normalizer = TitleNormalizer::new()?;
    Ok(normalizer.normalize(filename).into_string())
}
