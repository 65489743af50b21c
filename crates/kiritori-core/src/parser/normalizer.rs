use regex::Regex;
use tracing::debug;

use crate::error::Result;
use crate::parser::matchers::Cascade;
use crate::parser::title::TitleCleaner;
use crate::types::{MatchRule, NormalizedName, ParseResult, RawName};

/// Heuristic filename normalizer.
///
/// Rewrites scene-style episode filenames into `"Show Title - S##E##.ext"`.
/// All patterns are compiled once in [`TitleNormalizer::new`]; after that
/// the normalizer holds no mutable state and can be shared across threads.
pub struct TitleNormalizer {
    re_leading_tags: Regex,
    re_separators: Regex,
    cascade: Cascade,
    cleaner: TitleCleaner,
}

impl TitleNormalizer {
    /// Constructs a new `TitleNormalizer` with pre-compiled regex patterns.
    ///
    /// # Errors
    ///
    /// Returns `KiritoriError::RegexError` if any pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_leading_tags: Regex::new(r"^(?:\s*[\[(][^\])]*[\])]\s*)+")?,
            re_separators: Regex::new(r"[._]+")?,
            cascade: Cascade::new()?,
            cleaner: TitleCleaner::new()?,
        })
    }

    /// Constructs a normalizer around a custom marker cascade.
    pub fn with_cascade(cascade: Cascade) -> Result<Self> {
        Ok(Self {
            cascade,
            ..Self::new()?
        })
    }

    /// Parses a single filename (no directory components).
    ///
    /// Never fails: inputs without recognizable numbering produce a result
    /// with [`MatchRule::Unmatched`].
    pub fn parse(&self, filename: &str) -> ParseResult {
        let raw = RawName::split(filename);

        // Leading release-group tags go first so they never reach the title
        let stem = self.re_leading_tags.replace(&raw.stem, "");
        let base = self.re_separators.replace_all(&stem, " ").into_owned();

        let detected = self.cascade.detect(&base);
        let (rule, marker, title_part) = match detected {
            Some(m) => (m.rule, Some(m.marker), base[..m.title_end].trim().to_string()),
            None => (MatchRule::Unmatched, None, base.clone()),
        };

        let cleaned = self.cleaner.clean(&title_part);
        let title = (!cleaned.is_empty()).then_some(cleaned);

        debug!(input = filename, %rule, ?marker, ?title, "parsed filename");

        ParseResult {
            input: filename.to_string(),
            extension: raw.extension,
            base,
            rule,
            marker,
            title_part,
            title,
        }
    }

    /// Produces the normalized filename for `filename`.
    pub fn normalize(&self, filename: &str) -> NormalizedName {
        self.parse(filename).to_normalized()
    }
}
