use std::fmt;

use serde::{Deserialize, Serialize};

use super::episode::{EpisodeMarker, MatchRule};

/// Everything the normalizer learned about one filename.
///
/// Produced by [`TitleNormalizer::parse`](crate::TitleNormalizer::parse) and
/// turned into the final name with [`ParseResult::to_normalized`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Original input string.
    pub input: String,

    /// Lowercased extension including the leading dot, or empty.
    pub extension: String,

    /// Stem with leading tag clusters removed and `.`/`_` runs turned into spaces.
    pub base: String,

    /// Cascade rule that produced `marker`.
    pub rule: MatchRule,

    /// Detected season/episode numbering.
    pub marker: Option<EpisodeMarker>,

    /// Portion of `base` preceding the marker, before cleanup.
    pub title_part: String,

    /// Cleaned, filesystem-safe title. `None` when cleanup left nothing.
    pub title: Option<String>,
}

impl ParseResult {
    /// Returns `true` if the result can be rendered in canonical form.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.marker.is_some() && self.title.is_some()
    }

    /// Assembles the output filename.
    ///
    /// Canonical results render as `"{title} - S##E##{ext}"`. Anything else
    /// falls back to the whitespace-collapsed `base` plus extension.
    #[must_use]
    pub fn to_normalized(&self) -> NormalizedName {
        if let (Some(marker), Some(title)) = (self.marker, self.title.as_deref()) {
            return NormalizedName {
                name: format!("{title} - {marker}{}", self.extension),
                form: NameForm::Canonical,
            };
        }

        let fallback = self.base.split_whitespace().collect::<Vec<_>>().join(" ");
        NormalizedName {
            name: format!("{fallback}{}", self.extension),
            form: NameForm::Fallback,
        }
    }
}

impl fmt::Display for ParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParseResult(")?;
        if let Some(ref title) = self.title {
            write!(f, "title={title:?}, ")?;
        }
        if let Some(marker) = self.marker {
            write!(f, "marker={marker}, ")?;
        }
        write!(f, "rule={}", self.rule)?;
        write!(f, ")")
    }
}

/// Shape of a [`NormalizedName`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameForm {
    /// `"Title - S##E##.ext"`
    Canonical,
    /// Lightly cleaned copy of the input.
    Fallback,
}

/// Final output of the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedName {
    name: String,
    form: NameForm,
}

impl NormalizedName {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.name
    }

    #[must_use]
    pub fn form(&self) -> NameForm {
        self.form
    }

    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.form == NameForm::Canonical
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for NormalizedName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}
