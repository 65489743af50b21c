use std::fmt;

use serde::{Deserialize, Serialize};

/// A season/episode pair detected in a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EpisodeMarker {
    /// Season number.
    pub season: u32,
    /// Episode number within the season.
    pub episode: u32,
}

impl EpisodeMarker {
    #[must_use]
    pub fn new(season: u32, episode: u32) -> Self {
        Self { season, episode }
    }
}

/// Renders as `S##E##`, zero-padded to two digits and never truncated.
impl fmt::Display for EpisodeMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{:02}E{:02}", self.season, self.episode)
    }
}

/// Which step of the marker cascade produced the numbering.
///
/// Variants are listed in precedence order; the first rule that matches wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// `S02E05`, `s2 e5`, `S02.E05`
    SeasonEpisode,
    /// `2x05`
    CrossFormat,
    /// `Season 3 ... - 07` with the dash number at the very end.
    SeasonTrailingDash,
    /// `Season 3` plus a loose episode number elsewhere.
    SeasonLooseNumber,
    /// `Title - 07` with no season token; season defaults to 1.
    TrailingDash,
    /// Nothing matched.
    Unmatched,
}

impl MatchRule {
    /// Returns `true` for every rule except [`MatchRule::Unmatched`].
    #[must_use]
    pub fn is_match(self) -> bool {
        self != Self::Unmatched
    }
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SeasonEpisode => write!(f, "season-episode"),
            Self::CrossFormat => write!(f, "cross"),
            Self::SeasonTrailingDash => write!(f, "season+dash"),
            Self::SeasonLooseNumber => write!(f, "season+number"),
            Self::TrailingDash => write!(f, "dash"),
            Self::Unmatched => write!(f, "none"),
        }
    }
}
