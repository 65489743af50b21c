//! # Season/Episode Marker Cascade
//!
//! An ordered list of matcher strategies. Each strategy inspects the
//! separator-normalized base string and either returns a structured match
//! or declines. [`Cascade::detect`] runs them in priority order and keeps
//! the first success.

use regex::{Captures, Regex};

use crate::error::Result;
use crate::types::{EpisodeMarker, MatchRule};

/// A successful marker match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerMatch {
    pub rule: MatchRule,
    pub marker: EpisodeMarker,
    /// Byte offset in the base string where the title segment ends.
    pub title_end: usize,
}

/// One step of the cascade.
pub trait MarkerMatcher: Send + Sync {
    /// Rule reported when this matcher succeeds.
    fn rule(&self) -> MatchRule;

    /// Attempts a match against the normalized base string.
    fn find(&self, base: &str) -> Option<MarkerMatch>;
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

/// `S02E05`, `s2.e5`, `S02 - E05`.
pub struct SeasonEpisodeMatcher {
    re: Regex,
}

impl SeasonEpisodeMatcher {
    pub fn new() -> Result<Self> {
        Ok(Self {
            re: Regex::new(r"(?i)s([0-9]{1,2})\s*[ ._-]*e([0-9]{1,3})")?,
        })
    }
}

impl MarkerMatcher for SeasonEpisodeMatcher {
    fn rule(&self) -> MatchRule {
        MatchRule::SeasonEpisode
    }

    fn find(&self, base: &str) -> Option<MarkerMatch> {
        let caps = self.re.captures(base)?;
        Some(MarkerMatch {
            rule: self.rule(),
            marker: EpisodeMarker::new(number(&caps, 1)?, number(&caps, 2)?),
            title_end: caps.get(0)?.start(),
        })
    }
}

/// `2x05`.
pub struct CrossMatcher {
    re: Regex,
}

impl CrossMatcher {
    pub fn new() -> Result<Self> {
        Ok(Self {
            re: Regex::new(r"([0-9]{1,2})[xX]([0-9]{1,3})")?,
        })
    }
}

impl MarkerMatcher for CrossMatcher {
    fn rule(&self) -> MatchRule {
        MatchRule::CrossFormat
    }

    fn find(&self, base: &str) -> Option<MarkerMatch> {
        let caps = self.re.captures(base)?;
        Some(MarkerMatch {
            rule: self.rule(),
            marker: EpisodeMarker::new(number(&caps, 1)?, number(&caps, 2)?),
            title_end: caps.get(0)?.start(),
        })
    }
}

/// Patterns shared by the three "Season N" / trailing-dash rules.
#[derive(Clone)]
struct SeasonPatterns {
    season: Regex,
    trailing_dash: Regex,
}

impl SeasonPatterns {
    fn new() -> Result<Self> {
        Ok(Self {
            season: Regex::new(r"[Ss]eason\s*([0-9]{1,2})")?,
            trailing_dash: Regex::new(r"-\s*([0-9]{1,3})\s*$")?,
        })
    }

    /// `(season, start of the "Season" token, end of the token)`.
    fn season(&self, base: &str) -> Option<(u32, usize, usize)> {
        let caps = self.season.captures(base)?;
        let whole = caps.get(0)?;
        Some((number(&caps, 1)?, whole.start(), whole.end()))
    }

    /// `(episode, start of the dash)`.
    fn trailing_dash(&self, base: &str) -> Option<(u32, usize)> {
        let caps = self.trailing_dash.captures(base)?;
        Some((number(&caps, 1)?, caps.get(0)?.start()))
    }
}

/// `Show Season 3 - 07`: season token plus a dash number ending the string.
pub struct SeasonTrailingDashMatcher {
    patterns: SeasonPatterns,
}

impl MarkerMatcher for SeasonTrailingDashMatcher {
    fn rule(&self) -> MatchRule {
        MatchRule::SeasonTrailingDash
    }

    fn find(&self, base: &str) -> Option<MarkerMatch> {
        let (season, season_start, _) = self.patterns.season(base)?;
        let (episode, _) = self.patterns.trailing_dash(base)?;
        Some(MarkerMatch {
            rule: self.rule(),
            marker: EpisodeMarker::new(season, episode),
            title_end: season_start,
        })
    }
}

/// `Show Season 2 Episode 5`: season token plus the first standalone
/// number of one to three digits outside that token.
///
/// A standalone number is not adjacent to other digits, so `2020` is
/// never read as episode `020`. Titles that contain their own number
/// ahead of the season token (`24 Season 2 Ep 3`) pick up the title's
/// number; that ambiguity is inherent to this rule.
pub struct SeasonLooseNumberMatcher {
    patterns: SeasonPatterns,
    episode: Regex,
}

impl SeasonLooseNumberMatcher {
    fn loose_episode(&self, base: &str, skip: (usize, usize)) -> Option<u32> {
        let bytes = base.as_bytes();
        self.episode
            .captures_iter(base)
            .filter_map(|caps| caps.get(1))
            .find(|m| {
                let inside_season = m.start() >= skip.0 && m.end() <= skip.1;
                let digit_before = m.start() > 0 && bytes[m.start() - 1].is_ascii_digit();
                let digit_after = bytes.get(m.end()).is_some_and(u8::is_ascii_digit);
                !inside_season && !digit_before && !digit_after
            })
            .and_then(|m| m.as_str().parse().ok())
    }
}

impl MarkerMatcher for SeasonLooseNumberMatcher {
    fn rule(&self) -> MatchRule {
        MatchRule::SeasonLooseNumber
    }

    fn find(&self, base: &str) -> Option<MarkerMatch> {
        let (season, season_start, season_end) = self.patterns.season(base)?;
        let episode = self.loose_episode(base, (season_start, season_end))?;
        Some(MarkerMatch {
            rule: self.rule(),
            marker: EpisodeMarker::new(season, episode),
            title_end: season_start,
        })
    }
}

/// `Show - 07` with no season token; season defaults to 1.
pub struct TrailingDashMatcher {
    patterns: SeasonPatterns,
}

impl MarkerMatcher for TrailingDashMatcher {
    fn rule(&self) -> MatchRule {
        MatchRule::TrailingDash
    }

    fn find(&self, base: &str) -> Option<MarkerMatch> {
        if self.patterns.season(base).is_some() {
            return None;
        }
        let (episode, dash_start) = self.patterns.trailing_dash(base)?;
        Some(MarkerMatch {
            rule: self.rule(),
            marker: EpisodeMarker::new(1, episode),
            title_end: dash_start,
        })
    }
}

/// The ordered matcher list.
pub struct Cascade {
    matchers: Vec<Box<dyn MarkerMatcher>>,
}

impl Cascade {
    /// Builds the standard cascade:
    /// `S##E##`, `##x##`, season + trailing dash, season + loose number,
    /// trailing dash.
    pub fn new() -> Result<Self> {
        let patterns = SeasonPatterns::new()?;
        let matchers: Vec<Box<dyn MarkerMatcher>> = vec![
            Box::new(SeasonEpisodeMatcher::new()?),
            Box::new(CrossMatcher::new()?),
            Box::new(SeasonTrailingDashMatcher {
                patterns: patterns.clone(),
            }),
            Box::new(SeasonLooseNumberMatcher {
                patterns: patterns.clone(),
                episode: Regex::new(r"(?:-|(?i:ep(?:isode)?)\s*)?([0-9]{1,3})")?,
            }),
            Box::new(TrailingDashMatcher { patterns }),
        ];
        Ok(Self { matchers })
    }

    /// Builds a cascade from an explicit matcher list, tried in order.
    pub fn from_matchers(matchers: Vec<Box<dyn MarkerMatcher>>) -> Self {
        Self { matchers }
    }

    /// Runs the matchers in order and returns the first match.
    pub fn detect(&self, base: &str) -> Option<MarkerMatch> {
        self.matchers.iter().find_map(|m| m.find(base))
    }
}
