use regex::Regex;

use crate::error::Result;
use crate::parser::tokens::TokenStripper;

/// Characters rejected by at least one common filesystem.
const RESERVED_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Turns a raw title segment into a filesystem-safe show title.
#[derive(Debug, Clone)]
pub struct TitleCleaner {
    re_brackets: Regex,
    re_season: Regex,
    tokens: TokenStripper,
}

impl TitleCleaner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_brackets: Regex::new(r"[\[(][^\])]*[\])]")?,
            re_season: Regex::new(r"\b[Ss]eason\s*[0-9]+\b")?,
            tokens: TokenStripper::new()?,
        })
    }

    /// Cleans `segment`. Returns an empty string when nothing survives.
    pub fn clean(&self, segment: &str) -> String {
        let work = self.re_brackets.replace_all(segment, "");
        let work = self.re_season.replace_all(&work, "");
        let work = self.tokens.strip(&work);

        let collapsed = work.split_whitespace().collect::<Vec<_>>().join(" ");
        let trimmed = collapsed.trim_matches(|c: char| matches!(c, ' ' | '-' | '_' | '.'));

        sanitize(trimmed)
    }
}

/// Drops reserved characters and any trailing dots or spaces.
pub fn sanitize(title: &str) -> String {
    title
        .chars()
        .filter(|c| !RESERVED_CHARS.contains(c))
        .collect::<String>()
        .trim_end_matches([' ', '.'])
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleaner() -> TitleCleaner {
        TitleCleaner::new().unwrap()
    }

    #[test]
    fn strips_brackets_anywhere() {
        let c = cleaner();
        assert_eq!(c.clean("Show [Batch] (Dub) Name -"), "Show Name");
    }

    #[test]
    fn strips_season_token() {
        let c = cleaner();
        assert_eq!(c.clean("Show season 04 "), "Show");
    }

    #[test]
    fn strips_release_tokens_whole_word() {
        let c = cleaner();
        assert_eq!(c.clean("Maxwell MAX 1080p"), "Maxwell");
        assert_eq!(c.clean("Proper Noun PROPER"), "Noun");
    }

    #[test]
    fn trims_separator_punctuation() {
        let c = cleaner();
        assert_eq!(c.clean(" _-. Show  Name -_. "), "Show Name");
    }

    #[test]
    fn removes_reserved_characters() {
        let c = cleaner();
        assert_eq!(c.clean("What? If: <Part> \"One\"|Two*"), "What If Part OneTwo");
    }

    #[test]
    fn sanitize_strips_trailing_dots_and_spaces() {
        assert_eq!(sanitize("Show ?"), "Show");
        assert_eq!(sanitize("Mr. Robot."), "Mr. Robot");
        assert_eq!(sanitize("a/b\\c"), "abc");
    }

    #[test]
    fn everything_removed_gives_empty() {
        let c = cleaner();
        assert_eq!(c.clean("[Group] 1080p x265 -"), "");
        assert_eq!(c.clean(""), "");
    }
}
