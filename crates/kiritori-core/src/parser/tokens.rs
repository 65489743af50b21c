//! # Release Token Vocabulary
//!
//! The fixed set of release-metadata words stripped from titles. Each entry
//! is a regex fragment; the table is joined into one case-insensitive,
//! whole-word alternation. Alternatives are tried left to right at each
//! position, so longer variants must come before their prefixes
//! (`WEB-DL` before `WEB`).

use std::fmt;

use regex::Regex;

use crate::error::Result;

use TokenKind::*;

/// Category of a release token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Resolution,
    BitDepth,
    Source,
    Streaming,
    VideoCodec,
    AudioCodec,
    Hdr,
    Language,
    Qualifier,
    Group,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Resolution => "resolution",
            Self::BitDepth => "bit-depth",
            Self::Source => "source",
            Self::Streaming => "streaming",
            Self::VideoCodec => "video-codec",
            Self::AudioCodec => "audio-codec",
            Self::Hdr => "hdr",
            Self::Language => "language",
            Self::Qualifier => "qualifier",
            Self::Group => "group",
        };
        f.write_str(name)
    }
}

/// One vocabulary entry.
#[derive(Debug, Clone, Copy)]
pub struct ReleaseToken {
    pub kind: TokenKind,
    pub pattern: &'static str,
}

const fn token(kind: TokenKind, pattern: &'static str) -> ReleaseToken {
    ReleaseToken { kind, pattern }
}

/// Release-metadata vocabulary, in match-priority order.
pub const RELEASE_TOKENS: &[ReleaseToken] = &[
    token(Resolution, r"4K"),
    token(Resolution, r"8K"),
    token(Resolution, r"\d{3,4}p"),
    token(BitDepth, r"10bit"),
    token(BitDepth, r"8bit"),
    token(Source, r"WEB(?:Rip|[- ]DL)?"),
    token(Source, r"BRRip"),
    token(Source, r"Blu-?Ray"),
    token(Source, r"BDRip"),
    token(Source, r"HDRip"),
    token(Streaming, r"NF"),
    token(Streaming, r"AMZN"),
    token(Streaming, r"DSNP"),
    token(Streaming, r"HULU"),
    token(Streaming, r"MAX"),
    token(Streaming, r"iTunes"),
    token(VideoCodec, r"x(?:264|265)"),
    token(VideoCodec, r"H[. ]?26[45]"),
    token(VideoCodec, r"HEVC"),
    token(VideoCodec, r"AV1"),
    token(AudioCodec, r"AAC"),
    token(AudioCodec, r"AC3"),
    token(AudioCodec, r"E-?AC-?3"),
    token(AudioCodec, r"DDP(?:\d(?: \d)?)?"),
    token(AudioCodec, r"DTS(?:-HD)?"),
    token(AudioCodec, r"FLAC"),
    token(AudioCodec, r"Atmos"),
    token(Hdr, r"HDR10\+?"),
    token(Hdr, r"DV"),
    token(Hdr, r"DoVi"),
    token(Language, r"Multi"),
    token(Language, r"Dual(?:\s*Audio)?"),
    token(Language, r"Subs?"),
    token(Language, r"VOSTFR"),
    token(Qualifier, r"Repack"),
    token(Qualifier, r"Proper"),
    token(Qualifier, r"Internal"),
    token(Qualifier, r"Extended"),
    token(Qualifier, r"Uncensored"),
    token(Qualifier, r"Unrated"),
    token(Qualifier, r"Remux"),
    token(Group, r"PSA"),
    token(Group, r"Hodl"),
    token(Group, r"Kontrast"),
    token(Source, r"WEB"),
    token(Source, r"Rip"),
    token(VideoCodec, r"XviD"),
    token(Source, r"HDTV"),
    token(Source, r"WEBDL"),
];

/// Builds the whole-word, case-insensitive alternation for `tokens`.
pub fn build_pattern(tokens: &[ReleaseToken]) -> String {
    let alternation = tokens
        .iter()
        .map(|t| t.pattern)
        .collect::<Vec<_>>()
        .join("|");
    format!(r"(?i)\b(?:{alternation})\b")
}

/// Compiled release-token stripper.
#[derive(Debug, Clone)]
pub struct TokenStripper {
    re: Regex,
}

impl TokenStripper {
    /// Compiles [`RELEASE_TOKENS`].
    pub fn new() -> Result<Self> {
        Self::with_tokens(RELEASE_TOKENS)
    }

    /// Compiles a custom vocabulary.
    pub fn with_tokens(tokens: &[ReleaseToken]) -> Result<Self> {
        Ok(Self {
            re: Regex::new(&build_pattern(tokens))?,
        })
    }

    /// Removes every whole-word token occurrence. Surrounding whitespace is left
    /// in place for the caller to collapse.
    pub fn strip(&self, text: &str) -> String {
        self.re.replace_all(text, "").into_owned()
    }
}
