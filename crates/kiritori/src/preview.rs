use std::io::{BufRead, Write};

use kiritori_core::{ParseResult, TitleNormalizer};
use serde::{Deserialize, Serialize};

/// One JSON line of `kiritori preview` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewOutput {
    pub input: String,
    pub output: String,
    pub title: Option<String>,
    pub season: Option<u32>,
    pub episode: Option<u32>,
    pub rule: String,
}

impl From<&ParseResult> for PreviewOutput {
    fn from(r: &ParseResult) -> Self {
        Self {
            input: r.input.clone(),
            output: r.to_normalized().into_string(),
            title: r.title.clone(),
            season: r.marker.map(|m| m.season),
            episode: r.marker.map(|m| m.episode),
            rule: r.rule.to_string(),
        }
    }
}

/// Normalizes every non-blank line of `input`, writing one JSON object per
/// line to `out`. Returns the number of names processed.
pub fn write_preview<R, W>(
    normalizer: &TitleNormalizer,
    input: R,
    mut out: W,
) -> anyhow::Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut count = 0;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let output = PreviewOutput::from(&normalizer.parse(line));
        writeln!(out, "{}", serde_json::to_string(&output)?)?;
        count += 1;
    }
    Ok(count)
}
