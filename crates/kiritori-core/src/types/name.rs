use serde::{Deserialize, Serialize};

/// A filename split into its stem and lowercased extension.
///
/// The extension keeps its leading dot (`".mkv"`). Names without a usable
/// final dot have an empty extension. A dot that only follows leading dots
/// (`".hidden"`, `"..."`) does not start an extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawName {
    /// Everything before the final extension.
    pub stem: String,
    /// Lowercased extension including the leading dot, or empty.
    pub extension: String,
}

impl RawName {
    /// Splits `filename` at its final dot.
    #[must_use]
    pub fn split(filename: &str) -> Self {
        let Some(dot) = filename.rfind('.') else {
            return Self::without_extension(filename);
        };

        if filename[..dot].chars().all(|c| c == '.') {
            return Self::without_extension(filename);
        }

        Self {
            stem: filename[..dot].to_string(),
            extension: filename[dot..].to_lowercase(),
        }
    }

    fn without_extension(filename: &str) -> Self {
        Self {
            stem: filename.to_string(),
            extension: String::new(),
        }
    }
}
