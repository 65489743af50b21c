pub mod matchers;
pub mod normalizer;
pub mod title;
pub mod tokens;

pub use matchers::{Cascade, MarkerMatch, MarkerMatcher};
pub use normalizer::TitleNormalizer;
pub use title::{TitleCleaner, sanitize};
pub use tokens::{RELEASE_TOKENS, ReleaseToken, TokenKind, TokenStripper};
