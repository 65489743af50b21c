pub mod episode;
pub mod name;
pub mod result;

pub use episode::{EpisodeMarker, MatchRule};
pub use name::RawName;
pub use result::{NameForm, NormalizedName, ParseResult};
