//! # Kiritori
//!
//! Batch renamer built on [`kiritori_core`]. Reads a list of paths and
//! renames each file to its normalized `"Show Title - S##E##.ext"` name.
pub mod error;
pub mod list;
pub mod preview;
pub mod renamer;

pub use error::RenameError;
pub use list::{load_path_list, parse_path_list};
pub use preview::PreviewOutput;
pub use renamer::{RenameOutcome, RenameReport, Renamer};
