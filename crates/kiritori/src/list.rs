//! Path-list loading.
//!
//! One path per line. Surrounding quotes are stripped and blank lines are
//! ignored.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Parses the contents of a path list.
pub fn parse_path_list(contents: &str) -> Vec<PathBuf> {
    contents
        .lines()
        .map(|line| line.trim().trim_matches(['"', '\'']))
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Reads and parses a UTF-8 path list from disk.
pub fn load_path_list(path: &Path) -> io::Result<Vec<PathBuf>> {
    let contents = fs::read_to_string(path)?;
    Ok(parse_path_list(&contents))
}
