//! Tag lists handed in from outside a git repository.
//!
//! Pipelines that already hold a tag listing (for example the output of a
//! hosting API call, or `git tag --list` from another checkout) pass it as a
//! newline-separated file or on stdin.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use crate::error::Result;

/// Argument value that means "read from stdin"
pub const STDIN_MARKER: &str = "-";

/// Reads newline-separated tag names.
///
/// Surrounding whitespace (including `\r`) is trimmed and blank lines are
/// skipped. Lines are otherwise passed through unchanged, so anything that is
/// not a version tag is left for the resolver to discard.
pub fn read_tag_list<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut tags = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let tag = line.trim();
        if !tag.is_empty() {
            tags.push(tag.to_string());
        }
    }
    Ok(tags)
}

/// Reads a tag list from a file path, or from stdin when the path is `-`.
pub fn read_tag_file(path: &str) -> Result<Vec<String>> {
    if path == STDIN_MARKER {
        let stdin = io::stdin();
        return read_tag_list(stdin.lock());
    }

    let file = File::open(path)?;
    read_tag_list(BufReader::new(file))
}
