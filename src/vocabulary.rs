// File: src/vocabulary.rs
use crate::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads a frequency list: one word per line, most frequent first.
///
/// Lines are trimmed and lowercased; blank lines are skipped. Order is kept
/// as-is, the list is trusted to already be sorted by frequency.
pub fn load_from_reader<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_lowercase());
        }
    }
    Ok(words)
}

pub fn load_from_path(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let words = load_from_reader(BufReader::new(file))?;
    tracing::debug!(path = %path.display(), words = words.len(), "loaded vocabulary");
    Ok(words)
}
