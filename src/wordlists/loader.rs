//! Word pool loading utilities
//!
//! Pools are tab-separated: one `word<TAB>definition` pair per line. Blank
//! lines and lines starting with `#` are ignored.

use super::WordEntry;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load entries from a TSV file
///
/// Returns the valid entries, skipping (and logging) malformed lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_levels::wordlists::loader::load_from_file;
///
/// let entries = load_from_file("data/levels/jhs1.tsv").unwrap();
/// println!("Loaded {} words", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<WordEntry>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let entries = parse_entries(&content);
    tracing::info!(
        path = %path.display(),
        count = entries.len(),
        "Loaded word pool from file"
    );
    Ok(entries)
}

/// Parse TSV content into entries
#[must_use]
pub fn parse_entries(content: &str) -> Vec<WordEntry> {
    content
        .lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            let (word, definition) = trimmed.split_once('\t').unwrap_or((trimmed, ""));
            match Word::new(word) {
                Ok(word) => Some(WordEntry::new(word, definition.trim())),
                Err(e) => {
                    tracing::warn!(line = number + 1, word, "Skipping invalid entry: {e}");
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded `(word, definition)` pairs to entries
///
/// # Examples
/// ```
/// use wordle_levels::wordlists::loader::entries_from_slice;
///
/// let entries = entries_from_slice(&[("apple", "a fruit"), ("toolong", "skipped")]);
/// assert_eq!(entries.len(), 1);
/// ```
#[must_use]
pub fn entries_from_slice(slice: &[(&str, &str)]) -> Vec<WordEntry> {
    slice
        .iter()
        .filter_map(|&(word, definition)| {
            Word::new(word)
                .ok()
                .map(|word| WordEntry::new(word, definition))
        })
        .collect()
}
