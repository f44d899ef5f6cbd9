use std::fs;
use std::io::BufRead;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::table::{OrderedMap, TableError};
use crate::types::CorpusFingerprint;

use super::normalize::normalize_word;

/// The table shape the loader feeds: normalized word → occurrence count.
pub type WordTable = OrderedMap<String, u64>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Corpus must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("Table rejected a word: {0}")]
    Table(#[from] TableError),
}

/// Outcome of one corpus load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadSummary {
    pub source: String,
    pub fingerprint: CorpusFingerprint,
    pub loaded_at: DateTime<Utc>, // informational only
    /// Tokens counted into the table, repeats included.
    pub total_tokens: u64,
    /// Tokens that normalized to the empty string and were skipped.
    pub skipped_tokens: u64,
    pub distinct_words: usize,
}

/// Load a corpus file into `table`, counting word frequencies.
///
/// The whole file is read and UTF-8 validated up front; the fingerprint in
/// the summary is computed over the verified content. Each
/// whitespace-separated token is normalized with [`normalize_word`] and
/// counted via the table's get/put surface.
///
/// On failure, everything inserted before the failing word stays in `table`;
/// the caller decides whether a partially loaded table is usable.
pub fn load_path(path: &Path, table: &mut WordTable) -> Result<LoadSummary, LoadError> {
    let raw = fs::read(path)?;
    let content = String::from_utf8(raw)?;
    let fingerprint = CorpusFingerprint::from_content(content.as_bytes());

    let (total_tokens, skipped_tokens) = tally(content.lines(), table)?;

    Ok(LoadSummary {
        source: path.display().to_string(),
        fingerprint,
        loaded_at: Utc::now(),
        total_tokens,
        skipped_tokens,
        distinct_words: table.len(),
    })
}

/// Load a corpus from any buffered reader. Backs [`load_path`]; the summary's
/// `source` is the caller-supplied label.
pub fn load_reader<R: BufRead>(
    reader: R,
    source: impl Into<String>,
    table: &mut WordTable,
) -> Result<LoadSummary, LoadError> {
    let mut content = String::new();
    for line in reader.lines() {
        content.push_str(&line?);
        content.push('\n');
    }
    let fingerprint = CorpusFingerprint::from_content(content.as_bytes());

    let (total_tokens, skipped_tokens) = tally(content.lines(), table)?;

    Ok(LoadSummary {
        source: source.into(),
        fingerprint,
        loaded_at: Utc::now(),
        total_tokens,
        skipped_tokens,
        distinct_words: table.len(),
    })
}

fn tally<'a>(
    lines: impl Iterator<Item = &'a str>,
    table: &mut WordTable,
) -> Result<(u64, u64), LoadError> {
    let mut total_tokens = 0u64;
    let mut skipped_tokens = 0u64;

    for line in lines {
        for token in line.split_whitespace() {
            let word = normalize_word(token);
            if word.is_empty() {
                skipped_tokens += 1;
                continue;
            }
            // The loader boundary contract: probe, then insert 1 or bump.
            let next = match table.get(&word) {
                Some(&count) => count + 1,
                None => 1,
            };
            table.put(word, next)?;
            total_tokens += 1;
        }
    }

    Ok((total_tokens, skipped_tokens))
}
