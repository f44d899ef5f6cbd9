use serde::{Deserialize, Serialize};

use super::loader::WordTable;

/// Aggregate statistics over a loaded word table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusReport {
    pub distinct_words: usize,
    /// Sum of all frequencies: the corpus word count, repeats included.
    pub total_occurrences: u64,
    /// Words occurring exactly once.
    pub hapax_count: usize,
    /// Words occurring more than once.
    pub repeated_count: usize,
    pub first_word: Option<String>,
    pub last_word: Option<String>,
}

impl CorpusReport {
    pub fn from_table(table: &WordTable) -> Self {
        let mut total_occurrences = 0u64;
        let mut hapax_count = 0;
        let mut repeated_count = 0;

        for word in table.all_keys() {
            let count = table.get(&word).copied().unwrap_or(0);
            total_occurrences += count;
            if count == 1 {
                hapax_count += 1;
            } else if count > 1 {
                repeated_count += 1;
            }
        }

        CorpusReport {
            distinct_words: table.len(),
            total_occurrences,
            hapax_count,
            repeated_count,
            first_word: table.min().ok().cloned(),
            last_word: table.max().ok().cloned(),
        }
    }
}

/// Words starting with `prefix`, ascending, with their frequencies.
///
/// Starts the walk at `rank(prefix)` — the first key not below the prefix —
/// and stops at the first key that no longer matches, so only the matching
/// run of the table is visited.
pub fn words_with_prefix(table: &WordTable, prefix: &str) -> Vec<(String, u64)> {
    let mut matches = Vec::new();
    let mut i = table.rank(&prefix.to_string());
    while let Ok(word) = table.select(i) {
        if !word.starts_with(prefix) {
            break;
        }
        let count = table.get(word).copied().unwrap_or(0);
        matches.push((word.clone(), count));
        i += 1;
    }
    matches
}

/// Words containing `needle` as a substring, ascending, with frequencies.
/// Full scan; substring membership has no order structure to exploit.
pub fn words_containing(table: &WordTable, needle: &str) -> Vec<(String, u64)> {
    let mut matches = Vec::new();
    for word in table.all_keys() {
        if word.contains(needle) {
            let count = table.get(&word).copied().unwrap_or(0);
            matches.push((word, count));
        }
    }
    matches
}
