use std::fs;
use std::io::Cursor;
use std::path::Path;

use lexicon_core::corpus::{load_path, load_reader, normalize_word, LoadError, WordTable};
use lexicon_core::table::OrderedMap;
use tempfile::tempdir;

fn fresh_table(capacity: usize) -> WordTable {
    OrderedMap::with_capacity(capacity)
}

#[test]
fn normalization_folds_accents_and_strips_punctuation() {
    assert_eq!(normalize_word("Canción,"), "cancion");
    assert_eq!(normalize_word("¡NIÑO!"), "nino");
    assert_eq!(normalize_word("güero"), "guero");
    assert_eq!(normalize_word("it's"), "its");
    assert_eq!(normalize_word("123"), "");
    assert_eq!(normalize_word("..."), "");
}

#[test]
fn loader_counts_normalized_words() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("corpus.txt");
    fs::write(&path, "El niño vio el Árbol.\nEl árbol... 123\n").unwrap();

    let mut table = fresh_table(100);
    let summary = load_path(&path, &mut table).unwrap();

    assert_eq!(table.get(&"el".to_string()), Some(&3));
    assert_eq!(table.get(&"nino".to_string()), Some(&1));
    assert_eq!(table.get(&"arbol".to_string()), Some(&2));
    assert_eq!(table.get(&"vio".to_string()), Some(&1));

    assert_eq!(summary.total_tokens, 7);
    assert_eq!(summary.skipped_tokens, 1, "the all-digit token is skipped");
    assert_eq!(summary.distinct_words, 4);
    assert_eq!(summary.distinct_words, table.len());
}

#[test]
fn loader_reports_missing_file() {
    let mut table = fresh_table(10);
    let result = load_path(Path::new("/nonexistent/corpus.txt"), &mut table);

    assert!(matches!(result, Err(LoadError::Io(_))));
    assert!(table.is_empty());
}

#[test]
fn loader_keeps_partial_progress_on_capacity_exhaustion() {
    let mut table = fresh_table(2);
    let result = load_reader(Cursor::new("ant bee cat"), "inline", &mut table);

    assert!(matches!(result, Err(LoadError::Table(_))));
    // Everything inserted before the failure survives.
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(&"ant".to_string()), Some(&1));
    assert_eq!(table.get(&"bee".to_string()), Some(&1));
}

#[test]
fn repeats_of_resident_words_do_not_hit_capacity() {
    let mut table = fresh_table(2);
    let summary = load_reader(Cursor::new("ant bee ant bee ant"), "inline", &mut table).unwrap();

    assert_eq!(summary.total_tokens, 5);
    assert_eq!(table.get(&"ant".to_string()), Some(&3));
    assert_eq!(table.get(&"bee".to_string()), Some(&2));
}

#[test]
fn same_content_same_fingerprint() {
    let dir = tempdir().unwrap();
    let path_a = dir.path().join("a.txt");
    let path_b = dir.path().join("b.txt");
    fs::write(&path_a, "word word word\n").unwrap();
    fs::write(&path_b, "word word word\n").unwrap();

    let mut table_a = fresh_table(10);
    let mut table_b = fresh_table(10);
    let summary_a = load_path(&path_a, &mut table_a).unwrap();
    let summary_b = load_path(&path_b, &mut table_b).unwrap();

    assert_eq!(summary_a.fingerprint, summary_b.fingerprint);
    assert!(summary_a.fingerprint.as_str().starts_with("sha256:"));
}

#[test]
fn different_content_different_fingerprint() {
    let mut table_a = fresh_table(10);
    let mut table_b = fresh_table(10);
    let summary_a = load_reader(Cursor::new("alpha"), "a", &mut table_a).unwrap();
    let summary_b = load_reader(Cursor::new("beta"), "b", &mut table_b).unwrap();

    assert_ne!(summary_a.fingerprint, summary_b.fingerprint);
}
