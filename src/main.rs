//! Interactive console over a word-frequency table.
//!
//! Usage: `lexicon-core <corpus-file> [capacity]`
//!
//! Loads the corpus up front, then presents a numbered menu covering every
//! table operation plus the report and search helpers. All parsing and
//! rendering lives here; the library does no I/O.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use lexicon_core::corpus::{
    load_path, words_containing, words_with_prefix, CorpusReport, WordTable,
};
use lexicon_core::table::OrderedMap;

const DEFAULT_CAPACITY: usize = 100_000;

/// Session state passed to every command handler.
struct App {
    table: WordTable,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let Some(corpus_path) = args.get(1) else {
        eprintln!("usage: lexicon-core <corpus-file> [capacity]");
        return ExitCode::FAILURE;
    };
    let capacity = match args.get(2) {
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("capacity must be a non-negative integer, got {raw:?}");
                return ExitCode::FAILURE;
            }
        },
        None => DEFAULT_CAPACITY,
    };

    let mut app = App {
        table: OrderedMap::with_capacity(capacity),
    };

    println!("=== lexicon ===");
    println!("Loading corpus {corpus_path}...");
    match load_path(Path::new(corpus_path), &mut app.table) {
        Ok(summary) => {
            println!(
                "Loaded {} tokens ({} distinct words, {} skipped) from {}",
                summary.total_tokens, summary.distinct_words, summary.skipped_tokens, summary.source
            );
            println!("Fingerprint: {}", summary.fingerprint.as_str());
        }
        Err(e) => {
            // Partial progress survives in the table; keep the session going.
            eprintln!("Load failed: {e}");
            eprintln!("Continuing with {} words loaded so far", app.table.len());
        }
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print_menu();
        let Some(choice) = read_line(&mut lines) else {
            break;
        };
        match choice.trim() {
            "1" => cmd_get(&app, &mut lines),
            "2" => cmd_put(&mut app, &mut lines),
            "3" => cmd_delete(&mut app, &mut lines),
            "4" => cmd_contains(&app, &mut lines),
            "5" => println!("is_empty = {}", app.table.is_empty()),
            "6" => println!("size = {} distinct words", app.table.len()),
            "7" => cmd_min(&app),
            "8" => cmd_max(&app),
            "9" => cmd_delete_min(&mut app),
            "10" => cmd_delete_max(&mut app),
            "11" => cmd_select(&app, &mut lines),
            "12" => cmd_rank(&app, &mut lines),
            "13" => cmd_floor(&app, &mut lines),
            "14" => cmd_ceiling(&app, &mut lines),
            "15" => cmd_all_keys(&app),
            "16" => cmd_keys_range(&app, &mut lines),
            "17" => cmd_report(&app),
            "18" => cmd_substring(&app, &mut lines),
            "19" => cmd_prefix(&app, &mut lines),
            "20" => {
                println!("Bye!");
                break;
            }
            other => println!("Unknown option {other:?}"),
        }
    }

    ExitCode::SUCCESS
}

fn print_menu() {
    println!();
    println!("=== MENU ===");
    println!(" 1. get        - frequency of a word");
    println!(" 2. put        - add or overwrite a word count");
    println!(" 3. delete     - remove a word");
    println!(" 4. contains   - membership test");
    println!(" 5. is_empty   - is the table empty");
    println!(" 6. size       - number of distinct words");
    println!(" 7. min        - first word alphabetically");
    println!(" 8. max        - last word alphabetically");
    println!(" 9. delete_min - remove the first word");
    println!("10. delete_max - remove the last word");
    println!("11. select     - word at an ordinal position");
    println!("12. rank       - position of a word");
    println!("13. floor      - largest word <= a given one");
    println!("14. ceiling    - smallest word >= a given one");
    println!("15. keys       - list every word");
    println!("16. keys range - list words in [lo, hi]");
    println!("17. report     - corpus statistics");
    println!("18. substring  - words containing a fragment");
    println!("19. prefix     - words starting with a prefix");
    println!("20. quit");
    print!("Option: ");
    let _ = io::stdout().flush();
}

type Lines<'a> = io::Lines<io::StdinLock<'a>>;

fn read_line(lines: &mut Lines) -> Option<String> {
    match lines.next()? {
        Ok(line) => Some(line),
        Err(_) => None,
    }
}

fn prompt_word(lines: &mut Lines, label: &str) -> Option<String> {
    print!("{label}: ");
    let _ = io::stdout().flush();
    read_line(lines).map(|l| l.trim().to_lowercase())
}

fn cmd_get(app: &App, lines: &mut Lines) {
    let Some(word) = prompt_word(lines, "Word") else {
        return;
    };
    match app.table.get(&word) {
        Some(count) => println!("get({word:?}) = {count} occurrences"),
        None => println!("get({word:?}) = absent"),
    }
}

fn cmd_put(app: &mut App, lines: &mut Lines) {
    let Some(word) = prompt_word(lines, "Word") else {
        return;
    };
    let Some(raw) = prompt_word(lines, "Count") else {
        return;
    };
    let Ok(count) = raw.parse::<u64>() else {
        println!("Count must be a non-negative integer");
        return;
    };
    match app.table.put(word.clone(), count) {
        Ok(()) => println!("put({word:?}, {count}) ok"),
        Err(e) => println!("put({word:?}, {count}) failed: {e}"),
    }
}

fn cmd_delete(app: &mut App, lines: &mut Lines) {
    let Some(word) = prompt_word(lines, "Word") else {
        return;
    };
    match app.table.delete(&word) {
        Some(count) => println!("Removed {word:?} (had {count} occurrences)"),
        None => println!("{word:?} was not in the table"),
    }
}

fn cmd_contains(app: &App, lines: &mut Lines) {
    let Some(word) = prompt_word(lines, "Word") else {
        return;
    };
    println!("contains({word:?}) = {}", app.table.contains(&word));
}

fn cmd_min(app: &App) {
    match app.table.min() {
        Ok(word) => {
            let count = app.table.get(word).copied().unwrap_or(0);
            println!("min = {word:?} ({count} occurrences)");
        }
        Err(e) => println!("min: {e}"),
    }
}

fn cmd_max(app: &App) {
    match app.table.max() {
        Ok(word) => {
            let count = app.table.get(word).copied().unwrap_or(0);
            println!("max = {word:?} ({count} occurrences)");
        }
        Err(e) => println!("max: {e}"),
    }
}

fn cmd_delete_min(app: &mut App) {
    match app.table.delete_min() {
        Ok(word) => {
            println!("delete_min removed {word:?}");
            match app.table.min() {
                Ok(next) => println!("New first word: {next:?}"),
                Err(_) => println!("Table is now empty"),
            }
        }
        Err(e) => println!("delete_min: {e}"),
    }
}

fn cmd_delete_max(app: &mut App) {
    match app.table.delete_max() {
        Ok(word) => {
            println!("delete_max removed {word:?}");
            match app.table.max() {
                Ok(next) => println!("New last word: {next:?}"),
                Err(_) => println!("Table is now empty"),
            }
        }
        Err(e) => println!("delete_max: {e}"),
    }
}

fn cmd_select(app: &App, lines: &mut Lines) {
    if app.table.is_empty() {
        println!("select unavailable: table is empty");
        return;
    }
    let label = format!("Position (0 to {})", app.table.len() - 1);
    let Some(raw) = prompt_word(lines, &label) else {
        return;
    };
    let Ok(k) = raw.parse::<usize>() else {
        println!("Position must be a non-negative integer");
        return;
    };
    match app.table.select(k) {
        Ok(word) => {
            let count = app.table.get(word).copied().unwrap_or(0);
            println!("select({k}) = {word:?} ({count} occurrences)");
        }
        Err(e) => println!("select({k}): {e}"),
    }
}

fn cmd_rank(app: &App, lines: &mut Lines) {
    let Some(word) = prompt_word(lines, "Word") else {
        return;
    };
    let position = app.table.rank(&word);
    if app.table.contains(&word) {
        println!("rank({word:?}) = {position} (present)");
    } else {
        println!("rank({word:?}) = {position} (absent; would insert there)");
    }
}

fn cmd_floor(app: &App, lines: &mut Lines) {
    let Some(word) = prompt_word(lines, "Reference word") else {
        return;
    };
    match app.table.floor(&word) {
        Some(found) => {
            let count = app.table.get(found).copied().unwrap_or(0);
            println!("floor({word:?}) = {found:?} ({count} occurrences)");
        }
        None => println!("floor({word:?}) = absent (no word is <= it)"),
    }
}

fn cmd_ceiling(app: &App, lines: &mut Lines) {
    let Some(word) = prompt_word(lines, "Reference word") else {
        return;
    };
    match app.table.ceiling(&word) {
        Some(found) => {
            let count = app.table.get(found).copied().unwrap_or(0);
            println!("ceiling({word:?}) = {found:?} ({count} occurrences)");
        }
        None => println!("ceiling({word:?}) = absent (no word is >= it)"),
    }
}

fn cmd_all_keys(app: &App) {
    if app.table.is_empty() {
        println!("keys = [] (table is empty)");
        return;
    }
    let mut shown = 0;
    for word in app.table.all_keys() {
        let count = app.table.get(&word).copied().unwrap_or(0);
        shown += 1;
        println!("{shown}. {word} ({count} occurrences)");
    }
    println!("Total listed: {shown} words");
}

fn cmd_keys_range(app: &App, lines: &mut Lines) {
    let Some(lo) = prompt_word(lines, "From (lo)") else {
        return;
    };
    let Some(hi) = prompt_word(lines, "To (hi)") else {
        return;
    };
    let mut shown = 0;
    for word in app.table.keys(&lo, &hi) {
        let count = app.table.get(&word).copied().unwrap_or(0);
        println!("- {word} ({count} occurrences)");
        shown += 1;
    }
    println!("Total in [{lo:?}, {hi:?}]: {shown} words");
}

fn cmd_report(app: &App) {
    let report = CorpusReport::from_table(&app.table);
    println!("=== CORPUS REPORT ===");
    println!("Distinct words:    {}", report.distinct_words);
    println!("Total occurrences: {}", report.total_occurrences);
    println!("Hapax words:       {}", report.hapax_count);
    println!("Repeated words:    {}", report.repeated_count);
    if let (Some(first), Some(last)) = (&report.first_word, &report.last_word) {
        println!("First word:        {first:?}");
        println!("Last word:         {last:?}");
    }
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("\n{json}"),
        Err(e) => println!("report rendering failed: {e}"),
    }
}

fn cmd_substring(app: &App, lines: &mut Lines) {
    let Some(needle) = prompt_word(lines, "Fragment") else {
        return;
    };
    let matches = words_containing(&app.table, &needle);
    for (word, count) in &matches {
        println!("{word} ({count} occurrences)");
    }
    println!("Total containing {needle:?}: {} words", matches.len());
}

fn cmd_prefix(app: &App, lines: &mut Lines) {
    let Some(prefix) = prompt_word(lines, "Prefix") else {
        return;
    };
    let matches = words_with_prefix(&app.table, &prefix);
    for (word, count) in &matches {
        println!("{word} ({count} occurrences)");
    }
    println!("Total starting with {prefix:?}: {} words", matches.len());
}
