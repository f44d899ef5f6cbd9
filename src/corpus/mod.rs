pub mod loader;
pub mod normalize;
pub mod report;

pub use loader::{load_path, load_reader, LoadError, LoadSummary, WordTable};
pub use normalize::normalize_word;
pub use report::{words_containing, words_with_prefix, CorpusReport};
