pub mod fingerprint;

pub use fingerprint::CorpusFingerprint;
