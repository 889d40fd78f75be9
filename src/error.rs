// File: src/error.rs
use thiserror::Error;

/// Everything that can stop a lexicon generation run.
///
/// Configuration problems are fatal and surface before any form is produced.
/// Lenient cases (unknown symbol weights, unmapped words) are not errors.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// A rule names a category the phonology model does not define.
    #[error("rule {rule} references undefined category '{category}'")]
    UnknownCategory { rule: usize, category: String },

    /// A rule with no slots would only ever produce the empty form.
    #[error("rule {rule} has no slots")]
    EmptyRule { rule: usize },

    #[error("category '{0}' is defined more than once")]
    DuplicateCategory(String),

    /// Symbols partition the inventory, so each may appear in one category only.
    #[error("symbol '{symbol}' appears in both '{first}' and '{second}'")]
    DuplicateSymbol {
        symbol: String,
        first: String,
        second: String,
    },

    #[error("category '{0}' contains an empty symbol")]
    EmptySymbol(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid lexicon configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LexiconError>;
