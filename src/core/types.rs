// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Difficulty weight of a single symbol.
pub type Weight = u32;

/// Difficulty score of a whole form: the sum of its symbol weights.
pub type Score = u64;

/// An atomic phonetic unit. Digraphs and diphthongs such as "tʃ" or "aɪ"
/// are one symbol, not two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub text: String,
    pub weight: Weight,
}

/// A candidate word-form: one symbol per template slot, in template order.
///
/// The symbol sequence is kept so that scoring never has to re-parse the
/// flattened text. Identity is the concatenated text.
#[derive(Debug, Clone)]
pub struct Form {
    symbols: Vec<String>,
}

impl Form {
    pub fn new(symbols: Vec<String>) -> Self {
        Self { symbols }
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn text(&self) -> String {
        self.symbols.concat()
    }
}

impl PartialEq for Form {
    fn eq(&self, other: &Self) -> bool {
        self.text() == other.text()
    }
}

impl Eq for Form {}

impl Hash for Form {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text().hash(state);
    }
}

/// A form together with its difficulty score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredForm {
    pub text: String,
    pub score: Score,
    /// The symbols that spell `text`, kept for display and score breakdowns.
    pub symbols: Vec<String>,
}
