// src/core/translator.rs
use crate::assigner::LexiconMapping;

/// Word-by-word substitution over a lexicon mapping.
///
/// Tokens are split on whitespace and lowercased before lookup. Unmapped
/// tokens pass through lowercased; punctuation stays attached to its token
/// and original spacing is collapsed to single spaces.
pub struct Translator<'a> {
    mapping: &'a LexiconMapping,
}

impl<'a> Translator<'a> {
    pub fn new(mapping: &'a LexiconMapping) -> Self {
        Self { mapping }
    }

    /// Source language to constructed language.
    pub fn translate(&self, text: &str) -> String {
        substitute(text, |token| self.mapping.get(token))
    }

    /// Constructed language back to the source words.
    pub fn translate_back(&self, text: &str) -> String {
        substitute(text, |token| self.mapping.source_of(token))
    }
}

fn substitute<'m>(text: &str, lookup: impl Fn(&str) -> Option<&'m str>) -> String {
    text.split_whitespace()
        .map(|token| {
            let token = token.to_lowercase();
            match lookup(token.as_str()) {
                Some(mapped) => mapped.to_string(),
                None => token,
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
