// File: src/assigner.rs
use crate::core::ranker::RankedLexicon;
use serde::ser::{Serialize, Serializer};
use std::collections::HashMap;

/// Position-aligned pairing of source words with constructed forms.
///
/// Built once per generation run and read-only afterwards. Keys and values are
/// both unique, so the reverse index is a plain inverse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexiconMapping {
    /// `(source word, form)` in assignment order.
    entries: Vec<(String, String)>,
    forward: HashMap<String, usize>,
    reverse: HashMap<String, usize>,
    unassigned: usize,
}

impl LexiconMapping {
    /// Form assigned to a source word.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.forward.get(word).map(|&idx| self.entries[idx].1.as_str())
    }

    /// Source word a form was assigned to.
    pub fn source_of(&self, form: &str) -> Option<&str> {
        self.reverse.get(form).map(|&idx| self.entries[idx].0.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Vocabulary words left without a form because the lexicon ran out.
    pub fn unassigned(&self) -> usize {
        self.unassigned
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(word, form)| (word.as_str(), form.as_str()))
    }
}

impl Serialize for LexiconMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Pairs the most frequent words with the easiest forms.
pub struct LexiconAssigner;

impl LexiconAssigner {
    pub fn new() -> Self {
        Self
    }

    /// The i-th vocabulary word gets the i-th ranked form. Words beyond the end
    /// of the lexicon stay unmapped.
    ///
    /// A word that repeats keeps its first pairing; the repeat still occupies
    /// its position, so the form at that position goes unused. This differs
    /// on purpose from last-write-wins: the most frequent occurrence keeps the
    /// easiest form.
    #[tracing::instrument(skip_all, fields(vocabulary = vocabulary.len(), forms = lexicon.len()))]
    pub fn assign<S: AsRef<str>>(&self, vocabulary: &[S], lexicon: &RankedLexicon) -> LexiconMapping {
        let mut mapping = LexiconMapping::default();

        for (word, form) in vocabulary.iter().zip(lexicon) {
            let word = word.as_ref();
            if mapping.forward.contains_key(word) {
                tracing::debug!(word, form = %form.text, "repeated vocabulary word skipped");
                continue;
            }
            let idx = mapping.entries.len();
            mapping.forward.insert(word.to_string(), idx);
            mapping.reverse.insert(form.text.clone(), idx);
            mapping.entries.push((word.to_string(), form.text.clone()));
        }

        mapping.unassigned = vocabulary.len().saturating_sub(lexicon.len());
        if mapping.unassigned > 0 {
            tracing::warn!(
                unassigned = mapping.unassigned,
                "vocabulary is larger than the lexicon; trailing words stay untranslated"
            );
        }
        mapping
    }
}

impl Default for LexiconAssigner {
    fn default() -> Self {
        Self::new()
    }
}
