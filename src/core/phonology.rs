// src/core/phonology.rs
use crate::core::inventory::ENGLISH_IPA;
use crate::core::trie::SymbolTrie;
use crate::core::types::{Symbol, Weight};
use crate::error::{LexiconError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named class of symbols that rule templates draw from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub symbols: Vec<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, symbols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }
}

/// The validated sound inventory: categories and the symbols in them.
///
/// Construction fails if a category is defined twice, a symbol is empty, or a
/// symbol is claimed by two categories.
#[derive(Debug, Clone)]
pub struct PhonologyModel {
    categories: Vec<Category>,
    by_name: HashMap<String, usize>,
    trie: SymbolTrie,
}

impl PhonologyModel {
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(categories.len());
        let mut trie = SymbolTrie::new();
        {
            let mut owner: HashMap<&str, &str> = HashMap::new();
            for (idx, category) in categories.iter().enumerate() {
                if by_name.insert(category.name.clone(), idx).is_some() {
                    return Err(LexiconError::DuplicateCategory(category.name.clone()));
                }
                if category.symbols.is_empty() {
                    tracing::warn!(category = %category.name, "category has no symbols; rules using it produce nothing");
                }
                for symbol in &category.symbols {
                    if symbol.is_empty() {
                        return Err(LexiconError::EmptySymbol(category.name.clone()));
                    }
                    if let Some(first) = owner.insert(symbol, &category.name) {
                        return Err(LexiconError::DuplicateSymbol {
                            symbol: symbol.clone(),
                            first: first.to_string(),
                            second: category.name.clone(),
                        });
                    }
                    trie.insert(symbol);
                }
            }
        }

        Ok(Self { categories, by_name, trie })
    }

    /// The built-in English IPA inventory.
    pub fn english_ipa() -> Result<Self> {
        let categories = ENGLISH_IPA
            .iter()
            .map(|(name, members)| Category::new(*name, members.iter().map(|(s, _)| *s)))
            .collect();
        Self::new(categories)
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.by_name.get(name).map(|&idx| &self.categories[idx])
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Splits text into inventory symbols by greedy longest match.
    /// Unknown characters come back as one-char segments flagged `false`.
    pub fn segment<'a>(&self, text: &'a str) -> Vec<(&'a str, bool)> {
        self.trie.segment(text)
    }
}

/// Difficulty weight per symbol. Symbols missing from the table weigh 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightTable {
    weights: HashMap<String, Weight>,
}

impl WeightTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weights of the built-in English IPA inventory.
    pub fn english_ipa() -> Self {
        ENGLISH_IPA
            .iter()
            .flat_map(|(_, members)| members.iter())
            .map(|&(symbol, weight)| (symbol.to_string(), weight))
            .collect()
    }

    pub fn insert(&mut self, symbol: impl Into<String>, weight: Weight) {
        self.weights.insert(symbol.into(), weight);
    }

    pub fn weight(&self, symbol: &str) -> Weight {
        self.weights.get(symbol).copied().unwrap_or(0)
    }

    pub fn symbol(&self, text: &str) -> Symbol {
        Symbol { text: text.to_string(), weight: self.weight(text) }
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Weight)> for WeightTable {
    fn from_iter<I: IntoIterator<Item = (S, Weight)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().map(|(s, w)| (s.into(), w)).collect(),
        }
    }
}
