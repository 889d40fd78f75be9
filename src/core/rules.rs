// src/core/rules.rs
use crate::core::inventory::ENGLISH_RULES;
use crate::core::phonology::PhonologyModel;
use crate::error::{LexiconError, Result};
use serde::{Deserialize, Serialize};

/// A word-shape template: the category drawn from at each slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rule(pub Vec<String>);

impl Rule {
    pub fn new(slots: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(slots.into_iter().map(Into::into).collect())
    }

    pub fn slots(&self) -> &[String] {
        &self.0
    }
}

/// Ordered phonotactic templates. Repeats are allowed; duplicate output is
/// resolved downstream by deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn english_default() -> Self {
        Self::new(ENGLISH_RULES.iter().map(|slots| Rule::new(slots.iter().copied())).collect())
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Checks every rule against the model. Reports the first offending rule.
    pub fn validate(&self, phonology: &PhonologyModel) -> Result<()> {
        for (idx, rule) in self.rules.iter().enumerate() {
            if rule.slots().is_empty() {
                return Err(LexiconError::EmptyRule { rule: idx });
            }
            if let Some(missing) = rule.slots().iter().find(|name| phonology.category(name).is_none()) {
                return Err(LexiconError::UnknownCategory {
                    rule: idx,
                    category: missing.clone(),
                });
            }
        }
        Ok(())
    }
}
