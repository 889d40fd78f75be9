// src/core/generator.rs
use crate::core::phonology::PhonologyModel;
use crate::core::rules::{Rule, RuleSet};
use crate::core::types::Form;
use crate::error::{LexiconError, Result};
use std::collections::btree_map::{BTreeMap, Entry};

/// Counts gathered while expanding a rule set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub rules: usize,
    /// Forms produced before deduplication: the sum over rules of the
    /// product of the slot category sizes.
    pub raw: usize,
    pub unique: usize,
}

/// Deduplicated forms keyed by their text.
///
/// When two symbol sequences spell the same text the first one inserted is
/// kept, so the result depends only on rule order and category order.
#[derive(Debug, Clone, Default)]
pub struct FormSet {
    forms: BTreeMap<String, Form>,
    raw: usize,
}

impl FormSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the text was not present yet.
    pub fn insert(&mut self, form: Form) -> bool {
        self.raw += 1;
        match self.forms.entry(form.text()) {
            Entry::Vacant(slot) => {
                slot.insert(form);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn contains(&self, text: &str) -> bool {
        self.forms.contains_key(text)
    }

    pub fn get(&self, text: &str) -> Option<&Form> {
        self.forms.get(text)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Number of insertions, duplicates included.
    pub fn raw_count(&self) -> usize {
        self.raw
    }

    /// Forms in ascending text order.
    pub fn iter(&self) -> impl Iterator<Item = &Form> {
        self.forms.values()
    }

    pub fn into_forms(self) -> impl Iterator<Item = Form> {
        self.forms.into_values()
    }
}

/// Expands phonotactic templates into concrete forms.
pub struct FormGenerator<'a> {
    phonology: &'a PhonologyModel,
}

impl<'a> FormGenerator<'a> {
    pub fn new(phonology: &'a PhonologyModel) -> Self {
        Self { phonology }
    }

    /// Every symbol combination for one rule, rightmost slot varying fastest.
    /// Produces exactly the product of the slot category sizes.
    pub fn expand_rule(&self, rule_index: usize, rule: &Rule) -> Result<Vec<Form>> {
        if rule.slots().is_empty() {
            return Err(LexiconError::EmptyRule { rule: rule_index });
        }
        let pools = rule
            .slots()
            .iter()
            .map(|name| {
                self.phonology
                    .category(name)
                    .map(|category| category.symbols.as_slice())
                    .ok_or_else(|| LexiconError::UnknownCategory {
                        rule: rule_index,
                        category: name.clone(),
                    })
            })
            .collect::<Result<Vec<&[String]>>>()?;

        if pools.iter().any(|pool| pool.is_empty()) {
            return Ok(Vec::new());
        }

        let total = pools.iter().map(|pool| pool.len()).product();
        let mut forms = Vec::with_capacity(total);
        let mut cursor = vec![0usize; pools.len()];
        loop {
            let symbols = cursor.iter().zip(&pools).map(|(&i, pool)| pool[i].clone()).collect();
            forms.push(Form::new(symbols));

            // odometer step
            let mut slot = pools.len();
            loop {
                if slot == 0 {
                    return Ok(forms);
                }
                slot -= 1;
                cursor[slot] += 1;
                if cursor[slot] < pools[slot].len() {
                    break;
                }
                cursor[slot] = 0;
            }
        }
    }

    /// Expands every rule and merges the results. Fails before producing
    /// anything if a rule references an undefined category.
    #[tracing::instrument(skip_all, fields(rule_count = rules.len()))]
    pub fn generate(&self, rules: &RuleSet) -> Result<(FormSet, GenerationStats)> {
        rules.validate(self.phonology)?;

        let mut set = FormSet::new();
        for (idx, rule) in rules.rules().iter().enumerate() {
            for form in self.expand_rule(idx, rule)? {
                set.insert(form);
            }
        }

        let stats = GenerationStats {
            rules: rules.len(),
            raw: set.raw_count(),
            unique: set.len(),
        };
        tracing::debug!(raw = stats.raw, unique = stats.unique, "expanded rule set");
        Ok((set, stats))
    }
}
