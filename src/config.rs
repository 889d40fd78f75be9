// File: src/config.rs
//! JSON configuration for a generation run.
//!
//! ```json
//! {
//!   "categories": { "vowel": ["a", "i"], "stop": ["p", "t"] },
//!   "weights": { "a": 1, "i": 4, "p": 2, "t": 3 },
//!   "rules": [["vowel"], ["stop", "vowel"]]
//! }
//! ```
//!
//! Any section left out falls back to the built-in English IPA section.
//! Categories keep their declaration order, and a name declared twice is
//! rejected when the model is built.

use crate::core::inventory::ENGLISH_IPA;
use crate::core::phonology::{Category, PhonologyModel, WeightTable};
use crate::core::rules::{Rule, RuleSet};
use crate::core::types::Weight;
use crate::error::Result;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexiconConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<BTreeMap<String, Weight>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Vec<String>>>,
}

impl LexiconConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config = serde_json::from_reader(reader)?;
        tracing::debug!(path = %path.display(), "loaded lexicon configuration");
        Ok(config)
    }

    /// The built-in configuration with every section filled in.
    pub fn english_ipa() -> Self {
        let categories = CategoryList(
            ENGLISH_IPA
                .iter()
                .map(|(name, members)| Category::new(*name, members.iter().map(|(s, _)| *s)))
                .collect(),
        );
        let weights: BTreeMap<String, Weight> = ENGLISH_IPA
            .iter()
            .flat_map(|(_, members)| members.iter())
            .map(|&(symbol, weight)| (symbol.to_string(), weight))
            .collect();
        let rules: Vec<Vec<String>> = RuleSet::english_default().rules().iter().map(|rule| rule.0.clone()).collect();
        Self {
            categories: Some(categories),
            weights: Some(weights),
            rules: Some(rules),
        }
    }

    /// Builds the validated model, rule set and weight table.
    pub fn into_parts(self) -> Result<(PhonologyModel, RuleSet, WeightTable)> {
        let phonology = match self.categories {
            Some(CategoryList(categories)) => PhonologyModel::new(categories)?,
            None => PhonologyModel::english_ipa()?,
        };
        let rules = match self.rules {
            Some(rules) => RuleSet::new(rules.into_iter().map(Rule).collect()),
            None => RuleSet::english_default(),
        };
        let weights = match self.weights {
            Some(weights) => weights.into_iter().collect(),
            None => WeightTable::english_ipa(),
        };
        rules.validate(&phonology)?;
        Ok((phonology, rules, weights))
    }
}

/// The `categories` section: a JSON object read as an ordered list of
/// entries, so repeated names reach model validation instead of being merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryList(pub Vec<Category>);

impl Serialize for CategoryList {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for category in &self.0 {
            map.serialize_entry(&category.name, &category.symbols)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategoryList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = CategoryList;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from category name to a list of symbols")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
                let mut categories = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, symbols)) = access.next_entry::<String, Vec<String>>()? {
                    categories.push(Category { name, symbols });
                }
                Ok(CategoryList(categories))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexiconError;

    #[test]
    fn parses_full_document() {
        let config = LexiconConfig::from_json_str(
            r#"{
                "categories": { "vowel": ["a", "i"], "stop": ["p"] },
                "weights": { "a": 1, "i": 4 },
                "rules": [["vowel"], ["stop", "vowel"]]
            }"#,
        )
        .unwrap();
        let (phonology, rules, weights) = config.into_parts().unwrap();
        assert_eq!(phonology.categories().len(), 2);
        assert_eq!(rules.len(), 2);
        assert_eq!(weights.weight("i"), 4);
        assert_eq!(weights.weight("p"), 0);
    }

    #[test]
    fn missing_sections_fall_back_to_builtin() {
        let (phonology, rules, weights) = LexiconConfig::from_json_str("{}").unwrap().into_parts().unwrap();
        assert_eq!(phonology.categories().len(), 8);
        assert_eq!(rules.len(), 151);
        assert_eq!(weights.weight("ŋ"), 2);
    }

    #[test]
    fn custom_rules_must_match_builtin_categories() {
        let config = LexiconConfig::from_json_str(r#"{ "rules": [["vowel", "click"]] }"#).unwrap();
        assert!(matches!(
            config.into_parts(),
            Err(LexiconError::UnknownCategory { rule: 0, category }) if category == "click"
        ));
    }

    #[test]
    fn rejects_unknown_fields_and_negative_weights() {
        assert!(matches!(
            LexiconConfig::from_json_str(r#"{ "rule": [] }"#),
            Err(LexiconError::Config(_))
        ));
        assert!(matches!(
            LexiconConfig::from_json_str(r#"{ "weights": { "a": -1 } }"#),
            Err(LexiconError::Config(_))
        ));
    }

    #[test]
    fn repeated_category_name_is_rejected() {
        let config =
            LexiconConfig::from_json_str(r#"{ "categories": { "v": ["a"], "v": ["i"] }, "weights": {}, "rules": [["v"]] }"#)
                .unwrap();
        assert_eq!(config.categories.as_ref().map(|c| c.0.len()), Some(2));
        assert!(matches!(config.into_parts(), Err(LexiconError::DuplicateCategory(name)) if name == "v"));
    }

    #[test]
    fn categories_keep_declaration_order() {
        let config = LexiconConfig::from_json_str(r#"{ "categories": { "stop": ["p"], "vowel": ["a"] } }"#).unwrap();
        let (phonology, _, _) = LexiconConfig { rules: Some(vec![]), ..config }.into_parts().unwrap();
        let names: Vec<&str> = phonology.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["stop", "vowel"]);
    }

    #[test]
    fn builtin_config_round_trips_through_json() {
        let json = serde_json::to_string(&LexiconConfig::english_ipa()).unwrap();
        let parsed = LexiconConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed, LexiconConfig::english_ipa());
    }
}
