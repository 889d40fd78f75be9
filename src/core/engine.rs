use crate::assigner::{LexiconAssigner, LexiconMapping};
use crate::config::LexiconConfig;
use crate::core::generator::{FormGenerator, FormSet, GenerationStats};
use crate::core::phonology::{PhonologyModel, WeightTable};
use crate::core::ranker::{DifficultyRanker, RankedLexicon};
use crate::core::rules::RuleSet;
use crate::core::translator::Translator;
use crate::core::types::{Score, Symbol};
use crate::error::Result;

// The engine owns one immutable configuration. Changing the inventory, rules
// or weights means building a new engine and rerunning the whole pipeline.
pub struct LexiconEngine {
    phonology: PhonologyModel,
    rules: RuleSet,
    weights: WeightTable,
}

impl LexiconEngine {
    /// Fails if a rule is empty or names a category the model lacks.
    pub fn new(phonology: PhonologyModel, rules: RuleSet, weights: WeightTable) -> Result<Self> {
        rules.validate(&phonology)?;
        Ok(Self { phonology, rules, weights })
    }

    pub fn english_ipa() -> Result<Self> {
        Self::new(PhonologyModel::english_ipa()?, RuleSet::english_default(), WeightTable::english_ipa())
    }

    pub fn from_config(config: LexiconConfig) -> Result<Self> {
        let (phonology, rules, weights) = config.into_parts()?;
        Self::new(phonology, rules, weights)
    }

    pub fn phonology(&self) -> &PhonologyModel {
        &self.phonology
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub fn generate(&self) -> Result<(FormSet, GenerationStats)> {
        FormGenerator::new(&self.phonology).generate(&self.rules)
    }

    pub fn ranked_lexicon(&self) -> Result<RankedLexicon> {
        let (forms, _) = self.generate()?;
        Ok(DifficultyRanker::new(&self.weights).rank(forms))
    }

    /// Runs the full pipeline and pairs the result with `vocabulary`,
    /// which must be ordered most frequent first.
    pub fn build_mapping<S: AsRef<str>>(&self, vocabulary: &[S]) -> Result<LexiconMapping> {
        let lexicon = self.ranked_lexicon()?;
        Ok(LexiconAssigner::new().assign(vocabulary, &lexicon))
    }

    pub fn translator<'m>(&self, mapping: &'m LexiconMapping) -> Translator<'m> {
        Translator::new(mapping)
    }

    /// Difficulty of an arbitrary word plus the symbols it was split into.
    pub fn score_word(&self, word: &str) -> (Score, Vec<Symbol>) {
        let breakdown = DifficultyRanker::new(&self.weights).breakdown(word, &self.phonology);
        let score = breakdown.iter().map(|symbol| Score::from(symbol.weight)).sum();
        (score, breakdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::phonology::Category;
    use crate::core::rules::Rule;
    use crate::error::LexiconError;

    #[test]
    fn rejects_rule_with_undefined_category() {
        let phonology = PhonologyModel::new(vec![Category::new("vowel", ["a"])]).unwrap();
        let rules = RuleSet::new(vec![Rule::new(["vowel", "nasal"])]);
        let result = LexiconEngine::new(phonology, rules, WeightTable::new());
        assert!(matches!(result, Err(LexiconError::UnknownCategory { rule: 0, .. })));
    }

    #[test]
    fn builtin_lexicon_starts_with_weightless_vowels() {
        let engine = LexiconEngine::english_ipa().unwrap();
        let lexicon = engine.ranked_lexicon().unwrap();
        assert_eq!(lexicon.texts().take(2).collect::<Vec<_>>(), vec!["ə", "ʌ"]);
        assert!(lexicon.iter().all(|form| !form.text.is_empty()));
    }

    #[test]
    fn builtin_generation_counts() {
        let engine = LexiconEngine::english_ipa().unwrap();
        let (forms, stats) = engine.generate().unwrap();
        assert_eq!(stats.rules, 151);
        assert!(stats.unique <= stats.raw);
        assert_eq!(forms.len(), stats.unique);
        // stop+fricative+vowel and affricate+vowel both spell "tʃaɪ"
        assert!(forms.contains("tʃaɪ"));
    }

    #[test]
    fn independent_engines_use_their_own_weights() {
        let phonology = || PhonologyModel::new(vec![Category::new("v", ["a", "i"])]).unwrap();
        let rules = || RuleSet::new(vec![Rule::new(["v"])]);
        let easy_a = LexiconEngine::new(phonology(), rules(), [("a", 1), ("i", 2)].into_iter().collect()).unwrap();
        let easy_i = LexiconEngine::new(phonology(), rules(), [("a", 2), ("i", 1)].into_iter().collect()).unwrap();
        let first = |engine: &LexiconEngine| engine.ranked_lexicon().unwrap().get(0).map(|f| f.text.clone());
        assert_eq!(first(&easy_a).as_deref(), Some("a"));
        assert_eq!(first(&easy_i).as_deref(), Some("i"));
    }

    #[test]
    fn scores_words_per_symbol() {
        let engine = LexiconEngine::english_ipa().unwrap();
        let (score, symbols) = engine.score_word("tʃeɪn");
        assert_eq!(score, 5 + 6 + 1);
        assert_eq!(symbols.len(), 3);
    }

    #[test]
    fn pipeline_is_deterministic() {
        let engine = LexiconEngine::english_ipa().unwrap();
        let words = ["the", "of", "and", "to"];
        assert_eq!(engine.ranked_lexicon().unwrap(), engine.ranked_lexicon().unwrap());
        assert_eq!(engine.build_mapping(&words).unwrap(), engine.build_mapping(&words).unwrap());
    }
}
