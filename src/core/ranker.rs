// src/core/ranker.rs
use crate::core::generator::FormSet;
use crate::core::phonology::{PhonologyModel, WeightTable};
use crate::core::types::{Form, Score, ScoredForm, Symbol};
use serde::Serialize;
use std::cmp::Ordering;

/// Unique forms, easiest first. Equal scores are ordered by text so the
/// sequence is reproducible run to run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RankedLexicon(Vec<ScoredForm>);

impl RankedLexicon {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ScoredForm> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredForm> {
        self.0.iter()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|form| form.text.as_str())
    }

    pub fn as_slice(&self) -> &[ScoredForm] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a RankedLexicon {
    type Item = &'a ScoredForm;
    type IntoIter = std::slice::Iter<'a, ScoredForm>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Scores forms by their symbols and orders them.
pub struct DifficultyRanker<'a> {
    weights: &'a WeightTable,
}

impl<'a> DifficultyRanker<'a> {
    pub fn new(weights: &'a WeightTable) -> Self {
        Self { weights }
    }

    /// Sum of the weights of the symbols that built the form. A digraph
    /// such as "tʃ" contributes its own weight once.
    pub fn score(&self, form: &Form) -> Score {
        form.symbols()
            .iter()
            .map(|symbol| Score::from(self.weights.weight(symbol)))
            .sum()
    }

    /// Per-symbol weights of free text, segmented against the inventory.
    pub fn breakdown(&self, text: &str, phonology: &PhonologyModel) -> Vec<Symbol> {
        phonology
            .segment(text)
            .into_iter()
            .map(|(segment, _)| self.weights.symbol(segment))
            .collect()
    }

    /// Scores text that did not come out of the generator.
    pub fn score_text(&self, text: &str, phonology: &PhonologyModel) -> Score {
        self.breakdown(text, phonology)
            .iter()
            .map(|symbol| Score::from(symbol.weight))
            .sum()
    }

    #[tracing::instrument(skip_all, fields(form_count = forms.len()))]
    pub fn rank(&self, forms: FormSet) -> RankedLexicon {
        let mut scored: Vec<ScoredForm> = forms
            .into_forms()
            .map(|form| ScoredForm {
                text: form.text(),
                score: self.score(&form),
                symbols: form.symbols().to_vec(),
            })
            .collect();
        scored.sort_by(compare);
        tracing::debug!(
            easiest = scored.first().map(|f| f.score),
            hardest = scored.last().map(|f| f.score),
            "ranked forms"
        );
        RankedLexicon(scored)
    }
}

fn compare(a: &ScoredForm, b: &ScoredForm) -> Ordering {
    a.score.cmp(&b.score).then_with(|| a.text.cmp(&b.text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generator::FormGenerator;
    use crate::core::phonology::Category;
    use crate::core::rules::{Rule, RuleSet};

    fn rank(categories: Vec<Category>, rules: Vec<Rule>, weights: &WeightTable) -> RankedLexicon {
        let model = PhonologyModel::new(categories).unwrap();
        let (forms, _) = FormGenerator::new(&model).generate(&RuleSet::new(rules)).unwrap();
        DifficultyRanker::new(weights).rank(forms)
    }

    #[test]
    fn easier_vowel_comes_first() {
        let weights: WeightTable = [("a", 1), ("i", 4)].into_iter().collect();
        let lexicon = rank(vec![Category::new("vowel", ["i", "a"])], vec![Rule::new(["vowel"])], &weights);
        assert_eq!(lexicon.texts().collect::<Vec<_>>(), vec!["a", "i"]);
        assert_eq!(lexicon.iter().map(|f| f.score).collect::<Vec<_>>(), vec![1, 4]);
    }

    #[test]
    fn ties_break_lexicographically() {
        let weights: WeightTable = [("b", 2), ("a", 2), ("c", 1)].into_iter().collect();
        let lexicon = rank(vec![Category::new("v", ["b", "c", "a"])], vec![Rule::new(["v"])], &weights);
        assert_eq!(lexicon.texts().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    }

    #[test]
    fn digraphs_are_scored_once() {
        let weights: WeightTable = [("tʃ", 5), ("t", 3), ("ʃ", 3), ("a", 0)].into_iter().collect();
        let model = PhonologyModel::new(vec![Category::new("affricate", ["tʃ"]), Category::new("v", ["a"])]).unwrap();
        let form = Form::new(vec!["tʃ".into(), "a".into()]);
        assert_eq!(DifficultyRanker::new(&weights).score(&form), 5);
        assert_eq!(DifficultyRanker::new(&weights).score_text("tʃa", &model), 5);
    }

    #[test]
    fn unknown_symbols_score_zero() {
        let weights: WeightTable = [("a", 2)].into_iter().collect();
        let model = PhonologyModel::new(vec![Category::new("v", ["a"])]).unwrap();
        let ranker = DifficultyRanker::new(&weights);
        assert_eq!(ranker.score(&Form::new(vec!["q".into(), "a".into()])), 2);
        assert_eq!(ranker.score_text("xax", &model), 2);
        let breakdown = ranker.breakdown("xa", &model);
        assert_eq!(breakdown[0], Symbol { text: "x".into(), weight: 0 });
    }

    #[test]
    fn ranked_lexicon_is_sorted_and_unique() {
        let lexicon = rank(
            vec![
                Category::new("vowel", ["a", "i", "u"]),
                Category::new("stop", ["p", "k"]),
            ],
            vec![Rule::new(["stop", "vowel"]), Rule::new(["vowel"]), Rule::new(["stop", "vowel"])],
            &[("a", 0), ("i", 3), ("u", 1), ("p", 1), ("k", 2)].into_iter().collect(),
        );
        assert_eq!(lexicon.len(), 9);
        for pair in lexicon.as_slice().windows(2) {
            assert_ne!(compare(&pair[0], &pair[1]), Ordering::Greater);
            assert_ne!(pair[0].text, pair[1].text);
        }
        assert_eq!(lexicon.get(0).map(|f| f.text.as_str()), Some("a"));
    }
}
