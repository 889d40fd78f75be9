// src/core/inventory.rs
//! Built-in English IPA inventory: categories, difficulty weights and the
//! default phonotactic templates.

use crate::core::types::Weight;

const V: &str = "vowel";
const S: &str = "stop";
const F: &str = "fricative";
const A: &str = "affricate";
const N: &str = "nasal";
const L: &str = "liquid";
const G: &str = "glide";
const C: &str = "syllabic_consonant";

/// Category name followed by its `(symbol, weight)` members.
pub type CategoryTable = (&'static str, &'static [(&'static str, Weight)]);

pub const ENGLISH_IPA: &[CategoryTable] = &[
    (
        V,
        &[
            // monophthongs
            ("i", 4), ("ɪ", 3), ("e", 3), ("æ", 4), ("ɑ", 1), ("ɒ", 1),
            ("ɔ", 1), ("ʌ", 0), ("ʊ", 1), ("u", 1), ("ə", 0),
            // diphthongs
            ("aɪ", 4), ("aʊ", 4), ("oʊ", 5), ("eɪ", 6), ("ɔɪ", 6),
        ],
    ),
    (S, &[("p", 2), ("b", 3), ("t", 3), ("d", 4), ("k", 4), ("g", 5)]),
    (
        F,
        &[
            ("f", 3), ("v", 4), ("θ", 6), ("ð", 6), ("s", 4),
            ("z", 5), ("ʃ", 3), ("ʒ", 4), ("h", 1),
        ],
    ),
    (A, &[("tʃ", 5), ("dʒ", 5)]),
    (N, &[("m", 1), ("n", 1), ("ŋ", 2)]),
    (L, &[("r", 2), ("l", 1)]),
    (G, &[("j", 1), ("w", 1)]),
    (C, &[("l\u{329}", 2), ("n\u{329}", 2)]),
];

/// The phonotactic templates of the English-derived default grammar.
///
/// Order is significant only for reproducibility; some templates repeat.
pub const ENGLISH_RULES: &[&[&str]] = &[
    &[V],
    &[V, G],
    &[G, V],
    &[V, S],
    &[S, V],
    &[S, F],
    &[F, S],
    &[N, V],
    &[V, N],
    &[L, V],
    &[V, L],
    &[A, V],
    &[V, A],
    &[G, V, S],
    &[S, V, G],
    &[F, V],
    &[V, F],
    &[N, V, S],
    &[S, V, N],
    &[L, V, S],
    &[S, V, L],
    &[A, V, S],
    &[S, V, A],
    &[G, V, F],
    &[F, V, G],
    &[N, V, F],
    &[F, V, N],
    &[L, V, F],
    &[F, V, L],
    &[A, V, F],
    &[F, V, A],
    &[G, V, N],
    &[N, V, G],
    &[L, V, N],
    &[N, V, L],
    &[A, V, N],
    &[N, V, A],
    &[G, V, L],
    &[L, V, G],
    &[A, V, L],
    &[L, V, A],
    &[G, V, A],
    &[A, V, G],
    &[C, V],
    &[V, C],
    &[C, V, S],
    &[S, V, C],
    &[C, V, F],
    &[F, V, C],
    &[C, V, N],
    &[N, V, C],
    &[C, V, L],
    &[L, V, C],
    &[C, V, G],
    &[G, V, C],
    &[C, V, A],
    &[A, V, C],
    &[V, G, V],
    &[V, S, V],
    &[S, F, V],
    &[F, S, V],
    &[V, L, V],
    &[V, A, V],
    &[G, V, S, V],
    &[S, V, G, V],
    &[V, F, V],
    &[N, V, S, V],
    &[L, V, S, V],
    &[S, V, L, V],
    &[A, V, S, V],
    &[S, V, A, V],
    &[G, V, F, V],
    &[F, V, G, V],
    &[N, V, F, V],
    &[L, V, F, V],
    &[F, V, L, V],
    &[A, V, F, V],
    &[F, V, A, V],
    &[N, V, G, V],
    &[L, V, N, V],
    &[N, V, L, V],
    &[A, V, N, V],
    &[N, V, A, V],
    &[G, V, L, V],
    &[L, V, G, V],
    &[A, V, L, V],
    &[L, V, A, V],
    &[G, V, A, V],
    &[A, V, G, V],
    &[V, C, V],
    &[C, V, S, V],
    &[S, V, C, V],
    &[C, V, F, V],
    &[F, V, C, V],
    &[C, V, N, V],
    &[N, V, C, V],
    &[C, V, L, V],
    &[L, V, C, V],
    &[C, V, G, V],
    &[G, V, C, V],
    &[C, V, A, V],
    &[A, V, C, V],
    &[V, G, V],
    &[V, S, V],
    &[V, S, F],
    &[V, F, S],
    &[V, N, V],
    &[V, L, V],
    &[V, A, V],
    &[V, G, V, S],
    &[V, S, V, G],
    &[V, F, V],
    &[V, N, V, S],
    &[V, S, V, N],
    &[V, L, V, S],
    &[V, S, V, L],
    &[V, A, V, S],
    &[V, S, V, A],
    &[V, G, V, F],
    &[V, F, V, G],
    &[V, N, V, F],
    &[V, F, V, N],
    &[V, L, V, F],
    &[V, F, V, L],
    &[V, A, V, F],
    &[V, F, V, A],
    &[V, G, V, N],
    &[V, N, V, G],
    &[V, L, V, N],
    &[V, N, V, L],
    &[V, A, V, N],
    &[V, N, V, A],
    &[V, G, V, L],
    &[V, L, V, G],
    &[V, A, V, L],
    &[V, L, V, A],
    &[V, G, V, A],
    &[V, A, V, G],
    &[V, C, V],
    &[V, C, V, S],
    &[V, S, V, C],
    &[V, C, V, F],
    &[V, F, V, C],
    &[V, C, V, N],
    &[V, N, V, C],
    &[V, C, V, L],
    &[V, L, V, C],
    &[V, C, V, G],
    &[V, G, V, C],
    &[V, C, V, A],
    &[V, A, V, C],
];
