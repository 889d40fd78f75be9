// src/lib.rs
//! Conlang lexicon generation: phonotactic templates are expanded into
//! word-forms, ranked by pronunciation difficulty, and handed out to a
//! frequency-ordered vocabulary so the commonest words get the easiest forms.

pub mod assigner;
pub mod config;
pub mod core;
pub mod error;
pub mod vocabulary;

pub use crate::assigner::{LexiconAssigner, LexiconMapping};
pub use crate::config::LexiconConfig;
pub use crate::core::engine::LexiconEngine;
pub use crate::core::ranker::RankedLexicon;
pub use crate::core::translator::Translator;
pub use crate::error::{LexiconError, Result};
