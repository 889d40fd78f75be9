pub mod engine;
pub mod generator;
pub mod inventory;
pub mod phonology;
pub mod ranker;
pub mod rules;
pub mod translator;
pub mod trie;
pub mod types;
