//! File-backed loading of frequency lists and JSON configurations.

use lexicon_core::{vocabulary, LexiconConfig, LexiconEngine, LexiconError};
use std::io::Write;
use tempfile::NamedTempFile;

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_frequency_list_in_file_order() {
    let file = temp_file("The\nof\n\n  and\nTO\n");
    let words = vocabulary::load_from_path(file.path()).unwrap();
    assert_eq!(words, vec!["the", "of", "and", "to"]);
}

#[test]
fn missing_vocabulary_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = vocabulary::load_from_path(&dir.path().join("freq_list.txt"));
    assert!(matches!(result, Err(LexiconError::Io(_))));
}

#[test]
fn engine_from_config_file() {
    let file = temp_file(
        r#"{
            "categories": { "vowel": ["a", "i"], "stop": ["p", "t"] },
            "weights": { "a": 1, "i": 4, "p": 2, "t": 3 },
            "rules": [["vowel"], ["stop", "vowel"]]
        }"#,
    );
    let engine = LexiconEngine::from_config(LexiconConfig::from_path(file.path()).unwrap()).unwrap();
    let lexicon = engine.ranked_lexicon().unwrap();
    assert_eq!(
        lexicon.texts().collect::<Vec<_>>(),
        vec!["a", "pa", "i", "ta", "pi", "ti"]
    );

    let vocab = temp_file("the\nof\nand\n");
    let words = vocabulary::load_from_path(vocab.path()).unwrap();
    let mapping = engine.build_mapping(&words).unwrap();
    assert_eq!(engine.translator(&mapping).translate("And THE sky"), "i a sky");
}

#[test]
fn config_with_undefined_category_is_rejected() {
    let file = temp_file(r#"{ "categories": { "vowel": ["a"] }, "rules": [["vowel", "stop"]] }"#);
    let config = LexiconConfig::from_path(file.path()).unwrap();
    assert!(matches!(
        LexiconEngine::from_config(config),
        Err(LexiconError::UnknownCategory { rule: 0, category }) if category == "stop"
    ));
}

#[test]
fn malformed_config_file_is_a_config_error() {
    let file = temp_file("{ not json");
    assert!(matches!(LexiconConfig::from_path(file.path()), Err(LexiconError::Config(_))));
}

#[test]
fn config_file_declaring_a_category_twice_is_rejected() {
    let file = temp_file(r#"{ "categories": { "v": ["a"], "v": ["i"] }, "weights": {}, "rules": [["v"]] }"#);
    let config = LexiconConfig::from_path(file.path()).unwrap();
    assert!(matches!(
        LexiconEngine::from_config(config),
        Err(LexiconError::DuplicateCategory(name)) if name == "v"
    ));
}
