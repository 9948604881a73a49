// tests/engine_tests.rs

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use binomen::builder::{assemble, ParseContext};
use binomen::dict::{BacterialGenus, Dictionaries};
use binomen::syntax::{parse_tree, TreeNode};
use binomen::{Bacteria, CancelToken, Engine, ParserConfig, ParserError, Warning, PARSER_VERSION};

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("binomen-{}-{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_injected_dictionaries() {
    let dicts = Dictionaries::new(
        ["Bus"],
        vec![("Aus".to_string(), BacterialGenus::Bacterial)],
    );
    let engine = Engine::new().with_dictionaries(Arc::new(dicts));

    let name = engine.parse("Aus bus").unwrap();
    assert_eq!(name.bacteria, Bacteria::True);

    let name = engine.parse("Cus (Bus) dus").unwrap();
    assert!(name.has_warning(Warning::BotanyAuthorNotSubgen));
}

#[test]
fn test_config_with_dictionary_files() {
    let bacteria = scratch_file("bacteria.txt", "# test genera\nAus\thomonym\n");
    let yaml = format!("jobs: 2\nbacteria_path: {}\n", bacteria.display());
    let config = ParserConfig::from_yaml_str(&yaml).unwrap();
    let engine = Engine::from_config(config).unwrap();

    let name = engine.parse("Aus bus").unwrap();
    assert_eq!(name.bacteria, Bacteria::Unknown);
    assert!(name.has_warning(Warning::BacteriaMaybe));
    assert_eq!(engine.config().jobs, 2);

    fs::remove_file(bacteria).ok();
}

#[test]
fn test_bad_dictionary_marker() {
    let bacteria = scratch_file("bad-bacteria.txt", "Aus\tsometimes\n");
    let config = ParserConfig {
        bacteria_path: Some(bacteria.clone()),
        ..ParserConfig::default()
    };
    let err = Engine::from_config(config).unwrap_err();
    assert!(matches!(err, ParserError::Config { .. }));
    fs::remove_file(bacteria).ok();
}

#[test]
fn test_missing_dictionary_file() {
    let config = ParserConfig {
        author_icn_path: Some(PathBuf::from("/nonexistent/binomen/authors.txt")),
        ..ParserConfig::default()
    };
    let err = Engine::from_config(config).unwrap_err();
    assert!(matches!(err, ParserError::Io { .. }));
    let report = miette::Report::new(err);
    assert!(format!("{report:?}").contains("authors.txt"));
}

#[test]
fn test_cancelled_batch_returns_nothing() {
    let cancel = CancelToken::new();
    cancel.cancel();
    let names = ["Homo sapiens", "Aus bus"];
    let parsed = Engine::new()
        .parse_names_with_cancel(&names, &cancel)
        .unwrap();
    assert!(parsed.is_empty());
}

#[test]
fn test_parse_bytes() {
    let engine = Engine::new();
    let name = engine.parse_bytes("Homo sapiens".as_bytes()).unwrap();
    assert_eq!(name.cardinality, 2);

    let err = engine.parse_bytes(&[b'H', 0xc3, 0x28]).unwrap_err();
    assert!(matches!(err, ParserError::InvalidEncoding { .. }));
}

#[test]
fn test_assemble_from_owned_tree() {
    let dicts = Dictionaries::builtin();
    let root = parse_tree("Aus bus L.").unwrap();
    let owned = TreeNode::capture(&root);
    let from_pest = assemble(
        "Aus bus L.",
        "id".to_string(),
        PARSER_VERSION,
        &root,
        ParseContext::new(&dicts),
    )
    .unwrap();
    let from_owned = assemble(
        "Aus bus L.",
        "id".to_string(),
        PARSER_VERSION,
        &owned,
        ParseContext::new(&dicts),
    )
    .unwrap();
    assert_eq!(from_pest, from_owned);
    assert_eq!(from_owned.cardinality, 2);
}
