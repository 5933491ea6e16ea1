//! End-to-end poem generation from corpus files

mod common;

use common::{corpus_file, STAR_TREK};
use graphpoet::{GraphPoet, PoetError, WeightedGraph};

#[test]
fn empty_corpus_leaves_input_unchanged() {
    let corpus = corpus_file("");
    let poet = GraphPoet::from_path(corpus.path()).unwrap();

    assert!(poet.graph().is_empty());
    assert_eq!(poet.poem("Hello world"), "Hello world");
}

#[test]
fn corpus_file_builds_adjacency_counts() {
    let corpus = corpus_file("Seek to explore strange new life and new civilizations\n");
    let poet = GraphPoet::from_path(corpus.path()).unwrap();

    let mut expected = WeightedGraph::new();
    for (source, target) in [
        ("seek", "to"),
        ("to", "explore"),
        ("explore", "strange"),
        ("strange", "new"),
        ("new", "life"),
        ("life", "and"),
        ("and", "new"),
        ("new", "civilizations"),
    ] {
        expected.set_edge(source.to_string(), target.to_string(), 1);
    }
    assert_eq!(poet.graph(), &expected);
    assert_eq!(
        poet.poem("Seek to explore new life"),
        "Seek to explore strange new life"
    );
}

#[test]
fn heavier_bridge_beats_lighter_one() {
    let corpus = corpus_file("a b c\na b c\na x c\n");
    let poet = GraphPoet::from_path(corpus.path()).unwrap();

    let bridge = poet.bridge("a", "c").unwrap();
    assert_eq!(bridge.word, "b");
    assert_eq!(bridge.score, 4);
    assert_eq!(poet.poem("A C"), "A b C");
}

#[test]
fn single_token_input_is_returned_unchanged() {
    let corpus = corpus_file(STAR_TREK);
    let poet = GraphPoet::from_path(corpus.path()).unwrap();

    assert_eq!(poet.poem("Hello"), "Hello");
    assert_eq!(poet.poem("new"), "new");
}

#[test]
fn bridges_across_line_boundaries() {
    let corpus = corpus_file(STAR_TREK);
    let poet = GraphPoet::from_path(corpus.path()).unwrap();

    // "worlds" ends line one, "to" starts line two
    assert_eq!(poet.graph().weight("worlds", "to"), 1);
    assert_eq!(poet.poem("new to"), "new worlds to");
}

#[test]
fn multiple_bridges_in_one_poem() {
    let corpus = corpus_file(STAR_TREK);
    let poet = GraphPoet::from_path(corpus.path()).unwrap();

    assert_eq!(
        poet.poem("Seek to explore new and exciting synergies!"),
        "Seek to explore strange new life and exciting synergies!"
    );
}

#[test]
fn punctuation_blocks_bridging() {
    let corpus = corpus_file(STAR_TREK);
    let poet = GraphPoet::from_path(corpus.path()).unwrap();

    assert_eq!(poet.poem("explore new"), "explore strange new");
    assert_eq!(poet.poem("explore, new"), "explore, new");
    assert_eq!(poet.poem("explore new."), "explore new.");
}

#[test]
fn missing_corpus_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-corpus.txt");

    let err = GraphPoet::from_path(&missing).unwrap_err();

    match &err {
        PoetError::CorpusRead { path, source } => {
            assert_eq!(path, &missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains("no-such-corpus.txt"));
}

#[test]
fn non_utf8_corpus_fails_without_a_poet() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    std::fs::write(&path, [b'c', b'a', b'f', 0xe9, b'\n']).unwrap();

    let result = GraphPoet::from_path(&path);
    assert!(matches!(result, Err(PoetError::CorpusRead { .. })));
}
