mod common;

use common::{KeywordEmbedder, MockLlm, Reply};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;
use webchat_config::Config;
use webchat_core::RawDocument;
use webchat_pipeline::{IngestionError, Session, SessionError};

const PARIS: &str = "Paris is the capital of France. The Eiffel Tower is in Paris.";

fn session(dir: &TempDir, reply: Reply) -> Session {
    let mut config = Config::default();
    config.core.transcript_path = dir.path().join("history").join("chat_history.txt");
    Session::new(
        &config,
        Arc::new(KeywordEmbedder),
        Arc::new(MockLlm::new("deepseek-r1:1.5b", reply)),
    )
    .unwrap()
}

#[test]
fn ask_requires_document_and_index() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session(&dir, Reply::EchoContext);

    assert!(matches!(session.ask("hi"), Err(SessionError::NoDocument)));
    assert!(matches!(session.ingest(), Err(SessionError::NoDocument)));

    session.start(RawDocument::new("https://example.com/paris", PARIS));
    assert!(matches!(session.ask("hi"), Err(SessionError::NoIndex)));
    assert!(session.history().is_empty());
}

#[test]
fn turns_are_recorded_and_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session(&dir, Reply::Fixed("Paris.".into()));
    session.start(RawDocument::new("https://example.com/paris", PARIS));
    assert_eq!(session.ingest().unwrap(), 1);

    let turn = session.ask("What is the capital of France?").unwrap();
    assert_eq!(turn.answer, "Paris.");
    assert!(turn.sources.contains("https://example.com/paris"));
    session.ask("Where is the Eiffel Tower?").unwrap();

    let history = session.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].question, "What is the capital of France?");

    let transcript =
        fs::read_to_string(dir.path().join("history").join("chat_history.txt")).unwrap();
    let records: Vec<&str> = transcript.split("\n\n").collect();
    assert_eq!(records.len(), 2);
    assert!(records[0].starts_with("User: What is the capital of France?\nBot: Paris.\nTime: "));
    assert!(records[1].starts_with("User: Where is the Eiffel Tower?\n"));
    assert!(records[1].ends_with('s'));
}

#[test]
fn unwritable_transcript_still_returns_answer() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session(&dir, Reply::Fixed("Paris.".into()));
    session.start(RawDocument::new("https://example.com/paris", PARIS));
    session.ingest().unwrap();
    // a directory where the transcript file should be makes the write fail
    fs::create_dir_all(dir.path().join("history").join("chat_history.txt")).unwrap();

    match session.ask("What is the capital of France?") {
        Err(SessionError::Persist { turn, path, .. }) => {
            assert_eq!(turn.answer, "Paris.");
            assert!(path.ends_with("chat_history.txt"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(session.history().len(), 1);
}

#[test]
fn failed_answer_still_becomes_turn() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session(&dir, Reply::Fail("out of memory".into()));
    session.start(RawDocument::new("https://example.com/paris", PARIS));
    session.ingest().unwrap();

    let turn = session.ask("capital?").unwrap();
    assert!(turn.sources.is_empty());
    assert!(turn.answer.contains("deepseek-r1:1.5b"));
    assert!(turn.answer.contains("out of memory"));
    assert_eq!(session.history().len(), 1);
}

#[test]
fn new_document_resets_everything() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session(&dir, Reply::Fixed("Short summary.".into()));
    session.start(RawDocument::new("https://example.com/paris", PARIS));
    session.ingest().unwrap();
    session.summarize().unwrap();
    session.ask("capital?").unwrap();
    assert!(session.has_index());
    assert_eq!(session.summary(), Some("Short summary."));

    session.start(RawDocument::new(
        "https://example.com/rust",
        "Rust ownership rules.",
    ));
    assert!(session.history().is_empty());
    assert!(!session.has_index());
    assert_eq!(session.chunk_count(), 0);
    assert_eq!(session.summary(), None);
    assert_eq!(
        session.document().map(|d| d.source()),
        Some("https://example.com/rust")
    );
    assert!(matches!(session.ask("capital?"), Err(SessionError::NoIndex)));
}

#[test]
fn blank_document_cannot_be_ingested() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session(&dir, Reply::EchoContext);
    session.start(RawDocument::new("https://example.com/empty", "   "));
    assert!(matches!(
        session.ingest(),
        Err(SessionError::Ingestion(IngestionError::EmptyDocument { .. }))
    ));
    assert!(!session.has_index());
}

#[test]
fn summary_failure_leaves_no_summary() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session(&dir, Reply::Fail("timeout".into()));
    session.start(RawDocument::new("https://example.com/paris", PARIS));
    let err = session.summarize().unwrap_err();
    assert!(matches!(err, SessionError::Pipeline(_)));
    assert!(err.to_string().contains("deepseek-r1:1.5b"));
    assert_eq!(session.summary(), None);
}
