mod common;

use common::{FailingEmbedder, KeywordEmbedder, MockLlm, Reply};
use std::sync::Arc;
use webchat_config::{ChatConfig, ChunkingConfig};
use webchat_core::{Answer, Chunk, FailureKind, RawDocument};
use webchat_index::VectorIndex;
use webchat_pipeline::{ChatBot, EmbeddingIngestor};

const PARIS: &str = "Paris is the capital of France. The Eiffel Tower is in Paris.";

fn index_for(document: &RawDocument, chunking: ChunkingConfig) -> Arc<VectorIndex> {
    let ingestor = EmbeddingIngestor::new(&chunking, Arc::new(KeywordEmbedder)).unwrap();
    Arc::new(ingestor.create_embeddings(document).unwrap())
}

#[test]
fn answers_from_page_and_cites_source() {
    let document = RawDocument::new("https://example.com/paris", PARIS);
    let index = index_for(&document, ChunkingConfig::default());
    assert_eq!(index.len(), 1);

    let llm = Arc::new(MockLlm::new("deepseek-r1:1.5b", Reply::EchoContext));
    let bot = ChatBot::new(
        index,
        Arc::new(KeywordEmbedder),
        llm.clone(),
        ChatConfig::default(),
    );

    let answer = bot.answer("What is the capital of France?").unwrap();
    assert!(answer.answer.contains("Paris"));
    assert!(answer.sources.contains("https://example.com/paris"));
    assert_eq!(answer.sources.len(), 1);

    let prompt = llm.last_prompt();
    assert!(prompt.contains("You are deepseek-r1:1.5b"));
    assert!(prompt.contains("Question:\nWhat is the capital of France?\n"));
    let params = llm.params.lock().unwrap()[0];
    assert!((params.temperature - 0.7).abs() < 1e-6);
}

#[test]
fn retrieval_prefers_matching_topic() {
    let document = RawDocument::new(
        "https://example.com/mixed",
        "Rust ownership and borrow rules matter.\n\nTomato garden needs water daily.",
    );
    let index = index_for(
        &document,
        ChunkingConfig {
            chunk_size: 45,
            chunk_overlap: 0,
        },
    );
    assert_eq!(index.len(), 2);

    let bot = ChatBot::new(
        index,
        Arc::new(KeywordEmbedder),
        Arc::new(MockLlm::new("qwen2.5:1.5b", Reply::Fixed("ok".into()))),
        ChatConfig {
            top_k: 2,
            ..ChatConfig::default()
        },
    );

    let hits = bot.retrieve("How do ownership and borrow work in Rust?").unwrap();
    assert_eq!(hits.len(), 2);
    assert!(hits[0].chunk.content.contains("ownership"));
    assert!(hits[0].score > hits[1].score);
}

#[test]
fn context_limited_to_top_k() {
    let text = (0..12)
        .map(|i| format!("Paragraph {} mentions the garden.", i))
        .collect::<Vec<_>>()
        .join("\n\n");
    let document = RawDocument::new("https://example.com/garden", text);
    let index = index_for(
        &document,
        ChunkingConfig {
            chunk_size: 40,
            chunk_overlap: 0,
        },
    );
    assert!(index.len() > 3);

    let llm = Arc::new(MockLlm::new("llama3.2:3b", Reply::EchoContext));
    let bot = ChatBot::new(index, Arc::new(KeywordEmbedder), llm.clone(), ChatConfig::default());
    bot.answer("garden?").unwrap();

    let prompt = llm.last_prompt();
    assert_eq!(prompt.matches("Paragraph").count(), 3);
}

#[test]
fn generation_failure_is_contained() {
    let document = RawDocument::new("https://example.com/paris", PARIS);
    let index = index_for(&document, ChunkingConfig::default());
    let bot = ChatBot::new(
        index,
        Arc::new(KeywordEmbedder),
        Arc::new(MockLlm::new(
            "hermes3:3b",
            Reply::Fail("model not loaded".into()),
        )),
        ChatConfig::default(),
    );

    let failure = bot.answer("capital?").unwrap_err();
    assert_eq!(failure.kind, FailureKind::Generation);
    assert_eq!(failure.model, "hermes3:3b");

    let answer = Answer::from(failure);
    assert!(answer.sources.is_empty());
    assert!(answer.answer.contains("hermes3:3b"));
    assert!(answer.answer.contains("model not loaded"));
}

#[test]
fn retrieval_failure_is_contained() {
    let index = Arc::new(
        VectorIndex::build(vec![(
            Chunk::new("https://example.com", 0, 0, PARIS),
            vec![1.0, 0.0],
        )])
        .unwrap(),
    );
    let llm = Arc::new(MockLlm::new("qwen2.5:1.5b", Reply::Fixed("unused".into())));
    let bot = ChatBot::new(index, Arc::new(FailingEmbedder), llm.clone(), ChatConfig::default());

    let failure = bot.answer("capital?").unwrap_err();
    assert_eq!(failure.kind, FailureKind::Retrieval);
    assert!(failure.to_string().contains("embedding service unreachable"));
    assert!(llm.prompts.lock().unwrap().is_empty());
}
