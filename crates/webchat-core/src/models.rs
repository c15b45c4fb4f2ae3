use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::time::Duration;

/// Text extracted from one page, tagged with where it came from.
/// Immutable once constructed; a new page means a new document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    source: String,
    text: String,
}

impl RawDocument {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }

    /// Originating URL (or file path) of the text.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// First `lines` non-blank lines, for a quick look at what was extracted.
    pub fn preview(&self, lines: usize) -> String {
        self.text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .take(lines)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A bounded, overlapping slice of a document: the unit of embedding and retrieval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chunk {
    pub id: String,
    /// Source tag inherited from the document.
    pub source: String,
    /// Position of the chunk in document order.
    pub index: usize,
    /// Byte offset of `content` inside the document text.
    pub offset: usize,
    pub content: String,
}

impl Chunk {
    pub fn new(source: &str, index: usize, offset: usize, content: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(source.as_bytes());
        hasher.update(index.to_string().as_bytes());
        hasher.update(content.as_bytes());
        let hash = hex::encode(hasher.finalize());
        Self {
            id: hash[..16].to_string(),
            source: source.to_string(),
            index,
            offset,
            content: content.to_string(),
        }
    }
}

/// Grounded answer returned by the chat engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answer {
    pub answer: String,
    /// Distinct sources of the retrieved chunks.
    pub sources: BTreeSet<String>,
}

/// One question/answer exchange in a session history.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub question: String,
    pub answer: String,
    pub sources: BTreeSet<String>,
    pub latency: Duration,
}

impl ChatTurn {
    pub fn new(question: impl Into<String>, answer: Answer, latency: Duration) -> Self {
        Self {
            question: question.into(),
            answer: answer.answer,
            sources: answer.sources,
            latency,
        }
    }

    /// Transcript record: `User: ..\nBot: ..\nTime: 1.23s`.
    pub fn transcript_record(&self) -> String {
        format!(
            "User: {}\nBot: {}\nTime: {:.2}s",
            self.question,
            self.answer,
            self.latency.as_secs_f64()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_skips_blank_lines() {
        let doc = RawDocument::new("https://example.com", "\n  \nTitle\n\nOne\nTwo\n   \nThree\nFour\nFive");
        assert_eq!(doc.preview(3), "Title\nOne\nTwo");
        assert_eq!(doc.preview(10).lines().count(), 6);
    }

    #[test]
    fn blank_document_detected() {
        assert!(RawDocument::new("a", " \n\t ").is_blank());
        assert!(!RawDocument::new("a", "x").is_blank());
    }

    #[test]
    fn chunk_ids_differ_by_position() {
        let a = Chunk::new("src", 0, 0, "same text");
        let b = Chunk::new("src", 1, 40, "same text");
        assert_eq!(a.id.len(), 16);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn transcript_record_formats_latency() {
        let turn = ChatTurn::new(
            "Where?",
            Answer {
                answer: "Paris".to_string(),
                sources: BTreeSet::new(),
            },
            Duration::from_millis(1234),
        );
        assert_eq!(turn.transcript_record(), "User: Where?\nBot: Paris\nTime: 1.23s");
    }
}
