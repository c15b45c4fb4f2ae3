use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use webchat_core::ChatTurn;

/// Ordered, append-only record of one session's exchanges.
#[derive(Debug, Default, Clone)]
pub struct ChatHistory {
    turns: Vec<ChatTurn>,
}

impl ChatHistory {
    pub fn push(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Every turn's transcript record, separated by a blank line.
    pub fn render_transcript(&self) -> String {
        self.turns
            .iter()
            .map(ChatTurn::transcript_record)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Persists the full history to a plain-text file, replacing its contents.
#[derive(Debug, Clone)]
pub struct TranscriptWriter {
    path: PathBuf,
}

impl TranscriptWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, history: &ChatHistory) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, history.render_transcript())
    }
}
