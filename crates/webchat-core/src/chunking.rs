use crate::models::{Chunk, RawDocument};
use anyhow::{anyhow, Result};
use text_splitter::{Characters, ChunkConfig, TextSplitter};
use webchat_config::ChunkingConfig;

/// Splits document text into overlapping, character-bounded chunks.
///
/// Boundaries prefer paragraph, then line, then sentence, then word breaks,
/// so a chunk only cuts mid-word when a single word exceeds `chunk_size`.
pub struct TextChunker {
    splitter: TextSplitter<Characters>,
}

impl TextChunker {
    pub fn new(config: &ChunkingConfig) -> Result<Self> {
        let chunk_config = ChunkConfig::new(config.chunk_size)
            .with_overlap(config.chunk_overlap)
            .map_err(|e| anyhow!("invalid chunking config: {}", e))?;
        Ok(Self {
            splitter: TextSplitter::new(chunk_config),
        })
    }

    /// Chunks in document order. Every chunk inherits the document's source.
    pub fn chunk(&self, document: &RawDocument) -> Vec<Chunk> {
        self.splitter
            .chunk_indices(document.text())
            .enumerate()
            .map(|(index, (offset, content))| Chunk::new(document.source(), index, offset, content))
            .collect()
    }
}
