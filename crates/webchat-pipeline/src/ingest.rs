use crate::error::IngestionError;
use std::sync::Arc;
use tracing::{info, warn};
use webchat_config::ChunkingConfig;
use webchat_core::chunking::TextChunker;
use webchat_core::traits::Embedder;
use webchat_core::RawDocument;
use webchat_index::VectorIndex;

/// Turns a document into a searchable vector index.
pub struct EmbeddingIngestor {
    chunker: TextChunker,
    embedder: Arc<dyn Embedder>,
}

impl EmbeddingIngestor {
    pub fn new(config: &ChunkingConfig, embedder: Arc<dyn Embedder>) -> Result<Self, IngestionError> {
        let chunker =
            TextChunker::new(config).map_err(|e| IngestionError::InvalidChunking(e.to_string()))?;
        Ok(Self { chunker, embedder })
    }

    /// Chunk and embed `document` into a fresh index.
    ///
    /// Chunks that fail to embed, or whose vector is empty or differs in length
    /// from the first accepted one, are skipped; the call fails only when none succeed.
    pub fn create_embeddings(&self, document: &RawDocument) -> Result<VectorIndex, IngestionError> {
        if document.is_blank() {
            return Err(IngestionError::EmptyDocument {
                url: document.source().to_string(),
            });
        }

        let chunks = self.chunker.chunk(document);
        let attempts = chunks.len();
        let mut embedded = Vec::with_capacity(attempts);
        let mut last_error = None;
        let mut dimension = None;

        for chunk in chunks {
            let vector = match self.embedder.embed(&chunk.content) {
                Ok(vector) => vector,
                Err(e) => {
                    warn!(chunk = chunk.index, error = %e, "skipping chunk that failed to embed");
                    last_error = Some(format!("{:#}", e));
                    continue;
                }
            };
            if vector.is_empty() || dimension.is_some_and(|d| d != vector.len()) {
                warn!(
                    chunk = chunk.index,
                    expected = ?dimension,
                    actual = vector.len(),
                    "skipping chunk with unusable embedding"
                );
                last_error = Some(format!(
                    "chunk {} embedding has {} dimensions",
                    chunk.index,
                    vector.len()
                ));
                continue;
            }
            dimension.get_or_insert(vector.len());
            embedded.push((chunk, vector));
        }

        if embedded.is_empty() {
            return Err(IngestionError::NoEmbeddings {
                attempts,
                last_error: last_error.unwrap_or_else(|| "no chunks produced".to_string()),
            });
        }

        info!(
            source = document.source(),
            chunks = attempts,
            embedded = embedded.len(),
            model = self.embedder.model_name(),
            "built vector index"
        );
        Ok(VectorIndex::build(embedded)?)
    }
}
