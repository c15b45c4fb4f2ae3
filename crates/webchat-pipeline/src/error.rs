use std::io;
use std::path::PathBuf;
use thiserror::Error;
use webchat_core::{ChatTurn, PipelineFailure};
use webchat_index::IndexError;

#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("document from {url} contains no text")]
    EmptyDocument { url: String },

    #[error("invalid chunking configuration: {0}")]
    InvalidChunking(String),

    #[error("none of {attempts} chunks could be embedded; last error: {last_error}")]
    NoEmbeddings { attempts: usize, last_error: String },

    #[error(transparent)]
    Index(#[from] IndexError),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no document loaded")]
    NoDocument,

    #[error("no index for the current document; create embeddings first")]
    NoIndex,

    #[error(transparent)]
    Ingestion(#[from] IngestionError),

    #[error(transparent)]
    Pipeline(#[from] PipelineFailure),

    /// The turn was answered and kept in memory, but the transcript file is stale.
    #[error("failed to write transcript {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
        turn: Box<ChatTurn>,
    },
}
