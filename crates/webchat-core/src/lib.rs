pub mod chunking;
pub mod crawl;
pub mod embedder;
pub mod error;
pub mod llm;
pub mod models;
pub mod traits;

pub use error::{FailureKind, PipelineFailure};
pub use models::{Answer, ChatTurn, Chunk, RawDocument};
