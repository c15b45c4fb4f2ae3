pub mod chat;
pub mod error;
pub mod history;
pub mod ingest;
pub mod prompts;
pub mod session;
pub mod summarize;

pub use chat::ChatBot;
pub use error::{IngestionError, SessionError};
pub use history::{ChatHistory, TranscriptWriter};
pub use ingest::EmbeddingIngestor;
pub use session::Session;
pub use summarize::WebSummarizer;
