//! Config sections, one per pipeline stage

pub mod backend;
pub mod chat;
pub mod chunking;
pub mod core;
pub mod crawler;
pub mod embedding;
pub mod llm;
pub mod summary;

pub use backend::Backend;
pub use chat::ChatConfig;
pub use chunking::ChunkingConfig;
pub use core::CoreConfig;
pub use crawler::CrawlerConfig;
pub use embedding::EmbeddingConfig;
pub use llm::{LlmConfig, SupportedModel};
pub use summary::SummaryConfig;

use serde::{Deserialize, Serialize};

/// Every setting the crawl, summarize and chat pipeline reads.
///
/// Each section defaults independently, so an empty document is a full config.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,

    #[serde(default)]
    pub crawler: CrawlerConfig,

    #[serde(default)]
    pub chunking: ChunkingConfig,

    #[serde(default)]
    pub embedding: EmbeddingConfig,

    #[serde(default)]
    pub llm: LlmConfig,

    #[serde(default)]
    pub summary: SummaryConfig,

    #[serde(default)]
    pub chat: ChatConfig,
}

impl crate::validation::Validate for Config {
    fn validate(&self) -> crate::error::Result<()> {
        self.core.validate()?;
        self.crawler.validate()?;
        self.chunking.validate()?;
        self.embedding.validate()?;
        self.llm.validate()?;
        self.summary.validate()?;
        self.chat.validate()
    }
}
