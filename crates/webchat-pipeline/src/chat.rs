use crate::prompts::QaPrompt;
use anyhow::Result;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;
use webchat_config::ChatConfig;
use webchat_core::llm::{LlmClient, SamplingParams};
use webchat_core::traits::Embedder;
use webchat_core::{Answer, PipelineFailure};
use webchat_index::{ScoredChunk, VectorIndex};

/// Retrieval-augmented question answering over one document's index.
///
/// Holds no per-question state, so a single bot can serve concurrent callers.
pub struct ChatBot {
    index: Arc<VectorIndex>,
    embedder: Arc<dyn Embedder>,
    llm: Arc<dyn LlmClient>,
    config: ChatConfig,
}

impl ChatBot {
    pub fn new(
        index: Arc<VectorIndex>,
        embedder: Arc<dyn Embedder>,
        llm: Arc<dyn LlmClient>,
        config: ChatConfig,
    ) -> Self {
        Self {
            index,
            embedder,
            llm,
            config,
        }
    }

    pub fn model(&self) -> &str {
        self.llm.model()
    }

    /// The `top_k` chunks closest to `question`.
    pub fn retrieve(&self, question: &str) -> Result<Vec<ScoredChunk>> {
        let query = self.embedder.embed(question)?;
        let hits = self.index.search(&query, self.config.top_k)?;
        debug!(question, hits = hits.len(), "retrieved context");
        Ok(hits)
    }

    pub fn answer(&self, question: &str) -> Result<Answer, PipelineFailure> {
        let hits = self
            .retrieve(question)
            .map_err(|e| PipelineFailure::retrieval(self.model(), &e))?;

        let context = hits
            .iter()
            .map(|hit| hit.chunk.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");
        let prompt = QaPrompt {
            model: self.model(),
            context: &context,
            question,
        }
        .render();
        let params = SamplingParams {
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let answer = self
            .llm
            .complete(&prompt, &params)
            .map_err(|e| PipelineFailure::generation(self.model(), &e))?;
        let sources: BTreeSet<String> = hits.into_iter().map(|hit| hit.chunk.source).collect();

        Ok(Answer { answer, sources })
    }
}
