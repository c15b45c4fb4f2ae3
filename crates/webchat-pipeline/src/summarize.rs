use crate::prompts::SummaryPrompt;
use std::sync::Arc;
use tracing::debug;
use webchat_config::SummaryConfig;
use webchat_core::llm::{LlmClient, SamplingParams};
use webchat_core::PipelineFailure;

pub struct WebSummarizer {
    llm: Arc<dyn LlmClient>,
    config: SummaryConfig,
}

impl WebSummarizer {
    pub fn new(llm: Arc<dyn LlmClient>, config: SummaryConfig) -> Self {
        Self { llm, config }
    }

    pub fn model(&self) -> &str {
        self.llm.model()
    }

    /// One bounded completion over the first `max_input_chars` characters of `text`.
    pub fn summarize(&self, text: &str) -> Result<String, PipelineFailure> {
        let content = truncate_chars(text, self.config.max_input_chars);
        if content.len() < text.len() {
            debug!(
                original_bytes = text.len(),
                kept_bytes = content.len(),
                max_chars = self.config.max_input_chars,
                "truncated summary input"
            );
        }

        let prompt = SummaryPrompt {
            model: self.model(),
            content,
        }
        .render();
        let params = SamplingParams {
            temperature: self.config.temperature,
            max_tokens: Some(self.config.max_tokens),
        };

        self.llm
            .complete(&prompt, &params)
            .map_err(|e| PipelineFailure::generation(self.model(), &e))
    }
}

/// Prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
