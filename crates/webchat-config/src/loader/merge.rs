//! Layering one config over another
//!
//! A value in the upper layer replaces the lower one only when it differs
//! from the built-in default, so a sparse file never resets what an
//! earlier layer set. Optional fields are replaced whenever they are `Some`.

use crate::{types::*, Config};

pub(crate) trait Overlay: Default {
    /// `self` is the lower layer, `upper` wins where it was customised.
    fn overlay(self, upper: Self) -> Self;
}

fn keep_or<T: PartialEq>(lower: T, upper: T, default: T) -> T {
    if upper == default {
        lower
    } else {
        upper
    }
}

fn keep_or_f32(lower: f32, upper: f32, default: f32) -> f32 {
    if (upper - default).abs() <= f32::EPSILON {
        lower
    } else {
        upper
    }
}

impl Overlay for Config {
    fn overlay(self, upper: Self) -> Self {
        Config {
            core: self.core.overlay(upper.core),
            crawler: self.crawler.overlay(upper.crawler),
            chunking: self.chunking.overlay(upper.chunking),
            embedding: self.embedding.overlay(upper.embedding),
            llm: self.llm.overlay(upper.llm),
            summary: self.summary.overlay(upper.summary),
            chat: self.chat.overlay(upper.chat),
        }
    }
}

impl Overlay for CoreConfig {
    fn overlay(self, upper: Self) -> Self {
        let d = Self::default();
        Self {
            transcript_path: keep_or(self.transcript_path, upper.transcript_path, d.transcript_path),
            extract_dir: keep_or(self.extract_dir, upper.extract_dir, d.extract_dir),
        }
    }
}

impl Overlay for CrawlerConfig {
    fn overlay(self, upper: Self) -> Self {
        let d = Self::default();
        Self {
            timeout_secs: keep_or(self.timeout_secs, upper.timeout_secs, d.timeout_secs),
            user_agent: keep_or(self.user_agent, upper.user_agent, d.user_agent),
        }
    }
}

impl Overlay for ChunkingConfig {
    fn overlay(self, upper: Self) -> Self {
        let d = Self::default();
        Self {
            chunk_size: keep_or(self.chunk_size, upper.chunk_size, d.chunk_size),
            chunk_overlap: keep_or(self.chunk_overlap, upper.chunk_overlap, d.chunk_overlap),
        }
    }
}

impl Overlay for EmbeddingConfig {
    fn overlay(self, upper: Self) -> Self {
        let d = Self::default();
        Self {
            backend: keep_or(self.backend, upper.backend, d.backend),
            model_name: keep_or(self.model_name, upper.model_name, d.model_name),
            api_base: upper.api_base.or(self.api_base),
        }
    }
}

impl Overlay for LlmConfig {
    fn overlay(self, upper: Self) -> Self {
        let d = Self::default();
        Self {
            backend: keep_or(self.backend, upper.backend, d.backend),
            model: keep_or(self.model, upper.model, d.model),
            api_base: upper.api_base.or(self.api_base),
            timeout_secs: keep_or(self.timeout_secs, upper.timeout_secs, d.timeout_secs),
        }
    }
}

impl Overlay for SummaryConfig {
    fn overlay(self, upper: Self) -> Self {
        let d = Self::default();
        Self {
            max_input_chars: keep_or(self.max_input_chars, upper.max_input_chars, d.max_input_chars),
            temperature: keep_or_f32(self.temperature, upper.temperature, d.temperature),
            max_tokens: keep_or(self.max_tokens, upper.max_tokens, d.max_tokens),
        }
    }
}

impl Overlay for ChatConfig {
    fn overlay(self, upper: Self) -> Self {
        let d = Self::default();
        Self {
            top_k: keep_or(self.top_k, upper.top_k, d.top_k),
            temperature: keep_or_f32(self.temperature, upper.temperature, d.temperature),
            max_tokens: upper.max_tokens.or(self.max_tokens),
        }
    }
}
