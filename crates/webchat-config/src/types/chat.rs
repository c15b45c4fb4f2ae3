//! Retrieval-augmented chat configuration

use serde::{Deserialize, Serialize};

/// Retrieval depth and answer sampling
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatConfig {
    /// Chunks retrieved per question
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Sampling temperature; balances fidelity and fluency
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Optional cap on generated tokens per answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            temperature: default_temperature(),
            max_tokens: None,
        }
    }
}

impl crate::validation::Validate for ChatConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::validation::{check_min, check_range};

        check_min("chat.top_k", self.top_k as u64, 1)?;
        check_range("chat.temperature", self.temperature, 0.0..=2.0)?;
        match self.max_tokens {
            Some(limit) => check_min("chat.max_tokens", u64::from(limit), 1),
            None => Ok(()),
        }
    }
}

fn default_top_k() -> usize {
    3
}

fn default_temperature() -> f32 {
    0.7
}
