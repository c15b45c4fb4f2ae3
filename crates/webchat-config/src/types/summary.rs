//! Summarization configuration

use serde::{Deserialize, Serialize};

/// Bounds and sampling for the single summarization call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryConfig {
    /// Characters of extracted text submitted to the model; longer pages are cut
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,

    /// Sampling temperature; low values keep summaries precise
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens generated for the summary
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_input_chars: default_max_input_chars(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl crate::validation::Validate for SummaryConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::validation::{check_min, check_range};

        check_min("summary.max_input_chars", self.max_input_chars as u64, 1)?;
        check_range("summary.temperature", self.temperature, 0.0..=2.0)?;
        check_min("summary.max_tokens", u64::from(self.max_tokens), 1)
    }
}

fn default_max_input_chars() -> usize {
    15_000
}

fn default_temperature() -> f32 {
    0.2
}

fn default_max_tokens() -> u32 {
    500
}
