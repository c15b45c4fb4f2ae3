//! Generation model settings and the models a session can pick from

use super::Backend;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LlmConfig {
    #[serde(default)]
    pub backend: Backend,

    /// Model id sent with every request; used for both summaries and answers
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,

    /// Per-request HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// The fixed menu of local models offered for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SupportedModel {
    #[default]
    DeepseekR1,
    Qwen25,
    Llama32,
    Hermes3,
}

impl SupportedModel {
    pub const ALL: [SupportedModel; 4] = [
        SupportedModel::DeepseekR1,
        SupportedModel::Qwen25,
        SupportedModel::Llama32,
        SupportedModel::Hermes3,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SupportedModel::DeepseekR1 => "deepseek-r1:1.5b",
            SupportedModel::Qwen25 => "qwen2.5:1.5b",
            SupportedModel::Llama32 => "llama3.2:3b",
            SupportedModel::Hermes3 => "hermes3:3b",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SupportedModel::DeepseekR1 => "Deepseek",
            SupportedModel::Qwen25 => "Qwen",
            SupportedModel::Llama32 => "Llama",
            SupportedModel::Hermes3 => "Hermes",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }
}

impl fmt::Display for SupportedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SupportedModel {
    type Err = crate::error::ConfigError;

    /// Model id, or its label in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.id() == wanted || m.label().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| {
                let ids = Self::ALL.map(SupportedModel::id);
                crate::error::ConfigError::unknown_option("llm.model", s, &ids)
            })
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            model: default_model(),
            api_base: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl crate::validation::Validate for LlmConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::validation::{check_base_url, check_min, check_not_empty};

        check_not_empty("llm.model", &self.model)?;
        check_min("llm.timeout_secs", self.timeout_secs, 1)?;
        match &self.api_base {
            Some(base) => check_base_url("llm.api_base", base),
            None => Ok(()),
        }
    }
}

fn default_model() -> String {
    SupportedModel::default().id().to_string()
}

fn default_timeout_secs() -> u64 {
    120
}
