//! Which model turns chunks and questions into vectors

use super::Backend;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddingConfig {
    #[serde(default)]
    pub backend: Backend,

    /// e.g. "nomic-embed-text" on Ollama, "text-embedding-3-small" on OpenAI
    #[serde(default = "default_model_name")]
    pub model_name: String,

    /// Server root; falls back to `OLLAMA_BASE_URL` then the backend default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Ollama,
            model_name: default_model_name(),
            api_base: None,
        }
    }
}

impl crate::validation::Validate for EmbeddingConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::validation::{check_base_url, check_not_empty};

        check_not_empty("embedding.model_name", &self.model_name)?;
        if let Some(base) = &self.api_base {
            check_base_url("embedding.api_base", base)?;
        }
        Ok(())
    }
}

fn default_model_name() -> String {
    "nomic-embed-text".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn defaults_to_local_nomic() {
        let config = EmbeddingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.backend, Backend::Ollama);
        assert_eq!(config.model_name, "nomic-embed-text");
    }

    #[test]
    fn blank_model_or_bad_base_rejected() {
        let blank = EmbeddingConfig {
            model_name: "  ".to_string(),
            ..Default::default()
        };
        assert!(blank.validate().is_err());

        let hostless = EmbeddingConfig {
            api_base: Some("localhost".to_string()),
            ..Default::default()
        };
        assert!(hostless.validate().is_err());
    }

    #[test]
    fn backend_reads_from_yaml() {
        let config: EmbeddingConfig = serde_yaml::from_str("backend: openai\n").unwrap();
        assert_eq!(config.backend, Backend::OpenAi);
        assert_eq!(config.model_name, "nomic-embed-text");
    }
}
