//! Server API flavours shared by the embedding and generation settings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HTTP API spoken by a model server.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Backend {
    /// Ollama's native API, local by default
    #[default]
    #[serde(rename = "ollama")]
    Ollama,
    /// OpenAI-compatible API; reads `OPENAI_API_KEY`
    #[serde(rename = "openai")]
    OpenAi,
}

impl Backend {
    pub const NAMES: [&'static str; 2] = ["ollama", "openai"];

    pub fn name(self) -> &'static str {
        match self {
            Backend::Ollama => "ollama",
            Backend::OpenAi => "openai",
        }
    }

    /// Root URL used when no `api_base` is configured.
    pub fn default_base(self) -> &'static str {
        match self {
            Backend::Ollama => "http://localhost:11434",
            Backend::OpenAi => "https://api.openai.com/v1",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = crate::error::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ollama" => Ok(Backend::Ollama),
            "openai" => Ok(Backend::OpenAi),
            _ => Err(crate::error::ConfigError::unknown_option(
                "backend",
                s,
                &Self::NAMES,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("OpenAI".parse::<Backend>().unwrap(), Backend::OpenAi);
        assert_eq!(" ollama ".parse::<Backend>().unwrap(), Backend::Ollama);
        assert!("vllm".parse::<Backend>().is_err());
    }

    #[test]
    fn serializes_as_lowercase_names() {
        for backend in [Backend::Ollama, Backend::OpenAi] {
            let json = serde_json::to_string(&backend).unwrap();
            assert_eq!(json, format!("\"{}\"", backend.name()));
        }
    }
}
