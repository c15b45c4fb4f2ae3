use crate::traits::Embedder;
use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use serde_json::{json, Value};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use webchat_config::{Backend, EmbeddingConfig};

const EMBED_TIMEOUT_SECS: u64 = 60;

/// Resolve the Ollama endpoint: explicit config, then `OLLAMA_BASE_URL`, then localhost.
pub fn ollama_base(configured: Option<&str>) -> String {
    configured
        .map(str::to_string)
        .or_else(|| env::var("OLLAMA_BASE_URL").ok())
        .unwrap_or_else(|| Backend::Ollama.default_base().to_string())
        .trim_end_matches('/')
        .to_string()
}

pub fn select_embedder(config: &EmbeddingConfig) -> Result<Arc<dyn Embedder>> {
    match config.backend {
        Backend::Ollama => Ok(Arc::new(OllamaEmbedder::new(
            config.model_name.clone(),
            ollama_base(config.api_base.as_deref()),
        )?)),
        Backend::OpenAi => Ok(Arc::new(OpenAiEmbedder::from_env(
            config.model_name.clone(),
            config.api_base.clone(),
        )?)),
    }
}

pub struct OllamaEmbedder {
    client: Client,
    model: String,
    base_url: String,
}

impl OllamaEmbedder {
    pub fn new(model: String, base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(EMBED_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            model,
            base_url,
        })
    }
}

impl Embedder for OllamaEmbedder {
    fn model_name(&self) -> &str {
        &self.model
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let resp: Value = self
            .client
            .post(format!("{}/api/embeddings", self.base_url))
            .json(&json!({
                "model": self.model,
                "prompt": text
            }))
            .send()
            .with_context(|| format!("ollama embeddings request to {}", self.base_url))?
            .error_for_status()?
            .json()?;
        parse_ollama_embedding(&resp)
    }
}

pub struct OpenAiEmbedder {
    client: Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl OpenAiEmbedder {
    pub fn from_env(model: String, api_base: Option<String>) -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| anyhow!("OPENAI_API_KEY environment variable not set"))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(EMBED_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            api_key,
            model,
            api_base: api_base
                .unwrap_or_else(|| Backend::OpenAi.default_base().to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }
}

impl Embedder for OpenAiEmbedder {
    fn model_name(&self) -> &str {
        &self.model
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let res = self
            .client
            .post(format!("{}/embeddings", self.api_base))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "input": text,
                "model": self.model
            }))
            .send()
            .context("Failed to call OpenAI embeddings API")?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().unwrap_or_default();
            return Err(anyhow!("OpenAI API error: {} - {}", status, body));
        }

        let resp: Value = res.json()?;
        parse_openai_embedding(&resp)
    }
}

fn parse_ollama_embedding(resp: &Value) -> Result<Vec<f32>> {
    let arr = resp
        .get("embedding")
        .and_then(|v| v.as_array())
        .ok_or_else(|| anyhow!("Invalid response from Ollama: {}", resp))?;
    if arr.is_empty() {
        return Err(anyhow!("Ollama returned an empty embedding"));
    }
    arr.iter()
        .map(|v| {
            v.as_f64()
                .map(|f| f as f32)
                .ok_or_else(|| anyhow!("non-numeric embedding component: {}", v))
        })
        .collect()
}

fn parse_openai_embedding(resp: &Value) -> Result<Vec<f32>> {
    let emb_val = resp
        .get("data")
        .and_then(|d| d.get(0))
        .and_then(|item| item.get("embedding"))
        .ok_or_else(|| anyhow!("Invalid response from OpenAI: {}", resp))?;
    Ok(serde_json::from_value(emb_val.clone())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ollama_embedding() {
        let resp = json!({ "embedding": [0.5, -1.0, 2.0] });
        assert_eq!(parse_ollama_embedding(&resp).unwrap(), vec![0.5, -1.0, 2.0]);
    }

    #[test]
    fn rejects_malformed_ollama_response() {
        assert!(parse_ollama_embedding(&json!({ "error": "model not found" })).is_err());
        assert!(parse_ollama_embedding(&json!({ "embedding": [] })).is_err());
        assert!(parse_ollama_embedding(&json!({ "embedding": ["x"] })).is_err());
    }

    #[test]
    fn parses_openai_embedding() {
        let resp = json!({ "data": [ { "index": 0, "embedding": [0.1, 0.2] } ] });
        assert_eq!(parse_openai_embedding(&resp).unwrap(), vec![0.1, 0.2]);
        assert!(parse_openai_embedding(&json!({ "data": [] })).is_err());
    }

    #[test]
    fn explicit_base_wins_and_is_trimmed() {
        assert_eq!(ollama_base(Some("http://gpu:11434/")), "http://gpu:11434");
    }
}
