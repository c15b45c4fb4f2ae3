use crate::embedder::ollama_base;
use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use serde_json::{json, Value};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use webchat_config::{Backend, LlmConfig};

/// Sampling knobs for a single completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

/// A single-prompt completion endpoint bound to one model.
pub trait LlmClient: Send + Sync {
    fn model(&self) -> &str;
    fn complete(&self, prompt: &str, params: &SamplingParams) -> Result<String>;
}

/// Build a client for `model` on the configured backend.
pub fn select_llm(config: &LlmConfig, model: &str) -> Result<Arc<dyn LlmClient>> {
    match config.backend {
        Backend::Ollama => Ok(Arc::new(OllamaClient::new(
            model.to_string(),
            ollama_base(config.api_base.as_deref()),
            config.timeout_secs,
        )?)),
        Backend::OpenAi => {
            let api_key = env::var("OPENAI_API_KEY")
                .map_err(|_| anyhow!("OPENAI_API_KEY environment variable not set"))?;
            Ok(Arc::new(OpenAiClient::new(
                model.to_string(),
                api_key,
                config
                    .api_base
                    .clone()
                    .unwrap_or_else(|| Backend::OpenAi.default_base().to_string()),
                config.timeout_secs,
            )?))
        }
    }
}

pub struct OllamaClient {
    client: Client,
    model: String,
    base_url: String,
}

impl OllamaClient {
    pub fn new(model: String, base_url: String, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            model,
            base_url,
        })
    }

    fn request_body(&self, prompt: &str, params: &SamplingParams) -> Value {
        let mut options = json!({ "temperature": params.temperature });
        if let Some(n) = params.max_tokens {
            options["num_predict"] = json!(n);
        }
        json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "stream": false,
            "options": options
        })
    }
}

impl LlmClient for OllamaClient {
    fn model(&self) -> &str {
        &self.model
    }

    fn complete(&self, prompt: &str, params: &SamplingParams) -> Result<String> {
        let url = format!("{}/api/chat", self.base_url);
        let res = self
            .client
            .post(&url)
            .json(&self.request_body(prompt, params))
            .send()
            .with_context(|| format!("ollama chat request to {}", self.base_url))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().unwrap_or_default();
            return Err(anyhow!("Ollama API error: {} - {}", status, body));
        }

        let json: Value = res.json()?;
        json["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow!("Invalid response from Ollama: missing message content"))
    }
}

pub struct OpenAiClient {
    client: Client,
    model: String,
    api_key: String,
    api_base: String,
}

impl OpenAiClient {
    pub fn new(model: String, api_key: String, api_base: String, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            model,
            api_key,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    fn request_body(&self, prompt: &str, params: &SamplingParams) -> Value {
        let mut body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": params.temperature
        });
        if let Some(mt) = params.max_tokens {
            body["max_tokens"] = json!(mt);
        }
        body
    }
}

impl LlmClient for OpenAiClient {
    fn model(&self) -> &str {
        &self.model
    }

    fn complete(&self, prompt: &str, params: &SamplingParams) -> Result<String> {
        let url = format!("{}/chat/completions", self.api_base);
        let res = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&self.request_body(prompt, params))
            .send()
            .context("Failed to call OpenAI chat API")?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().unwrap_or_default();
            return Err(anyhow!("OpenAI API error: {} - {}", status, text));
        }

        let json: Value = res.json()?;
        if let Some(error) = json.get("error") {
            return Err(anyhow!("OpenAI API returned error: {}", error));
        }

        json["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow!("Invalid response format: missing content in choices"))
    }
}
