#![allow(dead_code)]

use anyhow::{anyhow, Result};
use std::sync::Mutex;
use webchat_core::llm::{LlmClient, SamplingParams};
use webchat_core::traits::Embedder;

const VOCABULARY: &[&str] = &[
    "capital", "paris", "france", "eiffel", "tower", "rust", "ownership", "borrow", "garden",
    "tomato",
];

/// Bag-of-keywords embedder: one dimension per vocabulary word plus a bias.
pub struct KeywordEmbedder;

impl Embedder for KeywordEmbedder {
    fn model_name(&self) -> &str {
        "keyword-mock"
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let lower = text.to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();
        let mut vector: Vec<f32> = VOCABULARY
            .iter()
            .map(|term| words.iter().filter(|w| *w == term).count() as f32)
            .collect();
        vector.push(0.1);
        Ok(vector)
    }
}

pub struct FailingEmbedder;

impl Embedder for FailingEmbedder {
    fn model_name(&self) -> &str {
        "failing-mock"
    }

    fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        Err(anyhow!("embedding service unreachable"))
    }
}

pub enum Reply {
    /// Return the context section of the prompt.
    EchoContext,
    Fixed(String),
    Fail(String),
}

/// LLM double that records every prompt and sampling setting it receives.
pub struct MockLlm {
    model: String,
    reply: Reply,
    pub prompts: Mutex<Vec<String>>,
    pub params: Mutex<Vec<SamplingParams>>,
}

impl MockLlm {
    pub fn new(model: &str, reply: Reply) -> Self {
        Self {
            model: model.to_string(),
            reply,
            prompts: Mutex::new(Vec::new()),
            params: Mutex::new(Vec::new()),
        }
    }

    pub fn last_prompt(&self) -> String {
        self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

impl LlmClient for MockLlm {
    fn model(&self) -> &str {
        &self.model
    }

    fn complete(&self, prompt: &str, params: &SamplingParams) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.params.lock().unwrap().push(*params);
        match &self.reply {
            Reply::EchoContext => {
                let context = prompt
                    .split("Context:\n")
                    .nth(1)
                    .and_then(|rest| rest.split("\n\nQuestion:").next())
                    .unwrap_or("");
                Ok(format!("From the page: {}", context))
            }
            Reply::Fixed(text) => Ok(text.clone()),
            Reply::Fail(message) => Err(anyhow!("{}", message)),
        }
    }
}
