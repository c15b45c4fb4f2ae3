//! `WEBCHAT_<SECTION>_<FIELD>` environment overrides
//!
//! `WEBCHAT_LLM_MODEL=qwen2.5:1.5b` sets `llm.model`,
//! `WEBCHAT_CHAT_TOP_K=5` sets `chat.top_k`.

use crate::{error::ConfigError, Backend, Config, Result};
use std::path::PathBuf;
use std::str::FromStr;

const PREFIX: &str = "WEBCHAT_";

/// Overrides from the process environment, or `None` when no variable is set.
pub fn from_env() -> Result<Option<Config>> {
    from_vars(std::env::vars())
}

/// Same as [`from_env`] over an explicit variable list.
pub fn from_vars<I>(vars: I) -> Result<Option<Config>>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut vars: Vec<(String, String)> = vars
        .into_iter()
        .filter(|(key, _)| key.starts_with(PREFIX))
        .collect();
    if vars.is_empty() {
        return Ok(None);
    }
    // apply in a stable order so errors are deterministic
    vars.sort();

    let mut config = Config::default();
    for (key, value) in &vars {
        set(&mut config, key, value)?;
    }
    Ok(Some(config))
}

fn set(config: &mut Config, var: &str, value: &str) -> Result<()> {
    let rest = var.strip_prefix(PREFIX).unwrap_or(var).to_ascii_lowercase();
    let Some((section, field)) = rest.split_once('_').filter(|(_, f)| !f.is_empty()) else {
        return Err(env_error(var, "expected WEBCHAT_<SECTION>_<FIELD>"));
    };

    match (section, field) {
        ("core", "transcript_path") => config.core.transcript_path = PathBuf::from(value),
        ("core", "extract_dir") => config.core.extract_dir = PathBuf::from(value),

        ("crawler", "timeout_secs") => config.crawler.timeout_secs = number(var, value)?,
        ("crawler", "user_agent") => config.crawler.user_agent = value.to_string(),

        ("chunking", "chunk_size") => config.chunking.chunk_size = number(var, value)?,
        ("chunking", "chunk_overlap") => config.chunking.chunk_overlap = number(var, value)?,

        ("embedding", "backend") => config.embedding.backend = backend(var, value)?,
        ("embedding", "model_name") => config.embedding.model_name = value.to_string(),
        ("embedding", "api_base") => config.embedding.api_base = Some(value.to_string()),

        ("llm", "backend") => config.llm.backend = backend(var, value)?,
        ("llm", "model") => config.llm.model = value.to_string(),
        ("llm", "api_base") => config.llm.api_base = Some(value.to_string()),
        ("llm", "timeout_secs") => config.llm.timeout_secs = number(var, value)?,

        ("summary", "max_input_chars") => config.summary.max_input_chars = number(var, value)?,
        ("summary", "temperature") => config.summary.temperature = number(var, value)?,
        ("summary", "max_tokens") => config.summary.max_tokens = number(var, value)?,

        ("chat", "top_k") => config.chat.top_k = number(var, value)?,
        ("chat", "temperature") => config.chat.temperature = number(var, value)?,
        ("chat", "max_tokens") => config.chat.max_tokens = Some(number(var, value)?),

        _ => return Err(env_error(var, format!("no setting {}.{}", section, field))),
    }
    Ok(())
}

fn number<T: FromStr>(var: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| env_error(var, format!("'{}' is not a valid number", value)))
}

fn backend(var: &str, value: &str) -> Result<Backend> {
    value.parse().map_err(|_| {
        env_error(
            var,
            format!("'{}' is not one of: {}", value, Backend::NAMES.join(", ")),
        )
    })
}

fn env_error(var: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::Env {
        var: var.to_string(),
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn unrelated_variables_are_ignored() {
        let found = from_vars(vars(&[("HOME", "/root"), ("OLLAMA_BASE_URL", "http://x")])).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn sets_fields_across_sections() {
        let config = from_vars(vars(&[
            ("WEBCHAT_CHAT_TOP_K", "6"),
            ("WEBCHAT_LLM_BACKEND", "OpenAI"),
            ("WEBCHAT_LLM_MODEL", "qwen2.5:1.5b"),
            ("WEBCHAT_CHAT_MAX_TOKENS", "300"),
            ("WEBCHAT_CORE_TRANSCRIPT_PATH", "/tmp/chat.txt"),
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(config.chat.top_k, 6);
        assert_eq!(config.chat.max_tokens, Some(300));
        assert_eq!(config.llm.backend, Backend::OpenAi);
        assert_eq!(config.llm.model, "qwen2.5:1.5b");
        assert_eq!(config.core.transcript_path, PathBuf::from("/tmp/chat.txt"));
    }

    #[test]
    fn malformed_values_name_the_variable() {
        let err = from_vars(vars(&[("WEBCHAT_CHUNKING_CHUNK_SIZE", "huge")])).unwrap_err();
        assert!(matches!(&err, ConfigError::Env { var, .. } if var == "WEBCHAT_CHUNKING_CHUNK_SIZE"));

        let err = from_vars(vars(&[("WEBCHAT_EMBEDDING_BACKEND", "vllm")])).unwrap_err();
        assert!(err.to_string().contains("ollama, openai"));
    }

    #[test]
    fn unknown_keys_rejected() {
        let mut config = Config::default();
        assert!(set(&mut config, "WEBCHAT_GRAPH_DEPTH", "3").is_err());
        assert!(set(&mut config, "WEBCHAT_CHAT", "3").is_err());
        assert!(set(&mut config, "WEBCHAT_CHAT_", "3").is_err());
    }
}
