//! Config document formats, chosen by file extension

use crate::{error::ConfigError, Config, Result};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("yml" | "yaml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedExtension {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        }
    }

    /// Deserialize `content`; `path` only labels errors.
    pub fn parse(self, content: &str, path: Option<&str>) -> Result<Config> {
        let failed = |message: String, position: Option<(usize, usize)>| {
            ConfigError::parse(self.name(), path, content, message, position)
        };
        match self {
            Self::Toml => toml::from_str(content).map_err(|e| {
                let position = e.span().map(|span| line_col(content, span.start));
                failed(e.message().to_string(), position)
            }),
            Self::Yaml => {
                // serde_yaml rejects an empty stream; treat it as all defaults
                if content.trim().is_empty() {
                    return Ok(Config::default());
                }
                serde_yaml::from_str(content).map_err(|e| {
                    let position = e.location().map(|l| (l.line(), l.column()));
                    failed(e.to_string(), position)
                })
            }
            Self::Json => serde_json::from_str(content).map_err(|e| {
                let position = (e.line() > 0).then(|| (e.line(), e.column()));
                failed(e.to_string(), position)
            }),
        }
    }
}

/// 1-based line and column of a byte offset.
fn line_col(content: &str, offset: usize) -> (usize, usize) {
    let before = content.get(..offset).unwrap_or(content);
    let line = before.matches('\n').count() + 1;
    let column = before
        .rsplit('\n')
        .next()
        .map(|tail| tail.chars().count() + 1)
        .unwrap_or(1);
    (line, column)
}
