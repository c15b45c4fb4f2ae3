//! Core configuration (output paths)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the session writes its artifacts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoreConfig {
    /// Chat transcript, rewritten in full after every turn
    #[serde(default = "default_transcript_path")]
    pub transcript_path: PathBuf,

    /// Default directory for exported extracted text
    #[serde(default = "default_extract_dir")]
    pub extract_dir: PathBuf,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            transcript_path: default_transcript_path(),
            extract_dir: default_extract_dir(),
        }
    }
}

impl crate::validation::Validate for CoreConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::error::ConfigError;

        if self.transcript_path.as_os_str().is_empty() {
            return Err(ConfigError::invalid("core.transcript_path", "cannot be empty"));
        }
        // the transcript is replaced wholesale, so it must be a file path
        if self.transcript_path.is_dir() {
            return Err(ConfigError::invalid(
                "core.transcript_path",
                format!("{} is a directory", self.transcript_path.display()),
            ));
        }
        Ok(())
    }
}

fn default_transcript_path() -> PathBuf {
    PathBuf::from("history").join("chat_history.txt")
}

fn default_extract_dir() -> PathBuf {
    PathBuf::from(".")
}
