//! Text chunking configuration

use serde::{Deserialize, Serialize};

/// Configuration for splitting extracted text before embedding
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChunkingConfig {
    /// Maximum characters per chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Characters repeated between neighbouring chunks; must stay below `chunk_size`
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
        }
    }
}

impl crate::validation::Validate for ChunkingConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::error::ConfigError;
        use crate::validation::check_min;

        check_min("chunking.chunk_size", self.chunk_size as u64, 1)?;
        if self.chunk_overlap >= self.chunk_size {
            return Err(ConfigError::invalid(
                "chunking.chunk_overlap",
                format!(
                    "{} must be smaller than chunk_size ({})",
                    self.chunk_overlap, self.chunk_size
                ),
            ));
        }
        Ok(())
    }
}

fn default_chunk_size() -> usize {
    500
}

fn default_chunk_overlap() -> usize {
    50
}
