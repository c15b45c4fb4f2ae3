//! Reading a config document from disk

use super::formats::ConfigFormat;
use crate::{error::ConfigError, Config, Result};
use std::fs;
use std::path::Path;

/// Read and parse `path`. Validation happens once all layers are merged.
pub fn read_config_file(path: &Path) -> Result<Config> {
    if !path.is_file() {
        return Err(ConfigError::Missing {
            path: path.to_path_buf(),
        });
    }
    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    format.parse(&content, Some(&path.display().to_string()))
}
