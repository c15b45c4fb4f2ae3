//! Building a [`Config`] from layered sources
//!
//! Precedence, lowest first: built-in defaults, a config file, `WEBCHAT_*`
//! environment variables, then values set in code. The merged result is
//! validated once at the end.

pub mod env;
pub mod file;
pub mod formats;
mod merge;

pub use formats::ConfigFormat;

use crate::{Config, Result, Validate};
use merge::Overlay;
use std::path::{Path, PathBuf};

/// Names looked for in the working directory by [`Config::load`].
pub const DEFAULT_CONFIG_FILES: [&str; 4] = [
    ".webchat.toml",
    ".webchat.yml",
    ".webchat.yaml",
    ".webchat.json",
];

#[derive(Debug, Clone)]
enum Layer {
    File(PathBuf),
    Env,
    Explicit(Config),
}

/// Collects config layers and resolves them in the order they were added.
///
/// ```no_run
/// use webchat_config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .with_file(".webchat.toml")
///     .with_env()
///     .build()?;
/// # Ok::<(), webchat_config::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    layers: Vec<Layer>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.layers.push(Layer::File(path.as_ref().to_path_buf()));
        self
    }

    pub fn with_env(mut self) -> Self {
        self.layers.push(Layer::Env);
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.layers.push(Layer::Explicit(config));
        self
    }

    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();
        for layer in self.layers {
            let upper = match layer {
                Layer::File(path) => file::read_config_file(&path)?,
                Layer::Env => match env::from_env()? {
                    Some(upper) => upper,
                    None => continue,
                },
                Layer::Explicit(upper) => upper,
            };
            config = config.overlay(upper);
        }
        config.validate()?;
        Ok(config)
    }
}

impl Config {
    /// First of [`DEFAULT_CONFIG_FILES`] found in the working directory, then the environment.
    pub fn load() -> Result<Self> {
        let found = DEFAULT_CONFIG_FILES
            .iter()
            .map(Path::new)
            .find(|path| path.is_file());
        let builder = match found {
            Some(path) => ConfigBuilder::new().with_file(path),
            None => ConfigBuilder::new(),
        };
        builder.with_env().build()
    }

    /// `path`, then the environment.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        ConfigBuilder::new().with_file(path).with_env().build()
    }
}
