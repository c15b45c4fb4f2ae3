//! Settings for the webchat crawl, summarize and chat pipeline
//!
//! Config documents may be TOML, YAML or JSON. Every field has a default,
//! so any section or key can be left out.
//!
//! ```no_run
//! use webchat_config::Config;
//!
//! // .webchat.{toml,yml,yaml,json} in the working directory, plus WEBCHAT_* overrides
//! let config = Config::load()?;
//! println!("top_k = {}", config.chat.top_k);
//! # Ok::<(), webchat_config::ConfigError>(())
//! ```

pub mod error;
pub mod loader;
pub mod types;
pub mod validation;

pub use error::{ConfigError, ErrorFormatter, Result};
pub use loader::ConfigBuilder;
pub use types::*;
pub use validation::Validate;
