//! Crawler configuration

use serde::{Deserialize, Serialize};

/// HTTP fetch settings for page extraction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrawlerConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl crate::validation::Validate for CrawlerConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::validation::{check_min, check_not_empty};

        check_min("crawler.timeout_secs", self.timeout_secs, 1)?;
        check_not_empty("crawler.user_agent", &self.user_agent)
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("webchat/", env!("CARGO_PKG_VERSION")).to_string()
}
