pub mod chat;
pub mod crawl;
pub mod models;
pub mod summarize;
pub mod ui;
pub mod utils;

pub use chat::handle_chat;
pub use crawl::handle_crawl;
pub use models::handle_models;
pub use summarize::handle_summarize;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use webchat_config::{Config, ErrorFormatter, SupportedModel};

#[derive(Parser)]
#[command(name = "webchat")]
#[command(about = "Extract a web page, summarize it and chat with it using a local LLM")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Model used for summaries and answers
    #[arg(short, long, value_enum, global = true)]
    pub model: Option<CliModel>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the supported models
    Models,
    /// Extract the text of a page
    Crawl {
        url: String,
        /// Save the full extracted text to this file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Extract a page and summarize it
    Summarize { url: String },
    /// Extract a page, index it and start an interactive chat
    Chat { url: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CliModel {
    #[value(name = "deepseek-r1:1.5b", alias = "deepseek")]
    DeepseekR1,
    #[value(name = "qwen2.5:1.5b", alias = "qwen")]
    Qwen25,
    #[value(name = "llama3.2:3b", alias = "llama")]
    Llama32,
    #[value(name = "hermes3:3b", alias = "hermes")]
    Hermes3,
}

impl From<CliModel> for SupportedModel {
    fn from(model: CliModel) -> Self {
        match model {
            CliModel::DeepseekR1 => SupportedModel::DeepseekR1,
            CliModel::Qwen25 => SupportedModel::Qwen25,
            CliModel::Llama32 => SupportedModel::Llama32,
            CliModel::Hermes3 => SupportedModel::Hermes3,
        }
    }
}

/// Layered config (file, environment) with the `--model` override applied last.
pub fn load_config(path: Option<&Path>, model: Option<CliModel>) -> Result<Config> {
    let loaded = match path {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    };
    let mut config = loaded.map_err(|e| anyhow!(ErrorFormatter::new(e).format()))?;
    if let Some(model) = model {
        config.llm.model = SupportedModel::from(model).id().to_string();
    }
    Ok(config)
}
