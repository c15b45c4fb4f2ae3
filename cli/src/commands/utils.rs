use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use termimad::{FmtText, MadSkin};
use webchat_config::Config;
use webchat_core::crawl::{crawl_blocking, HttpCrawler};
use webchat_core::embedder::select_embedder;
use webchat_core::llm::select_llm;
use webchat_core::RawDocument;
use webchat_pipeline::Session;

pub fn render_markdown_answer(text: &str) -> String {
    let skin = MadSkin::default();
    let (w, _) = termimad::terminal_size();
    let width = std::cmp::max(20, w.saturating_sub(4) as usize);
    FmtText::from(&skin, text, Some(width)).to_string()
}

pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Fetch `url` and extract its text, reporting the time taken.
pub fn extract(config: &Config, url: &str) -> Result<(RawDocument, Duration)> {
    let crawler = HttpCrawler::new(&config.crawler)?;
    let progress = spinner(&format!("Extracting {}...", url));
    let started = Instant::now();
    let result = crawl_blocking(&crawler, url);
    progress.finish_and_clear();
    let document = result.with_context(|| format!("extraction failed for {}", url))?;
    Ok((document, started.elapsed()))
}

/// A session wired to the configured embedding and completion backends.
pub fn build_session(config: &Config) -> Result<Session> {
    let embedder = select_embedder(&config.embedding)?;
    let llm = select_llm(&config.llm, &config.llm.model)?;
    Ok(Session::new(config, embedder, llm)?)
}
