use super::ui;
use super::utils::{build_session, extract, render_markdown_answer, spinner};
use anyhow::Result;
use std::time::Instant;
use webchat_config::Config;

pub fn handle_summarize(config: &Config, url: &str) -> Result<()> {
    let mut session = build_session(config)?;
    let (document, elapsed) = extract(config, url)?;
    ui::print_success(&format!("Extraction complete! {}", ui::format_elapsed(elapsed)));
    session.start(document);

    let model = session.model().to_string();
    let progress = spinner(&format!("Summarizing with {}...", model));
    let started = Instant::now();
    let result = session.summarize();
    progress.finish_and_clear();

    let summary = result?;
    ui::print_header(&format!("Summary ({})", model));
    println!("{}", render_markdown_answer(summary));
    println!("{}", ui::format_elapsed(started.elapsed()));
    Ok(())
}
