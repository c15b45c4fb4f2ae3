use super::ui;
use super::utils::extract;
use anyhow::{Context, Result};
use console::Style;
use std::fs;
use std::path::Path;
use webchat_config::Config;

const PREVIEW_LINES: usize = 5;

pub fn handle_crawl(config: &Config, url: &str, output: Option<&Path>) -> Result<()> {
    let (document, elapsed) = extract(config, url)?;
    ui::print_success(&format!("Extraction complete! {}", ui::format_elapsed(elapsed)));

    if document.is_blank() {
        println!("{}", Style::new().yellow().apply_to("No text found on the page."));
        return Ok(());
    }

    ui::print_panel(
        "Preview",
        &document.preview(PREVIEW_LINES),
        Style::new().cyan(),
    );
    ui::print_key_value("Characters", &document.text().chars().count().to_string());

    if let Some(output) = output {
        let path = config.core.extract_dir.join(output);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
        }
        fs::write(&path, document.text())
            .with_context(|| format!("failed to write {}", path.display()))?;
        ui::print_key_value("Saved to", &path.display().to_string());
    }
    Ok(())
}
