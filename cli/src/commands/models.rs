use super::ui;
use anyhow::Result;
use console::Style;
use webchat_config::{Config, SupportedModel};

pub fn handle_models(config: &Config) -> Result<()> {
    ui::print_header("Supported models");
    for model in SupportedModel::ALL {
        let active = model.id() == config.llm.model;
        let marker = if active { "*" } else { " " };
        let line = format!("{} {:<8} {}", marker, model.label(), model.id());
        if active {
            println!("{}", Style::new().green().bold().apply_to(line));
        } else {
            println!("{}", line);
        }
    }

    if SupportedModel::from_id(&config.llm.model).is_none() {
        ui::print_key_value("Configured model (custom)", &config.llm.model);
    }
    Ok(())
}
