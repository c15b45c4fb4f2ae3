mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{
    handle_chat, handle_crawl, handle_models, handle_summarize, load_config, ui, Cli, Commands,
};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    if let Err(err) = run(Cli::parse()) {
        ui::print_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref(), cli.model)?;

    match cli.command {
        Commands::Models => handle_models(&config),
        Commands::Crawl { url, output } => handle_crawl(&config, &url, output.as_deref()),
        Commands::Summarize { url } => handle_summarize(&config, &url),
        Commands::Chat { url } => handle_chat(&config, &url),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
