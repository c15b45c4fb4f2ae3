use super::ui;
use super::utils::{build_session, extract, render_markdown_answer, spinner};
use anyhow::Result;
use console::Style;
use std::io::{self, BufRead, Write};
use std::time::Instant;
use webchat_config::Config;
use webchat_core::ChatTurn;
use webchat_pipeline::{Session, SessionError};

const HELP: &str = "Commands: /summary, /url <url>, /history, /quit. Anything else is a question.";

#[derive(Debug, PartialEq, Eq)]
enum ReplCommand<'a> {
    Ask(&'a str),
    Summary,
    Url(&'a str),
    History,
    Help,
    Quit,
    Empty,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> ReplCommand<'_> {
    let line = line.trim();
    if line.is_empty() {
        return ReplCommand::Empty;
    }
    let Some(command) = line.strip_prefix('/') else {
        return ReplCommand::Ask(line);
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };
    match name {
        "summary" => ReplCommand::Summary,
        "url" if !arg.is_empty() => ReplCommand::Url(arg),
        "history" => ReplCommand::History,
        "help" => ReplCommand::Help,
        "quit" | "exit" => ReplCommand::Quit,
        _ => ReplCommand::Unknown(line),
    }
}

pub fn handle_chat(config: &Config, url: &str) -> Result<()> {
    let mut session = build_session(config)?;
    load_document(&mut session, config, url)?;

    println!("{}", Style::new().dim().apply_to(HELP));
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", Style::new().bold().green().apply_to(">"));
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match parse_command(&line) {
            ReplCommand::Empty => {}
            ReplCommand::Quit => break,
            ReplCommand::Help => println!("{}", HELP),
            ReplCommand::Unknown(input) => ui::print_error(&format!("Unknown command: {}", input)),
            ReplCommand::History => print_history(&session),
            ReplCommand::Summary => summarize(&mut session),
            ReplCommand::Url(new_url) => {
                if let Err(err) = load_document(&mut session, config, new_url) {
                    ui::print_error(&format!("{:#}", err));
                }
            }
            ReplCommand::Ask(question) => ask(&session, question),
        }
    }
    Ok(())
}

/// Extract `url`, make it the session's document and index it.
fn load_document(session: &mut Session, config: &Config, url: &str) -> Result<()> {
    let (document, elapsed) = extract(config, url)?;
    ui::print_success(&format!("Extraction complete! {}", ui::format_elapsed(elapsed)));
    session.start(document);

    let progress = spinner("Creating embeddings...");
    let started = Instant::now();
    let result = session.ingest();
    progress.finish_and_clear();

    let chunks = result?;
    ui::print_success(&format!(
        "Embeddings created! {} chunks. {}",
        chunks,
        ui::format_elapsed(started.elapsed())
    ));
    ui::print_key_value("Model", session.model());
    Ok(())
}

fn ask(session: &Session, question: &str) {
    let progress = spinner("Thinking...");
    let result = session.ask(question);
    progress.finish_and_clear();

    match result {
        Ok(turn) => print_turn(&turn),
        Err(SessionError::Persist { turn, path, source }) => {
            print_turn(&turn);
            ui::print_error(&format!("failed to write transcript {}: {}", path.display(), source));
        }
        Err(err) => ui::print_error(&err.to_string()),
    }
}

fn print_turn(turn: &ChatTurn) {
    println!("{}", render_markdown_answer(&turn.answer));
    ui::print_sources(&turn.sources);
    println!("{}", Style::new().dim().apply_to(ui::format_elapsed(turn.latency)));
}

fn summarize(session: &mut Session) {
    let model = session.model().to_string();
    let progress = spinner(&format!("Summarizing with {}...", model));
    let started = Instant::now();
    let result = session.summarize().map(str::to_string);
    progress.finish_and_clear();

    match result {
        Ok(summary) => {
            ui::print_header(&format!("Summary ({})", model));
            println!("{}", render_markdown_answer(&summary));
            println!("{}", Style::new().dim().apply_to(ui::format_elapsed(started.elapsed())));
        }
        Err(err) => ui::print_error(&err.to_string()),
    }
}

fn print_history(session: &Session) {
    let history = session.history();
    if history.is_empty() {
        println!("{}", Style::new().dim().apply_to("No questions asked yet."));
        return;
    }
    for (i, turn) in history.iter().enumerate() {
        ui::print_panel(
            &format!("#{} {}", i + 1, turn.question),
            &format!("{}\n{}", turn.answer, ui::format_elapsed(turn.latency)),
            Style::new().blue(),
        );
    }
}
