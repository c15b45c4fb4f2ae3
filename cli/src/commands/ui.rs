use console::{measure_text_width, Style};
use std::time::Duration;

const PANEL_WIDTH: usize = 80;

pub fn print_header(title: &str) {
    let rule = "─".repeat(measure_text_width(title));
    println!("\n{}", Style::new().bold().cyan().apply_to(title));
    println!("{}", Style::new().dim().apply_to(rule));
}

pub fn print_success(msg: &str) {
    println!("{} {}", Style::new().green().bold().apply_to("✓"), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", Style::new().red().bold().apply_to("✗"), msg);
}

pub fn print_key_value(key: &str, value: &str) {
    let key = Style::new().dim().apply_to(format!("{}:", key));
    println!("{} {}", key, Style::new().bold().apply_to(value));
}

/// Boxed block of wrapped text under a title, used for history entries.
pub fn print_panel(title: &str, content: &str, border: Style) {
    for line in panel_lines(title, content, PANEL_WIDTH) {
        let styled = match line.chars().next() {
            Some('│') => {
                let inner = &line['│'.len_utf8()..line.len() - '│'.len_utf8()];
                format!("{}{}{}", border.apply_to("│"), inner, border.apply_to("│"))
            }
            _ => border.apply_to(line).to_string(),
        };
        println!("{}", styled);
    }
}

fn panel_lines(title: &str, content: &str, width: usize) -> Vec<String> {
    let inner = width.saturating_sub(4).max(1);
    let title_fill = width.saturating_sub(measure_text_width(title) + 5);
    let mut lines = vec![format!("┌─ {} {}┐", title, "─".repeat(title_fill))];
    for paragraph in content.lines() {
        for row in textwrap::wrap(paragraph, inner) {
            let pad = inner.saturating_sub(measure_text_width(&row));
            lines.push(format!("│ {}{} │", row, " ".repeat(pad)));
        }
    }
    lines.push(format!("└{}┘", "─".repeat(width.saturating_sub(2))));
    lines
}

pub fn print_sources<'a>(sources: impl IntoIterator<Item = &'a String>) {
    let mut sources = sources.into_iter().peekable();
    if sources.peek().is_none() {
        return;
    }
    println!("{}", Style::new().dim().apply_to("Sources:"));
    for source in sources {
        println!("  {}", Style::new().blue().underlined().apply_to(source));
    }
}

/// `Time: 1.23s`, the format used for every stage timing.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("Time: {:.2}s", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_has_two_decimals() {
        assert_eq!(format_elapsed(Duration::from_millis(1234)), "Time: 1.23s");
        assert_eq!(format_elapsed(Duration::ZERO), "Time: 0.00s");
    }

    #[test]
    fn panel_rows_share_one_width() {
        let lines = panel_lines("#1 What is Rust?", "A systems language.\nTime: 0.42s", 40);
        assert!(lines[0].starts_with("┌─ #1 What is Rust? "));
        assert_eq!(lines.len(), 4);
        for line in &lines {
            assert_eq!(measure_text_width(line), 40, "{line}");
        }
    }

    #[test]
    fn long_content_wraps_inside_the_box() {
        let text = "word ".repeat(30);
        let lines = panel_lines("t", text.trim_end(), 30);
        assert!(lines.len() > 3);
        assert!(lines[1..lines.len() - 1].iter().all(|l| l.starts_with("│ ") && l.ends_with(" │")));
    }
}
