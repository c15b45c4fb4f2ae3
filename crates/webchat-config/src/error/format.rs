//! Terminal rendering of configuration errors

use crate::error::ConfigError;
use std::fmt;
use yansi::Paint;

/// Renders a [`ConfigError`] as a headline plus labelled detail lines,
/// colored when stderr is a terminal and `NO_COLOR` is unset.
pub struct ErrorFormatter {
    error: ConfigError,
    color: bool,
}

impl ErrorFormatter {
    pub fn new(error: ConfigError) -> Self {
        Self {
            error,
            color: std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stderr),
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn format(&self) -> String {
        let (headline, details) = self.parts();
        let mut out = if self.color {
            format!("{} {}", "✗".red().bold(), headline)
        } else {
            headline
        };
        for (label, value) in details {
            let label = if self.color {
                label.bold().to_string()
            } else {
                label.to_string()
            };
            out.push_str(&format!("\n  {}: {}", label, value));
        }
        out
    }

    fn parts(&self) -> (String, Vec<(&'static str, String)>) {
        match &self.error {
            ConfigError::UnknownOption {
                field,
                value,
                options,
                suggestion,
            } => {
                let mut details = vec![("Valid options", options.join(", "))];
                if let Some(s) = suggestion {
                    details.push(("Did you mean", self.paint_good(s)));
                }
                (
                    format!(
                        "Invalid value {} for {}",
                        self.paint_bad(&format!("'{}'", value)),
                        self.paint_field(field)
                    ),
                    details,
                )
            }
            ConfigError::OutOfRange {
                field,
                value,
                min,
                max,
            } => (
                format!("{} is out of range", self.paint_field(field)),
                vec![
                    ("Allowed", format!("{}..={}", min, max)),
                    ("Got", self.paint_bad(&value.to_string())),
                ],
            ),
            ConfigError::TooSmall { field, value, min } => (
                format!("{} is too small", self.paint_field(field)),
                vec![
                    ("Minimum", min.to_string()),
                    ("Got", self.paint_bad(&value.to_string())),
                ],
            ),
            ConfigError::Invalid { field, message } => {
                (format!("{}: {}", self.paint_field(field), message), Vec::new())
            }
            ConfigError::Parse {
                format,
                location,
                message,
                excerpt,
            } => {
                let mut headline = format!("Could not parse {} config{}: {}", format, location, message);
                if !excerpt.is_empty() {
                    headline.push('\n');
                    headline.push_str(excerpt);
                }
                (headline, Vec::new())
            }
            other => (other.to_string(), Vec::new()),
        }
    }

    fn paint_field(&self, field: &str) -> String {
        if self.color {
            field.cyan().to_string()
        } else {
            field.to_string()
        }
    }

    fn paint_bad(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_good(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }
}

impl fmt::Display for ErrorFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_option_lists_choices_and_suggestion() {
        let error = ConfigError::unknown_option("embedding.backend", "opena", &["ollama", "openai"]);
        let output = ErrorFormatter::new(error).with_color(false).format();
        assert_eq!(
            output,
            "Invalid value 'opena' for embedding.backend\n  Valid options: ollama, openai\n  Did you mean: openai"
        );
    }

    #[test]
    fn too_small_shows_minimum() {
        let error = ConfigError::TooSmall {
            field: "chat.top_k".into(),
            value: 0,
            min: 1,
        };
        let output = ErrorFormatter::new(error).with_color(false).format();
        assert!(output.starts_with("chat.top_k is too small"));
        assert!(output.contains("Minimum: 1"));
    }

    #[test]
    fn colored_output_keeps_text() {
        let output = ErrorFormatter::new(ConfigError::invalid("core.transcript_path", "cannot be empty"))
            .with_color(true)
            .format();
        assert!(output.contains("core.transcript_path"));
        assert!(output.contains("cannot be empty"));
    }

    #[test]
    fn parse_error_includes_excerpt() {
        let error = ConfigError::parse("TOML", Some("cfg.toml"), "[chat]\ntop_k = x\n", "invalid value", Some((2, 9)));
        let output = ErrorFormatter::new(error).with_color(false).format();
        assert!(output.starts_with("Could not parse TOML config in cfg.toml: invalid value"));
        assert!(output.contains(">   2 | top_k = x"));
    }
}
