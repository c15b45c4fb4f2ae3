//! Configuration errors

pub mod format;

use std::path::PathBuf;
use thiserror::Error;

pub use format::ErrorFormatter;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {path} does not exist")]
    Missing { path: PathBuf },

    #[error("cannot tell the format of {path} (expected .toml, .yml, .yaml or .json)")]
    UnsupportedExtension { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Syntax or type error in a config document. `excerpt` shows the
    /// surrounding lines when the parser reported a position.
    #[error("{format} error{location}: {message}")]
    Parse {
        format: &'static str,
        location: String,
        message: String,
        excerpt: String,
    },

    #[error("{field} = '{value}' is not one of: {}", .options.join(", "))]
    UnknownOption {
        field: String,
        value: String,
        options: Vec<String>,
        suggestion: Option<String>,
    },

    #[error("{field} = {value} is outside {min}..={max}")]
    OutOfRange {
        field: String,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("{field} must be at least {min}, got {value}")]
    TooSmall { field: String, value: u64, min: u64 },

    #[error("{var}: {message}")]
    Env { var: String, message: String },

    #[error("{field}: {message}")]
    Invalid { field: String, message: String },
}

impl ConfigError {
    /// `value` is not among `options`; suggests the nearest one when it looks like a typo.
    pub fn unknown_option(field: impl Into<String>, value: impl Into<String>, options: &[&str]) -> Self {
        let value = value.into();
        let needle = value.to_lowercase();
        let suggestion = options
            .iter()
            .map(|opt| (edit_distance(&needle, &opt.to_lowercase()), *opt))
            .min()
            .filter(|(dist, _)| *dist <= 2)
            .map(|(_, opt)| opt.to_string());
        Self::UnknownOption {
            field: field.into(),
            value,
            options: options.iter().map(|o| o.to_string()).collect(),
            suggestion,
        }
    }

    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Parse failure at an optional 1-based `(line, column)` of `content`.
    pub fn parse(
        format: &'static str,
        path: Option<&str>,
        content: &str,
        message: impl Into<String>,
        position: Option<(usize, usize)>,
    ) -> Self {
        Self::Parse {
            format,
            location: path.map(|p| format!(" in {}", p)).unwrap_or_default(),
            message: message.into(),
            excerpt: position
                .map(|(line, column)| excerpt(content, line, column))
                .unwrap_or_default(),
        }
    }
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == *cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}

/// The offending line with one line of context on each side.
fn excerpt(content: &str, line: usize, column: usize) -> String {
    if line == 0 {
        return String::new();
    }
    let mut out = Vec::new();
    for (idx, text) in content.lines().enumerate().skip(line.saturating_sub(2)).take(3) {
        let number = idx + 1;
        if number == line {
            out.push(format!("> {:>3} | {}", number, text));
            if column > 0 {
                out.push(format!("        {}^", " ".repeat(column - 1)));
            }
        } else {
            out.push(format!("  {:>3} | {}", number, text));
        }
    }
    if !out.iter().any(|l| l.starts_with('>')) {
        return String::new();
    }
    out.join("\n")
}
