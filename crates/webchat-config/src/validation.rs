//! Field checks shared by the config sections

use crate::error::{ConfigError, Result};
use std::ops::RangeInclusive;

/// Semantic checks beyond what deserialization guarantees.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn check_range(field: &str, value: f32, range: RangeInclusive<f32>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field: field.to_string(),
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

pub fn check_min(field: &str, value: u64, min: u64) -> Result<()> {
    if value >= min {
        Ok(())
    } else {
        Err(ConfigError::TooSmall {
            field: field.to_string(),
            value,
            min,
        })
    }
}

pub fn check_not_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(ConfigError::invalid(field, "cannot be empty"))
    } else {
        Ok(())
    }
}

/// An HTTP(S) server root such as `http://localhost:11434`.
pub fn check_base_url(field: &str, value: &str) -> Result<()> {
    let rest = value
        .strip_prefix("http://")
        .or_else(|| value.strip_prefix("https://"))
        .ok_or_else(|| {
            ConfigError::invalid(field, format!("expected an http:// or https:// URL, got '{}'", value))
        })?;
    if rest.is_empty() || rest.starts_with('/') {
        return Err(ConfigError::invalid(field, format!("'{}' has no host", value)));
    }
    Ok(())
}
