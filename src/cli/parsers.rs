// src/cli/parsers.rs
use std::{fmt::Display, str::FromStr};

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a positive `usize` (>= 1) from CLI input.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, None)
}

/// Parse a file extension, tolerating a leading dot.
pub fn parse_extension(s: &str) -> Result<String, String> {
    let ext = s.trim().trim_start_matches('.');
    if ext.is_empty() {
        return Err("extension must not be empty".to_string());
    }
    Ok(ext.to_lowercase())
}
