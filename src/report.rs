//! Rendering of prime lists and the timestamp trailer

use std::fmt::Write as _;

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::config::TrailerConfig;
use crate::enumerator::PrimeList;
use crate::error::{PrimosError, Result};

/// Output format for prime lists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bracketed list on one line: `[2, 3, 5]`
    #[default]
    List,
    /// JSON array
    Json,
    /// One prime per line
    Lines,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "list" => Ok(OutputFormat::List),
            "json" => Ok(OutputFormat::Json),
            "lines" => Ok(OutputFormat::Lines),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Render `primes` in the requested format, without a trailing newline
pub fn render(primes: &PrimeList, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::List => Ok(primes.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(primes)?),
        OutputFormat::Lines => {
            let mut out = String::with_capacity(primes.len() * 4);
            for (i, prime) in primes.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(&prime.to_string());
            }
            Ok(out)
        }
    }
}

/// Format `<label> <timestamp>` for a given instant
pub fn timestamp_line<Tz>(label: &str, pattern: &str, at: &DateTime<Tz>) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut line = String::new();
    if !label.is_empty() {
        line.push_str(label);
        line.push(' ');
    }
    write!(line, "{}", at.format(pattern))
        .map_err(|_| PrimosError::Config(format!("invalid timestamp format: {}", pattern)))?;
    Ok(line)
}

/// Trailer line for the current local time, or `None` when disabled
pub fn trailer(config: &TrailerConfig) -> Result<Option<String>> {
    if !config.enabled {
        return Ok(None);
    }
    timestamp_line(&config.label, &config.timestamp_format, &Local::now()).map(Some)
}
