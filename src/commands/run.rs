//! `primos run`: both modes back to back, prompting for missing values

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};

use crate::config::Config;
use crate::enumerator::primes_up_to;

use super::first::{find_first, FirstOptions};
use super::output::write_listing;

/// Options for the run command
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Upper bound for the first listing
    pub limit: Option<i64>,
    /// Number of primes for the second listing
    pub count: Option<i64>,
    /// Skip interactive prompts (use config values)
    pub yes: bool,
}

/// Take the given value, the configured fallback with `--yes`, or ask
fn resolve(value: Option<i64>, fallback: i64, yes: bool, message: &str) -> Result<i64> {
    match value {
        Some(value) => Ok(value),
        None if yes => Ok(fallback),
        None => prompt(message, fallback),
    }
}

fn prompt(message: &str, default: i64) -> Result<i64> {
    let value = Input::<i64>::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .default(default)
        .validate_with(|v: &i64| -> std::result::Result<(), &str> {
            if *v < 0 {
                Err("must be non-negative")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value)
}

/// Execute the run command
pub fn execute_run(options: RunOptions, config: &Config) -> Result<()> {
    let stdout = std::io::stdout();

    let limit = resolve(options.limit, config.limit, options.yes, "Find all primes up to")?;
    let primes = primes_up_to(limit)?;
    write_listing(&mut stdout.lock(), &primes, config)?;

    let count = resolve(
        options.count,
        config.count,
        options.yes,
        "How many primes should be found",
    )?;
    let first = FirstOptions {
        count,
        timeout_ms: None,
    };
    let primes = find_first(&first, config)?;
    write_listing(&mut stdout.lock(), &primes, config)?;

    tracing::debug!(limit, count, "run complete");
    Ok(())
}
