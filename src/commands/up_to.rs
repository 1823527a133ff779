//! `primos up-to`: every prime up to a bound

use anyhow::Result;

use crate::config::Config;
use crate::enumerator::primes_up_to;

use super::output::write_listing;

/// Options for the up-to command
#[derive(Debug, Clone)]
pub struct UpToOptions {
    /// Inclusive upper bound
    pub limit: i64,
}

/// Execute the up-to command
pub fn execute_up_to(options: UpToOptions, config: &Config) -> Result<()> {
    let primes = primes_up_to(options.limit)?;
    tracing::info!(limit = options.limit, found = primes.len(), "primes up to limit");

    let stdout = std::io::stdout();
    write_listing(&mut stdout.lock(), &primes, config)
}
