//! `primos first`: the first N primes, optionally under a deadline

use std::time::Duration;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::enumerator::{first_n_primes_with, Deadline, PrimeList};

use super::output::write_listing;

/// Options for the first command
#[derive(Debug, Clone, Default)]
pub struct FirstOptions {
    /// Number of primes to find
    pub count: i64,
    /// Deadline in milliseconds; overrides `max_runtime_ms` from the config
    pub timeout_ms: Option<u64>,
}

impl FirstOptions {
    fn timeout(&self, config: &Config) -> Option<Duration> {
        self.timeout_ms
            .map(Duration::from_millis)
            .or_else(|| config.max_runtime())
    }
}

/// Find the primes for `options`, honouring any configured deadline
pub fn find_first(options: &FirstOptions, config: &Config) -> Result<PrimeList> {
    let timeout = options.timeout(config);
    let deadline = timeout.map(Deadline::after);
    first_n_primes_with(options.count, &deadline).with_context(|| match timeout {
        Some(t) => format!("finding the first {} primes within {:?}", options.count, t),
        None => format!("finding the first {} primes", options.count),
    })
}

/// Execute the first command
pub fn execute_first(options: FirstOptions, config: &Config) -> Result<()> {
    let primes = find_first(&options, config)?;
    tracing::info!(count = options.count, largest = primes.last(), "first primes");

    let stdout = std::io::stdout();
    write_listing(&mut stdout.lock(), &primes, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrimosError;

    #[test]
    fn test_cli_timeout_overrides_config() {
        let config = Config {
            max_runtime_ms: Some(5),
            ..Config::default()
        };
        let options = FirstOptions {
            count: 1,
            timeout_ms: Some(10_000),
        };
        assert_eq!(options.timeout(&config), Some(Duration::from_secs(10)));

        let options = FirstOptions {
            count: 1,
            timeout_ms: None,
        };
        assert_eq!(options.timeout(&config), Some(Duration::from_millis(5)));
        assert_eq!(options.timeout(&Config::default()), None);
    }

    #[test]
    fn test_expired_deadline_reports_interruption() {
        let options = FirstOptions {
            count: 1_000,
            timeout_ms: Some(0),
        };
        let err = find_first(&options, &Config::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PrimosError>(),
            Some(PrimosError::Interrupted { .. })
        ));
    }

    #[test]
    fn test_find_first_without_deadline() {
        let options = FirstOptions {
            count: 7,
            timeout_ms: None,
        };
        let primes = find_first(&options, &Config::default()).unwrap();
        assert_eq!(primes.as_slice(), &[2, 3, 5, 7, 11, 13, 17]);
    }
}
