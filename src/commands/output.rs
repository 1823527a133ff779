//! Shared listing output for the enumeration commands

use std::io::Write;

use anyhow::Result;

use crate::config::Config;
use crate::enumerator::PrimeList;
use crate::report;

/// Write `primes` in the configured format, followed by the trailer line.
///
/// Both lines are rendered before anything is written.
pub fn write_listing<W: Write>(out: &mut W, primes: &PrimeList, config: &Config) -> Result<()> {
    let listing = report::render(primes, config.format)?;
    let trailer = report::trailer(&config.trailer)?;

    writeln!(out, "{}", listing)?;
    if let Some(line) = trailer {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
