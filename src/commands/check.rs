//! `primos check`: primality of a single number

use anyhow::Result;
use console::style;

use crate::enumerator::{is_prime, isqrt};

/// Options for the check command
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Number to test
    pub number: u64,
}

/// Result of checking one number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Below 2, neither prime nor composite
    Unit,
    Prime,
    /// Composite, with its smallest prime factor
    Composite(u64),
}

/// Classify `number` with the same trial division the enumerator uses.
///
/// Candidates up to `isqrt(number) + 1` are walked in order and the first
/// prime dividing `number` ends the scan, so composites return early. Only
/// primes needed to test those candidates are kept (at most the primes up to
/// 2^16 + 1), but a prime `number` near `u64::MAX` still walks about 2^32
/// candidates.
pub fn classify(number: u64) -> CheckOutcome {
    if number < 2 {
        return CheckOutcome::Unit;
    }
    let bound = isqrt(number) + 1;
    let cache_bound = isqrt(bound) + 1;
    let mut divisors: Vec<u64> = Vec::new();

    for candidate in 2..=bound {
        if !is_prime(candidate, &divisors) {
            continue;
        }
        if number % candidate == 0 {
            return if candidate == number {
                CheckOutcome::Prime
            } else {
                CheckOutcome::Composite(candidate)
            };
        }
        if candidate <= cache_bound {
            divisors.push(candidate);
        }
    }
    CheckOutcome::Prime
}

/// Execute the check command
pub fn execute_check(options: CheckOptions) -> Result<()> {
    match classify(options.number) {
        CheckOutcome::Prime => {
            println!("{} {} is prime", style("✓").green(), options.number)
        }
        CheckOutcome::Composite(factor) => println!(
            "{} {} is not prime (divisible by {})",
            style("✗").red(),
            options.number,
            factor
        ),
        CheckOutcome::Unit => println!(
            "{} {} is not prime (primes start at 2)",
            style("✗").red(),
            options.number
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(0), CheckOutcome::Unit);
        assert_eq!(classify(1), CheckOutcome::Unit);
        assert_eq!(classify(2), CheckOutcome::Prime);
        assert_eq!(classify(3), CheckOutcome::Prime);
        assert_eq!(classify(4), CheckOutcome::Composite(2));
        assert_eq!(classify(29), CheckOutcome::Prime);
        assert_eq!(classify(25), CheckOutcome::Composite(5));
        assert_eq!(classify(91), CheckOutcome::Composite(7));
        assert_eq!(classify(1_000_003), CheckOutcome::Prime);
    }

    #[test]
    fn test_classify_agrees_with_enumeration() {
        let primes = crate::enumerator::primes_up_to(3_000).unwrap();
        for n in 2..=3_000u64 {
            let expected = primes.binary_search(&n).is_ok();
            assert_eq!(classify(n) == CheckOutcome::Prime, expected, "n = {}", n);
        }
    }

    #[test]
    fn test_classify_large_composites_return_early() {
        // 3 * 5 * 17 * 257 * 641 * 65537 * 6700417
        assert_eq!(classify(u64::MAX), CheckOutcome::Composite(3));
        assert_eq!(classify(1u64 << 63), CheckOutcome::Composite(2));
        assert_eq!(
            classify(1_000_003 * 1_000_003),
            CheckOutcome::Composite(1_000_003)
        );
    }
}
