//! Prime enumeration by incremental trial division
//!
//! Both query modes share one accumulation loop. Candidates are tested in
//! increasing order against the primes found so far, so the accumulator is
//! always a gap-free prefix of the prime sequence and doubles as the divisor
//! cache for the next candidate. Only primes up to `isqrt(candidate) + 1` are
//! tried before a candidate is accepted.
//!
//! ```
//! use primos::enumerator::{first_n_primes, primes_up_to};
//!
//! let below = primes_up_to(33)?;
//! assert_eq!(below.as_slice(), &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31]);
//!
//! let first = first_n_primes(7)?;
//! assert_eq!(first.as_slice(), &[2, 3, 5, 7, 11, 13, 17]);
//! # Ok::<(), primos::PrimosError>(())
//! ```

mod interrupt;
mod list;

use std::fmt;

use tracing::{debug, trace, warn};

use crate::error::{PrimosError, Result};

pub use interrupt::{CancelToken, Deadline, Interrupt, Never};
pub use list::PrimeList;

/// Number of candidates tested between two polls of the interrupt hook
pub const INTERRUPT_POLL_INTERVAL: u64 = 1024;

/// Which prefix of the prime sequence to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Every prime `<= limit`
    UpTo(i64),
    /// The `count` smallest primes
    FirstN(i64),
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::UpTo(limit) => write!(f, "primes up to {}", limit),
            Query::FirstN(count) => write!(f, "first {} primes", count),
        }
    }
}

/// Validated termination predicate of the shared loop
#[derive(Debug, Clone, Copy)]
enum Stop {
    AfterCandidate(u64),
    AtLength(usize),
}

impl Stop {
    fn from_query(query: Query) -> Result<Self> {
        match query {
            Query::UpTo(limit) if limit < 0 => Err(PrimosError::InvalidArgument {
                name: "limit",
                value: limit,
            }),
            Query::UpTo(limit) => Ok(Stop::AfterCandidate(limit as u64)),
            Query::FirstN(count) if count < 0 => Err(PrimosError::InvalidArgument {
                name: "count",
                value: count,
            }),
            Query::FirstN(count) => usize::try_from(count)
                .map(Stop::AtLength)
                .map_err(|_| PrimosError::Overflow),
        }
    }

    fn reached(&self, candidate: u64, found: usize) -> bool {
        match *self {
            Stop::AfterCandidate(limit) => candidate > limit,
            Stop::AtLength(count) => found >= count,
        }
    }

    fn capacity_hint(&self) -> usize {
        match *self {
            // pi(n) < 1.26 n / ln n; keep small bounds cheap
            Stop::AfterCandidate(limit) if limit < 17 => 6,
            Stop::AfterCandidate(limit) => {
                let n = limit as f64;
                ((1.26 * n / n.ln()) as usize).min(1 << 20)
            }
            Stop::AtLength(count) => count.min(1 << 20),
        }
    }
}

/// Floor of the square root of `n`, computed exactly
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut root = (n as f64).sqrt() as u64;
    while root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).map_or(false, |sq| sq <= n) {
        root += 1;
    }
    root
}

/// Test `candidate` against the primes discovered so far.
///
/// `known_primes` must be strictly increasing and contain every prime below
/// `candidate`. Scanning stops at the first prime greater than
/// `isqrt(candidate) + 1`, or at the first divisor.
pub fn is_prime(candidate: u64, known_primes: &[u64]) -> bool {
    let root = isqrt(candidate) + 1;
    known_primes
        .iter()
        .take_while(|&&p| p <= root)
        .all(|&p| candidate % p != 0)
}

/// All primes in `[2, limit]`.
///
/// `limit` of 0 or 1 yields an empty list; a negative `limit` is an
/// [`PrimosError::InvalidArgument`].
pub fn primes_up_to(limit: i64) -> Result<PrimeList> {
    enumerate(Query::UpTo(limit))
}

/// The `count` smallest primes.
///
/// There is no upper bound on the search: the number of candidates tested
/// grows with `count` and the call only returns once `count` primes are
/// found. Use [`first_n_primes_with`] to bound it with a [`Deadline`] or a
/// [`CancelToken`].
pub fn first_n_primes(count: i64) -> Result<PrimeList> {
    enumerate(Query::FirstN(count))
}

/// [`first_n_primes`] with an interrupt hook polled during the search
pub fn first_n_primes_with<I: Interrupt + ?Sized>(count: i64, interrupt: &I) -> Result<PrimeList> {
    enumerate_with(Query::FirstN(count), interrupt)
}

/// Run `query` to completion
pub fn enumerate(query: Query) -> Result<PrimeList> {
    enumerate_with(query, &Never)
}

/// Run `query`, giving up with [`PrimosError::Interrupted`] when `interrupt`
/// asks to stop. No partial list is returned on interruption.
pub fn enumerate_with<I: Interrupt + ?Sized>(query: Query, interrupt: &I) -> Result<PrimeList> {
    let stop = Stop::from_query(query)?;
    let (primes, tested) = accumulate(stop, interrupt)?;
    debug!(
        %query,
        found = primes.len(),
        tested,
        largest = primes.last(),
        "enumeration complete"
    );
    Ok(primes)
}

fn accumulate<I: Interrupt + ?Sized>(stop: Stop, interrupt: &I) -> Result<(PrimeList, u64)> {
    let mut primes = PrimeList::with_capacity(stop.capacity_hint());
    let mut candidate: u64 = 2;
    let mut tested: u64 = 0;

    while !stop.reached(candidate, primes.len()) {
        if tested % INTERRUPT_POLL_INTERVAL == 0 {
            if interrupt.should_stop() {
                warn!(found = primes.len(), candidate, "enumeration interrupted");
                return Err(PrimosError::Interrupted {
                    found: primes.len(),
                    candidate,
                });
            }
            if tested > 0 {
                trace!(tested, found = primes.len(), candidate, "progress");
            }
        }

        if is_prime(candidate, primes.as_slice()) {
            primes.push(candidate);
        }
        tested += 1;
        candidate = candidate.checked_add(1).ok_or(PrimosError::Overflow)?;
    }

    Ok((primes, tested))
}
