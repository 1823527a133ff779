#![forbid(unsafe_code)]

//! # Primos
//!
//! Prime enumeration by incremental trial division.
//!
//! ## Features
//!
//! - **Two query modes**: every prime up to a bound, or the first N primes
//! - **Growing divisor cache**: the primes found so far are the only divisors tried
//! - **Square-root cutoff**: trial division stops past `isqrt(candidate) + 1`
//! - **Interruptible**: deadlines and cancellation tokens for unbounded searches
//!
//! ## Example
//!
//! ```rust
//! use primos::{first_n_primes, primes_up_to};
//!
//! fn main() -> primos::Result<()> {
//!     let primes = primes_up_to(33)?;
//!     println!("{}", primes); // [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31]
//!
//!     let first = first_n_primes(primes.len() as i64)?;
//!     assert_eq!(first, primes);
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod enumerator;
pub mod error;
pub mod report;

// Re-exports
pub use config::Config;
pub use enumerator::{
    enumerate, enumerate_with, first_n_primes, first_n_primes_with, is_prime, isqrt,
    primes_up_to, CancelToken, Deadline, Interrupt, Never, PrimeList, Query,
};
pub use error::{Error, PrimosError, Result};
pub use report::OutputFormat;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
