//! Error types for the primos library

use thiserror::Error;

/// Errors raised by enumeration, configuration and reporting
#[derive(Error, Debug)]
pub enum PrimosError {
    /// A mode parameter was outside its accepted range
    #[error("invalid argument: {name} must be non-negative, got {value}")]
    InvalidArgument { name: &'static str, value: i64 },

    /// An interruptible search was stopped before it completed
    #[error("search interrupted after {found} primes (next candidate {candidate})")]
    Interrupted { found: usize, candidate: u64 },

    /// The candidate counter ran past the largest representable value
    #[error("candidate overflowed u64 during enumeration")]
    Overflow,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Error = PrimosError;

pub type Result<T> = std::result::Result<T, PrimosError>;
