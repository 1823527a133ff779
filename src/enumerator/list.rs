//! Owned accumulator of discovered primes

use std::fmt;
use std::ops::Deref;

use serde::Serialize;

/// Strictly increasing sequence of primes, owned by one enumeration call and
/// handed to the caller on return.
///
/// Only the enumerator can append to it, which keeps every instance a prefix
/// of the prime sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PrimeList(Vec<u64>);

impl PrimeList {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub(crate) fn push(&mut self, prime: u64) {
        debug_assert!(self.0.last().map_or(true, |&last| last < prime));
        self.0.push(prime);
    }

    /// Borrow the primes as a slice
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// Largest prime found, if any
    pub fn last(&self) -> Option<u64> {
        self.0.last().copied()
    }

    /// Take ownership of the underlying vector
    pub fn into_vec(self) -> Vec<u64> {
        self.0
    }
}

impl Deref for PrimeList {
    type Target = [u64];

    fn deref(&self) -> &[u64] {
        &self.0
    }
}

impl AsRef<[u64]> for PrimeList {
    fn as_ref(&self) -> &[u64] {
        &self.0
    }
}

impl From<PrimeList> for Vec<u64> {
    fn from(list: PrimeList) -> Self {
        list.0
    }
}

impl<'a> IntoIterator for &'a PrimeList {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for PrimeList {
    type Item = u64;
    type IntoIter = std::vec::IntoIter<u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Renders as `[2, 3, 5]`
impl fmt::Display for PrimeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, prime) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", prime)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(values: &[u64]) -> PrimeList {
        let mut list = PrimeList::default();
        for &v in values {
            list.push(v);
        }
        list
    }

    #[test]
    fn test_display_matches_bracketed_list() {
        assert_eq!(list(&[]).to_string(), "[]");
        assert_eq!(list(&[2]).to_string(), "[2]");
        assert_eq!(list(&[2, 3, 5]).to_string(), "[2, 3, 5]");
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let json = serde_json::to_string(&list(&[2, 3, 5, 7])).unwrap();
        assert_eq!(json, "[2,3,5,7]");
    }

    #[test]
    fn test_slice_access() {
        let primes = list(&[2, 3, 5]);
        assert_eq!(primes.len(), 3);
        assert_eq!(primes[1], 3);
        assert_eq!(primes.last(), Some(5));
        assert_eq!(primes.iter().sum::<u64>(), 10);
        assert_eq!(primes.into_vec(), vec![2, 3, 5]);
    }
}
