// crates/fibonrose-core/src/sequence.rs
//
// Bounded Fibonacci sequence generation.
//
// The sequence starts 1, 1, 2, 3, 5, ... and is used as the set of level
// thresholds for trust scoring. Generation stops at the last term that does
// not exceed the requested bound, but never returns fewer than three terms.

use serde::{Deserialize, Serialize};

use crate::error::FibonroseError;

/// The seed terms every sequence starts with.
const SEED: [u64; 2] = [1, 1];

/// Minimum number of terms in any generated sequence (`1, 1, 2`).
pub const MIN_SEQUENCE_LEN: usize = 3;

/// An ordered Fibonacci sequence of positive integers.
///
/// Invariant: starts with `1, 1, 2` and every term after the first two is
/// the sum of the two preceding terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u64>", into = "Vec<u64>")]
pub struct FibonacciSequence {
    terms: Vec<u64>,
}

impl FibonacciSequence {
    /// Build the sequence of terms `<= max_value`, with at least `[1, 1, 2]`.
    ///
    /// Infallible counterpart of [`generate_fibonacci_sequence`] for callers
    /// that already hold an integer bound.
    pub fn up_to(max_value: u64) -> Self {
        let mut terms = SEED.to_vec();
        loop {
            let n = terms.len();
            let next = match terms[n - 1].checked_add(terms[n - 2]) {
                Some(next) => next,
                None => break,
            };
            if n >= MIN_SEQUENCE_LEN && next > max_value {
                break;
            }
            terms.push(next);
        }
        Self { terms }
    }

    /// Borrow the terms as a slice.
    pub fn terms(&self) -> &[u64] {
        &self.terms
    }

    /// Number of terms in the sequence.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Always false: every sequence holds at least `1, 1, 2`.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Term at `index`, if present.
    pub fn get(&self, index: usize) -> Option<u64> {
        self.terms.get(index).copied()
    }

    /// The last (largest) term.
    pub fn last(&self) -> u64 {
        self.terms.last().copied().unwrap_or(SEED[1])
    }

    /// Term at `index`, clamped to the last term when out of range.
    pub fn get_clamped(&self, index: usize) -> u64 {
        self.get(index).unwrap_or_else(|| self.last())
    }

    /// Iterate over the terms.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.terms.iter().copied()
    }

    /// Consume the sequence, returning the underlying terms.
    pub fn into_vec(self) -> Vec<u64> {
        self.terms
    }
}

impl TryFrom<Vec<u64>> for FibonacciSequence {
    type Error = FibonroseError;

    /// Accept `terms` only if they open with `1, 1, 2` and follow the recurrence.
    fn try_from(terms: Vec<u64>) -> Result<Self, Self::Error> {
        if terms.len() < MIN_SEQUENCE_LEN || terms[..2] != SEED {
            return Err(FibonroseError::invalid(format!(
                "sequence must start with 1, 1, 2, got {:?}",
                &terms[..terms.len().min(MIN_SEQUENCE_LEN)]
            )));
        }
        for i in 2..terms.len() {
            if terms[i - 1].checked_add(terms[i - 2]) != Some(terms[i]) {
                return Err(FibonroseError::invalid(format!(
                    "term {} ({}) is not the sum of the two preceding terms",
                    i, terms[i]
                )));
            }
        }
        Ok(Self { terms })
    }
}

impl From<FibonacciSequence> for Vec<u64> {
    fn from(seq: FibonacciSequence) -> Vec<u64> {
        seq.terms
    }
}

/// Generate the Fibonacci sequence bounded by `max_value`.
///
/// Terms are appended while the next term is `<= max_value`. Small bounds
/// (anything below 2, including 0) still yield `[1, 1, 2]`. Generation also
/// stops before a term would overflow `u64`.
///
/// # Errors
/// `InvalidArgument` when `max_value` is negative, NaN, or infinite.
pub fn generate_fibonacci_sequence(max_value: f64) -> Result<FibonacciSequence, FibonroseError> {
    if !max_value.is_finite() {
        return Err(FibonroseError::invalid(format!(
            "max_value must be finite, got {}",
            max_value
        )));
    }
    if max_value < 0.0 {
        return Err(FibonroseError::invalid(format!(
            "max_value must be non-negative, got {}",
            max_value
        )));
    }

    // Terms are integers, so `next <= max_value` iff `next <= floor(max_value)`.
    // The cast saturates for bounds beyond u64::MAX.
    Ok(FibonacciSequence::up_to(max_value.floor() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_by_ten() {
        let seq = generate_fibonacci_sequence(10.0).unwrap();
        assert_eq!(seq.terms(), &[1, 1, 2, 3, 5, 8]);
    }

    #[test]
    fn bounded_by_hundred() {
        let seq = generate_fibonacci_sequence(100.0).unwrap();
        assert_eq!(seq.terms(), &[1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89]);
    }

    #[test]
    fn bound_equal_to_term_is_included() {
        let seq = generate_fibonacci_sequence(13.0).unwrap();
        assert_eq!(seq.last(), 13);
    }

    #[test]
    fn small_bounds_still_yield_three_terms() {
        for max in [0.0, 0.5, 1.0, 2.0] {
            let seq = generate_fibonacci_sequence(max).unwrap();
            assert_eq!(seq.terms(), &[1, 1, 2], "max = {}", max);
        }
    }

    #[test]
    fn recurrence_holds() {
        let seq = generate_fibonacci_sequence(1_000_000.0).unwrap();
        let t = seq.terms();
        for i in 2..t.len() {
            assert_eq!(t[i], t[i - 1] + t[i - 2]);
        }
    }

    #[test]
    fn huge_bound_stops_before_overflow() {
        let seq = generate_fibonacci_sequence(f64::MAX).unwrap();
        // F(93) is the largest Fibonacci number that fits in a u64.
        assert_eq!(seq.len(), 93);
        assert_eq!(seq.last(), 12_200_160_415_121_876_738);
    }

    #[test]
    fn rejects_negative_bound() {
        let err = generate_fibonacci_sequence(-1.0).unwrap_err();
        assert!(matches!(err, FibonroseError::InvalidArgument(_)));
    }

    #[test]
    fn rejects_non_finite_bound() {
        assert!(generate_fibonacci_sequence(f64::NAN).is_err());
        assert!(generate_fibonacci_sequence(f64::INFINITY).is_err());
    }

    #[test]
    fn integer_bound_matches_float_bound() {
        assert_eq!(
            FibonacciSequence::up_to(54),
            generate_fibonacci_sequence(54.9).unwrap()
        );
    }

    #[test]
    fn clamped_lookup_returns_last_term() {
        let seq = generate_fibonacci_sequence(10.0).unwrap();
        assert_eq!(seq.get_clamped(2), 2);
        assert_eq!(seq.get_clamped(500), 8);
    }

    #[test]
    fn serializes_as_plain_array() {
        let seq = generate_fibonacci_sequence(5.0).unwrap();
        assert_eq!(serde_json::to_string(&seq).unwrap(), "[1,1,2,3,5]");
        let back: FibonacciSequence = serde_json::from_str("[1,1,2,3,5]").unwrap();
        assert_eq!(back, seq);
    }

    #[test]
    fn deserialize_rejects_broken_sequences() {
        for bad in ["[]", "[1,1]", "[7,3,0]", "[1,1,2,4]", "[1,2,3]"] {
            assert!(
                serde_json::from_str::<FibonacciSequence>(bad).is_err(),
                "accepted {}",
                bad
            );
        }
    }

    #[test]
    fn try_from_reports_invalid_argument() {
        let err = FibonacciSequence::try_from(vec![7, 3, 0]).unwrap_err();
        assert!(matches!(err, FibonroseError::InvalidArgument(_)));
        assert!(FibonacciSequence::try_from(FibonacciSequence::up_to(100).into_vec()).is_ok());
    }
}
