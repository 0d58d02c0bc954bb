// crates/fibonrose-core/src/inputs.rs
//
// Raw activity counters fed into the trust score calculator.

use serde::{Deserialize, Serialize};

use crate::error::FibonroseError;

/// Activity counters for a single trust score calculation.
///
/// Not stored anywhere; built from values sourced upstream (verification
/// records, transaction counts, account creation time) and discarded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrustScoreInputs {
    /// Number of completed identity verifications.
    pub verifications: u64,
    /// Number of transactions that completed positively.
    pub positive_transactions: u64,
    /// Total number of transactions. Never less than `positive_transactions`.
    pub total_transactions: u64,
    /// Account age in days. Finite and non-negative.
    pub account_age_days: f64,
}

impl TrustScoreInputs {
    /// Build validated inputs.
    ///
    /// # Errors
    /// `InvalidArgument` when `positive_transactions > total_transactions`,
    /// or when `account_age_days` is negative or non-finite.
    pub fn new(
        verifications: u64,
        positive_transactions: u64,
        total_transactions: u64,
        account_age_days: f64,
    ) -> Result<Self, FibonroseError> {
        let inputs = Self {
            verifications,
            positive_transactions,
            total_transactions,
            account_age_days,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Check the invariants. Useful after deserializing from an external source.
    pub fn validate(&self) -> Result<(), FibonroseError> {
        if self.positive_transactions > self.total_transactions {
            return Err(FibonroseError::invalid(format!(
                "positive transactions ({}) exceed total transactions ({})",
                self.positive_transactions, self.total_transactions
            )));
        }
        if !self.account_age_days.is_finite() || self.account_age_days < 0.0 {
            return Err(FibonroseError::invalid(format!(
                "account age must be a non-negative finite number of days, got {}",
                self.account_age_days
            )));
        }
        Ok(())
    }

    /// Fraction of transactions that were positive, in [0.0, 1.0].
    /// Zero when there are no transactions.
    pub fn positive_ratio(&self) -> f64 {
        if self.total_transactions == 0 {
            return 0.0;
        }
        (self.positive_transactions as f64 / self.total_transactions as f64).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_inputs_are_valid() {
        let inputs = TrustScoreInputs::new(0, 0, 0, 0.0).unwrap();
        assert_eq!(inputs, TrustScoreInputs::default());
        assert_eq!(inputs.positive_ratio(), 0.0);
    }

    #[test]
    fn rejects_positive_above_total() {
        let err = TrustScoreInputs::new(0, 5, 3, 0.0).unwrap_err();
        assert!(matches!(err, FibonroseError::InvalidArgument(_)));
    }

    #[test]
    fn rejects_bad_account_age() {
        assert!(TrustScoreInputs::new(1, 0, 0, -1.0).is_err());
        assert!(TrustScoreInputs::new(1, 0, 0, f64::NAN).is_err());
        assert!(TrustScoreInputs::new(1, 0, 0, f64::INFINITY).is_err());
    }

    #[test]
    fn ratio() {
        let inputs = TrustScoreInputs::new(0, 3, 4, 0.0).unwrap();
        assert!((inputs.positive_ratio() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn validate_catches_deserialized_garbage() {
        let inputs: TrustScoreInputs = serde_json::from_str(
            r#"{"verifications":1,"positive_transactions":9,"total_transactions":2,"account_age_days":3.0}"#,
        )
        .unwrap();
        assert!(inputs.validate().is_err());
    }
}
