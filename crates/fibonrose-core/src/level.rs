// crates/fibonrose-core/src/level.rs
//
// Discrete trust levels and their human-readable labels.
//
// Levels run from 0 ("no score yet") to 10. The labels follow a growth
// metaphor, from a sprout at level 1 to an eternal forest at level 10.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FibonroseError;

/// Highest modeled trust level. Scores beyond the last threshold are capped here.
pub const MAX_TRUST_LEVEL: u8 = 10;

/// Label returned for any level outside 1..=10.
pub const UNKNOWN_LEVEL_LABEL: &str = "Unknown";

/// Labels for levels 1 through 10, in order.
const LEVEL_LABELS: [&str; MAX_TRUST_LEVEL as usize] = [
    "Sprout",
    "Seedling",
    "Sapling",
    "Young Tree",
    "Mature Tree",
    "Flowering Tree",
    "Fruiting Tree",
    "Ancient Tree",
    "Sacred Grove",
    "Eternal Forest",
];

/// A discrete trust tier in `[0, 10]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TrustLevel(u8);

impl TrustLevel {
    /// Level 0: no score yet.
    pub const NONE: TrustLevel = TrustLevel(0);

    /// The highest modeled level.
    pub const MAX: TrustLevel = TrustLevel(MAX_TRUST_LEVEL);

    /// Create a trust level, rejecting values above `MAX_TRUST_LEVEL`.
    pub fn new(value: u8) -> Result<Self, FibonroseError> {
        if value > MAX_TRUST_LEVEL {
            return Err(FibonroseError::invalid(format!(
                "trust level must be in [0, {}], got {}",
                MAX_TRUST_LEVEL, value
            )));
        }
        Ok(TrustLevel(value))
    }

    /// Create a trust level from any count, saturating at `MAX_TRUST_LEVEL`.
    pub fn saturating(value: usize) -> Self {
        TrustLevel(value.min(MAX_TRUST_LEVEL as usize) as u8)
    }

    /// The numeric level.
    pub fn value(self) -> u8 {
        self.0
    }

    /// True at the highest modeled level.
    pub fn is_max(self) -> bool {
        self.0 == MAX_TRUST_LEVEL
    }

    /// Human-readable label for this level ("Unknown" for level 0).
    pub fn description(self) -> &'static str {
        get_trust_level_description(self.0 as i64)
    }
}

impl TryFrom<u8> for TrustLevel {
    type Error = FibonroseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        TrustLevel::new(value)
    }
}

impl From<TrustLevel> for u8 {
    fn from(level: TrustLevel) -> u8 {
        level.0
    }
}

impl fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Label for a trust level.
///
/// Levels 1..=10 map to the fixed table; everything else, including 0 and
/// negative values, maps to "Unknown".
pub fn get_trust_level_description(level: i64) -> &'static str {
    if (1..=MAX_TRUST_LEVEL as i64).contains(&level) {
        LEVEL_LABELS[(level - 1) as usize]
    } else {
        UNKNOWN_LEVEL_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels() {
        assert_eq!(get_trust_level_description(1), "Sprout");
        assert_eq!(get_trust_level_description(5), "Mature Tree");
        assert_eq!(get_trust_level_description(10), "Eternal Forest");
    }

    #[test]
    fn out_of_range_is_unknown() {
        for level in [0, 11, 99, -1, i64::MIN, i64::MAX] {
            assert_eq!(get_trust_level_description(level), "Unknown", "level = {}", level);
        }
    }

    #[test]
    fn labels_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for level in 1..=10 {
            assert!(seen.insert(get_trust_level_description(level)));
        }
    }

    #[test]
    fn new_rejects_above_max() {
        assert!(TrustLevel::new(10).is_ok());
        let err = TrustLevel::new(11).unwrap_err();
        assert!(matches!(err, FibonroseError::InvalidArgument(_)));
    }

    #[test]
    fn saturating_caps_at_max() {
        assert_eq!(TrustLevel::saturating(3).value(), 3);
        assert_eq!(TrustLevel::saturating(1_000), TrustLevel::MAX);
    }

    #[test]
    fn level_description_delegates() {
        assert_eq!(TrustLevel::NONE.description(), "Unknown");
        assert_eq!(TrustLevel::MAX.description(), "Eternal Forest");
    }

    #[test]
    fn serde_rejects_out_of_range() {
        let ok: TrustLevel = serde_json::from_str("7").unwrap();
        assert_eq!(ok.value(), 7);
        assert!(serde_json::from_str::<TrustLevel>("12").is_err());
        assert_eq!(serde_json::to_string(&TrustLevel::MAX).unwrap(), "10");
    }
}
