// crates/fibonrose-metrics/src/validation.rs
//
// Pre-flight checks for blockchain transaction parameters.
//
// Run before a measured task touches a contract: the recipient address must
// be a well-formed 20-byte hex address, the amount must sit inside the
// caller's range, and gas settings must stay under fee ceilings. Every
// failure is an `InvalidArgument`.

use serde::{Deserialize, Serialize};

use fibonrose_core::FibonroseError;

/// Gas needed by a plain value transfer; nothing cheaper can be mined.
pub const MIN_TRANSFER_GAS: u64 = 21_000;
/// Default ceiling on the gas limit.
pub const DEFAULT_MAX_GAS: u64 = 500_000;
/// Default ceiling on the gas price, in gwei.
pub const DEFAULT_MAX_GAS_PRICE_GWEI: f64 = 100.0;
/// Gas prices above this are taken to be denominated in wei.
pub const WEI_PRICE_THRESHOLD: u64 = 1_000;
pub const WEI_PER_GWEI: f64 = 1e9;

const ADDRESS_HEX_LEN: usize = 40;

/// Fee ceilings applied by [`validate_gas_params`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasLimits {
    pub max_gas: u64,
    pub max_gas_price_gwei: f64,
}

impl Default for GasLimits {
    fn default() -> Self {
        Self {
            max_gas: DEFAULT_MAX_GAS,
            max_gas_price_gwei: DEFAULT_MAX_GAS_PRICE_GWEI,
        }
    }
}

/// Check that `address` is `0x` followed by 40 hex digits.
///
/// Mixed case is accepted as-is; the EIP-55 checksum is not verified.
pub fn validate_address(address: &str) -> Result<(), FibonroseError> {
    let hex = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| FibonroseError::invalid(format!("Invalid address (missing 0x prefix): {}", address)))?;

    if hex.len() != ADDRESS_HEX_LEN || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(FibonroseError::invalid(format!(
            "Invalid address (expected {} hex digits): {}",
            ADDRESS_HEX_LEN, address
        )));
    }
    Ok(())
}

/// Check that `amount` lies in `[min, max]` (no upper bound when `max` is
/// `None`) and return it.
pub fn validate_amount(amount: f64, min: f64, max: Option<f64>) -> Result<f64, FibonroseError> {
    if !amount.is_finite() {
        return Err(FibonroseError::invalid(format!("Amount must be a finite number, got {}", amount)));
    }
    if amount < min {
        return Err(FibonroseError::invalid(format!("Amount too low: {} < {}", amount, min)));
    }
    if let Some(max) = max {
        if amount > max {
            return Err(FibonroseError::invalid(format!("Amount too high: {} > {}", amount, max)));
        }
    }
    Ok(amount)
}

/// Check a gas limit against `MIN_TRANSFER_GAS` and `max_gas`.
pub fn validate_gas_limit(gas: u64, max_gas: u64) -> Result<(), FibonroseError> {
    if gas > max_gas {
        return Err(FibonroseError::invalid(format!("Gas limit too high: {} > {}", gas, max_gas)));
    }
    if gas < MIN_TRANSFER_GAS {
        return Err(FibonroseError::invalid(format!(
            "Gas limit too low: {} < {} (minimum for transfer)",
            gas, MIN_TRANSFER_GAS
        )));
    }
    Ok(())
}

/// Normalize a gas price to gwei. Values above `WEI_PRICE_THRESHOLD` are
/// read as wei, anything smaller as gwei already.
pub fn gas_price_to_gwei(gas_price: u64) -> f64 {
    if gas_price > WEI_PRICE_THRESHOLD {
        gas_price as f64 / WEI_PER_GWEI
    } else {
        gas_price as f64
    }
}

/// Check a gas price (wei or gwei, see [`gas_price_to_gwei`]) against a
/// ceiling in gwei. Returns the price in gwei.
pub fn validate_gas_price(gas_price: u64, max_gas_price_gwei: f64) -> Result<f64, FibonroseError> {
    let gwei = gas_price_to_gwei(gas_price);
    if gwei > max_gas_price_gwei {
        return Err(FibonroseError::invalid(format!(
            "Gas price too high: {} Gwei > {} Gwei",
            gwei, max_gas_price_gwei
        )));
    }
    Ok(gwei)
}

/// Check both gas settings against `limits`.
pub fn validate_gas_params(gas: u64, gas_price: u64, limits: &GasLimits) -> Result<(), FibonroseError> {
    validate_gas_limit(gas, limits.max_gas)?;
    validate_gas_price(gas_price, limits.max_gas_price_gwei)?;
    Ok(())
}

/// The common parameters of an outgoing transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionParams {
    pub to_address: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<u64>,
}

/// Validate address, a non-negative amount, and whichever gas settings are
/// present, stopping at the first failure.
pub fn validate_transaction_params(params: &TransactionParams, limits: &GasLimits) -> Result<(), FibonroseError> {
    validate_address(&params.to_address)?;
    validate_amount(params.amount, 0.0, None)?;
    if let Some(gas) = params.gas {
        validate_gas_limit(gas, limits.max_gas)?;
    }
    if let Some(gas_price) = params.gas_price {
        validate_gas_price(gas_price, limits.max_gas_price_gwei)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VITALIK: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";

    fn is_invalid<T: std::fmt::Debug>(result: Result<T, FibonroseError>) -> bool {
        matches!(result, Err(FibonroseError::InvalidArgument(_)))
    }

    #[test]
    fn valid_address_passes() {
        validate_address(VITALIK).unwrap();
        validate_address(&VITALIK.to_lowercase()).unwrap();
    }

    #[test]
    fn malformed_addresses_fail() {
        assert!(is_invalid(validate_address("invalid_address")));
        assert!(is_invalid(validate_address("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045")));
        assert!(is_invalid(validate_address("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA9604")));
        assert!(is_invalid(validate_address("0xz8dA6BF26964aF9D7eEd9e03E53415D37aA96045")));
        assert!(is_invalid(validate_address("0x")));
    }

    #[test]
    fn amount_within_range() {
        assert_eq!(validate_amount(1.5, 0.001, Some(10.0)).unwrap(), 1.5);
        assert_eq!(validate_amount(10.0, 0.001, Some(10.0)).unwrap(), 10.0);
        assert_eq!(validate_amount(1e12, 0.0, None).unwrap(), 1e12);
    }

    #[test]
    fn amount_out_of_range() {
        assert!(is_invalid(validate_amount(0.0001, 0.001, Some(10.0))));
        assert!(is_invalid(validate_amount(15.0, 0.001, Some(10.0))));
        assert!(is_invalid(validate_amount(-1.0, 0.0, None)));
    }

    #[test]
    fn amount_must_be_finite() {
        assert!(is_invalid(validate_amount(f64::NAN, 0.0, None)));
        assert!(is_invalid(validate_amount(f64::INFINITY, 0.0, None)));
    }

    #[test]
    fn gas_params_within_limits() {
        validate_gas_params(100_000, 50, &GasLimits::default()).unwrap();
        validate_gas_params(MIN_TRANSFER_GAS, 100, &GasLimits::default()).unwrap();
    }

    #[test]
    fn gas_limit_too_high() {
        assert!(is_invalid(validate_gas_params(600_000, 50, &GasLimits::default())));
        let tight = GasLimits {
            max_gas: 300_000,
            max_gas_price_gwei: 50.0,
        };
        assert!(is_invalid(validate_gas_limit(300_001, tight.max_gas)));
    }

    #[test]
    fn gas_limit_below_transfer_minimum() {
        assert!(is_invalid(validate_gas_limit(10_000, DEFAULT_MAX_GAS)));
    }

    #[test]
    fn gas_price_read_as_wei_above_threshold() {
        assert_eq!(gas_price_to_gwei(50), 50.0);
        assert_eq!(gas_price_to_gwei(1_000), 1_000.0);
        assert_eq!(gas_price_to_gwei(30_000_000_000), 30.0);

        validate_gas_price(30_000_000_000, DEFAULT_MAX_GAS_PRICE_GWEI).unwrap();
        assert!(is_invalid(validate_gas_price(150_000_000_000, DEFAULT_MAX_GAS_PRICE_GWEI)));
        // Small values are already gwei: 500 gwei is over the default ceiling.
        assert!(is_invalid(validate_gas_price(500, DEFAULT_MAX_GAS_PRICE_GWEI)));
    }

    #[test]
    fn transaction_params_checks_each_field() {
        let limits = GasLimits::default();
        let mut params = TransactionParams {
            to_address: VITALIK.to_string(),
            amount: 0.5,
            gas: None,
            gas_price: None,
        };
        validate_transaction_params(&params, &limits).unwrap();

        params.gas = Some(21_000);
        params.gas_price = Some(20_000_000_000);
        validate_transaction_params(&params, &limits).unwrap();

        params.gas = Some(1_000);
        assert!(is_invalid(validate_transaction_params(&params, &limits)));

        params.gas = Some(21_000);
        params.amount = -0.1;
        assert!(is_invalid(validate_transaction_params(&params, &limits)));

        params.amount = 0.5;
        params.to_address = "0x1234".to_string();
        assert!(is_invalid(validate_transaction_params(&params, &limits)));
    }

    #[test]
    fn transaction_params_from_json() {
        let params: TransactionParams =
            serde_json::from_str(&format!(r#"{{"to_address":"{}","amount":1.0}}"#, VITALIK)).unwrap();
        assert_eq!(params.gas, None);
        validate_transaction_params(&params, &GasLimits::default()).unwrap();
    }
}
