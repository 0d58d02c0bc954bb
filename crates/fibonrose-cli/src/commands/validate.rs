// crates/fibonrose-cli/src/commands/validate.rs
//
// `fibonrose validate` — pre-flight check of transaction parameters.

use clap::Args;
use serde::Serialize;

use fibonrose_metrics::validation::{gas_price_to_gwei, DEFAULT_MAX_GAS, DEFAULT_MAX_GAS_PRICE_GWEI};
use fibonrose_metrics::{validate_transaction_params, GasLimits, TransactionParams};

use crate::output::{emit, FieldRow, OutputFormat};

/// Transaction validation command.
#[derive(Debug, Args)]
pub struct ValidateCmd {
    /// Recipient address (0x followed by 40 hex digits).
    #[arg(long)]
    pub to: String,

    /// Amount to send.
    #[arg(long, allow_negative_numbers = true)]
    pub amount: f64,

    /// Gas limit.
    #[arg(long)]
    pub gas: Option<u64>,

    /// Gas price, in gwei or (above 1000) in wei.
    #[arg(long)]
    pub gas_price: Option<u64>,

    /// Gas limit ceiling.
    #[arg(long, default_value_t = DEFAULT_MAX_GAS)]
    pub max_gas: u64,

    /// Gas price ceiling in gwei.
    #[arg(long, default_value_t = DEFAULT_MAX_GAS_PRICE_GWEI)]
    pub max_gas_price_gwei: f64,
}

#[derive(Serialize)]
struct ValidationOutput<'a> {
    valid: bool,
    #[serde(flatten)]
    params: &'a TransactionParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    gas_price_gwei: Option<f64>,
}

/// Run the validate command. Invalid parameters surface as the error.
pub fn run(cmd: &ValidateCmd, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let params = TransactionParams {
        to_address: cmd.to.clone(),
        amount: cmd.amount,
        gas: cmd.gas,
        gas_price: cmd.gas_price,
    };
    let limits = GasLimits {
        max_gas: cmd.max_gas,
        max_gas_price_gwei: cmd.max_gas_price_gwei,
    };
    validate_transaction_params(&params, &limits)?;

    let gas_price_gwei = params.gas_price.map(gas_price_to_gwei);
    let mut rows = vec![
        FieldRow::new("To", &params.to_address),
        FieldRow::new("Amount", params.amount),
    ];
    if let Some(gas) = params.gas {
        rows.push(FieldRow::new("Gas limit", gas));
    }
    if let Some(gwei) = gas_price_gwei {
        rows.push(FieldRow::new("Gas price (gwei)", gwei));
    }
    rows.push(FieldRow::new("Valid", "yes"));

    let data = ValidationOutput {
        valid: true,
        params: &params,
        gas_price_gwei,
    };
    emit(format, &data, &rows);
    Ok(())
}
