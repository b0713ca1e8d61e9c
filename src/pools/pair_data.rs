use super::pool_id::PoolId;
use alloy_primitives::Address;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-(pool, token_in, token_out) data derived on demand for one routing
/// request. Carries the decimal precision of both legs plus the numeric
/// inputs of the liquidity heuristic; never cached across requests.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PairData {
    pub pool_id: PoolId,
    pub token_in: Address,
    pub token_out: Address,
    pub decimals_in: u8,
    pub decimals_out: u8,
    pub balance_in: Decimal,
    pub balance_out: Decimal,
    // zero when the pool type has no weights
    pub weight_in: Decimal,
    pub weight_out: Decimal,
    // zero when the pool type has no amplification
    pub amp: Decimal,
    pub swap_fee: Decimal,
}
