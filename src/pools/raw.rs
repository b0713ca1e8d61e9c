use super::pool_id::PoolId;
use alloy_primitives::Address;
use eyre::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// One pool record as delivered by the catalog-retrieval layer. Numeric
/// fields are kept as decimals; pool-type-specific fields are optional and
/// validated by the matching constructor.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPool {
    pub id: PoolId,
    pub address: Address,
    pub pool_type: String,
    #[serde(default)]
    pub swap_fee: Decimal,
    pub tokens: Vec<RawPoolToken>,
    #[serde(default)]
    pub amp: Option<Decimal>,
    #[serde(default)]
    pub main_index: Option<usize>,
    #[serde(default)]
    pub wrapped_index: Option<usize>,
    #[serde(default)]
    pub expiry_time: Option<u64>,
    #[serde(default)]
    pub unit_seconds: Option<u64>,
    #[serde(default)]
    pub principal_token: Option<Address>,
    #[serde(default)]
    pub base_token: Option<Address>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPoolToken {
    pub address: Address,
    pub balance: Decimal,
    pub decimals: u8,
    #[serde(default)]
    pub weight: Option<Decimal>,
    #[serde(default)]
    pub price_rate: Option<Decimal>,
}

/// Deserialize a catalog snapshot (a JSON array of pool records).
pub fn parse_catalog(json: &str) -> Result<Vec<RawPool>> {
    Ok(serde_json::from_str(json)?)
}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, EnumString, EnumIter, Default)]
#[strum(ascii_case_insensitive)]
pub enum PoolTypeFilter {
    #[default]
    All,
    Weighted,
    Stable,
    MetaStable,
    Element,
    Linear,
}

/// Pre-filter a catalog by declared pool type. `All` passes everything
/// through untouched.
pub fn filter_pools_by_type(pools: &[RawPool], filter: PoolTypeFilter) -> Vec<RawPool> {
    match filter {
        PoolTypeFilter::All => pools.to_vec(),
        _ => {
            let tag = filter.to_string();
            pools.iter().filter(|p| p.pool_type == tag).cloned().collect()
        }
    }
}
