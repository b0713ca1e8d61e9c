use super::pair_data::PairData;
use super::pool::{Pool, PoolToken, PoolType, find_token};
use super::pool_id::PoolId;
use super::raw::RawPool;
use alloy_primitives::Address;
use rust_decimal::Decimal;

/// Fixed-term principal/base pool. Pricing converges to parity at expiry,
/// so the pool captures the request's block timestamp at construction.
#[derive(Clone, Debug)]
pub struct ElementPool {
    id: PoolId,
    address: Address,
    swap_fee: Decimal,
    tokens: Vec<PoolToken>,
    token_list: Vec<Address>,
    pub expiry_time: u64,
    pub unit_seconds: u64,
    pub principal_token: Option<Address>,
    pub base_token: Option<Address>,
    pub current_block_timestamp: u64,
}

impl ElementPool {
    pub fn from_record(record: &RawPool, block_timestamp: u64) -> Option<Self> {
        let expiry_time = record.expiry_time?;
        let unit_seconds = record.unit_seconds?;
        let tokens: Vec<PoolToken> = record.tokens.iter().map(PoolToken::from).collect();
        let token_list = tokens.iter().map(|t| t.address).collect();
        Some(Self {
            id: record.id,
            address: record.address,
            swap_fee: record.swap_fee,
            tokens,
            token_list,
            expiry_time,
            unit_seconds,
            principal_token: record.principal_token,
            base_token: record.base_token,
            current_block_timestamp: block_timestamp,
        })
    }
}

impl Pool for ElementPool {
    fn get_pool_type(&self) -> PoolType {
        PoolType::Element
    }

    fn get_pool_id(&self) -> PoolId {
        self.id
    }

    fn get_address(&self) -> Address {
        self.address
    }

    fn get_tokens(&self) -> Vec<Address> {
        self.token_list.clone()
    }

    fn derive_pair_data(&self, token_in: Address, token_out: Address) -> Option<PairData> {
        let tin = find_token(&self.tokens, &token_in)?;
        let tout = find_token(&self.tokens, &token_out)?;
        Some(PairData {
            pool_id: self.id,
            token_in,
            token_out,
            decimals_in: tin.decimals,
            decimals_out: tout.decimals,
            balance_in: tin.balance,
            balance_out: tout.balance,
            weight_in: Decimal::ZERO,
            weight_out: Decimal::ZERO,
            amp: Decimal::ZERO,
            swap_fee: self.swap_fee,
        })
    }

    fn get_normalized_liquidity(&self, pair: &PairData) -> Decimal {
        pair.balance_out
    }
}
