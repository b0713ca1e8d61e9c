use super::pair_data::PairData;
use super::pool::{Pool, PoolToken, PoolType, find_token};
use super::pool_id::PoolId;
use super::raw::RawPool;
use alloy_primitives::Address;
use rust_decimal::Decimal;

/// Constant-mean pool with per-token weights.
#[derive(Clone, Debug)]
pub struct WeightedPool {
    id: PoolId,
    address: Address,
    swap_fee: Decimal,
    tokens: Vec<PoolToken>,
    token_list: Vec<Address>,
}

impl WeightedPool {
    pub fn from_record(record: &RawPool) -> Option<Self> {
        // every constituent must carry a weight
        if record.tokens.iter().any(|t| t.weight.is_none()) {
            return None;
        }
        let tokens: Vec<PoolToken> = record.tokens.iter().map(PoolToken::from).collect();
        let token_list = tokens.iter().map(|t| t.address).collect();
        Some(Self { id: record.id, address: record.address, swap_fee: record.swap_fee, tokens, token_list })
    }
}

impl Pool for WeightedPool {
    fn get_pool_type(&self) -> PoolType {
        PoolType::Weighted
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
            weight_in: tin.weight?,
            weight_out: tout.weight?,
            amp: Decimal::ZERO,
            swap_fee: self.swap_fee,
        })
    }

    fn get_normalized_liquidity(&self, pair: &PairData) -> Decimal {
        let total = pair.weight_in + pair.weight_out;
        if total.is_zero() {
            return Decimal::ZERO;
        }
        pair.balance_out * pair.weight_in / total
    }
}
