use super::pair_data::PairData;
use super::pool::{Pool, PoolToken, PoolType, find_token};
use super::pool_id::PoolId;
use super::raw::RawPool;
use alloy_primitives::Address;
use rust_decimal::Decimal;

/// Amplified invariant pool for like-valued assets.
#[derive(Clone, Debug)]
pub struct StablePool {
    id: PoolId,
    address: Address,
    swap_fee: Decimal,
    amp: Decimal,
    tokens: Vec<PoolToken>,
    token_list: Vec<Address>,
}

impl StablePool {
    pub fn from_record(record: &RawPool) -> Option<Self> {
        let amp = record.amp?;
        let tokens: Vec<PoolToken> = record.tokens.iter().map(PoolToken::from).collect();
        let token_list = tokens.iter().map(|t| t.address).collect();
        Some(Self { id: record.id, address: record.address, swap_fee: record.swap_fee, amp, tokens, token_list })
    }
}

impl Pool for StablePool {
    fn get_pool_type(&self) -> PoolType {
        PoolType::Stable
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
            amp: self.amp,
            swap_fee: self.swap_fee,
        })
    }

    fn get_normalized_liquidity(&self, pair: &PairData) -> Decimal {
        pair.balance_out * pair.amp
    }
}

/// Stable pool whose balances are scaled by per-token price rates, for
/// assets that appreciate against each other (staking derivatives).
#[derive(Clone, Debug)]
pub struct MetaStablePool {
    id: PoolId,
    address: Address,
    swap_fee: Decimal,
    amp: Decimal,
    tokens: Vec<PoolToken>,
    token_list: Vec<Address>,
}

impl MetaStablePool {
    pub fn from_record(record: &RawPool) -> Option<Self> {
        let amp = record.amp?;
        let tokens: Vec<PoolToken> = record.tokens.iter().map(PoolToken::from).collect();
        let token_list = tokens.iter().map(|t| t.address).collect();
        Some(Self { id: record.id, address: record.address, swap_fee: record.swap_fee, amp, tokens, token_list })
    }
}

impl Pool for MetaStablePool {
    fn get_pool_type(&self) -> PoolType {
        PoolType::MetaStable
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
        let rate_in = tin.price_rate.unwrap_or(Decimal::ONE);
        let rate_out = tout.price_rate.unwrap_or(Decimal::ONE);
        Some(PairData {
            pool_id: self.id,
            token_in,
            token_out,
            decimals_in: tin.decimals,
            decimals_out: tout.decimals,
            balance_in: tin.balance * rate_in,
            balance_out: tout.balance * rate_out,
            weight_in: Decimal::ZERO,
            weight_out: Decimal::ZERO,
            amp: self.amp,
            swap_fee: self.swap_fee,
        })
    }

    fn get_normalized_liquidity(&self, pair: &PairData) -> Decimal {
        pair.balance_out * pair.amp
    }
}
