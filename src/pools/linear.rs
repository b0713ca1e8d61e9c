use super::pair_data::PairData;
use super::pool::{Pool, PoolToken, PoolType, find_token};
use super::pool_id::PoolId;
use super::raw::RawPool;
use alloy_primitives::Address;
use rust_decimal::Decimal;

/// Wrapping pool: holds one main (underlying) token, its yield-bearing
/// wrapped form, and the pool's own balance-bearing token. The balance-
/// bearing token is what the shared top-level stable pool trades between.
#[derive(Clone, Debug)]
pub struct LinearPool {
    id: PoolId,
    address: Address,
    swap_fee: Decimal,
    tokens: Vec<PoolToken>,
    token_list: Vec<Address>,
    main_index: usize,
    wrapped_index: usize,
}

impl LinearPool {
    pub fn from_record(record: &RawPool) -> Option<Self> {
        let main_index = record.main_index?;
        let wrapped_index = record.wrapped_index?;
        if main_index >= record.tokens.len() || wrapped_index >= record.tokens.len() {
            return None;
        }
        let tokens: Vec<PoolToken> = record.tokens.iter().map(PoolToken::from).collect();
        let token_list = tokens.iter().map(|t| t.address).collect();
        Some(Self {
            id: record.id,
            address: record.address,
            swap_fee: record.swap_fee,
            tokens,
            token_list,
            main_index,
            wrapped_index,
        })
    }

    pub fn main_token(&self) -> Address {
        self.tokens[self.main_index].address
    }

    pub fn wrapped_token(&self) -> Address {
        self.tokens[self.wrapped_index].address
    }
}

impl Pool for LinearPool {
    fn get_pool_type(&self) -> PoolType {
        PoolType::Linear
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

    fn get_main_token(&self) -> Option<Address> {
        Some(self.main_token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pools::raw::test_records;

    #[test]
    fn test_main_and_wrapped_tokens() {
        let main = Address::repeat_byte(1);
        let wrapped = Address::repeat_byte(2);
        let pool = LinearPool::from_record(&test_records::linear(15, (main, "1000000", 6), (wrapped, "900000", 6))).unwrap();

        assert_eq!(pool.main_token(), main);
        assert_eq!(pool.wrapped_token(), wrapped);
        assert_eq!(pool.get_main_token(), Some(main));
        // the pool's own balance-bearing token is part of its token list
        assert!(pool.contains_token(&pool.get_address()));
    }

    #[test]
    fn test_pair_to_own_token() {
        let main = Address::repeat_byte(1);
        let wrapped = Address::repeat_byte(2);
        let pool = LinearPool::from_record(&test_records::linear(16, (main, "1000000", 6), (wrapped, "900000", 6))).unwrap();

        let pair = pool.derive_pair_data(main, pool.get_address()).unwrap();
        assert_eq!(pair.decimals_out, 18);
        assert_eq!(pair.token_out, pool.get_address());
    }

    #[test]
    fn test_rejects_out_of_range_indices() {
        let main = Address::repeat_byte(1);
        let wrapped = Address::repeat_byte(2);
        let mut record = test_records::linear(17, (main, "1", 6), (wrapped, "1", 6));
        record.wrapped_index = Some(9);
        assert!(LinearPool::from_record(&record).is_none());
    }
}
