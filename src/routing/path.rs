use super::FastIndexMap;
use super::classifier::RoutablePool;
use crate::pools::{PairData, PoolId, PoolWrapper, SwapRole};
use alloy_primitives::Address;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One step of a route: a swap of `token_in` for `token_out` against a
/// single pool.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Swap {
    pub pool: PoolId,
    pub token_in: Address,
    pub token_out: Address,
    pub token_in_decimals: u8,
    pub token_out_decimals: u8,
}

/// An ordered, token-chainable sequence of swap legs from a source token to
/// a destination token. Identity is the ordered concatenation of the
/// participating pool ids, so reversing the legs yields a different path.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub id: String,
    pub swaps: Vec<Swap>,
    pub pair_data: Vec<PairData>,
    pub pools: Vec<PoolWrapper>,
    /// Filled in by the downstream amount optimizer.
    pub limit_amount: Decimal,
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut tokens: Vec<Address> = self.swaps.iter().map(|s| s.token_in).collect();
        if let Some(last) = self.swaps.last() {
            tokens.push(last.token_out);
        }
        write!(f, "Path(id={}, tokens={:?})", self.id, tokens)
    }
}

impl Path {
    /// Single-leg path over one pool from pre-derived pair data.
    pub fn direct(pool: &PoolWrapper, pair: PairData) -> Self {
        let swap = Swap {
            pool: pool.get_pool_id(),
            token_in: pair.token_in,
            token_out: pair.token_out,
            token_in_decimals: pair.decimals_in,
            token_out_decimals: pair.decimals_out,
        };
        Path {
            id: pool.get_pool_id().to_string(),
            swaps: vec![swap],
            pair_data: vec![pair],
            pools: vec![pool.clone()],
            limit_amount: Decimal::ZERO,
        }
    }

    /// Two-leg path token_in → hop → token_out. `None` when either pool
    /// cannot serve its leg.
    pub fn multihop(
        first: &PoolWrapper,
        second: &PoolWrapper,
        token_in: Address,
        hop: Address,
        token_out: Address,
    ) -> Option<Self> {
        let first_pair = first.derive_pair_data(token_in, hop)?;
        let second_pair = second.derive_pair_data(hop, token_out)?;
        Some(Path::compose([Path::direct(first, first_pair), Path::direct(second, second_pair)]))
    }

    /// Concatenate already leg-compatible sub-paths into one path. Does not
    /// validate chainability; the caller guarantees it.
    pub fn compose<I: IntoIterator<Item = Path>>(subpaths: I) -> Self {
        let mut id = String::new();
        let mut swaps = Vec::new();
        let mut pair_data = Vec::new();
        let mut pools = Vec::new();
        for path in subpaths {
            id.push_str(&path.id);
            swaps.extend(path.swaps);
            pair_data.extend(path.pair_data);
            pools.extend(path.pools);
        }
        Path { id, swaps, pair_data, pools, limit_amount: Decimal::ZERO }
    }

    /// Build a path along `tokens` where `pools[i]` serves the leg
    /// tokens[i] → tokens[i+1]. `None` on length mismatch or when any pool
    /// cannot serve its leg.
    pub fn from_token_chain(tokens: &[Address], pools: &[PoolWrapper]) -> Option<Self> {
        if pools.is_empty() || tokens.len() != pools.len() + 1 {
            return None;
        }
        let mut segments = Vec::with_capacity(pools.len());
        for (i, pool) in pools.iter().enumerate() {
            let pair = pool.derive_pair_data(tokens[i], tokens[i + 1])?;
            segments.push(Path::direct(pool, pair));
        }
        Some(Path::compose(segments))
    }

    pub fn token_in(&self) -> Option<Address> {
        self.swaps.first().map(|s| s.token_in)
    }

    pub fn token_out(&self) -> Option<Address> {
        self.swaps.last().map(|s| s.token_out)
    }

    /// The hop count of the path.
    pub fn len(&self) -> usize {
        self.swaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swaps.is_empty()
    }

    pub fn contains_pool(&self, pool_id: &PoolId) -> bool {
        self.swaps.iter().any(|s| s.pool == *pool_id)
    }

    /// Consecutive legs hand over the same token.
    pub fn is_chainable(&self) -> bool {
        self.swaps.windows(2).all(|w| w[0].token_out == w[1].token_in)
    }
}

/// Scan `pools` for the deepest pool of the given role able to serve
/// (token_in, token_out). Later-iterated pools win exact liquidity ties.
pub fn best_liquidity_pool(
    token_in: Address,
    token_out: Address,
    role: SwapRole,
    pools: &FastIndexMap<PoolId, RoutablePool>,
) -> Option<PoolWrapper> {
    let mut best: Option<PoolWrapper> = None;
    let mut best_liquidity = Decimal::ZERO;
    for entry in pools.values() {
        if entry.role != role || !entry.pool.contains_token(&token_in) || !entry.pool.contains_token(&token_out) {
            continue;
        }
        let Some(pair) = entry.pool.derive_pair_data(token_in, token_out) else {
            continue;
        };
        let liquidity = entry.pool.get_normalized_liquidity(&pair);
        if liquidity >= best_liquidity {
            best_liquidity = liquidity;
            best = Some(entry.pool.clone());
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pools::raw::test_records;
    use crate::pools::pool_from_record;

    fn weighted_pool(id_byte: u8, tokens: &[(Address, &str, u8)]) -> PoolWrapper {
        pool_from_record(&test_records::weighted(id_byte, tokens), 0).unwrap()
    }

    #[test]
    fn test_direct_path() {
        let x = Address::repeat_byte(1);
        let y = Address::repeat_byte(2);
        let pool = weighted_pool(20, &[(x, "100", 18), (y, "200", 6)]);

        let pair = pool.derive_pair_data(x, y).unwrap();
        let path = Path::direct(&pool, pair);

        assert_eq!(path.id, PoolId::repeat_byte(20).to_string());
        assert_eq!(path.len(), 1);
        assert_eq!(path.token_in(), Some(x));
        assert_eq!(path.token_out(), Some(y));
        assert_eq!(path.swaps[0].token_out_decimals, 6);
        assert_eq!(path.limit_amount, Decimal::ZERO);
        assert!(path.is_chainable());
    }

    #[test]
    fn test_multihop_identity_is_order_sensitive() {
        let x = Address::repeat_byte(1);
        let y = Address::repeat_byte(2);
        let z = Address::repeat_byte(3);
        let a = weighted_pool(21, &[(x, "100", 18), (y, "200", 18)]);
        let b = weighted_pool(22, &[(y, "300", 18), (z, "400", 18)]);

        let forward = Path::multihop(&a, &b, x, y, z).unwrap();
        let backward = Path::multihop(&b, &a, z, y, x).unwrap();

        assert_eq!(forward.id, format!("{}{}", a.get_pool_id(), b.get_pool_id()));
        assert_ne!(forward.id, backward.id);
        assert!(forward.is_chainable());
        assert!(forward.contains_pool(&a.get_pool_id()));
        assert!(forward.contains_pool(&b.get_pool_id()));
    }

    #[test]
    fn test_multihop_requires_serving_pools() {
        let x = Address::repeat_byte(1);
        let y = Address::repeat_byte(2);
        let z = Address::repeat_byte(3);
        let a = weighted_pool(23, &[(x, "100", 18), (y, "200", 18)]);
        let b = weighted_pool(24, &[(y, "300", 18), (z, "400", 18)]);

        assert!(Path::multihop(&a, &b, x, z, y).is_none());
    }

    #[test]
    fn test_compose_concatenates() {
        let x = Address::repeat_byte(1);
        let y = Address::repeat_byte(2);
        let z = Address::repeat_byte(3);
        let a = weighted_pool(25, &[(x, "100", 18), (y, "200", 18)]);
        let b = weighted_pool(26, &[(y, "300", 18), (z, "400", 18)]);

        let left = Path::direct(&a, a.derive_pair_data(x, y).unwrap());
        let right = Path::direct(&b, b.derive_pair_data(y, z).unwrap());
        let composed = Path::compose([left.clone(), right.clone()]);

        assert_eq!(composed.id, format!("{}{}", left.id, right.id));
        assert_eq!(composed.len(), 2);
        assert_eq!(composed.pair_data.len(), 2);
        assert_eq!(composed.pools.len(), 2);
        assert!(composed.is_chainable());
    }

    #[test]
    fn test_from_token_chain() {
        let x = Address::repeat_byte(1);
        let y = Address::repeat_byte(2);
        let z = Address::repeat_byte(3);
        let a = weighted_pool(27, &[(x, "100", 18), (y, "200", 18)]);
        let b = weighted_pool(28, &[(y, "300", 18), (z, "400", 18)]);

        let path = Path::from_token_chain(&[x, y, z], &[a.clone(), b.clone()]).unwrap();
        assert_eq!(path.len(), 2);
        assert!(path.is_chainable());

        assert!(Path::from_token_chain(&[x, y], &[a.clone(), b.clone()]).is_none());
        assert!(Path::from_token_chain(&[x, z, y], &[a, b]).is_none());
    }
}
