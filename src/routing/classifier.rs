use super::{FastIndexMap, FastIndexSet};
use crate::pools::{PairData, PoolId, PoolWrapper, RawPool, SwapRole, pool_from_record};
use alloy_primitives::Address;
use tracing::debug;

/// A pool together with the role it plays for the current request. The role
/// lives here rather than on the pool object so pools stay shareable across
/// concurrent requests.
#[derive(Clone, Debug)]
pub struct RoutablePool {
    pub pool: PoolWrapper,
    pub role: SwapRole,
    /// Derived eagerly for Direct pools; always consumed downstream.
    pub direct_pair: Option<PairData>,
}

/// Output of one catalog scan, insertion-ordered.
#[derive(Clone, Debug, Default)]
pub struct ClassifiedPools {
    /// Pools that can serve the request, by role.
    pub pools_of_interest: FastIndexMap<PoolId, RoutablePool>,
    /// Tokens usable as the single intermediate of a 2-leg route.
    pub hop_tokens: Vec<Address>,
    /// Every successfully parsed pool, regardless of role.
    pub pools_all: FastIndexMap<PoolId, PoolWrapper>,
}

/// Scan the raw catalog once, build typed pools, and classify each into a
/// swap role for the (token_in, token_out) request. Degenerate records
/// (empty token list, zero first-token balance) and unparsable records are
/// dropped silently. With `max_pools` ≤ 1 only direct pools are considered
/// and `hop_tokens` stays empty.
pub fn classify(
    raw_pools: &[RawPool],
    token_in: Address,
    token_out: Address,
    max_pools: usize,
    block_timestamp: u64,
) -> ClassifiedPools {
    let mut pools_of_interest: FastIndexMap<PoolId, RoutablePool> = FastIndexMap::default();
    let mut pools_all: FastIndexMap<PoolId, PoolWrapper> = FastIndexMap::default();
    let mut reachable_from_in: FastIndexSet<Address> = FastIndexSet::default();
    let mut reachable_from_out: FastIndexSet<Address> = FastIndexSet::default();

    for record in raw_pools {
        if record.tokens.is_empty() || record.tokens[0].balance.is_zero() {
            continue;
        }
        let Some(pool) = pool_from_record(record, block_timestamp) else {
            continue;
        };
        let id = pool.get_pool_id();
        pools_all.insert(id, pool.clone());

        let tokens = pool.get_tokens();
        let has_in = tokens.contains(&token_in);
        let has_out = tokens.contains(&token_out);

        if has_in && has_out {
            let Some(pair) = pool.derive_pair_data(token_in, token_out) else {
                continue;
            };
            pools_of_interest.insert(id, RoutablePool { pool, role: SwapRole::Direct, direct_pair: Some(pair) });
        } else if max_pools > 1 && has_in {
            reachable_from_in.extend(tokens);
            pools_of_interest.insert(id, RoutablePool { pool, role: SwapRole::HopIn, direct_pair: None });
        } else if max_pools > 1 && has_out {
            reachable_from_out.extend(tokens);
            pools_of_interest.insert(id, RoutablePool { pool, role: SwapRole::HopOut, direct_pair: None });
        }
    }

    let hop_tokens: Vec<Address> =
        reachable_from_in.iter().filter(|token| reachable_from_out.contains(*token)).copied().collect();

    debug!(
        parsed = pools_all.len(),
        of_interest = pools_of_interest.len(),
        hop_tokens = hop_tokens.len(),
        "classified pool catalog"
    );

    ClassifiedPools { pools_of_interest, hop_tokens, pools_all }
}
