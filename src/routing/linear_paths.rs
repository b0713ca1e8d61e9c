use super::FastIndexMap;
use super::classifier::RoutablePool;
use super::path::{Path, best_liquidity_pool};
use crate::config::RoutingConfig;
use crate::pools::{PoolId, PoolType, PoolWrapper, SwapRole};
use alloy_primitives::Address;
use tracing::debug;

/// Index every Linear-type pool by its main (underlying) token,
/// insertion-ordered.
pub fn index_linear_pools_by_main_token(
    pools_all: &FastIndexMap<PoolId, PoolWrapper>,
) -> FastIndexMap<Address, PoolWrapper> {
    let mut index: FastIndexMap<Address, PoolWrapper> = FastIndexMap::default();
    for pool in pools_all.values() {
        if pool.get_pool_type() != PoolType::Linear {
            continue;
        }
        if let Some(main) = pool.get_main_token() {
            index.insert(main, pool.clone());
        }
    }
    index
}

/// Build routes through wrapping pools and the chain's shared top-level
/// stable pool, for tokens whose liquidity sits behind a wrapper. Returns
/// empty when the chain has no configured top-level pool, when that pool is
/// absent from the catalog, or when neither token has a wrapping pool.
pub fn build_linear_paths(
    token_in: Address,
    token_out: Address,
    pools_all: &FastIndexMap<PoolId, PoolWrapper>,
    pools_of_interest: &FastIndexMap<PoolId, RoutablePool>,
    chain_id: u64,
    config: &RoutingConfig,
) -> Vec<Path> {
    let Some(top_id) = config.top_stable_pool(chain_id) else {
        return Vec::new();
    };
    let Some(top_pool) = pools_all.get(&top_id) else {
        return Vec::new();
    };

    let linear_by_main = index_linear_pools_by_main_token(pools_all);
    let linear_in = linear_by_main.get(&token_in);
    let linear_out = linear_by_main.get(&token_out);

    let mut paths = Vec::new();
    match (linear_in, linear_out) {
        (None, None) => {}
        (Some(linear_in), Some(linear_out)) => {
            // wrap in, trade between the wrappers' own tokens, unwrap out
            if let Some(path) = Path::from_token_chain(
                &[token_in, linear_in.get_address(), linear_out.get_address(), token_out],
                &[linear_in.clone(), top_pool.clone(), linear_out.clone()],
            ) {
                paths.push(path);
            }
        }
        (Some(linear_in), None) => {
            for (hop, linear_hop) in &linear_by_main {
                if *hop == token_in {
                    continue;
                }
                let Some(segment) = Path::from_token_chain(
                    &[token_in, linear_in.get_address(), linear_hop.get_address(), *hop],
                    &[linear_in.clone(), top_pool.clone(), linear_hop.clone()],
                ) else {
                    continue;
                };
                let Some(exit_pool) = best_liquidity_pool(*hop, token_out, SwapRole::HopOut, pools_of_interest) else {
                    continue;
                };
                let Some(exit_pair) = exit_pool.derive_pair_data(*hop, token_out) else {
                    continue;
                };
                paths.push(Path::compose([segment, Path::direct(&exit_pool, exit_pair)]));
            }
        }
        (None, Some(linear_out)) => {
            for (hop, linear_hop) in &linear_by_main {
                if *hop == token_out {
                    continue;
                }
                let Some(entry_pool) = best_liquidity_pool(token_in, *hop, SwapRole::HopIn, pools_of_interest) else {
                    continue;
                };
                let Some(entry_pair) = entry_pool.derive_pair_data(token_in, *hop) else {
                    continue;
                };
                let Some(segment) = Path::from_token_chain(
                    &[*hop, linear_hop.get_address(), linear_out.get_address(), token_out],
                    &[linear_hop.clone(), top_pool.clone(), linear_out.clone()],
                ) else {
                    continue;
                };
                paths.push(Path::compose([Path::direct(&entry_pool, entry_pair), segment]));
            }
        }
    }

    debug!(paths = paths.len(), "built linear routes");

    paths
}
