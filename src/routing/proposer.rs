use super::classifier::{RoutablePool, classify};
use super::hop_selector::select_hop_pools;
use super::linear_paths::build_linear_paths;
use super::path::Path;
use super::FastIndexMap;
use crate::config::RoutingConfig;
use crate::pools::{PoolId, PoolWrapper, RawPool};
use alloy_primitives::Address;
use tracing::debug;

pub const DEFAULT_MAX_POOLS: usize = 4;

/// Everything one routing request produces for the downstream amount
/// optimizer.
#[derive(Clone, Debug, Default)]
pub struct CandidateRoutes {
    pub paths: Vec<Path>,
    pub hop_tokens: Vec<Address>,
    pub pools_all: FastIndexMap<PoolId, PoolWrapper>,
    pub used_pools: FastIndexMap<PoolId, RoutablePool>,
}

/// Facade over the discovery pipeline: classify the catalog, select direct
/// and hop routes, then append linear-wrapped routes for the configured
/// chain.
#[derive(Clone, Debug)]
pub struct RouteProposer {
    chain_id: u64,
    config: RoutingConfig,
}

impl RouteProposer {
    pub fn new(chain_id: u64, config: RoutingConfig) -> Self {
        Self { chain_id, config }
    }

    pub fn candidate_paths(
        &self,
        catalog: &[RawPool],
        token_in: Address,
        token_out: Address,
        max_pools: usize,
        block_timestamp: u64,
    ) -> CandidateRoutes {
        let classified = classify(catalog, token_in, token_out, max_pools, block_timestamp);
        let (used_pools, mut paths) =
            select_hop_pools(token_in, token_out, &classified.hop_tokens, &classified.pools_of_interest);
        let linear_paths = build_linear_paths(
            token_in,
            token_out,
            &classified.pools_all,
            &classified.pools_of_interest,
            self.chain_id,
            &self.config,
        );
        paths.extend(linear_paths);

        debug!(chain_id = self.chain_id, candidates = paths.len(), "assembled candidate routes");

        CandidateRoutes { paths, hop_tokens: classified.hop_tokens, pools_all: classified.pools_all, used_pools }
    }
}
