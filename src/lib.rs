// Candidate swap-route discovery over a liquidity-pool catalog.
pub mod config;   // Per-chain routing table
pub mod pools;    // Typed pool variants, factory, raw catalog models
pub mod routing;  // Classification, hop selection, path assembly

// Re-export key components
pub use config::{ChainRouting, LoadConfigError, RoutingConfig};
pub use pools::{
    ElementPool, LinearPool, MetaStablePool, PairData, Pool, PoolId, PoolToken, PoolType, PoolTypeFilter,
    PoolWrapper, RawPool, RawPoolToken, StablePool, SwapRole, WeightedPool, filter_pools_by_type, parse_catalog,
    pool_from_record,
};
pub use routing::{
    CandidateRoutes, ClassifiedPools, DEFAULT_MAX_POOLS, FastIndexMap, FastIndexSet, Path, RoutablePool,
    RouteProposer, Swap, best_liquidity_pool, build_linear_paths, classify, index_linear_pools_by_main_token,
    select_hop_pools,
};
