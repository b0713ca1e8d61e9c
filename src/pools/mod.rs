pub mod element;
pub mod linear;
pub mod pair_data;
pub mod pool;
pub mod pool_id;
pub mod raw;
pub mod stable;
pub mod weighted;

pub use element::ElementPool;
pub use linear::LinearPool;
pub use pair_data::PairData;
pub use pool::{Pool, PoolToken, PoolType, PoolWrapper, SwapRole, pool_from_record};
pub use pool_id::PoolId;
pub use raw::{PoolTypeFilter, RawPool, RawPoolToken, filter_pools_by_type, parse_catalog};
pub use stable::{MetaStablePool, StablePool};
pub use weighted::WeightedPool;
