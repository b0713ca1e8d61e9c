pub mod classifier;
pub mod hop_selector;
pub mod linear_paths;
pub mod path;
pub mod proposer;

use ahash::RandomState;
use indexmap::{IndexMap, IndexSet};

pub type FastHasher = RandomState;
/// Insertion-ordered map using ahash. Iteration order is the order keys
/// were first inserted, which the selection tie-breaks rely on.
pub type FastIndexMap<K, V> = IndexMap<K, V, FastHasher>;
pub type FastIndexSet<T> = IndexSet<T, FastHasher>;

pub use classifier::{ClassifiedPools, RoutablePool, classify};
pub use hop_selector::select_hop_pools;
pub use linear_paths::{build_linear_paths, index_linear_pools_by_main_token};
pub use path::{Path, Swap, best_liquidity_pool};
pub use proposer::{CandidateRoutes, DEFAULT_MAX_POOLS, RouteProposer};
