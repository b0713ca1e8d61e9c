use super::FastIndexMap;
use super::classifier::RoutablePool;
use super::path::Path;
use crate::pools::{PoolId, PoolWrapper, SwapRole};
use alloy_primitives::Address;
use rust_decimal::Decimal;
use tracing::debug;

/// Emit every direct route and, per hop token, one 2-leg route through the
/// deepest first- and second-leg pools. Returns the subset of
/// `pools_of_interest` actually referenced by an emitted path, plus the
/// paths themselves.
pub fn select_hop_pools(
    token_in: Address,
    token_out: Address,
    hop_tokens: &[Address],
    pools_of_interest: &FastIndexMap<PoolId, RoutablePool>,
) -> (FastIndexMap<PoolId, RoutablePool>, Vec<Path>) {
    let mut used_pools: FastIndexMap<PoolId, RoutablePool> = FastIndexMap::default();
    let mut paths = Vec::new();

    if hop_tokens.is_empty() {
        for (id, entry) in pools_of_interest {
            if entry.role == SwapRole::Direct {
                if let Some(pair) = &entry.direct_pair {
                    paths.push(Path::direct(&entry.pool, pair.clone()));
                    used_pools.insert(*id, entry.clone());
                }
            }
        }
        return (used_pools, paths);
    }

    for (i, hop) in hop_tokens.iter().enumerate() {
        let mut best_first: Option<PoolWrapper> = None;
        let mut best_first_liquidity = Decimal::ZERO;
        let mut best_second: Option<PoolWrapper> = None;
        let mut best_second_liquidity = Decimal::ZERO;

        for (id, entry) in pools_of_interest {
            match entry.role {
                SwapRole::Direct => {
                    // direct paths are emitted exactly once
                    if i == 0 {
                        if let Some(pair) = &entry.direct_pair {
                            paths.push(Path::direct(&entry.pool, pair.clone()));
                            used_pools.insert(*id, entry.clone());
                        }
                    }
                }
                SwapRole::HopIn => {
                    if !entry.pool.contains_token(hop) {
                        continue;
                    }
                    if let Some(pair) = entry.pool.derive_pair_data(token_in, *hop) {
                        let liquidity = entry.pool.get_normalized_liquidity(&pair);
                        if liquidity >= best_first_liquidity {
                            best_first_liquidity = liquidity;
                            best_first = Some(entry.pool.clone());
                        }
                    }
                }
                SwapRole::HopOut => {
                    if !entry.pool.contains_token(hop) {
                        continue;
                    }
                    if let Some(pair) = entry.pool.derive_pair_data(*hop, token_out) {
                        let liquidity = entry.pool.get_normalized_liquidity(&pair);
                        if liquidity >= best_second_liquidity {
                            best_second_liquidity = liquidity;
                            best_second = Some(entry.pool.clone());
                        }
                    }
                }
            }
        }

        if let (Some(first), Some(second)) = (best_first, best_second) {
            if let Some(path) = Path::multihop(&first, &second, token_in, *hop, token_out) {
                for pool in [&first, &second] {
                    let id = pool.get_pool_id();
                    if let Some(entry) = pools_of_interest.get(&id) {
                        used_pools.insert(id, entry.clone());
                    }
                }
                paths.push(path);
            }
        }
    }

    debug!(used = used_pools.len(), paths = paths.len(), "selected hop pools");

    (used_pools, paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::classifier::classify;
    use crate::pools::raw::test_records;

    fn addr(byte: u8) -> Address {
        Address::repeat_byte(byte)
    }

    #[test]
    fn test_two_leg_route_through_hop_token() {
        let (x, y, z) = (addr(1), addr(2), addr(3));
        let catalog = vec![
            test_records::weighted(0xc1, &[(x, "100", 18), (y, "100", 18)]),
            test_records::weighted(0xc2, &[(y, "100", 18), (z, "100", 18)]),
        ];
        let classified = classify(&catalog, x, z, 4, 0);

        let (used, paths) = select_hop_pools(x, z, &classified.hop_tokens, &classified.pools_of_interest);

        assert_eq!(paths.len(), 1);
        let path = &paths[0];
        assert_eq!(path.len(), 2);
        assert_eq!(path.token_in(), Some(x));
        assert_eq!(path.token_out(), Some(z));
        assert_eq!(path.swaps[0].pool, PoolId::repeat_byte(0xc1));
        assert_eq!(path.swaps[1].pool, PoolId::repeat_byte(0xc2));
        assert!(path.is_chainable());
        assert_eq!(used.len(), 2);
    }

    #[test]
    fn test_direct_paths_emitted_without_hop_tokens() {
        let (x, z) = (addr(1), addr(3));
        let catalog = vec![
            test_records::weighted(0xc3, &[(x, "100", 18), (z, "100", 18)]),
            test_records::stable(0xc4, &[(x, "100", 6), (z, "100", 6)], "100"),
        ];
        let classified = classify(&catalog, x, z, 1, 0);
        assert!(classified.hop_tokens.is_empty());

        let (used, paths) = select_hop_pools(x, z, &classified.hop_tokens, &classified.pools_of_interest);

        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|p| p.len() == 1));
        assert_eq!(used.len(), 2);
    }

    #[test]
    fn test_direct_paths_emitted_once_despite_many_hop_tokens() {
        let (x, z) = (addr(1), addr(6));
        let (h1, h2) = (addr(2), addr(3));
        let catalog = vec![
            test_records::weighted(0xc5, &[(x, "100", 18), (z, "100", 18)]),
            test_records::weighted(0xc6, &[(x, "100", 18), (h1, "100", 18), (h2, "100", 18)]),
            test_records::weighted(0xc7, &[(z, "100", 18), (h1, "100", 18), (h2, "100", 18)]),
        ];
        let classified = classify(&catalog, x, z, 4, 0);
        assert_eq!(classified.hop_tokens.len(), 2);

        let (_, paths) = select_hop_pools(x, z, &classified.hop_tokens, &classified.pools_of_interest);

        let direct_count = paths.iter().filter(|p| p.len() == 1).count();
        assert_eq!(direct_count, 1);
        // one multihop per hop token
        assert_eq!(paths.len(), 3);
    }

    #[test]
    fn test_exact_tie_goes_to_later_pool() {
        let (x, y, z) = (addr(1), addr(2), addr(3));
        let catalog = vec![
            test_records::weighted(0xc8, &[(x, "100", 18), (y, "100", 18)]),
            test_records::weighted(0xc9, &[(x, "100", 18), (y, "100", 18)]),
            test_records::weighted(0xca, &[(y, "100", 18), (z, "100", 18)]),
        ];
        let classified = classify(&catalog, x, z, 4, 0);

        let (_, paths) = select_hop_pools(x, z, &classified.hop_tokens, &classified.pools_of_interest);

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].swaps[0].pool, PoolId::repeat_byte(0xc9));
    }

    #[test]
    fn test_deeper_pool_wins() {
        let (x, y, z) = (addr(1), addr(2), addr(3));
        let catalog = vec![
            test_records::weighted(0xcb, &[(x, "100", 18), (y, "500", 18)]),
            test_records::weighted(0xcc, &[(x, "100", 18), (y, "50", 18)]),
            test_records::weighted(0xcd, &[(y, "100", 18), (z, "100", 18)]),
        ];
        let classified = classify(&catalog, x, z, 4, 0);

        let (_, paths) = select_hop_pools(x, z, &classified.hop_tokens, &classified.pools_of_interest);

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].swaps[0].pool, PoolId::repeat_byte(0xcb));
    }

    #[test]
    fn test_missing_second_leg_produces_no_path() {
        let (x, y, z) = (addr(1), addr(2), addr(3));
        let w = addr(4);
        let catalog = vec![
            test_records::weighted(0xce, &[(x, "100", 18), (y, "100", 18)]),
            test_records::weighted(0xcf, &[(z, "100", 18), (y, "100", 18), (w, "100", 18)]),
        ];
        let mut classified = classify(&catalog, x, z, 4, 0);
        // drop the only HopOut pool; its hop token remains
        classified.pools_of_interest.shift_remove(&PoolId::repeat_byte(0xcf));

        let (used, paths) = select_hop_pools(x, z, &classified.hop_tokens, &classified.pools_of_interest);

        assert!(paths.is_empty());
        assert!(used.is_empty());
    }
}
