use super::element::ElementPool;
use super::linear::LinearPool;
use super::pair_data::PairData;
use super::pool_id::PoolId;
use super::raw::{RawPool, RawPoolToken};
use super::stable::{MetaStablePool, StablePool};
use super::weighted::WeightedPool;
use alloy_primitives::Address;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::str::FromStr;
use std::sync::Arc;
use strum_macros::{Display, EnumIter, EnumString, VariantNames};

#[derive(Copy, Clone, Debug, Display, PartialEq, Hash, Eq, EnumString, VariantNames, Default, Deserialize, Serialize, EnumIter)]
pub enum PoolType {
    #[default]
    Weighted,
    Stable,
    MetaStable,
    Element,
    Linear,
}

/// Role a pool plays for one (token_in, token_out) routing request.
#[derive(Copy, Clone, Debug, Display, PartialEq, Hash, Eq, Deserialize, Serialize)]
pub enum SwapRole {
    Direct,
    HopIn,
    HopOut,
}

/// One constituent token of a pool, parsed from the raw catalog record.
#[derive(Clone, Debug, PartialEq)]
pub struct PoolToken {
    pub address: Address,
    pub balance: Decimal,
    pub decimals: u8,
    pub weight: Option<Decimal>,
    pub price_rate: Option<Decimal>,
}

impl From<&RawPoolToken> for PoolToken {
    fn from(raw: &RawPoolToken) -> Self {
        PoolToken {
            address: raw.address,
            balance: raw.balance,
            decimals: raw.decimals,
            weight: raw.weight,
            price_rate: raw.price_rate,
        }
    }
}

pub(crate) fn find_token<'a>(tokens: &'a [PoolToken], address: &Address) -> Option<&'a PoolToken> {
    tokens.iter().find(|t| t.address == *address)
}

pub trait Pool: Sync + Send {
    fn get_pool_type(&self) -> PoolType;

    fn get_pool_id(&self) -> PoolId;

    fn get_address(&self) -> Address;

    fn get_tokens(&self) -> Vec<Address>;

    fn contains_token(&self, token: &Address) -> bool {
        self.get_tokens().contains(token)
    }

    /// Derive the per-pair data for a swap leg. `None` when either token is
    /// not part of the pool.
    fn derive_pair_data(&self, token_in: Address, token_out: Address) -> Option<PairData>;

    /// Scalar estimate of tradable depth for the pair before significant
    /// price impact. Only comparable between pools considered for the same leg.
    fn get_normalized_liquidity(&self, pair: &PairData) -> Decimal;

    /// Underlying ("main") token for wrapping pools, `None` otherwise.
    fn get_main_token(&self) -> Option<Address> {
        None
    }
}

pub struct PoolWrapper {
    pub pool: Arc<dyn Pool>,
}

impl PoolWrapper {
    pub fn new(pool: Arc<dyn Pool>) -> Self {
        PoolWrapper { pool }
    }
}

impl PartialOrd for PoolWrapper {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for PoolWrapper {}

impl Ord for PoolWrapper {
    fn cmp(&self, other: &Self) -> Ordering {
        self.get_pool_id().cmp(&other.get_pool_id())
    }
}

impl Display for PoolWrapper {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.get_pool_type(), self.get_pool_id())
    }
}

impl Debug for PoolWrapper {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.get_pool_type(), self.get_pool_id())
    }
}

impl Hash for PoolWrapper {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get_pool_id().hash(state)
    }
}

impl PartialEq for PoolWrapper {
    fn eq(&self, other: &Self) -> bool {
        self.pool.get_pool_id() == other.pool.get_pool_id()
    }
}

impl Clone for PoolWrapper {
    fn clone(&self) -> Self {
        Self { pool: self.pool.clone() }
    }
}

impl Deref for PoolWrapper {
    type Target = dyn Pool;

    fn deref(&self) -> &Self::Target {
        self.pool.deref()
    }
}

impl<T: 'static + Pool + Clone> From<T> for PoolWrapper {
    fn from(pool: T) -> Self {
        Self { pool: Arc::new(pool) }
    }
}

/// Build a typed pool from a raw catalog record. Returns `None` for
/// unrecognized type tags and for records missing the numeric fields their
/// declared type requires.
pub fn pool_from_record(record: &RawPool, block_timestamp: u64) -> Option<PoolWrapper> {
    let pool_type = match record.pool_type.as_str() {
        // weighted variants with extra lifecycle rules upstream; routed identically
        "LiquidityBootstrapping" | "Investment" => PoolType::Weighted,
        other => PoolType::from_str(other).ok()?,
    };

    match pool_type {
        PoolType::Weighted => WeightedPool::from_record(record).map(PoolWrapper::from),
        PoolType::Stable => StablePool::from_record(record).map(PoolWrapper::from),
        PoolType::MetaStable => MetaStablePool::from_record(record).map(PoolWrapper::from),
        PoolType::Element => ElementPool::from_record(record, block_timestamp).map(PoolWrapper::from),
        PoolType::Linear => LinearPool::from_record(record).map(PoolWrapper::from),
    }
}
