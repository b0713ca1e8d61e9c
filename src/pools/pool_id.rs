use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// 32-byte pool identifier. The first 20 bytes are the pool's on-chain
/// address, the remainder encodes specialization and registration nonce.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PoolId(pub B256);

impl PoolId {
    pub const ZERO: PoolId = PoolId(B256::ZERO);

    pub fn new(raw: B256) -> Self {
        PoolId(raw)
    }

    /// The pool address embedded in the id.
    pub fn address(&self) -> Address {
        Address::from_slice(&self.0[..20])
    }

    // For testing purposes
    pub fn repeat_byte(byte: u8) -> Self {
        PoolId(B256::repeat_byte(byte))
    }
}

impl Display for PoolId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<B256> for PoolId {
    fn from(raw: B256) -> Self {
        PoolId(raw)
    }
}

impl FromStr for PoolId {
    type Err = <B256 as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PoolId(B256::from_str(s)?))
    }
}
