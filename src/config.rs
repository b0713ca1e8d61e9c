use crate::pools::PoolId;
use alloy_primitives::b256;
use dotenvy::dotenv;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};
use thiserror::Error;

pub const MAINNET: u64 = 1;
pub const POLYGON: u64 = 137;

const MAINNET_TOP_STABLE_POOL: PoolId =
    PoolId(b256!("0x06df3b2bbb68adc8b0e302443692037ed9f91b42000000000000000000000063"));
const POLYGON_TOP_STABLE_POOL: PoolId =
    PoolId(b256!("0x06df3b2bbb68adc8b0e302443692037ed9f91b42000000000000000000000012"));

#[derive(Debug, Error)]
pub enum LoadConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainRouting {
    pub chain_id: u64,
    /// Id of the shared top-level stable pool trading between the wrapping
    /// pools' own tokens on this chain.
    pub top_stable_pool: PoolId,
}

/// Read-only per-chain routing table, injected into the linear-path
/// builder. Chains without an entry simply never produce linear routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingConfig {
    #[serde(default)]
    pub chains: Vec<ChainRouting>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            chains: vec![
                ChainRouting { chain_id: MAINNET, top_stable_pool: MAINNET_TOP_STABLE_POOL },
                ChainRouting { chain_id: POLYGON, top_stable_pool: POLYGON_TOP_STABLE_POOL },
            ],
        }
    }
}

impl RoutingConfig {
    pub fn new(entries: impl IntoIterator<Item = (u64, PoolId)>) -> Self {
        Self {
            chains: entries
                .into_iter()
                .map(|(chain_id, top_stable_pool)| ChainRouting { chain_id, top_stable_pool })
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self { chains: Vec::new() }
    }

    pub fn top_stable_pool(&self, chain_id: u64) -> Option<PoolId> {
        self.chains.iter().find(|c| c.chain_id == chain_id).map(|c| c.top_stable_pool)
    }

    /// Load from a TOML file, expanding `${VAR}` references from the
    /// environment first.
    pub fn load_from_file_sync<P: AsRef<Path>>(file_name: P) -> Result<Self, LoadConfigError> {
        dotenv().ok();
        let contents = fs::read_to_string(file_name)?;
        let contents = expand_vars(&contents);
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

fn expand_vars(raw_config: &str) -> String {
    // https://stackoverflow.com/questions/62888154/rust-load-environment-variables-into-log4rs-yml-file
    let re = Regex::new(r"\$\{([a-zA-Z_][0-9a-zA-Z_]*)\}").unwrap();
    re.replace_all(raw_config, |caps: &Captures| match env::var(&caps[1]) {
        Ok(val) => val,
        Err(_) => caps[0].to_string(),
    })
    .to_string()
}
