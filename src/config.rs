//! Verifier configuration.
//!
//! Everything here has a default matching the audited deployment, so a
//! config file is only needed to override values. Keys are camelCase.

use crate::constants::{
    DEFAULT_CHAIN_TIMEOUT_SECS, DEFAULT_CONCURRENCY, DEFAULT_RPC_TIMEOUT_SECS,
    REQUIRED_TIMELOCK_DELAY_SECS,
};
use crate::errors::ConfigError;
use crate::manifest::Cohort;
use crate::verify::bytecode::ProxyVariant;
use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

/// Signers of the first deployment batch.
pub const BATCH1_OWNERS: [Address; 5] = [
    address!("6A7Ff17e8347e7EAd5856c83299ACb506Cb878b3"),
    address!("A225600152a2f640c2274757C4d48a45696f874c"),
    address!("DD62d882ca6bE24d08D0067A4660d9165eb9F80C"),
    address!("F522712DdAb999493D716eD681D8a0fb5C5FdC90"),
    address!("92cfFf81BD9D3ca540d3ee7e7d26A67b47FdB7c8"),
];

/// Signers of the second deployment batch (high-trust chains).
pub const BATCH2_OWNERS: [Address; 5] = [
    address!("E27B5c80DE762cd47f824515f845CB4bec881F88"),
    address!("6A7Ff17e8347e7EAd5856c83299ACb506Cb878b3"),
    address!("DD62d882ca6bE24d08D0067A4660d9165eb9F80C"),
    address!("F522712DdAb999493D716eD681D8a0fb5C5FdC90"),
    address!("92cfFf81BD9D3ca540d3ee7e7d26A67b47FdB7c8"),
];

/// Expected multisig owners per cohort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortOwners {
    /// Owners for [`Cohort::Batch1`]
    pub batch1: Vec<Address>,
    /// Owners for [`Cohort::Batch2`]
    pub batch2: Vec<Address>,
}

impl Default for CohortOwners {
    fn default() -> Self {
        Self { batch1: BATCH1_OWNERS.to_vec(), batch2: BATCH2_OWNERS.to_vec() }
    }
}

impl CohortOwners {
    /// Expected owner list for `cohort`.
    pub fn for_cohort(&self, cohort: Cohort) -> &[Address] {
        match cohort {
            Cohort::Batch1 => &self.batch1,
            Cohort::Batch2 => &self.batch2,
        }
    }
}

/// Top-level verifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct VerifierConfig {
    /// Required `getMinDelay()` of every timelock, in seconds
    pub required_delay_secs: u64,
    /// Proxy implementation whose immutable layout is used to split bytecode
    pub proxy_variant: ProxyVariant,
    /// Artifact name of the locally built proxy
    pub proxy_artifact: String,
    /// Artifact name of the token implementation (full-bytecode check when set)
    pub token_implementation_artifact: Option<String>,
    /// Artifact name of the adapter implementation (full-bytecode check when set)
    pub adapter_implementation_artifact: Option<String>,
    /// Expected multisig owners per cohort
    pub cohorts: CohortOwners,
    /// Networks whose records default to [`Cohort::Batch2`] when the manifest omits a cohort
    pub high_trust_networks: Vec<String>,
    /// Chains verified at the same time
    pub concurrency: usize,
    /// Budget for one chain's whole check suite, in seconds
    pub chain_timeout_secs: u64,
    /// Timeout of a single RPC request, in seconds
    pub rpc_timeout_secs: u64,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            required_delay_secs: REQUIRED_TIMELOCK_DELAY_SECS,
            proxy_variant: ProxyVariant::TransparentUpgradeableProxy,
            proxy_artifact: ProxyVariant::TransparentUpgradeableProxy.artifact().to_string(),
            token_implementation_artifact: None,
            adapter_implementation_artifact: None,
            cohorts: CohortOwners::default(),
            high_trust_networks: vec!["mainnet".to_string(), "bera".to_string()],
            concurrency: DEFAULT_CONCURRENCY,
            chain_timeout_secs: DEFAULT_CHAIN_TIMEOUT_SECS,
            rpc_timeout_secs: DEFAULT_RPC_TIMEOUT_SECS,
        }
    }
}

impl VerifierConfig {
    /// Parse a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_json(&json)
    }

    /// Reject values that would make every run meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::InvalidConfig("concurrency must be > 0".to_string()));
        }
        if self.chain_timeout_secs == 0 || self.rpc_timeout_secs == 0 {
            return Err(ConfigError::InvalidConfig("timeouts must be > 0".to_string()));
        }
        for cohort in Cohort::ALL {
            let owners = self.cohorts.for_cohort(cohort);
            if owners.is_empty() {
                return Err(ConfigError::InvalidConfig(format!("no owners for cohort {cohort}")));
            }
            let mut seen = HashSet::with_capacity(owners.len());
            if let Some(duplicate) = owners.iter().find(|owner| !seen.insert(*owner)) {
                return Err(ConfigError::InvalidConfig(format!(
                    "owner {duplicate} listed twice for cohort {cohort}"
                )));
            }
        }
        Ok(())
    }

    /// Whether `network` belongs to the high-trust allowlist.
    pub fn is_high_trust(&self, network: &str) -> bool {
        self.high_trust_networks.iter().any(|n| n.eq_ignore_ascii_case(network))
    }

    pub fn chain_timeout(&self) -> Duration {
        Duration::from_secs(self.chain_timeout_secs)
    }

    pub fn rpc_timeout(&self) -> Duration {
        Duration::from_secs(self.rpc_timeout_secs)
    }
}
