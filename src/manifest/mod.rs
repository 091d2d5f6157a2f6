//! Deployment Manifest Model
//!
//! The expected state of every chain: addresses, governance wiring and the
//! per-chain policy flags that decide which checks apply. Policy is decided
//! here, once, so verification code branches on record fields and never on
//! network names.

pub mod load;

pub use load::{parse_manifest, read_manifest};

use crate::errors::ConfigError;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which signer set governs a chain's multisig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cohort {
    /// First deployment batch
    Batch1,
    /// Second deployment batch, used by high-trust chains
    Batch2,
}

impl Cohort {
    pub const ALL: [Self; 2] = [Self::Batch1, Self::Batch2];
}

impl fmt::Display for Cohort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Batch1 => f.write_str("batch1"),
            Self::Batch2 => f.write_str("batch2"),
        }
    }
}

/// The two proxied contracts of a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyKind {
    /// The bridged token
    Token,
    /// The bridge adapter
    Adapter,
}

impl fmt::Display for ProxyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token => f.write_str("token"),
            Self::Adapter => f.write_str("adapter"),
        }
    }
}

/// A proxy, its admin and (where recorded) its implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyDeployment {
    pub kind: ProxyKind,
    pub proxy: Address,
    pub proxy_admin: Address,
    pub implementation: Option<Address>,
}

/// Expected state of one chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRecord {
    pub chain_id: u64,
    /// The authoritative chain; verified with the reduced suite
    pub is_origin: bool,
    /// Token proxy. Absent on the origin chain, which does not host it.
    pub token: Option<ProxyDeployment>,
    pub adapter: ProxyDeployment,
    /// Timelock that must own both proxy admins
    pub timelock: Address,
    /// Governance multisig
    pub multisig: Address,
    pub cohort: Cohort,
    /// Do not require the deployer's token admin role to be revoked
    pub skip_admin_revocation_check: bool,
    /// Proxy whose admin is owned by the deployer by design
    pub deployer_owned_admin: Option<ProxyKind>,
}

impl ChainRecord {
    /// Proxies hosted on this chain, token first.
    pub fn proxies(&self) -> impl Iterator<Item = &ProxyDeployment> {
        self.token.iter().chain(std::iter::once(&self.adapter))
    }
}

/// The full expected-state graph. Immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Account that deployed the contracts; must hold no residual admin role
    pub deployer: Address,
    /// Records in document order
    pub chains: Vec<ChainRecord>,
}

impl Manifest {
    pub fn new(deployer: Address, chains: Vec<ChainRecord>) -> Self {
        Self { deployer, chains }
    }

    /// The single origin record.
    pub fn origin(&self) -> Result<&ChainRecord, ConfigError> {
        let origins: Vec<&ChainRecord> = self.chains.iter().filter(|c| c.is_origin).collect();
        match origins.as_slice() {
            [origin] => Ok(origin),
            [] => Err(ConfigError::NoOriginChain),
            many => Err(ConfigError::MultipleOriginChains(many.iter().map(|c| c.chain_id).collect())),
        }
    }

    /// Satellite records in document order.
    pub fn satellites(&self) -> impl Iterator<Item = &ChainRecord> {
        self.chains.iter().filter(|c| !c.is_origin)
    }

    /// Origin first, then satellites in document order.
    pub fn verification_order(&self) -> Result<Vec<&ChainRecord>, ConfigError> {
        let mut ordered = vec![self.origin()?];
        ordered.extend(self.satellites());
        Ok(ordered)
    }

    pub fn get(&self, chain_id: u64) -> Option<&ChainRecord> {
        self.chains.iter().find(|c| c.chain_id == chain_id)
    }
}
