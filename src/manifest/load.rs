use super::{ChainRecord, Cohort, Manifest, ProxyDeployment, ProxyKind};
use crate::config::VerifierConfig;
use crate::errors::ConfigError;
use crate::registry::network_name;
use alloy_primitives::Address;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Manifest document: `{ "deployer": ..., "chains": { "<chainId>": {...} } }`.
#[derive(Debug, Deserialize)]
struct RawManifest {
    deployer: Address,
    chains: serde_json::Map<String, serde_json::Value>,
}

/// One chain entry. Aliases accept the deployment file's original key names.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawChainRecord {
    chain_id: u64,
    #[serde(default, alias = "isL1")]
    is_origin: bool,
    #[serde(default, alias = "erc20Address")]
    token_address: Option<Address>,
    #[serde(default, alias = "erc20ProxyAdmin")]
    token_proxy_admin: Option<Address>,
    #[serde(default, alias = "erc20Implementation")]
    token_implementation: Option<Address>,
    #[serde(alias = "oftAdapter")]
    adapter_address: Address,
    #[serde(alias = "oftAdapterProxyAdmin")]
    adapter_proxy_admin: Address,
    #[serde(alias = "oftAdapterTimelock")]
    adapter_timelock: Address,
    #[serde(default, alias = "oftAdapterImplementation")]
    adapter_implementation: Option<Address>,
    multisig: Address,
    #[serde(default)]
    cohort: Option<Cohort>,
    #[serde(default)]
    skip_admin_revocation_check: bool,
    #[serde(default)]
    deployer_owned_admin: Option<ProxyKind>,
}

/// Read and parse a manifest file.
pub fn read_manifest(path: &Path, config: &VerifierConfig) -> Result<Manifest, ConfigError> {
    let json = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    parse_manifest(&json, config)
}

/// Parse a manifest document, keeping chains in document order.
///
/// Entries under `chains` whose key is not a chain id are skipped. Records
/// without an explicit cohort get one here from the config's high-trust
/// allowlist. Exactly one origin chain is required.
pub fn parse_manifest(json: &str, config: &VerifierConfig) -> Result<Manifest, ConfigError> {
    let raw: RawManifest =
        serde_json::from_str(json).map_err(|e| ConfigError::MalformedManifest(e.to_string()))?;

    let mut chains = Vec::with_capacity(raw.chains.len());
    for (key, value) in raw.chains {
        // Non-numeric keys hold metadata, not chains
        if key.parse::<u64>().is_err() {
            debug!(target: "manifest", %key, "skipping non-numeric chains entry");
            continue;
        }
        let record: RawChainRecord = serde_json::from_value(value)
            .map_err(|e| ConfigError::MalformedManifest(format!("chain {key}: {e}")))?;
        chains.push(build_record(&key, record, config)?);
    }

    let manifest = Manifest::new(raw.deployer, chains);
    manifest.origin()?;
    Ok(manifest)
}

fn build_record(
    key: &str,
    raw: RawChainRecord,
    config: &VerifierConfig,
) -> Result<ChainRecord, ConfigError> {
    let malformed = |msg: &str| ConfigError::MalformedManifest(format!("chain {key}: {msg}"));

    if raw.chain_id == 0 {
        return Err(malformed("chainId must be positive"));
    }
    if key.parse::<u64>().ok() != Some(raw.chain_id) {
        return Err(malformed("key does not match chainId"));
    }

    let token = match (raw.token_address, raw.token_proxy_admin) {
        (Some(proxy), Some(proxy_admin)) => Some(ProxyDeployment {
            kind: ProxyKind::Token,
            proxy,
            proxy_admin,
            implementation: raw.token_implementation,
        }),
        (None, None) => None,
        _ => return Err(malformed("token address and token proxy admin must be set together")),
    };

    if !raw.is_origin {
        let token = token.as_ref().ok_or_else(|| malformed("satellite chain has no token"))?;
        if token.implementation.is_none() {
            return Err(malformed("satellite chain has no token implementation"));
        }
        if raw.adapter_implementation.is_none() {
            return Err(malformed("satellite chain has no adapter implementation"));
        }
    }

    let cohort = match raw.cohort {
        Some(cohort) => cohort,
        None => {
            let network = network_name(raw.chain_id).ok_or(ConfigError::UnknownChain(raw.chain_id))?;
            if config.is_high_trust(network) {
                Cohort::Batch2
            } else {
                Cohort::Batch1
            }
        }
    };

    Ok(ChainRecord {
        chain_id: raw.chain_id,
        is_origin: raw.is_origin,
        // The origin chain does not host the token proxy.
        token: if raw.is_origin { None } else { token },
        adapter: ProxyDeployment {
            kind: ProxyKind::Adapter,
            proxy: raw.adapter_address,
            proxy_admin: raw.adapter_proxy_admin,
            implementation: raw.adapter_implementation,
        },
        timelock: raw.adapter_timelock,
        multisig: raw.multisig,
        cohort,
        skip_admin_revocation_check: raw.skip_admin_revocation_check,
        deployer_owned_admin: raw.deployer_owned_admin,
    })
}
