//! Chain Registry
//!
//! Maps a chain id to its canonical network name and resolves the network's
//! secrets through an injected [`CredentialResolver`]. A missing secret is
//! always an error; there is no fallback endpoint.

pub mod credentials;
pub mod networks;

pub use credentials::{credential_var, CredentialResolver, EnvCredentialResolver, StaticCredentials};
pub use networks::{network_name, NETWORKS};

use crate::constants::{EXPLORER_KEY_ENV_SUFFIX, RPC_URL_ENV_SUFFIX};
use crate::errors::ConfigError;
use std::sync::Arc;

/// Network lookup plus credential resolution.
#[derive(Clone)]
pub struct ChainRegistry {
    credentials: Arc<dyn CredentialResolver>,
}

impl ChainRegistry {
    /// Create a registry backed by `credentials`.
    pub fn new(credentials: Arc<dyn CredentialResolver>) -> Self {
        Self { credentials }
    }

    /// Registry reading credentials from the process environment.
    pub fn from_env() -> Self {
        Self::new(Arc::new(EnvCredentialResolver))
    }

    /// Canonical lowercase network name of `chain_id`.
    pub fn network_name(&self, chain_id: u64) -> Result<&'static str, ConfigError> {
        network_name(chain_id).ok_or(ConfigError::UnknownChain(chain_id))
    }

    /// RPC endpoint of `chain_id`, from `<NETWORK>_RPC_URL`.
    pub fn rpc_endpoint(&self, chain_id: u64) -> Result<String, ConfigError> {
        self.secret(chain_id, RPC_URL_ENV_SUFFIX)
    }

    /// Block-explorer API key of `chain_id`, from `<NETWORK>_EXPLORER_API_KEY`.
    pub fn explorer_key(&self, chain_id: u64) -> Result<String, ConfigError> {
        self.secret(chain_id, EXPLORER_KEY_ENV_SUFFIX)
    }

    fn secret(&self, chain_id: u64, suffix: &str) -> Result<String, ConfigError> {
        let var = credential_var(self.network_name(chain_id)?, suffix);
        match self.credentials.resolve(&var) {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(ConfigError::MissingCredential { chain_id, var }),
        }
    }
}

impl std::fmt::Debug for ChainRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainRegistry").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ChainRegistry {
        ChainRegistry::new(Arc::new(
            StaticCredentials::new()
                .with("BASE_RPC_URL", "https://base.example")
                .with("BASE_EXPLORER_API_KEY", "key-123")
                .with("MAINNET_RPC_URL", "   "),
        ))
    }

    #[test]
    fn test_resolves_network_and_endpoint() {
        let registry = registry();
        assert_eq!(registry.network_name(8453).unwrap(), "base");
        assert_eq!(registry.rpc_endpoint(8453).unwrap(), "https://base.example");
        assert_eq!(registry.explorer_key(8453).unwrap(), "key-123");
    }

    #[test]
    fn test_unknown_chain_fails() {
        let err = registry().rpc_endpoint(424242).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownChain(424242)));
    }

    #[test]
    fn test_missing_credential_names_variable() {
        let err = registry().rpc_endpoint(10).unwrap_err();
        match err {
            ConfigError::MissingCredential { chain_id, var } => {
                assert_eq!(chain_id, 10);
                assert_eq!(var, "OPTIMISM_RPC_URL");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_credential_is_missing() {
        let err = registry().rpc_endpoint(1).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential { chain_id: 1, .. }));
    }

    #[test]
    fn test_missing_explorer_key() {
        let err = registry().explorer_key(1).unwrap_err();
        assert!(
            matches!(err, ConfigError::MissingCredential { ref var, .. } if var == "MAINNET_EXPLORER_API_KEY")
        );
    }
}
