use std::collections::HashMap;

/// Source of per-network secrets, looked up by environment-variable name.
///
/// In production: [`EnvCredentialResolver`] reads the process environment.
/// In tests: [`StaticCredentials`] answers from a fixed map, so tests never
/// mutate process state.
pub trait CredentialResolver: Send + Sync {
    /// Value of `var`, or `None` when unset.
    fn resolve(&self, var: &str) -> Option<String>;
}

/// Reads credentials from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentialResolver;

impl CredentialResolver for EnvCredentialResolver {
    fn resolve(&self, var: &str) -> Option<String> {
        std::env::var(var).ok()
    }
}

/// Fixed credential map.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    values: HashMap<String, String>,
}

impl StaticCredentials {
    /// Create an empty credential map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a credential.
    pub fn with(mut self, var: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(var.into(), value.into());
        self
    }
}

impl CredentialResolver for StaticCredentials {
    fn resolve(&self, var: &str) -> Option<String> {
        self.values.get(var).cloned()
    }
}

/// Environment-variable name for a network secret: `base` + `_RPC_URL` → `BASE_RPC_URL`.
pub fn credential_var(network: &str, suffix: &str) -> String {
    format!("{}{}", network.to_uppercase(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_var() {
        assert_eq!(credential_var("base", "_RPC_URL"), "BASE_RPC_URL");
        assert_eq!(credential_var("morph_testnet", "_RPC_URL"), "MORPH_TESTNET_RPC_URL");
    }

    #[test]
    fn test_static_credentials() {
        let creds = StaticCredentials::new().with("BASE_RPC_URL", "http://base");
        assert_eq!(creds.resolve("BASE_RPC_URL").as_deref(), Some("http://base"));
        assert_eq!(creds.resolve("MAINNET_RPC_URL"), None);
    }
}
