//! Reference bytecode from locally built contracts.
//!
//! Reads Foundry build output: `<out>/<Name>.sol/<Name>.json`, using the
//! `deployedBytecode.object` hex string.

use crate::errors::ConfigError;
use alloy_primitives::Bytes;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Source of the locally compiled runtime code for a contract.
pub trait ReferenceBytecode: Send + Sync {
    /// Runtime bytecode of the contract named `label`.
    fn load(&self, label: &str) -> Result<Bytes, ConfigError>;
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FoundryArtifact {
    deployed_bytecode: DeployedBytecode,
}

#[derive(Deserialize)]
struct DeployedBytecode {
    object: String,
}

/// Artifacts from a Foundry `out/` directory.
#[derive(Debug, Clone)]
pub struct FoundryArtifacts {
    root: PathBuf,
}

impl FoundryArtifacts {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the artifact for `label`.
    pub fn path(&self, label: &str) -> PathBuf {
        self.root.join(format!("{label}.sol")).join(format!("{label}.json"))
    }
}

impl ReferenceBytecode for FoundryArtifacts {
    fn load(&self, label: &str) -> Result<Bytes, ConfigError> {
        let missing = |reason: String| ConfigError::MissingArtifact { label: label.to_string(), reason };
        let path = self.path(label);

        let json = std::fs::read_to_string(&path)
            .map_err(|e| missing(format!("{}: {e}", path.display())))?;
        let artifact: FoundryArtifact =
            serde_json::from_str(&json).map_err(|e| missing(format!("{}: {e}", path.display())))?;

        let object = artifact.deployed_bytecode.object;
        let code = hex::decode(object.trim().trim_start_matches("0x"))
            .map_err(|e| missing(format!("deployedBytecode is not hex: {e}")))?;
        if code.is_empty() {
            return Err(missing("deployedBytecode is empty".to_string()));
        }
        Ok(Bytes::from(code))
    }
}

/// In-memory artifacts keyed by label.
#[derive(Debug, Clone, Default)]
pub struct StaticArtifacts {
    codes: HashMap<String, Bytes>,
}

impl StaticArtifacts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, label: impl Into<String>, code: impl Into<Bytes>) -> Self {
        self.codes.insert(label.into(), code.into());
        self
    }
}

impl ReferenceBytecode for StaticArtifacts {
    fn load(&self, label: &str) -> Result<Bytes, ConfigError> {
        self.codes.get(label).cloned().ok_or_else(|| ConfigError::MissingArtifact {
            label: label.to_string(),
            reason: "no artifact registered".to_string(),
        })
    }
}
