use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that make a run unverifiable before any chain is contacted.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Chain id has no entry in the network table
    #[error("No network name found for chain ID {0}")]
    UnknownChain(u64),

    /// A required per-network secret is unset or empty
    #[error("Missing credential for chain {chain_id}: environment variable {var} is not set")]
    MissingCredential {
        /// Chain the credential was resolved for
        chain_id: u64,
        /// Environment variable that was consulted
        var: String,
    },

    /// Manifest has no record flagged as origin
    #[error("Manifest has no origin chain")]
    NoOriginChain,

    /// Manifest has more than one record flagged as origin
    #[error("Manifest has more than one origin chain: {0:?}")]
    MultipleOriginChains(Vec<u64>),

    /// Manifest content is structurally invalid
    #[error("Malformed manifest: {0}")]
    MalformedManifest(String),

    /// A reference bytecode could not be loaded
    #[error("Reference bytecode for {label} unavailable: {reason}")]
    MissingArtifact {
        /// Contract label that was requested
        label: String,
        /// Why the artifact could not be used
        reason: String,
    },

    /// Configuration file could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// Errors talking to a chain. Recovered per chain, never fatal to the run.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum TransportError {
    /// The endpoint could not be reached or returned a JSON-RPC error
    #[error("RPC request {method} failed: {reason}")]
    Request {
        /// JSON-RPC method name
        method: String,
        /// Error reported by the transport
        reason: String,
    },

    /// The request or the chain's check suite exceeded its time budget
    #[error("{0} timed out")]
    Timeout(String),

    /// The endpoint answered but the payload could not be decoded
    #[error("Undecodable response from {call}: {reason}")]
    Decode {
        /// Call whose return data was malformed
        call: String,
        /// What was wrong with it
        reason: String,
    },
}
