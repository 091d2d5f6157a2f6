//! On-chain state readers
//!
//! Everything the verifier knows about a deployed chain comes through the
//! [`ChainClient`] trait: raw code, raw storage words and `eth_call` return
//! data. Typed reads (roles, delays, owners) are layered on top in
//! [`readers`], so the verification logic never sees JSON-RPC.
//!
//! ```text
//!   verify::{bytecode, slots, governance}
//!     → readers (ABI encode/decode)
//!       → ChainClient   (JsonRpcChainClient in production, MockChainClient in tests)
//! ```

pub mod helpers;
pub mod providers;
pub mod readers;
pub mod selectors;
pub mod slots;

#[cfg(test)]
pub(crate) mod testing;

pub use helpers::{decode_address, encode_address, AbiDecodeError};
pub use providers::{JsonRpcChainClient, JsonRpcClientFactory};
pub use readers::{
    has_role, read_min_delay, read_owner, read_owners, read_role_id, TimelockRole,
};
pub use selectors::function_selector;
pub use slots::{eip1967_slots, ProxySlot};

use crate::errors::TransportError;
use alloy_primitives::{Address, Bytes, B256};
use std::sync::Arc;

/// Read-only access to one chain.
///
/// In production: implemented by [`JsonRpcChainClient`] over HTTP.
/// In tests: implemented by an in-memory mock keyed by address and calldata.
#[async_trait::async_trait]
pub trait ChainClient: Send + Sync {
    /// Runtime bytecode at `address` (`eth_getCode` at `latest`).
    async fn get_code(&self, address: Address) -> Result<Bytes, TransportError>;

    /// Raw 32-byte storage word (`eth_getStorageAt` at `latest`).
    async fn get_storage_at(&self, address: Address, slot: B256) -> Result<B256, TransportError>;

    /// Return data of a read-only call (`eth_call` at `latest`).
    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, TransportError>;
}

/// Opens a [`ChainClient`] for an RPC endpoint.
///
/// One client is opened per chain so chains never share a session.
pub trait ClientFactory: Send + Sync {
    /// Connect to `endpoint`. Fails only if the endpoint is unusable.
    fn connect(&self, endpoint: &str) -> Result<Arc<dyn ChainClient>, TransportError>;
}
