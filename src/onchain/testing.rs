//! In-memory chain state for unit tests.

use super::{ChainClient, ClientFactory};
use crate::errors::TransportError;
use alloy_primitives::{Address, Bytes, B256};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Which request kinds a mock should refuse, simulating a flaky endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Outages {
    pub code: bool,
    pub storage: bool,
    pub calls: bool,
}

/// A [`ChainClient`] answering from fixed maps.
///
/// Unknown code reads return empty code and unknown storage reads return the
/// zero word, like a real node. Unknown calls fail, since a real call to a
/// missing getter reverts.
#[derive(Debug, Clone, Default)]
pub(crate) struct MockChainClient {
    code: HashMap<Address, Bytes>,
    storage: HashMap<(Address, B256), B256>,
    calls: HashMap<(Address, Bytes), Bytes>,
    outages: Outages,
    latency: Option<Duration>,
}

impl MockChainClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_storage(mut self, address: Address, slot: B256, value: B256) -> Self {
        self.storage.insert((address, slot), value);
        self
    }

    pub(crate) fn with_call(mut self, to: Address, data: Bytes, ret: impl AsRef<[u8]>) -> Self {
        self.calls.insert((to, data), Bytes::copy_from_slice(ret.as_ref()));
        self
    }

    pub(crate) fn with_outages(mut self, outages: Outages) -> Self {
        self.outages = outages;
        self
    }

    /// Delay every request by `latency`, simulating a slow endpoint.
    pub(crate) fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    async fn respond(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }

    pub(crate) fn set_call(&mut self, to: Address, data: Bytes, ret: impl AsRef<[u8]>) {
        self.calls.insert((to, data), Bytes::copy_from_slice(ret.as_ref()));
    }

    pub(crate) fn set_code(&mut self, address: Address, code: impl AsRef<[u8]>) {
        self.code.insert(address, Bytes::copy_from_slice(code.as_ref()));
    }

    pub(crate) fn set_storage(&mut self, address: Address, slot: B256, value: B256) {
        self.storage.insert((address, slot), value);
    }

    pub(crate) fn set_outages(&mut self, outages: Outages) {
        self.outages = outages;
    }
}

fn unreachable_endpoint(method: &str) -> TransportError {
    TransportError::Request { method: method.to_string(), reason: "connection refused".to_string() }
}

#[async_trait::async_trait]
impl ChainClient for MockChainClient {
    async fn get_code(&self, address: Address) -> Result<Bytes, TransportError> {
        self.respond().await;
        if self.outages.code {
            return Err(unreachable_endpoint("eth_getCode"));
        }
        Ok(self.code.get(&address).cloned().unwrap_or_default())
    }

    async fn get_storage_at(&self, address: Address, slot: B256) -> Result<B256, TransportError> {
        self.respond().await;
        if self.outages.storage {
            return Err(unreachable_endpoint("eth_getStorageAt"));
        }
        Ok(self.storage.get(&(address, slot)).copied().unwrap_or(B256::ZERO))
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, TransportError> {
        self.respond().await;
        if self.outages.calls {
            return Err(unreachable_endpoint("eth_call"));
        }
        self.calls.get(&(to, data)).cloned().ok_or_else(|| TransportError::Request {
            method: "eth_call".to_string(),
            reason: format!("execution reverted at {to}"),
        })
    }
}

/// Hands out mocks by endpoint URL.
#[derive(Debug, Default)]
pub(crate) struct MockClientFactory {
    clients: HashMap<String, Arc<MockChainClient>>,
}

impl MockClientFactory {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, endpoint: impl Into<String>, client: MockChainClient) {
        self.clients.insert(endpoint.into(), Arc::new(client));
    }
}

impl ClientFactory for MockClientFactory {
    fn connect(&self, endpoint: &str) -> Result<Arc<dyn ChainClient>, TransportError> {
        self.clients
            .get(endpoint)
            .map(|c| Arc::clone(c) as Arc<dyn ChainClient>)
            .ok_or_else(|| unreachable_endpoint("connect"))
    }
}
