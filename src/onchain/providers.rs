use super::{ChainClient, ClientFactory};
use crate::errors::TransportError;
use alloy_primitives::{Address, Bytes, B256};
use jsonrpsee::core::client::{ClientT, Error as ClientError};
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use std::sync::Arc;
use std::time::Duration;

/// Block tag every read is pinned to.
const BLOCK_TAG: &str = "latest";

/// [`ChainClient`] over HTTP JSON-RPC.
///
/// This is the production adapter: one instance per chain, each with its own
/// connection pool and per-request timeout.
///
/// # Usage
/// ```ignore
/// let client = JsonRpcChainClient::new("https://mainnet.example", Duration::from_secs(30))?;
/// let code = client.get_code(proxy).await?;
/// ```
pub struct JsonRpcChainClient {
    client: HttpClient,
}

impl JsonRpcChainClient {
    /// Build a client for `endpoint`. No request is sent until the first read.
    pub fn new(endpoint: &str, request_timeout: Duration) -> Result<Self, TransportError> {
        let client = HttpClientBuilder::default()
            .request_timeout(request_timeout)
            .build(endpoint)
            .map_err(|e| map_client_error("connect", e))?;
        Ok(Self { client })
    }
}

fn map_client_error(method: &str, err: ClientError) -> TransportError {
    match err {
        ClientError::RequestTimeout => TransportError::Timeout(method.to_string()),
        ClientError::ParseError(e) => {
            TransportError::Decode { call: method.to_string(), reason: e.to_string() }
        }
        other => TransportError::Request { method: method.to_string(), reason: other.to_string() },
    }
}

#[async_trait::async_trait]
impl ChainClient for JsonRpcChainClient {
    async fn get_code(&self, address: Address) -> Result<Bytes, TransportError> {
        self.client
            .request("eth_getCode", rpc_params![address, BLOCK_TAG])
            .await
            .map_err(|e| map_client_error("eth_getCode", e))
    }

    async fn get_storage_at(&self, address: Address, slot: B256) -> Result<B256, TransportError> {
        self.client
            .request("eth_getStorageAt", rpc_params![address, slot, BLOCK_TAG])
            .await
            .map_err(|e| map_client_error("eth_getStorageAt", e))
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, TransportError> {
        let tx = serde_json::json!({ "to": to, "data": data });
        self.client
            .request("eth_call", rpc_params![tx, BLOCK_TAG])
            .await
            .map_err(|e| map_client_error("eth_call", e))
    }
}

/// Opens one [`JsonRpcChainClient`] per endpoint.
#[derive(Debug, Clone)]
pub struct JsonRpcClientFactory {
    request_timeout: Duration,
}

impl JsonRpcClientFactory {
    /// Create a factory whose clients time out each request after `request_timeout`.
    pub fn new(request_timeout: Duration) -> Self {
        Self { request_timeout }
    }
}

impl ClientFactory for JsonRpcClientFactory {
    fn connect(&self, endpoint: &str) -> Result<Arc<dyn ChainClient>, TransportError> {
        Ok(Arc::new(JsonRpcChainClient::new(endpoint, self.request_timeout)?))
    }
}
