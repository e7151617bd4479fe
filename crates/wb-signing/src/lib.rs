use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use wb_extension::OfflineSigner;

/// Authenticated client bound to a signer and an RPC endpoint.
///
/// Transaction composition and broadcast live behind this handle in the
/// chain SDK; the connection core only establishes and holds it.
#[derive(Clone)]
pub struct SigningClient {
    endpoint: String,
    network: String,
    signer: Arc<dyn OfflineSigner>,
}

impl SigningClient {
    pub fn new(endpoint: String, network: String, signer: Arc<dyn OfflineSigner>) -> Self {
        Self {
            endpoint,
            network,
            signer,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Network id the endpoint reported during the handshake.
    pub fn network(&self) -> &str {
        &self.network
    }

    pub fn signer(&self) -> &Arc<dyn OfflineSigner> {
        &self.signer
    }
}

impl fmt::Debug for SigningClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningClient")
            .field("endpoint", &self.endpoint)
            .field("network", &self.network)
            .finish_non_exhaustive()
    }
}

/// Produces an authenticated client for a validated signer and endpoint.
///
/// May suspend on network I/O. Never retries; retry policy belongs to
/// the caller.
#[async_trait]
pub trait SigningClientFactory: Send + Sync {
    async fn connect_with_signer(
        &self,
        endpoint: &str,
        signer: Arc<dyn OfflineSigner>,
    ) -> Result<SigningClient>;
}

// ── Tendermint RPC /status types ──

#[derive(Debug, Deserialize)]
struct StatusResponse {
    result: StatusResult,
}

#[derive(Debug, Deserialize)]
struct StatusResult {
    node_info: NodeInfo,
}

#[derive(Debug, Deserialize)]
struct NodeInfo {
    network: String,
}

/// Factory that handshakes with the Tendermint RPC endpoint before
/// handing out a client, so an unreachable endpoint fails here instead
/// of on the first transaction.
pub struct RpcSigningClientFactory {
    http: reqwest::Client,
}

impl Default for RpcSigningClientFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl RpcSigningClientFactory {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SigningClientFactory for RpcSigningClientFactory {
    async fn connect_with_signer(
        &self,
        endpoint: &str,
        signer: Arc<dyn OfflineSigner>,
    ) -> Result<SigningClient> {
        let endpoint = endpoint.trim_end_matches('/').to_owned();
        let url = format!("{endpoint}/status");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .context("endpoint status transport")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("endpoint status HTTP {status}: {text}");
        }

        let body: StatusResponse = response.json().await.context("endpoint status parse")?;
        let network = body.result.node_info.network;
        debug!("endpoint {endpoint} reports network {network}");

        Ok(SigningClient::new(endpoint, network, signer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_response_parses_network() {
        let raw = r#"{
            "jsonrpc": "2.0",
            "id": -1,
            "result": {
                "node_info": {
                    "protocol_version": { "p2p": "8", "block": "11", "app": "0" },
                    "id": "5576458aef205977e18fd50b274e9b5d9014525a",
                    "network": "nibiru-devnet-2",
                    "version": "0.37.2"
                },
                "sync_info": { "latest_block_height": "1045566" }
            }
        }"#;

        let parsed: StatusResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.result.node_info.network, "nibiru-devnet-2");
    }
}
