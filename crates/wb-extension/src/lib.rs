use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use wb_api_types::{AccountInfo, KeyMaterial, WalletKind};
use wb_chain::ChainInfo;

/// Signer handle granted by a wallet extension for one chain.
///
/// Opaque by design: it enumerates accounts but never exposes private
/// key material. Signing happens inside the extension.
#[async_trait]
pub trait OfflineSigner: Send + Sync {
    async fn accounts(&self) -> Result<Vec<AccountInfo>>;
}

/// Capability surface a browser wallet extension exposes per chain.
///
/// `suggest_chain` is idempotent from the extension's perspective and
/// safe to repeat. `enable` may block on a user prompt; a dismissed
/// prompt surfaces as an error from that call.
#[async_trait]
pub trait WalletExtension: Send + Sync {
    fn kind(&self) -> WalletKind;
    async fn suggest_chain(&self, info: &ChainInfo) -> Result<()>;
    async fn enable(&self, chain_id: &str) -> Result<()>;
    fn offline_signer(&self, chain_id: &str) -> Arc<dyn OfflineSigner>;
    async fn key(&self, chain_id: &str) -> Result<KeyMaterial>;
}

/// Startup-time registry of installed wallet extensions.
///
/// Replaces lookup in shared global state: the host resolves each
/// available extension once, registers it, and injects the registry
/// into the negotiator. A `None` from [`ExtensionRegistry::locate`]
/// means "not installed" — an expected outcome, distinct from any
/// failure the extension itself may later report.
#[derive(Default)]
pub struct ExtensionRegistry {
    extensions: HashMap<WalletKind, Arc<dyn WalletExtension>>,
}

impl ExtensionRegistry {
    pub fn register(&mut self, extension: Arc<dyn WalletExtension>) {
        self.extensions.insert(extension.kind(), extension);
    }

    pub fn locate(&self, kind: WalletKind) -> Option<Arc<dyn WalletExtension>> {
        self.extensions.get(&kind).cloned()
    }

    pub fn is_installed(&self, kind: WalletKind) -> bool {
        self.extensions.contains_key(&kind)
    }
}
