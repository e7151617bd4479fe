use std::fmt;
use std::sync::Arc;
use wb_api_types::{KeyMaterial, WalletKind};
use wb_extension::OfflineSigner;
use wb_signing::SigningClient;

/// The single live description of the wallet connection.
///
/// Always replaced wholesale, never field-patched, so a reader can
/// never observe a half-populated combination such as a connected
/// record without a signer. The constructors are the only ways to
/// produce a record and each yields a consistent shape:
///
/// - connected ⇒ address non-empty, signer and client present
/// - awaiting selection ⇒ no wallet kind chosen yet
#[derive(Clone)]
pub struct ConnectionRecord {
    pub is_connected: bool,
    pub address: String,
    pub signer: Option<Arc<dyn OfflineSigner>>,
    pub signing_client: Option<Arc<SigningClient>>,
    pub wallet_kind: Option<WalletKind>,
    pub awaiting_selection: bool,
    pub key: Option<KeyMaterial>,
}

impl ConnectionRecord {
    /// Session-start shape: nothing connected, nothing selected.
    pub fn disconnected() -> Self {
        Self {
            is_connected: false,
            address: String::new(),
            signer: None,
            signing_client: None,
            wallet_kind: None,
            awaiting_selection: false,
            key: None,
        }
    }

    /// A connection was requested before any wallet kind was chosen.
    pub fn awaiting_selection() -> Self {
        Self {
            awaiting_selection: true,
            ..Self::disconnected()
        }
    }

    /// Disconnected, but with a wallet kind remembered for reconnects.
    pub fn selected(kind: WalletKind) -> Self {
        Self {
            wallet_kind: Some(kind),
            ..Self::disconnected()
        }
    }

    pub fn connected(
        address: String,
        signer: Arc<dyn OfflineSigner>,
        signing_client: Arc<SigningClient>,
        kind: WalletKind,
        key: KeyMaterial,
    ) -> Self {
        debug_assert!(!address.trim().is_empty());
        Self {
            is_connected: true,
            address,
            signer: Some(signer),
            signing_client: Some(signing_client),
            wallet_kind: Some(kind),
            awaiting_selection: false,
            key: Some(key),
        }
    }
}

impl Default for ConnectionRecord {
    fn default() -> Self {
        Self::disconnected()
    }
}

impl fmt::Debug for ConnectionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionRecord")
            .field("is_connected", &self.is_connected)
            .field("address", &self.address)
            .field("signer", &self.signer.is_some())
            .field("signing_client", &self.signing_client.is_some())
            .field("wallet_kind", &self.wallet_kind)
            .field("awaiting_selection", &self.awaiting_selection)
            .field("key", &self.key.as_ref().map(|k| k.name.as_str()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_disconnected_with_no_selection() {
        let record = ConnectionRecord::default();
        assert!(!record.is_connected);
        assert!(record.address.is_empty());
        assert!(record.signer.is_none());
        assert!(record.signing_client.is_none());
        assert!(record.wallet_kind.is_none());
        assert!(!record.awaiting_selection);
        assert!(record.key.is_none());
    }

    #[test]
    fn awaiting_selection_has_no_wallet_kind() {
        let record = ConnectionRecord::awaiting_selection();
        assert!(record.awaiting_selection);
        assert!(record.wallet_kind.is_none());
        assert!(!record.is_connected);
    }

    #[test]
    fn selected_keeps_kind_without_connecting() {
        let record = ConnectionRecord::selected(WalletKind::Keplr);
        assert_eq!(record.wallet_kind, Some(WalletKind::Keplr));
        assert!(!record.is_connected);
        assert!(!record.awaiting_selection);
    }
}
