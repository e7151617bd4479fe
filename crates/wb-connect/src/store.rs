use crate::record::ConnectionRecord;
use std::sync::Arc;
use tokio::sync::watch;

/// Single source of truth for "is a wallet connected".
///
/// Single-writer discipline: only the negotiator calls [`replace`];
/// everything else reads [`current`] or holds a [`subscribe`] receiver
/// and re-derives its view on every change. `replace` is also the
/// designed entry point for a future restore-from-persisted-session
/// path.
///
/// [`replace`]: ConnectionStore::replace
/// [`current`]: ConnectionStore::current
/// [`subscribe`]: ConnectionStore::subscribe
#[derive(Clone)]
pub struct ConnectionStore {
    tx: Arc<watch::Sender<ConnectionRecord>>,
}

impl ConnectionStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ConnectionRecord::default());
        Self { tx: Arc::new(tx) }
    }

    /// Clone of the live record.
    pub fn current(&self) -> ConnectionRecord {
        self.tx.borrow().clone()
    }

    /// Swap in a new record wholesale and wake subscribers.
    pub fn replace(&self, record: ConnectionRecord) {
        self.tx.send_replace(record);
    }

    /// Receiver that observes every subsequent replacement.
    pub fn subscribe(&self) -> watch::Receiver<ConnectionRecord> {
        self.tx.subscribe()
    }

    /// Whether the UI should be offering the wallet-selection dialog.
    pub fn needs_wallet_selection(&self) -> bool {
        self.tx.borrow().awaiting_selection
    }
}

impl Default for ConnectionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wb_api_types::WalletKind;

    #[tokio::test]
    async fn replace_is_visible_to_readers_and_subscribers() {
        let store = ConnectionStore::new();
        let mut rx = store.subscribe();

        assert!(!store.current().awaiting_selection);
        assert!(!store.needs_wallet_selection());

        store.replace(ConnectionRecord::awaiting_selection());

        assert!(store.needs_wallet_selection());
        rx.changed().await.expect("sender alive");
        assert!(rx.borrow().awaiting_selection);
    }

    #[tokio::test]
    async fn clones_share_the_same_record() {
        let store = ConnectionStore::new();
        let reader = store.clone();

        store.replace(ConnectionRecord::selected(WalletKind::Leap));

        assert_eq!(reader.current().wallet_kind, Some(WalletKind::Leap));
    }
}
