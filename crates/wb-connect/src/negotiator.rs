//! Connection negotiation state machine.
//!
//! One negotiation walks `locate → suggest chain → enable → fetch
//! signer → fetch key → build client`, each step a suspension point
//! against the extension or the network. Any failure short-circuits
//! into a terminal reason, resets the record, and notifies the user.

use crate::error::ConnectError;
use crate::notify::{Notifier, NotifyKind, NotifyOptions};
use crate::record::ConnectionRecord;
use crate::store::ConnectionStore;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use wb_api_types::{WalletKind, truncate_hash};
use wb_chain::ChainDescriptor;
use wb_extension::ExtensionRegistry;
use wb_signing::SigningClientFactory;

/// Non-failure result of a connection request.
#[derive(Debug, Clone)]
pub enum ConnectOutcome {
    /// No wallet kind has been chosen yet; the host should present the
    /// selection dialog and come back through [`Negotiator::connect_with`].
    AwaitingSelection,
    Connected(ConnectionRecord),
}

/// Drives the wallet handshake and owns the only write path into the
/// connection store.
///
/// All collaborators are injected at construction: the extension
/// registry resolved at startup, the signing-client factory, and the
/// notification sink. A mutex serializes negotiations so overlapping
/// requests queue instead of interleaving against the shared record.
pub struct Negotiator<F, N> {
    chain: ChainDescriptor,
    extensions: ExtensionRegistry,
    factory: F,
    notifier: N,
    store: ConnectionStore,
    in_flight: Mutex<()>,
}

impl<F, N> Negotiator<F, N>
where
    F: SigningClientFactory,
    N: Notifier,
{
    pub fn new(
        chain: ChainDescriptor,
        extensions: ExtensionRegistry,
        factory: F,
        notifier: N,
        store: ConnectionStore,
    ) -> Self {
        Self {
            chain,
            extensions,
            factory,
            notifier,
            store,
            in_flight: Mutex::new(()),
        }
    }

    pub fn chain(&self) -> &ChainDescriptor {
        &self.chain
    }

    pub fn store(&self) -> &ConnectionStore {
        &self.store
    }

    /// Entry point for a user-initiated connection request.
    ///
    /// Without a chosen wallet kind this records the awaiting-selection
    /// shape and returns — no extension or network calls are made.
    /// With a kind on record (including the already-connected case,
    /// which re-negotiates with the selection preserved) it runs the
    /// full handshake.
    pub async fn connect(&self) -> Result<ConnectOutcome, ConnectError> {
        let _guard = self.in_flight.lock().await;

        let Some(kind) = self.store.current().wallet_kind else {
            debug!("connection requested with no wallet selected");
            self.store.replace(ConnectionRecord::awaiting_selection());
            return Ok(ConnectOutcome::AwaitingSelection);
        };

        self.negotiate(kind).await
    }

    /// Connect with an explicit wallet kind, as chosen in the selection
    /// dialog.
    pub async fn connect_with(&self, kind: WalletKind) -> Result<ConnectOutcome, ConnectError> {
        let _guard = self.in_flight.lock().await;
        self.negotiate(kind).await
    }

    async fn negotiate(&self, kind: WalletKind) -> Result<ConnectOutcome, ConnectError> {
        let chain_id = self.chain.chain_id();

        debug!("locating {kind} extension");
        let Some(extension) = self.extensions.locate(kind) else {
            return Err(self.fail(ConnectError::ExtensionMissing));
        };

        debug!("suggesting chain {chain_id} to {kind}");
        if let Err(err) = extension.suggest_chain(&self.chain.chain_info()).await {
            return Err(self.fail(ConnectError::ChainSuggestionRejected(err)));
        }

        debug!("enabling {chain_id}");
        if let Err(err) = extension.enable(chain_id).await {
            return Err(self.fail(ConnectError::EnableRejected(err)));
        }

        debug!("fetching signer for {chain_id}");
        let signer = extension.offline_signer(chain_id);
        let accounts = match signer.accounts().await {
            Ok(accounts) => accounts,
            Err(err) => {
                warn!("account enumeration failed: {err}");
                return Err(self.fail(ConnectError::NoAccounts));
            }
        };
        let Some(account) = accounts.first() else {
            return Err(self.fail(ConnectError::NoAccounts));
        };
        let address = account.address.clone();
        if address.trim().is_empty() {
            return Err(self.fail(ConnectError::NoAccounts));
        }

        debug!("fetching key material for {chain_id}");
        let key = match extension.key(chain_id).await {
            Ok(key) => key,
            Err(err) => return Err(self.fail(ConnectError::KeyUnavailable(err))),
        };
        if let Err(err) = key.validate(self.chain.prefix()) {
            return Err(self.fail(ConnectError::KeyUnavailable(err)));
        }

        let endpoint = &self.chain.endpoints().tendermint_rpc;
        debug!("building signing client against {endpoint}");
        let client = match self
            .factory
            .connect_with_signer(endpoint, Arc::clone(&signer))
            .await
        {
            Ok(client) => client,
            Err(err) => return Err(self.fail(ConnectError::ClientBuild(err))),
        };

        let record =
            ConnectionRecord::connected(address.clone(), signer, Arc::new(client), kind, key);
        self.store.replace(record.clone());
        info!("{kind} connected as {} on {chain_id}", truncate_hash(&address));

        // Success stays silent by design; only failures notify.
        Ok(ConnectOutcome::Connected(record))
    }

    /// Terminal failure: notify once, reset the record to a consistent
    /// disconnected shape (keeping any prior selection for retries),
    /// and hand the reason back.
    fn fail(&self, error: ConnectError) -> ConnectError {
        warn!("wallet connection failed: {error}");

        let options = match &error {
            ConnectError::ExtensionMissing => NotifyOptions::auto_dismiss_ms(1_200),
            _ => NotifyOptions::default(),
        };
        self.notifier
            .notify(NotifyKind::Error, error.user_message(), options);

        let record = match self.store.current().wallet_kind {
            Some(kind) => ConnectionRecord::selected(kind),
            None => ConnectionRecord::disconnected(),
        };
        self.store.replace(record);

        error
    }
}
