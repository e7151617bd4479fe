use thiserror::Error;

/// Terminal failure reasons of the connection negotiation.
///
/// Every variant is recoverable: the negotiator has already reset the
/// connection record and notified the user by the time one of these is
/// returned, so callers only branch on it, never re-handle it.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("wallet extension is not installed")]
    ExtensionMissing,

    #[error("wallet rejected the chain suggestion")]
    ChainSuggestionRejected(#[source] anyhow::Error),

    #[error("wallet rejected the enable request")]
    EnableRejected(#[source] anyhow::Error),

    #[error("signer exposes no usable account")]
    NoAccounts,

    #[error("key material is missing or invalid")]
    KeyUnavailable(#[source] anyhow::Error),

    #[error("failed to build the signing client")]
    ClientBuild(#[source] anyhow::Error),
}

impl ConnectError {
    /// Short human-readable text for the notification sink.
    pub fn user_message(&self) -> &'static str {
        match self {
            ConnectError::ExtensionMissing => "Please install a browser extension.",
            ConnectError::ChainSuggestionRejected(_) => "Failed to suggest the chain",
            ConnectError::EnableRejected(_) => "Failed to enable the chain",
            ConnectError::NoAccounts | ConnectError::KeyUnavailable(_) => "Validation failed",
            ConnectError::ClientBuild(_) => "Failed to reach the chain endpoint",
        }
    }
}
