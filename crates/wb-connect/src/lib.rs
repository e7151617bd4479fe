//! Wallet-connection core.
//!
//! The negotiation state machine, the connection record it maintains,
//! the store that publishes the record to observers, and the
//! notification contract failures are surfaced through.

pub mod error;
pub mod negotiator;
pub mod notify;
pub mod record;
pub mod store;

pub use error::ConnectError;
pub use negotiator::{ConnectOutcome, Negotiator};
pub use notify::{Notifier, NotifyKind, NotifyOptions, NotifyPosition, NullNotifier, TracingNotifier};
pub use record::ConnectionRecord;
pub use store::ConnectionStore;
