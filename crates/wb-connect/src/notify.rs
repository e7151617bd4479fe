//! Notification sink contract.
//!
//! Fire-and-forget, toast-shaped. The host wires a real presenter;
//! the core only distinguishes informational from error events.

use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Info,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifyPosition {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyOptions {
    pub auto_dismiss_ms: Option<u64>,
    pub pause_on_hover: bool,
    pub pause_on_focus_loss: bool,
    pub position: NotifyPosition,
}

impl Default for NotifyOptions {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: Some(5_000),
            pause_on_hover: true,
            pause_on_focus_loss: true,
            position: NotifyPosition::default(),
        }
    }
}

impl NotifyOptions {
    pub fn auto_dismiss_ms(ms: u64) -> Self {
        Self {
            auto_dismiss_ms: Some(ms),
            ..Self::default()
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NotifyKind, message: &str, options: NotifyOptions);
}

/// Routes notifications to the log stream. Suits headless hosts and
/// development builds without a toast presenter.
#[derive(Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NotifyKind, message: &str, _options: NotifyOptions) {
        match kind {
            NotifyKind::Info => info!("{message}"),
            NotifyKind::Error => error!("{message}"),
        }
    }
}

/// Swallows every notification.
#[derive(Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _kind: NotifyKind, _message: &str, _options: NotifyOptions) {}
}
