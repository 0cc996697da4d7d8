use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Default,
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Default => "default",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// Fire-and-forget user facing status messages.
pub trait Notifier: Send + Sync {
    fn show_toast(&self, message: &str, kind: ToastKind);
}

/// Renders toasts as log events, for hosts without a notification surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn show_toast(&self, message: &str, kind: ToastKind) {
        match kind {
            ToastKind::Error => warn!(kind = kind.as_str(), "{}", message),
            _ => info!(kind = kind.as_str(), "{}", message),
        }
    }
}
