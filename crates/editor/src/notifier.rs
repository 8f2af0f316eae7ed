//! User-facing notifications (toasts in the dashboard, log lines in the CLI).

/// Receives the transient and terminal messages of a submission.
///
/// A submission emits exactly one `loading` followed by exactly one of
/// `success` / `error`.
pub trait Notifier: Send + Sync {
    fn loading(&self, message: &str);
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Emits notifications as `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn loading(&self, message: &str) {
        tracing::info!(target: "tripdesk::notify", "{message}");
    }

    fn success(&self, message: &str) {
        tracing::info!(target: "tripdesk::notify", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "tripdesk::notify", "{message}");
    }
}
