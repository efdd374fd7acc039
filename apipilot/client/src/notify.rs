/// Sink for transient user-facing messages (toasts in the browser, stderr in a terminal).
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Routes notifications into the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn error(&self, message: &str) {
        log::error!("{message}");
    }
}

/// Drops every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn error(&self, _message: &str) {}
}
