use crate::domain::ports::Notifier;

/// Notifier for headless hosts: every toast becomes a log line.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!("✅ {}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("❌ {}", message);
    }
}
