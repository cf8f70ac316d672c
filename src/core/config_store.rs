use crate::domain::model::EmailConfig;
use crate::domain::ports::EmailRelay;
use crate::utils::error::Result;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug)]
struct StoreState {
    config: EmailConfig,
    configured: bool,
}

/// Holds the relay credentials for the session and keeps the relay client bound
/// to the current public key.
pub struct ConfigStore<R: EmailRelay> {
    relay: Arc<R>,
    state: RwLock<StoreState>,
}

impl<R: EmailRelay> ConfigStore<R> {
    /// Store holding the placeholder credentials, not yet configured.
    pub fn new(relay: Arc<R>) -> Result<Self> {
        Self::build(relay, EmailConfig::placeholder(), false)
    }

    /// Store seeded with real credentials, e.g. from a settings file.
    pub fn with_config(relay: Arc<R>, config: EmailConfig) -> Result<Self> {
        Self::build(relay, config, true)
    }

    fn build(relay: Arc<R>, config: EmailConfig, configured: bool) -> Result<Self> {
        relay.init(&config.public_key)?;
        Ok(Self {
            relay,
            state: RwLock::new(StoreState { config, configured }),
        })
    }

    pub fn relay(&self) -> &Arc<R> {
        &self.relay
    }

    /// Current credentials, full public key included.
    pub fn config(&self) -> EmailConfig {
        self.read().config.clone()
    }

    /// Whether credentials have been set at least once.
    pub fn is_configured(&self) -> bool {
        self.read().configured
    }

    /// Replace all three credentials and rebind the relay to the new key.
    ///
    /// Returns the new config with its public key masked. If the relay refuses
    /// the key the stored credentials stay as they were.
    pub fn update_config(
        &self,
        service_id: &str,
        template_id: &str,
        public_key: &str,
    ) -> Result<EmailConfig> {
        tracing::info!("🔧 Updating relay configuration");

        let mut state = self.write();
        self.relay.init(public_key)?;
        state.config = EmailConfig::new(service_id, template_id, public_key);
        state.configured = true;

        let masked = state.config.masked();
        tracing::debug!(
            service_id = %masked.service_id,
            template_id = %masked.template_id,
            public_key = %masked.public_key,
            "Relay configuration updated"
        );
        Ok(masked)
    }

    // A poisoned lock only means a writer panicked mid-update; the state is
    // plain strings and stays usable.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{RelayResponse, TemplateParams, PLACEHOLDER_PUBLIC_KEY};
    use crate::utils::error::MailerError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRelay {
        init_keys: Mutex<Vec<String>>,
        reject_init: bool,
    }

    #[async_trait]
    impl EmailRelay for RecordingRelay {
        fn init(&self, public_key: &str) -> Result<()> {
            if self.reject_init && public_key != PLACEHOLDER_PUBLIC_KEY {
                return Err(MailerError::ConfigValidationError {
                    field: "public_key".to_string(),
                    message: "rejected".to_string(),
                });
            }
            self.init_keys.lock().unwrap().push(public_key.to_string());
            Ok(())
        }

        async fn send(
            &self,
            _service_id: &str,
            _template_id: &str,
            _params: &TemplateParams,
        ) -> Result<RelayResponse> {
            Ok(RelayResponse {
                status: 200,
                text: "OK".to_string(),
            })
        }
    }

    #[test]
    fn test_new_store_holds_placeholders() {
        let relay = Arc::new(RecordingRelay::default());
        let store = ConfigStore::new(relay.clone()).unwrap();

        assert_eq!(store.config(), EmailConfig::placeholder());
        assert!(!store.is_configured());
        assert_eq!(*relay.init_keys.lock().unwrap(), vec![PLACEHOLDER_PUBLIC_KEY]);
    }

    #[test]
    fn test_update_returns_masked_and_keeps_full_key() {
        let relay = Arc::new(RecordingRelay::default());
        let store = ConfigStore::new(relay.clone()).unwrap();

        let returned = store.update_config("s1", "t1", "pk1234567890").unwrap();
        assert_eq!(returned.public_key, "pk123456...");
        assert_eq!(returned.service_id, "s1");
        assert_eq!(returned.template_id, "t1");

        let current = store.config();
        assert_eq!(current, EmailConfig::new("s1", "t1", "pk1234567890"));
        assert!(store.is_configured());
        assert_eq!(
            relay.init_keys.lock().unwrap().last().map(String::as_str),
            Some("pk1234567890")
        );
    }

    #[test]
    fn test_update_does_not_validate_format() {
        let store = ConfigStore::new(Arc::new(RecordingRelay::default())).unwrap();
        assert!(store.update_config("x", "y", "z").is_ok());
        assert_eq!(store.config().public_key, "z");
    }

    #[test]
    fn test_with_config_is_configured() {
        let config = EmailConfig::new("service_a", "template_b", "key_c");
        let store = ConfigStore::with_config(Arc::new(RecordingRelay::default()), config.clone())
            .unwrap();
        assert!(store.is_configured());
        assert_eq!(store.config(), config);
    }

    #[test]
    fn test_rejected_init_leaves_config_unchanged() {
        let relay = Arc::new(RecordingRelay {
            reject_init: true,
            ..Default::default()
        });
        let store = ConfigStore::new(relay).unwrap();

        assert!(store.update_config("s1", "t1", "pk1234567890").is_err());
        assert_eq!(store.config(), EmailConfig::placeholder());
        assert!(!store.is_configured());
    }
}
