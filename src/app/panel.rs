use crate::core::config_store::ConfigStore;
use crate::core::mailer::ReceiptMailer;
use crate::core::template::TEMPLATE_GUIDE;
use crate::domain::model::DeliveryOutcome;
use crate::domain::ports::{Clipboard, EmailRelay, Notifier};
use std::sync::Arc;

pub const FIELDS_REQUIRED: &str = "Tous les champs sont requis";
pub const SAVE_SUCCESS: &str = "Configuration EmailJS mise à jour avec succès";
pub const SAVE_FAILURE: &str = "Erreur lors de la mise à jour de la configuration";
pub const NOT_CONFIGURED: &str = "Veuillez d'abord configurer EmailJS";
pub const TEST_SUCCESS: &str = "Configuration EmailJS valide !";
pub const COPIED: &str = "Copié dans le presse-papiers";

const HIDDEN_KEY_CHAR: char = '•';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    ServiceId,
    TemplateId,
    PublicKey,
}

/// Form model behind the relay settings screen.
///
/// Holds editable copies of the three credentials plus the UI flags. Every
/// action reports through the [`Notifier`] and never returns an error.
pub struct ConfigPanel<R: EmailRelay, N: Notifier> {
    mailer: ReceiptMailer<R>,
    notifier: N,
    service_id: String,
    template_id: String,
    public_key: String,
    show_key: bool,
    is_saving: bool,
    is_testing: bool,
    is_configured: bool,
}

impl<R: EmailRelay, N: Notifier> ConfigPanel<R, N> {
    pub fn new(store: Arc<ConfigStore<R>>, notifier: N) -> Self {
        Self {
            mailer: ReceiptMailer::new(store),
            notifier,
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            show_key: false,
            is_saving: false,
            is_testing: false,
            is_configured: false,
        }
    }

    /// Load the store's current values into the form.
    pub fn mount(&mut self) {
        let store = self.mailer.store();
        let config = store.config();
        self.service_id = config.service_id;
        self.template_id = config.template_id;
        self.public_key = config.public_key;
        self.is_configured = store.is_configured();
    }

    pub fn field(&self, field: ConfigField) -> &str {
        match field {
            ConfigField::ServiceId => &self.service_id,
            ConfigField::TemplateId => &self.template_id,
            ConfigField::PublicKey => &self.public_key,
        }
    }

    pub fn set_field(&mut self, field: ConfigField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ConfigField::ServiceId => self.service_id = value,
            ConfigField::TemplateId => self.template_id = value,
            ConfigField::PublicKey => self.public_key = value,
        }
    }

    pub fn toggle_key_visibility(&mut self) {
        self.show_key = !self.show_key;
    }

    pub fn is_key_visible(&self) -> bool {
        self.show_key
    }

    /// Public key as the form shows it: bullets unless visibility is toggled on.
    pub fn displayed_public_key(&self) -> String {
        if self.show_key {
            self.public_key.clone()
        } else {
            std::iter::repeat(HIDDEN_KEY_CHAR)
                .take(self.public_key.chars().count())
                .collect()
        }
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub fn is_testing(&self) -> bool {
        self.is_testing
    }

    pub fn is_configured(&self) -> bool {
        self.is_configured
    }

    pub fn can_save(&self) -> bool {
        !self.is_saving
    }

    pub fn can_test(&self) -> bool {
        self.is_configured && !self.is_testing
    }

    pub fn template_guide(&self) -> &'static [(&'static str, &'static str)] {
        TEMPLATE_GUIDE
    }

    pub fn save(&mut self) {
        if self.is_saving {
            return;
        }
        if self.service_id.is_empty() || self.template_id.is_empty() || self.public_key.is_empty()
        {
            self.notifier.error(FIELDS_REQUIRED);
            return;
        }

        self.is_saving = true;
        let result =
            self.mailer
                .store()
                .update_config(&self.service_id, &self.template_id, &self.public_key);
        match result {
            Ok(saved) => {
                self.is_configured = true;
                self.notifier.success(SAVE_SUCCESS);
                tracing::info!(
                    service_id = %saved.service_id,
                    template_id = %saved.template_id,
                    public_key = %saved.public_key,
                    "Configuration saved"
                );
            }
            Err(e) => {
                self.notifier.error(SAVE_FAILURE);
                tracing::error!("Configuration update failed: {}", e);
            }
        }
        self.is_saving = false;
    }

    pub async fn test_configuration(&mut self) {
        if !self.is_configured {
            self.notifier.error(NOT_CONFIGURED);
            return;
        }
        if self.is_testing {
            return;
        }

        self.is_testing = true;
        let outcome = self.mailer.test_configuration().await;
        match outcome {
            DeliveryOutcome::Delivered { .. } => self.notifier.success(TEST_SUCCESS),
            DeliveryOutcome::Failed { message, error } => {
                self.notifier.error(&format!("Test échoué: {}", message));
                tracing::error!("Configuration test failed: {}", error);
            }
        }
        self.is_testing = false;
    }

    /// Copy a field's value. Does nothing for an empty field.
    pub fn copy_to_clipboard<C: Clipboard>(&self, field: ConfigField, clipboard: &C) {
        let text = self.field(field);
        if text.is_empty() {
            return;
        }
        match clipboard.write_text(text) {
            Ok(()) => self.notifier.success(COPIED),
            Err(e) => self.notifier.error(&e.to_string()),
        }
    }
}
