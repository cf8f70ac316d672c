use crate::core::config_store::ConfigStore;
use crate::core::template::{receipt_params, test_params};
use crate::domain::model::{DeliveryOutcome, ReceiptRecord, TemplateParams};
use crate::domain::ports::EmailRelay;
use std::sync::Arc;

pub const SEND_SUCCESS_MESSAGE: &str = "Email envoyé avec succès";
pub const SEND_FAILURE_MESSAGE: &str = "Erreur lors de l'envoi de l'email";
pub const TEST_SUCCESS_MESSAGE: &str = "Configuration EmailJS valide";
pub const TEST_FAILURE_MESSAGE: &str = "Configuration EmailJS invalide";

/// Formats receipts and hands them to the relay with the store's current credentials.
pub struct ReceiptMailer<R: EmailRelay> {
    store: Arc<ConfigStore<R>>,
}

impl<R: EmailRelay> ReceiptMailer<R> {
    pub fn new(store: Arc<ConfigStore<R>>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<ConfigStore<R>> {
        &self.store
    }

    /// Parameter map that would be sent for this receipt, without sending it.
    pub fn preview(&self, receipt: &ReceiptRecord, recipient: &str) -> TemplateParams {
        receipt_params(receipt, recipient)
    }

    pub async fn send_receipt_by_email(
        &self,
        receipt: &ReceiptRecord,
        recipient: &str,
    ) -> DeliveryOutcome {
        let params = receipt_params(receipt, recipient);

        tracing::info!(
            to = recipient,
            receipt_number = %receipt.receipt_number,
            "📧 Sending receipt by email"
        );

        self.deliver(&params, SEND_SUCCESS_MESSAGE, SEND_FAILURE_MESSAGE)
            .await
    }

    /// Send a fixed synthetic message to check the configured credentials.
    pub async fn test_configuration(&self) -> DeliveryOutcome {
        tracing::info!("🧪 Testing relay configuration");
        self.deliver(&test_params(), TEST_SUCCESS_MESSAGE, TEST_FAILURE_MESSAGE)
            .await
    }

    async fn deliver(
        &self,
        params: &TemplateParams,
        success_message: &str,
        failure_message: &str,
    ) -> DeliveryOutcome {
        let config = self.store.config();

        match self
            .store
            .relay()
            .send(&config.service_id, &config.template_id, params)
            .await
        {
            Ok(response) => {
                tracing::info!(
                    status = response.status,
                    "✅ Relay accepted the email: {}",
                    response.text
                );
                DeliveryOutcome::Delivered {
                    message: success_message.to_string(),
                }
            }
            Err(error) => {
                tracing::error!("❌ Email delivery failed: {}", error);
                DeliveryOutcome::Failed {
                    message: failure_message.to_string(),
                    error,
                }
            }
        }
    }
}
