use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::utils::error::MailerError;

pub const PLACEHOLDER_SERVICE_ID: &str = "ton_service_id";
pub const PLACEHOLDER_TEMPLATE_ID: &str = "ton_template_id";
pub const PLACEHOLDER_PUBLIC_KEY: &str = "ton_public_key";

/// Number of public key characters left visible by [`EmailConfig::masked`].
const VISIBLE_KEY_CHARS: usize = 8;

/// Relay credentials: which service and template to use, and the account key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        }
    }

    pub fn placeholder() -> Self {
        Self::new(
            PLACEHOLDER_SERVICE_ID,
            PLACEHOLDER_TEMPLATE_ID,
            PLACEHOLDER_PUBLIC_KEY,
        )
    }

    /// Copy with the public key cut to its first characters, for display and logs.
    pub fn masked(&self) -> Self {
        let visible: String = self.public_key.chars().take(VISIBLE_KEY_CHARS).collect();
        Self {
            service_id: self.service_id.clone(),
            template_id: self.template_id.clone(),
            public_key: format!("{}...", visible),
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstablishmentInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    /// Line total (unit price times quantity), already computed by the till.
    pub total: f64,
}

/// A completed sale as recorded by the till. Only read, never changed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptRecord {
    #[serde(default)]
    pub customer_name: Option<String>,
    pub receipt_number: String,
    pub date: NaiveDateTime,
    pub cashier_name: String,
    pub establishment_info: EstablishmentInfo,
    pub items: Vec<LineItem>,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total: f64,
    pub payment_method: String,
    pub payment_amount: f64,
    #[serde(default)]
    pub change_amount: f64,
}

/// Flat template variables handed to the relay. Ordered so payloads are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateParams(BTreeMap<String, String>);

impl TemplateParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// What the relay answered on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub text: String,
}

/// Result of one delivery attempt. Failures are values, never panics or `Err`.
#[derive(Debug)]
pub enum DeliveryOutcome {
    Delivered { message: String },
    Failed { message: String, error: MailerError },
}

impl DeliveryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            DeliveryOutcome::Delivered { message } | DeliveryOutcome::Failed { message, .. } => {
                message
            }
        }
    }

    pub fn error(&self) -> Option<&MailerError> {
        match self {
            DeliveryOutcome::Delivered { .. } => None,
            DeliveryOutcome::Failed { error, .. } => Some(error),
        }
    }
}
