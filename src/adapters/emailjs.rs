use crate::domain::model::{RelayResponse, TemplateParams};
use crate::domain::ports::EmailRelay;
use crate::utils::error::{MailerError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::sync::RwLock;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// EmailJS REST client.
///
/// Calls from outside a browser must be allowed in the EmailJS account
/// security settings ("non-browser applications"), otherwise the relay
/// answers 403.
pub struct EmailJsClient {
    client: Client,
    endpoint: String,
    timeout: Option<Duration>,
    public_key: RwLock<String>,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

impl EmailJsClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            timeout: None,
            public_key: RwLock::new(String::new()),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn current_key(&self) -> String {
        self.public_key
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Default for EmailJsClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl EmailRelay for EmailJsClient {
    fn init(&self, public_key: &str) -> Result<()> {
        *self.public_key.write().unwrap_or_else(|e| e.into_inner()) = public_key.to_string();
        Ok(())
    }

    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<RelayResponse> {
        let user_id = self.current_key();
        let body = SendRequest {
            service_id,
            template_id,
            user_id: &user_id,
            template_params: params,
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("Posting {} template params to: {}", params.len(), self.endpoint);

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Relay response status: {}", status);

        let text = response.text().await?;
        if status.is_success() {
            Ok(RelayResponse {
                status: status.as_u16(),
                text,
            })
        } else {
            Err(MailerError::RelayRejected {
                status: status.as_u16(),
                body: text,
            })
        }
    }
}
