use crate::domain::model::{RelayResponse, TemplateParams};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Third-party email relay: renders a stored template from flat params and delivers it.
#[async_trait]
pub trait EmailRelay: Send + Sync {
    /// (Re)bind the relay client to an account key.
    fn init(&self, public_key: &str) -> Result<()>;

    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<RelayResponse>;
}

/// User-visible toast notifications.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn success(&self, message: &str) {
        (**self).success(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}
