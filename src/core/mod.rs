pub mod config_store;
pub mod formatting;
pub mod mailer;
pub mod template;

pub use crate::domain::model::{
    DeliveryOutcome, EmailConfig, ReceiptRecord, RelayResponse, TemplateParams,
};
pub use crate::domain::ports::{Clipboard, EmailRelay, Notifier};
pub use crate::utils::error::Result;
