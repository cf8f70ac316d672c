pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{EmailJsClient, TracingNotifier};
pub use app::panel::{ConfigField, ConfigPanel};
pub use config::toml_config::MailerSettings;
pub use crate::core::{config_store::ConfigStore, mailer::ReceiptMailer};
pub use domain::model::{DeliveryOutcome, EmailConfig, ReceiptRecord, TemplateParams};
pub use utils::error::{MailerError, Result};
