use anyhow::Context;
use clap::Parser;
use receipt_mailer::app::panel::NOT_CONFIGURED;
use receipt_mailer::domain::ports::Notifier;
use receipt_mailer::utils::{logger, validation::Validate};
use receipt_mailer::{
    CliConfig, Command, ConfigStore, DeliveryOutcome, MailerSettings, ReceiptMailer,
    ReceiptRecord, TracingNotifier,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const DEFAULT_SETTINGS_FILE: &str = "mailer.toml";

fn load_settings(path: Option<&PathBuf>) -> anyhow::Result<MailerSettings> {
    match path {
        Some(path) => MailerSettings::from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None if Path::new(DEFAULT_SETTINGS_FILE).exists() => {
            MailerSettings::from_file(DEFAULT_SETTINGS_FILE)
                .with_context(|| format!("Failed to load settings from {}", DEFAULT_SETTINGS_FILE))
        }
        None => Ok(MailerSettings::default()),
    }
}

fn load_receipt(path: &Path) -> anyhow::Result<ReceiptRecord> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read receipt {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse receipt {}", path.display()))
}

fn report(outcome: &DeliveryOutcome) -> i32 {
    match outcome {
        DeliveryOutcome::Delivered { message } => {
            println!("✅ {}", message);
            0
        }
        DeliveryOutcome::Failed { message, error } => {
            eprintln!("❌ {}: {}", message, error);
            1
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    let settings = load_settings(cli.config.as_ref())?;

    if cli.json_logs || settings.json_logs() {
        logger::init_json_logger(cli.verbose, settings.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, settings.log_level());
    }

    tracing::info!("Starting receipt-mailer");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let relay = Arc::new(settings.relay_client());
    let store = match settings.email_config() {
        Ok(config) => ConfigStore::with_config(relay, config)?,
        Err(_) => {
            tracing::warn!("No [credentials] section, relay credentials are placeholders");
            ConfigStore::new(relay)?
        }
    };
    let mailer = ReceiptMailer::new(Arc::new(store));

    let exit_code = match &cli.command {
        Command::Preview { receipt, to } => {
            let receipt = load_receipt(receipt)?;
            let params = mailer.preview(&receipt, to);
            println!("{}", serde_json::to_string_pretty(&params)?);
            0
        }
        Command::Send { receipt, to } => {
            let receipt = load_receipt(receipt)?;
            let outcome = mailer.send_receipt_by_email(&receipt, to).await;
            report(&outcome)
        }
        Command::Test => {
            let notifier = TracingNotifier::new();
            if !mailer.store().is_configured() {
                notifier.error(NOT_CONFIGURED);
                1
            } else {
                let outcome = mailer.test_configuration().await;
                if outcome.is_success() {
                    notifier.success(outcome.message());
                } else {
                    notifier.error(outcome.message());
                }
                report(&outcome)
            }
        }
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
