pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "receipt-mailer")]
#[command(about = "Send sale receipts by email through an EmailJS relay")]
pub struct CliConfig {
    #[arg(long, help = "Settings file (defaults to ./mailer.toml when present)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the template parameters for a receipt without sending anything
    Preview {
        #[arg(long, help = "Receipt JSON file")]
        receipt: PathBuf,
        #[arg(long, help = "Recipient email address")]
        to: String,
    },
    /// Send a receipt to a customer
    Send {
        #[arg(long, help = "Receipt JSON file")]
        receipt: PathBuf,
        #[arg(long, help = "Recipient email address")]
        to: String,
    },
    /// Send a synthetic message to check the configured credentials
    Test,
}
