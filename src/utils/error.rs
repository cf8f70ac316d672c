use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailerError {
    #[error("Relay request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Relay rejected the request with status {status}: {body}")]
    RelayRejected { status: u16, body: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Clipboard error: {message}")]
    Clipboard { message: String },
}

impl MailerError {
    /// True when the failure came back from the relay rather than from local setup.
    pub fn is_delivery_failure(&self) -> bool {
        matches!(self, MailerError::Http(_) | MailerError::RelayRejected { .. })
    }
}

pub type Result<T> = std::result::Result<T, MailerError>;
