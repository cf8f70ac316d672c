use crate::adapters::emailjs::{EmailJsClient, DEFAULT_ENDPOINT};
use crate::domain::model::EmailConfig;
use crate::utils::error::{MailerError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_required_field, validate_resolved,
    validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
const MAX_TIMEOUT_SECONDS: u64 = 300;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MailerSettings {
    #[serde(default)]
    pub relay: RelayConfig,
    pub credentials: Option<CredentialsConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayConfig {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"))
}

impl MailerSettings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| MailerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn endpoint(&self) -> &str {
        self.relay.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.relay.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn relay_client(&self) -> EmailJsClient {
        EmailJsClient::new(self.endpoint()).with_timeout(self.timeout())
    }

    /// Credentials from the file; fails when the section is absent.
    pub fn email_config(&self) -> Result<EmailConfig> {
        let credentials = validate_required_field("credentials", &self.credentials)?;
        Ok(EmailConfig::new(
            credentials.service_id.as_str(),
            credentials.template_id.as_str(),
            credentials.public_key.as_str(),
        ))
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for MailerSettings {
    fn validate(&self) -> Result<()> {
        validate_url("relay.endpoint", self.endpoint())?;

        if let Some(timeout) = self.relay.timeout_seconds {
            validate_range("relay.timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }

        if let Some(credentials) = &self.credentials {
            let fields = [
                ("credentials.service_id", &credentials.service_id),
                ("credentials.template_id", &credentials.template_id),
                ("credentials.public_key", &credentials.public_key),
            ];
            for (field, value) in fields {
                validate_non_empty_string(field, value)?;
                validate_resolved(field, value)?;
            }
        }

        Ok(())
    }
}
