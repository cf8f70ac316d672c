use crate::utils::error::{MailerError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(MailerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(MailerError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(MailerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| MailerError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MailerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Rejects values still carrying a `${VAR}` reference that was never substituted.
pub fn validate_resolved(field_name: &str, value: &str) -> Result<()> {
    if value.contains("${") {
        return Err(MailerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Environment variable reference was not resolved".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(MailerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("relay.endpoint", "https://api.emailjs.com/api/v1.0/email/send").is_ok());
        assert!(validate_url("relay.endpoint", "http://localhost:8080").is_ok());
        assert!(validate_url("relay.endpoint", "").is_err());
        assert!(validate_url("relay.endpoint", "invalid-url").is_err());
        assert!(validate_url("relay.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("credentials.service_id", "service_abc").is_ok());
        assert!(validate_non_empty_string("credentials.service_id", "").is_err());
        assert!(validate_non_empty_string("credentials.service_id", "   ").is_err());
    }

    #[test]
    fn test_validate_resolved() {
        assert!(validate_resolved("credentials.public_key", "pk_live_123").is_ok());
        assert!(validate_resolved("credentials.public_key", "${EMAILJS_PUBLIC_KEY}").is_err());
        assert!(validate_resolved("credentials.public_key", "prefix_${KEY}").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("relay.timeout_seconds", 10u64, 1, 300).is_ok());
        assert!(validate_range("relay.timeout_seconds", 0u64, 1, 300).is_err());
        assert!(validate_range("relay.timeout_seconds", 301u64, 1, 300).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("value".to_string());
        let missing: Option<String> = None;
        assert_eq!(validate_required_field("x", &present).unwrap(), "value");
        assert!(matches!(
            validate_required_field("x", &missing),
            Err(MailerError::MissingConfigError { .. })
        ));
    }
}
