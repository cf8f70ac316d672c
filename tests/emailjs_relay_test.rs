use httpmock::prelude::*;
use receipt_mailer::{
    ConfigStore, DeliveryOutcome, EmailConfig, EmailJsClient, MailerError, ReceiptMailer,
    ReceiptRecord,
};
use std::sync::Arc;
use std::time::Duration;

const SEND_PATH: &str = "/api/v1.0/email/send";

fn receipt() -> ReceiptRecord {
    serde_json::from_str(include_str!("fixtures/receipt.json")).unwrap()
}

fn mailer_for(server: &MockServer, config: EmailConfig) -> ReceiptMailer<EmailJsClient> {
    let relay = Arc::new(EmailJsClient::new(server.url(SEND_PATH)).with_timeout(Duration::from_secs(5)));
    let store = ConfigStore::with_config(relay, config).unwrap();
    ReceiptMailer::new(Arc::new(store))
}

#[tokio::test]
async fn test_receipt_is_posted_in_emailjs_format() {
    let server = MockServer::start();
    let expected_body = serde_json::json!({
        "service_id": "service_abc",
        "template_id": "template_receipt",
        "user_id": "pk_live_123456",
        "template_params": {
            "to_email": "rasoa@example.mg",
            "to_name": "Rasoa Rakoto",
            "receipt_number": "R-2024-0042",
            "date": "15/03/2024 14:30",
            "cashier_name": "Hery",
            "customer_name": "Rasoa Rakoto",
            "establishment_name": "Épicerie Analakely",
            "establishment_address": "Lot II A 12, Antananarivo",
            "establishment_phone": "+261 34 00 000 00",
            "establishment_email": "contact@analakely.mg",
            "items_content": "Riz 1kg x2 - Ar\u{a0}6,000\nHuile 1L x1 - Ar\u{a0}8,500\nSavon x3 - Ar\u{a0}4,500",
            "subtotal": "Ar\u{a0}19,000",
            "tax_amount": "Ar\u{a0}3,800",
            "total_amount": "Ar\u{a0}22,800",
            "payment_method": "MVola",
            "payment_amount": "Ar\u{a0}25,000",
            "change_amount": "Ar\u{a0}2,200",
            "has_change": "Oui"
        }
    });

    let send_mock = server.mock(|when, then| {
        when.method(POST)
            .path(SEND_PATH)
            .header("content-type", "application/json")
            .json_body(expected_body);
        then.status(200).body("OK");
    });

    let mailer = mailer_for(
        &server,
        EmailConfig::new("service_abc", "template_receipt", "pk_live_123456"),
    );
    let outcome = mailer
        .send_receipt_by_email(&receipt(), "rasoa@example.mg")
        .await;

    send_mock.assert();
    assert!(outcome.is_success());
    assert_eq!(outcome.message(), "Email envoyé avec succès");
    assert!(outcome.error().is_none());
}

#[tokio::test]
async fn test_relay_rejection_is_captured_not_raised() {
    let server = MockServer::start();
    let send_mock = server.mock(|when, then| {
        when.method(POST).path(SEND_PATH);
        then.status(400).body("The service ID is invalid");
    });

    let mailer = mailer_for(&server, EmailConfig::new("bad", "template", "pk_live_123456"));
    let outcome = mailer
        .send_receipt_by_email(&receipt(), "rasoa@example.mg")
        .await;

    send_mock.assert();
    assert!(!outcome.is_success());
    assert_eq!(outcome.message(), "Erreur lors de l'envoi de l'email");
    match outcome {
        DeliveryOutcome::Failed {
            error: MailerError::RelayRejected { status, body },
            ..
        } => {
            assert_eq!(status, 400);
            assert_eq!(body, "The service ID is invalid");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_relay_is_a_failed_outcome() {
    // Nothing listens on the discard port.
    let relay = Arc::new(EmailJsClient::new("http://127.0.0.1:9/api/v1.0/email/send"));
    let store = ConfigStore::with_config(relay, EmailConfig::new("s", "t", "k")).unwrap();
    let mailer = ReceiptMailer::new(Arc::new(store));

    let outcome = mailer.test_configuration().await;

    assert!(!outcome.is_success());
    assert_eq!(outcome.message(), "Configuration EmailJS invalide");
    assert!(outcome.error().unwrap().is_delivery_failure());
}

#[tokio::test]
async fn test_configuration_sends_synthetic_params() {
    let server = MockServer::start();
    let send_mock = server.mock(|when, then| {
        when.method(POST).path(SEND_PATH).json_body(serde_json::json!({
            "service_id": "service_abc",
            "template_id": "template_receipt",
            "user_id": "pk_live_123456",
            "template_params": {
                "to_email": "test@example.com",
                "to_name": "Test Client",
                "receipt_number": "TEST-001",
                "establishment_name": "Test Establishment"
            }
        }));
        then.status(200).body("OK");
    });

    let mailer = mailer_for(
        &server,
        EmailConfig::new("service_abc", "template_receipt", "pk_live_123456"),
    );
    let outcome = mailer.test_configuration().await;

    send_mock.assert();
    assert!(outcome.is_success());
    assert_eq!(outcome.message(), "Configuration EmailJS valide");
}

#[tokio::test]
async fn test_update_rebinds_public_key_for_next_send() {
    let server = MockServer::start();
    let send_mock = server.mock(|when, then| {
        when.method(POST)
            .path(SEND_PATH)
            .json_body_partial(r#"{"service_id": "s2", "template_id": "t2", "user_id": "pk_rotated_999"}"#);
        then.status(200).body("OK");
    });

    let relay = Arc::new(EmailJsClient::new(server.url(SEND_PATH)));
    let store = Arc::new(ConfigStore::new(relay).unwrap());
    let mailer = ReceiptMailer::new(store.clone());

    let masked = store.update_config("s2", "t2", "pk_rotated_999").unwrap();
    assert_eq!(masked.public_key, "pk_rotat...");

    let outcome = mailer.test_configuration().await;

    send_mock.assert();
    assert!(outcome.is_success());
}
