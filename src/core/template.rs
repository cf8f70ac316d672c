use crate::core::formatting::{format_currency, format_date, payment_method_label};
use crate::domain::model::{ReceiptRecord, TemplateParams};

// Variable names as referenced by the relay-side template. Do not rename.
pub const TO_EMAIL: &str = "to_email";
pub const TO_NAME: &str = "to_name";
pub const RECEIPT_NUMBER: &str = "receipt_number";
pub const DATE: &str = "date";
pub const CASHIER_NAME: &str = "cashier_name";
pub const CUSTOMER_NAME: &str = "customer_name";
pub const ESTABLISHMENT_NAME: &str = "establishment_name";
pub const ESTABLISHMENT_ADDRESS: &str = "establishment_address";
pub const ESTABLISHMENT_PHONE: &str = "establishment_phone";
pub const ESTABLISHMENT_EMAIL: &str = "establishment_email";
pub const ITEMS_CONTENT: &str = "items_content";
pub const SUBTOTAL: &str = "subtotal";
pub const TAX_AMOUNT: &str = "tax_amount";
pub const TOTAL_AMOUNT: &str = "total_amount";
pub const PAYMENT_METHOD: &str = "payment_method";
pub const PAYMENT_AMOUNT: &str = "payment_amount";
pub const CHANGE_AMOUNT: &str = "change_amount";
pub const HAS_CHANGE: &str = "has_change";

pub const RECEIPT_KEYS: [&str; 18] = [
    TO_EMAIL,
    TO_NAME,
    RECEIPT_NUMBER,
    DATE,
    CASHIER_NAME,
    CUSTOMER_NAME,
    ESTABLISHMENT_NAME,
    ESTABLISHMENT_ADDRESS,
    ESTABLISHMENT_PHONE,
    ESTABLISHMENT_EMAIL,
    ITEMS_CONTENT,
    SUBTOTAL,
    TAX_AMOUNT,
    TOTAL_AMOUNT,
    PAYMENT_METHOD,
    PAYMENT_AMOUNT,
    CHANGE_AMOUNT,
    HAS_CHANGE,
];

const DEFAULT_CUSTOMER_NAME: &str = "Client";

/// Variables worth using in a receipt template, with what they hold.
pub const TEMPLATE_GUIDE: &[(&str, &str)] = &[
    (TO_NAME, "Nom du client"),
    (RECEIPT_NUMBER, "Numéro du reçu"),
    (ESTABLISHMENT_NAME, "Nom de l'établissement"),
    (DATE, "Date de la vente"),
    (TOTAL_AMOUNT, "Montant total"),
    (ITEMS_CONTENT, "Liste des articles"),
    (PAYMENT_METHOD, "Méthode de paiement"),
];

/// Build the full parameter map for one receipt addressed to `recipient`.
pub fn receipt_params(receipt: &ReceiptRecord, recipient: &str) -> TemplateParams {
    let customer_name = receipt
        .customer_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_CUSTOMER_NAME);

    let items_content = receipt
        .items
        .iter()
        .map(|item| {
            format!(
                "{} x{} - {}",
                item.name,
                item.quantity,
                format_currency(item.total)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let has_change = receipt.change_amount > 0.0;
    let establishment = &receipt.establishment_info;

    let mut params = TemplateParams::new();
    params.insert(TO_EMAIL, recipient);
    params.insert(TO_NAME, customer_name);
    params.insert(RECEIPT_NUMBER, receipt.receipt_number.as_str());
    params.insert(DATE, format_date(&receipt.date));
    params.insert(CASHIER_NAME, receipt.cashier_name.as_str());
    params.insert(CUSTOMER_NAME, customer_name);
    params.insert(ESTABLISHMENT_NAME, establishment.name.as_str());
    params.insert(ESTABLISHMENT_ADDRESS, establishment.address.as_str());
    params.insert(ESTABLISHMENT_PHONE, establishment.phone.as_str());
    params.insert(ESTABLISHMENT_EMAIL, establishment.email.as_str());
    params.insert(ITEMS_CONTENT, items_content);
    params.insert(SUBTOTAL, format_currency(receipt.subtotal));
    params.insert(TAX_AMOUNT, format_currency(receipt.tax_amount));
    params.insert(TOTAL_AMOUNT, format_currency(receipt.total));
    params.insert(PAYMENT_METHOD, payment_method_label(&receipt.payment_method));
    params.insert(PAYMENT_AMOUNT, format_currency(receipt.payment_amount));
    params.insert(
        CHANGE_AMOUNT,
        if has_change {
            format_currency(receipt.change_amount)
        } else {
            String::new()
        },
    );
    params.insert(HAS_CHANGE, if has_change { "Oui" } else { "Non" });
    params
}

/// Synthetic params used to check that the configured credentials are live.
pub fn test_params() -> TemplateParams {
    let mut params = TemplateParams::new();
    params.insert(TO_EMAIL, "test@example.com");
    params.insert(TO_NAME, "Test Client");
    params.insert(RECEIPT_NUMBER, "TEST-001");
    params.insert(ESTABLISHMENT_NAME, "Test Establishment");
    params
}
