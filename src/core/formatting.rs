use chrono::NaiveDateTime;

/// Local abbreviation for the Malagasy ariary, shown instead of the ISO code.
pub const CURRENCY_ABBREVIATION: &str = "Ar";

const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

const PAYMENT_METHOD_LABELS: &[(&str, &str)] = &[
    ("cash", "Espèces"),
    ("card", "Carte bancaire"),
    ("mvola", "MVola"),
    ("orange_money", "Orange Money"),
    ("airtel_money", "Airtel Money"),
];

/// Separator between the symbol and the amount, a no-break space as in the `mg` locale.
const SYMBOL_SEPARATOR: char = '\u{a0}';

/// `12500.0` -> `Ar\u{a0}12,500`. Whole ariary only, half away from zero.
///
/// The sign follows the unrounded amount, so `-0.4` renders as `-Ar\u{a0}0`.
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", amount.abs().round());

    format!(
        "{}{}{}{}",
        sign,
        CURRENCY_ABBREVIATION,
        SYMBOL_SEPARATOR,
        group_thousands(&digits)
    )
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_date(date: &NaiveDateTime) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Human label for a payment method code; unknown codes are shown as-is.
pub fn payment_method_label(code: &str) -> &str {
    PAYMENT_METHOD_LABELS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}
