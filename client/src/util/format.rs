//! Display formatting for prices and backend timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// `12.5` -> `"$12.50"`.
pub fn format_price(amount: f64) -> String {
    if amount < 0.0 {
        return format!("-${:.2}", -amount);
    }
    format!("${amount:.2}")
}

/// Amount with an explicit currency code, for payments.
pub fn format_amount(amount: f64, currency: &str) -> String {
    if currency.eq_ignore_ascii_case("USD") {
        return format_price(amount);
    }
    format!("{amount:.2} {}", currency.to_ascii_uppercase())
}

/// Backend timestamps are shown as sent, minus fractional seconds and the `T`.
pub fn format_timestamp(raw: &str) -> String {
    let trimmed = raw.split('.').next().unwrap_or(raw);
    trimmed.replacen('T', " ", 1)
}
