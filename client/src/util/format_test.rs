use super::*;

#[test]
fn price_has_two_decimals() {
    assert_eq!(format_price(12.5), "$12.50");
    assert_eq!(format_price(0.0), "$0.00");
    assert_eq!(format_price(1999.999), "$2000.00");
}

#[test]
fn negative_price_keeps_sign_outside() {
    assert_eq!(format_price(-3.0), "-$3.00");
}

#[test]
fn non_usd_amount_shows_code() {
    assert_eq!(format_amount(10.0, "usd"), "$10.00");
    assert_eq!(format_amount(10.0, "eur"), "10.00 EUR");
}

#[test]
fn timestamp_drops_fraction_and_t() {
    assert_eq!(format_timestamp("2024-05-01T10:00:00.123456"), "2024-05-01 10:00:00");
    assert_eq!(format_timestamp("2024-05-01"), "2024-05-01");
}
