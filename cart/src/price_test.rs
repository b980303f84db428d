use super::*;

// =============================================================
// Formatting
// =============================================================

#[test]
fn format_groups_thousands_with_dots() {
    assert_eq!(Price::from_pesos(15_500).format(), "15.500");
    assert_eq!(Price::from_pesos(1_234_567).format(), "1.234.567");
    assert_eq!(Price::from_pesos(100_000).format(), "100.000");
}

#[test]
fn format_leaves_small_amounts_ungrouped() {
    assert_eq!(Price::from_pesos(999).format(), "999");
    assert_eq!(Price::ZERO.format(), "0");
}

#[test]
fn format_uses_comma_for_fraction_and_trims_zeros() {
    assert_eq!(Price::from_minor(1_050).format(), "10,5");
    assert_eq!(Price::from_minor(1_005).format(), "10,05");
    assert_eq!(Price::from_minor(123_456_78).format(), "123.456,78");
}

#[test]
fn format_negative_amounts() {
    assert_eq!(Price::from_pesos(-1_200).format(), "-1.200");
}

#[test]
fn display_matches_format() {
    assert_eq!(Price::from_pesos(25_000).to_string(), "25.000");
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_display_strips_thousands_separators() {
    assert_eq!(
        Price::parse_display("10.000"),
        Some(Price::from_pesos(10_000))
    );
    assert_eq!(
        Price::parse_display("5.500"),
        Some(Price::from_pesos(5_500))
    );
    assert_eq!(
        Price::parse_display("1.234.567"),
        Some(Price::from_pesos(1_234_567))
    );
}

#[test]
fn parse_display_reads_decimal_comma() {
    assert_eq!(Price::parse_display("12,5"), Some(Price::from_minor(1_250)));
    assert_eq!(
        Price::parse_display("1.000,25"),
        Some(Price::from_minor(100_025))
    );
}

#[test]
fn parse_display_rounds_to_centavos() {
    assert_eq!(Price::parse_display("0,005"), Some(Price::from_minor(1)));
    assert_eq!(Price::parse_display("0,004"), Some(Price::from_minor(0)));
}

#[test]
fn parse_display_takes_leading_numeric_prefix() {
    assert_eq!(
        Price::parse_display("  12.000 COP"),
        Some(Price::from_pesos(12_000))
    );
    assert_eq!(Price::parse_display("-300"), Some(Price::from_pesos(-300)));
}

#[test]
fn parse_display_rejects_non_numeric() {
    assert_eq!(Price::parse_display("abc"), None);
    assert_eq!(Price::parse_display(""), None);
    assert_eq!(Price::parse_display("—"), None);
    assert_eq!(Price::parse_display("$10.000"), None);
}

#[test]
fn parse_display_rejects_overflow() {
    assert_eq!(Price::parse_display("99999999999999999999999"), None);
}

#[test]
fn parse_lenient_defaults_to_zero() {
    assert_eq!(Price::parse_lenient("abc"), Price::ZERO);
    assert_eq!(Price::parse_lenient("7.000"), Price::from_pesos(7_000));
}

// =============================================================
// Arithmetic and rounding
// =============================================================

#[test]
fn sum_adds_minor_units() {
    let total: Price = [Price::from_pesos(10_000), Price::from_pesos(5_500)]
        .iter()
        .sum();
    assert_eq!(total, Price::from_pesos(15_500));
    assert_eq!(total.format(), "15.500");
}

#[test]
fn round_to_pesos_half_away_from_zero() {
    assert_eq!(Price::from_minor(1_049).round_to_pesos(), 10);
    assert_eq!(Price::from_minor(1_050).round_to_pesos(), 11);
    assert_eq!(Price::from_minor(-1_050).round_to_pesos(), -11);
}

// =============================================================
// Serde
// =============================================================

#[test]
fn serializes_as_minor_units() {
    let json = serde_json::to_string(&Price::from_pesos(3_000)).expect("serialize");
    assert_eq!(json, "300000");
}

#[test]
fn deserializes_minor_units_and_legacy_strings() {
    let minor: Price = serde_json::from_str("150").expect("minor");
    assert_eq!(minor, Price::from_minor(150));

    let legacy: Price = serde_json::from_str("\"10.000\"").expect("legacy");
    assert_eq!(legacy, Price::from_pesos(10_000));

    let junk: Price = serde_json::from_str("\"abc\"").expect("junk");
    assert_eq!(junk, Price::ZERO);

    let null: Price = serde_json::from_str("null").expect("null");
    assert_eq!(null, Price::ZERO);
}

#[test]
fn checked_from_pesos_rejects_overflow() {
    assert_eq!(
        Price::checked_from_pesos(25_000),
        Some(Price::from_pesos(25_000))
    );
    assert_eq!(Price::checked_from_pesos(i64::MAX / 100 + 1), None);
}
