use super::{Amount, AmountError, Month, MonthError, TransactionId};
use anyhow::Result;
use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::str::FromStr;

#[test]
fn test_amount_successfully_parses_valid_strings() -> Result<()> {
    let test_cases = vec![
        ("1.0", "1.00"),
        ("1.1234", "1.1234"),
        ("0.01", "0.01"),
        ("  12.5  ", "12.50"),
        ("100", "100.00"),
        ("0", "0.00"),
        ("2500.75", "2500.75"),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(Amount::from_str(input_string)?.to_string(), expected_output);
    }

    Ok(())
}

#[test]
fn test_amount_fails_to_parse_invalid_strings() {
    assert!(Amount::from_str("1.12345").is_err());
    assert!(Amount::from_str("abc").is_err());
    assert!(Amount::from_str("1.2.3").is_err());
    assert!(Amount::from_str("").is_err());
    assert!(Amount::from_str("   ").is_err());
}

#[test]
fn test_amount_rejects_negative_values() {
    assert!(matches!(Amount::from_str("-1.50"), Err(AmountError::Negative(_))));
    assert!(matches!(Amount::new(Decimal::new(-1, 2)), Err(AmountError::Negative(_))));
}

#[test]
fn test_amount_treats_negative_zero_as_zero() -> Result<()> {
    let amount = Amount::from_str("-0.00")?;

    assert!(amount.is_zero());
    assert_eq!(amount.to_string(), "0.00");

    Ok(())
}

#[test]
fn test_amount_addition_saturates_on_overflow() -> Result<()> {
    let mut amount = Amount::new(Decimal::MAX - Decimal::ONE)?;
    amount += Amount::new(Decimal::MAX)?;

    assert_eq!(amount.value(), Decimal::MAX);

    amount += Amount::from_str("1")?;

    assert_eq!(amount.value(), Decimal::MAX);

    let mut small = Amount::from_str("1.5")?;
    small += Amount::from_str("2.25")?;

    assert_eq!(small.to_string(), "3.75");

    Ok(())
}

#[test]
fn test_amount_deserializes_from_strings_and_numbers() -> Result<()> {
    let from_string: Amount = serde_json::from_str("\"19.99\"")?;
    let from_number: Amount = serde_json::from_str("19.99")?;

    assert_eq!(from_string, from_number);
    assert_eq!(from_string.to_string(), "19.99");
    assert!(serde_json::from_str::<Amount>("-3").is_err());

    Ok(())
}

#[test]
fn test_amount_serializes_as_a_decimal_string() -> Result<()> {
    let amount = Amount::from_str("1250.50")?;

    assert_eq!(serde_json::to_string(&amount)?, "\"1250.50\"");

    let read_back: Amount = serde_json::from_str(&serde_json::to_string(&amount)?)?;

    assert_eq!(read_back, amount);

    Ok(())
}

#[test]
fn test_month_parses_and_displays_year_month() -> Result<()> {
    let month = Month::from_str("2024-03")?;

    assert_eq!(month.year(), 2024);
    assert_eq!(month.month(), 3);
    assert_eq!(month.to_string(), "2024-03");

    Ok(())
}

#[test]
fn test_month_rejects_malformed_strings() {
    assert!(matches!(Month::from_str("2024-3"), Err(MonthError::InvalidFormat(_))));
    assert!(matches!(Month::from_str("2024/03"), Err(MonthError::InvalidFormat(_))));
    assert!(matches!(Month::from_str("2024-03-01"), Err(MonthError::InvalidFormat(_))));
    assert!(matches!(Month::from_str("24-03"), Err(MonthError::InvalidFormat(_))));
    assert!(matches!(Month::from_str("2024-+3"), Err(MonthError::InvalidFormat(_))));
    assert!(matches!(Month::from_str("2024-13"), Err(MonthError::OutOfRange(13))));
    assert!(matches!(Month::from_str("2024-00"), Err(MonthError::OutOfRange(0))));
}

#[test]
fn test_month_contains_every_day_of_the_month_only() -> Result<()> {
    let march = Month::new(2024, 3)?;
    let date = |day_string: &str| NaiveDate::parse_from_str(day_string, "%Y-%m-%d");

    assert!(march.contains(date("2024-03-01")?));
    assert!(march.contains(date("2024-03-31")?));
    assert!(!march.contains(date("2024-02-28")?));
    assert!(!march.contains(date("2024-04-01")?));
    assert!(!march.contains(date("2023-03-15")?));

    Ok(())
}

#[test]
fn test_month_of_reference_instant_uses_utc_calendar() -> Result<()> {
    let instant = Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 59).single()
        .ok_or_else(|| anyhow::anyhow!("Invalid instant"))?;

    assert_eq!(Month::containing(instant), Month::new(2024, 3)?);

    Ok(())
}

#[test]
fn test_generated_transaction_ids_are_distinct() {
    let ids: HashSet<TransactionId> = (0..1_000).map(|_| TransactionId::generate()).collect();

    assert_eq!(ids.len(), 1_000);
}

#[test]
fn test_legacy_transaction_ids_are_kept_verbatim() -> Result<()> {
    let id: TransactionId = serde_json::from_str("\"1709251200000k3j9x2abc\"")?;

    assert_eq!(id.as_str(), "1709251200000k3j9x2abc");
    assert_eq!(serde_json::to_string(&id)?, "\"1709251200000k3j9x2abc\"");

    Ok(())
}
