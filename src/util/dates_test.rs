use super::*;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// =============================================================
// parse_timestamp
// =============================================================

#[test]
fn parses_rfc3339_in_utc() {
    assert_eq!(parse_timestamp("2024-03-05T10:00:00Z"), Ok(ymd(2024, 3, 5)));
    // 23:30 at -02:00 is already the next day in UTC.
    assert_eq!(parse_timestamp("2024-03-05T23:30:00-02:00"), Ok(ymd(2024, 3, 6)));
}

#[test]
fn parses_naive_datetime_and_plain_date() {
    assert_eq!(parse_timestamp("2024-03-05T10:00:00"), Ok(ymd(2024, 3, 5)));
    assert_eq!(parse_timestamp("2024-03-05 10:00:00"), Ok(ymd(2024, 3, 5)));
    assert_eq!(parse_timestamp(" 2024-03-05 "), Ok(ymd(2024, 3, 5)));
}

#[test]
fn parses_epoch_millis() {
    assert_eq!(parse_timestamp("1704067200000"), Ok(ymd(2024, 1, 1)));
    assert_eq!(parse_timestamp("10000000000"), Ok(ymd(1970, 4, 26)));
}

#[test]
fn short_digit_runs_are_not_epoch_millis() {
    assert_eq!(
        parse_timestamp("20240115"),
        Err(DateParseError::Unrecognized("20240115".to_owned()))
    );
    assert!(parse_timestamp("0").is_err());
    assert!(parse_timestamp("9999999999").is_err());
}

#[test]
fn compact_date_renders_na_not_epoch() {
    assert_eq!(format_date_or_missing(Some("20240115"), &DisplayConfig::default()), "N/A");
}

#[test]
fn signed_or_mixed_digits_are_rejected() {
    assert!(parse_timestamp("-1704067200000").is_err());
    assert!(parse_timestamp("1704067200000ms").is_err());
}

#[test]
fn rejects_empty_and_garbage() {
    assert_eq!(parse_timestamp("   "), Err(DateParseError::Empty));
    assert_eq!(
        parse_timestamp("yesterday"),
        Err(DateParseError::Unrecognized("yesterday".to_owned()))
    );
    assert!(parse_timestamp("2024-13-40").is_err());
}

// =============================================================
// formatting
// =============================================================

#[test]
fn formats_per_locale() {
    let date = ymd(2024, 3, 5);
    assert_eq!(format_date(date, DateLocale::EnUs), "3/5/2024");
    assert_eq!(format_date(date, DateLocale::EnGb), "05/03/2024");
    assert_eq!(format_date(date, DateLocale::Iso), "2024-03-05");
}

#[test]
fn missing_timestamp_renders_na() {
    let config = DisplayConfig::default();
    assert_eq!(format_date_or_missing(None, &config), "N/A");
    assert_eq!(format_date_or_missing(Some(""), &config), "N/A");
}

#[test]
fn unparseable_timestamp_renders_na() {
    let config = DisplayConfig::default();
    assert_eq!(format_date_or_missing(Some("not a date"), &config), "N/A");
}

#[test]
fn valid_timestamp_renders_deterministically() {
    let config = DisplayConfig::default();
    let first = format_date_or_missing(Some("2023-09-01T08:00:00Z"), &config);
    let second = format_date_or_missing(Some("2023-09-01T08:00:00Z"), &config);
    assert_eq!(first, "9/1/2023");
    assert_eq!(first, second);
}

#[test]
fn fallback_text_is_configurable() {
    let config = DisplayConfig {
        date_locale: DateLocale::Iso,
        missing_text: "—".to_owned(),
    };
    assert_eq!(format_date_or_missing(None, &config), "—");
    assert_eq!(format_date_or_missing(Some("2023-09-01"), &config), "2023-09-01");
}
