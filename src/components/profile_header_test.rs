use super::*;
use crate::state::display::DateLocale;
use crate::state::student::StatusTone;

fn record() -> StudentRecord {
    StudentRecord {
        id: "stu-7".to_owned(),
        full_name: "Grace Hopper".to_owned(),
        avatar: None,
        registration_date: Some("2023-09-01T08:00:00Z".to_owned()),
        last_login: Some("2024-02-29T23:59:59Z".to_owned()),
        status: Some("Active".to_owned()),
        enrollment_count: Some(3),
    }
}

#[test]
fn uppercase_active_uses_positive_styling() {
    let student = StudentRecord {
        status: Some("ACTIVE".to_owned()),
        ..record()
    };
    let details = ProfileDetails::from_record(&student, &DisplayConfig::default());
    assert_eq!(details.status_class, StatusTone::Positive.css_class());
    assert_eq!(details.status_text, "ACTIVE");
}

#[test]
fn absent_or_other_status_uses_negative_styling() {
    for status in [None, Some(String::new()), Some("Inactive".to_owned()), Some("suspended".to_owned())] {
        let student = StudentRecord { status, ..record() };
        let details = ProfileDetails::from_record(&student, &DisplayConfig::default());
        assert_eq!(details.status_class, StatusTone::Negative.css_class());
    }
}

#[test]
fn absent_status_text_shows_missing_text() {
    let student = StudentRecord { status: None, ..record() };
    let details = ProfileDetails::from_record(&student, &DisplayConfig::default());
    assert_eq!(details.status_text, "N/A");
}

#[test]
fn absent_registration_date_renders_na() {
    let student = StudentRecord {
        registration_date: None,
        ..record()
    };
    let details = ProfileDetails::from_record(&student, &DisplayConfig::default());
    assert_eq!(details.registered, "N/A");
}

#[test]
fn present_dates_render_in_configured_locale() {
    let details = ProfileDetails::from_record(&record(), &DisplayConfig::default());
    assert_eq!(details.registered, "9/1/2023");
    assert_eq!(details.last_login, "2/29/2024");

    let iso = DisplayConfig {
        date_locale: DateLocale::Iso,
        ..DisplayConfig::default()
    };
    let details = ProfileDetails::from_record(&record(), &iso);
    assert_eq!(details.registered, "2023-09-01");
}

#[test]
fn malformed_last_login_degrades_to_na() {
    let student = StudentRecord {
        last_login: Some("last tuesday".to_owned()),
        ..record()
    };
    let details = ProfileDetails::from_record(&student, &DisplayConfig::default());
    assert_eq!(details.last_login, "N/A");
}

#[test]
fn enrollment_count_defaults_to_zero() {
    let student = StudentRecord {
        enrollment_count: None,
        ..record()
    };
    assert_eq!(ProfileDetails::from_record(&student, &DisplayConfig::default()).enrollments, 0);
    assert_eq!(ProfileDetails::from_record(&record(), &DisplayConfig::default()).enrollments, 3);
}
