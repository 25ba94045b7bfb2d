//! Integration tests for the upcoming birthday window.

mod common;

use assistant_bot::services::{next_occurrence, DEFAULT_WINDOW_DAYS};
use assistant_bot::{upcoming_birthdays, BirthdayService, ContactRepository, FixedClock};
use common::{birthday, reference_monday, sample_book, ymd};

#[test]
fn test_birthday_today_is_included_unchanged() {
    let result = upcoming_birthdays(
        reference_monday(),
        DEFAULT_WINDOW_DAYS,
        [("Alice", birthday("10.06.2024"))],
    );

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].congratulation_date, ymd(2024, 6, 10));
    assert_eq!(result[0].to_string(), "Alice: 10.06.2024");
}

#[test]
fn test_saturday_shifted_exactly_to_upper_bound_is_included() {
    // 15.06.2024 is a Saturday; the shift lands on 17.06.2024 == today + 7.
    let result = upcoming_birthdays(
        reference_monday(),
        DEFAULT_WINDOW_DAYS,
        [("Bob", birthday("15.06.2024"))],
    );

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].to_string(), "Bob: 17.06.2024");
}

#[test]
fn test_sunday_on_upper_bound_is_excluded_after_shift() {
    // Tuesday 11.06.2024 + 5 days = Sunday 16.06.2024. Unshifted it would be
    // in the window; shifted to Monday 17.06.2024 it is not.
    let today = ymd(2024, 6, 11);
    let result = upcoming_birthdays(today, 5, [("Carol", birthday("16.06.1980"))]);
    assert!(result.is_empty());
}

#[test]
fn test_past_birthday_rolls_over_and_is_excluded() {
    let bday = birthday("01.01.1990");
    assert_eq!(next_occurrence(bday, reference_monday()), Some(ymd(2025, 1, 1)));

    let result = upcoming_birthdays(reference_monday(), DEFAULT_WINDOW_DAYS, [("Dan", bday)]);
    assert!(result.is_empty());
}

#[test]
fn test_yesterday_is_never_included() {
    let result = upcoming_birthdays(
        reference_monday(),
        DEFAULT_WINDOW_DAYS,
        [("Eve", birthday("09.06.1990"))],
    );
    assert!(result.is_empty());
}

#[test]
fn test_every_result_lies_in_window_and_on_a_weekday() {
    use chrono::{Datelike, Weekday};

    let today = reference_monday();
    let entries: Vec<(String, _)> = (1..=30)
        .map(|day| (format!("P{}", day), birthday(&format!("{:02}.06.1990", day))))
        .collect();

    let result = upcoming_birthdays(
        today,
        DEFAULT_WINDOW_DAYS,
        entries.iter().map(|(name, b)| (name.as_str(), *b)),
    );

    assert!(!result.is_empty());
    for entry in &result {
        assert!(entry.congratulation_date >= today);
        assert!(entry.congratulation_date <= ymd(2024, 6, 17));
        assert!(!matches!(
            entry.congratulation_date.weekday(),
            Weekday::Sat | Weekday::Sun
        ));
    }

    // 10..=14 unchanged, 15 and 16 move to 17, 17 itself
    let names: Vec<&str> = result.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["P10", "P11", "P12", "P13", "P14", "P15", "P16", "P17"]);
}

#[test]
fn test_service_over_address_book_keeps_store_order() {
    let book = sample_book(&[
        ("Zoe", None, Some("16.06.1995")),
        ("Adam", Some("0501234567"), None),
        ("Bea", None, Some("11.06.1990")),
        ("Cid", None, Some("25.12.1990")),
    ]);
    assert_eq!(book.birthday_entries().len(), 3);

    let service = BirthdayService::new(FixedClock(reference_monday()), DEFAULT_WINDOW_DAYS);
    let lines: Vec<String> = service
        .upcoming(&book)
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(lines, vec!["Zoe: 17.06.2024", "Bea: 11.06.2024"]);
}
