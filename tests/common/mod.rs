//! Shared fixtures for integration tests.

#![allow(dead_code)]

use assistant_bot::{AddressBook, BirthdayDate, ContactRepository};
use chrono::NaiveDate;

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Monday, 10 June 2024.
pub fn reference_monday() -> NaiveDate {
    ymd(2024, 6, 10)
}

pub fn birthday(text: &str) -> BirthdayDate {
    BirthdayDate::parse(text).expect("valid test birthday")
}

/// Build an address book from `(name, phone, birthday)` rows.
pub fn sample_book(rows: &[(&str, Option<&str>, Option<&str>)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, phone, date) in rows {
        let (record, _) = book.add_or_get(name);
        if let Some(phone) = phone {
            record.add_phone(phone).expect("valid test phone");
        }
        if let Some(date) = date {
            record.set_birthday(date).expect("valid test birthday");
        }
    }
    book
}
