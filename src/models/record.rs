//! Record model representing one contact in the address book.

use crate::domain::{BirthdayDate, PhoneNumber, ValidationError};
use serde::Serialize;

/// A contact: a name, its phone numbers and an optional birthday.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Record {
    /// Free-form name as first entered
    name: String,

    /// Phone numbers in insertion order (duplicates allowed)
    phones: Vec<PhoneNumber>,

    /// Birthday, if one has been set
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<BirthdayDate>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<BirthdayDate> {
        self.birthday
    }

    /// Whether this record's name equals `name`, ignoring case.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Parse and append a phone number.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` and leaves the record untouched
    /// if `phone` is not a valid number.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace every stored phone with a single new one.
    ///
    /// The new number is validated before the list is cleared, so a failure
    /// keeps the original phones.
    pub fn replace_phones(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        self.phones.clear();
        self.phones.push(phone);
        Ok(())
    }

    /// Parse and set (or overwrite) the birthday.
    pub fn set_birthday(&mut self, date: &str) -> Result<BirthdayDate, ValidationError> {
        let birthday = BirthdayDate::parse(date)?;
        self.birthday = Some(birthday);
        Ok(birthday)
    }

    /// Phones joined by `", "`, or `None` when the record has no phones.
    pub fn phones_display(&self) -> Option<String> {
        if self.phones.is_empty() {
            return None;
        }

        Some(
            self.phones
                .iter()
                .map(PhoneNumber::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}
