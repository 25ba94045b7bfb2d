//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the atomic fields of a
//! contact: phone numbers and birthdays. These value objects validate at
//! construction time so invalid data can never be stored in a record.

pub mod birthday;
pub mod errors;
pub mod phone;

pub use birthday::{format_date, BirthdayDate, DATE_FORMAT};
pub use errors::ValidationError;
pub use phone::PhoneNumber;
